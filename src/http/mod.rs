//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum::serve, timeout + trace layers)
//!     → routing::Router (shim → persistence strategy → handler)
//!     → request.rs (handlers read merged query values)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{form_value, query_values};
pub use server::HttpServer;
