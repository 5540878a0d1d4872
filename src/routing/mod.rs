//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     (method, "/users/:id", handler)
//!     → pattern.rs (rewrite to native "/users/{id}")
//!     → router.rs (wrap handler in a shim, add method route to axum)
//!
//! Dispatch (per request):
//!     axum matches path, extracts raw params
//!     → shim collects Params (params.rs)
//!     → current persistence strategy runs
//!     → handler.rs (standard handler produces the response)
//! ```
//!
//! # Design Decisions
//! - Path matching belongs to axum; nothing here inspects a path at dispatch
//! - The strategy is read when a request arrives, not when a route is added
//! - Underlying router panics and errors surface unchanged

pub mod handler;
pub mod params;
pub mod pattern;
pub mod router;

pub use handler::Handler;
pub use params::{Param, Params};
pub use router::{RouteError, Router};
