//! Route parameter persistence for standard handlers.
//!
//! Wraps an axum router so that handlers written as plain
//! `Request<Body> -> impl IntoResponse` functions still see matched path
//! parameters. A configurable persistence strategy moves the parameters onto
//! the request (context extension or query string) before the handler runs.

pub mod config;
pub mod context;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod persist;
pub mod routing;

pub use config::ServerConfig;
pub use context::RequestContext;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use persist::{ContextPersist, Discard, Persist, PersistMode, PersistSlot, QueryPersist};
pub use routing::{Handler, Param, Params, RouteError, Router};
