//! Discard and request-context strategies.

use axum::{body::Body, http::Request};

use crate::context;
use crate::persist::Persist;
use crate::routing::Params;

/// Drops path parameters. The router behaves like a plain router without
/// parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Persist for Discard {
    fn persist(&self, _req: &mut Request<Body>, _params: &Params) {}
}

/// Stores each parameter in the request's [`RequestContext`](crate::context::RequestContext).
///
/// ```rust,no_run
/// use axum::{body::Body, http::Request};
/// use route_persist::{context, ContextPersist, Router};
///
/// let mut router = Router::new();
/// router.set_persist(ContextPersist);
/// router.get("/users/:id", |req: Request<Body>| async move {
///     format!("User ID: {}", context::get(&req, "id").unwrap_or_default())
/// });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextPersist;

impl Persist for ContextPersist {
    fn persist(&self, req: &mut Request<Body>, params: &Params) {
        if params.is_empty() {
            return;
        }
        for param in params {
            context::set(req, &param.key, &param.value);
        }
    }
}
