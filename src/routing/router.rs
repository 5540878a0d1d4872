//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Register standard handlers per HTTP method
//! - Wrap each handler in a shim that runs the persistence strategy first
//! - Hand the finished router to the host server
//!
//! # Design Decisions
//! - One `PersistSlot` per router, shared by every shim it creates
//! - The slot is loaded per request, so a swap needs no re-registration
//! - Registration rules (conflicts, pattern syntax) are axum's

use axum::{
    body::Body,
    extract::{rejection::RawPathParamsRejection, RawPathParams},
    http::{Method, Request},
    routing::{on, MethodFilter, MethodRouter},
};
use thiserror::Error;

use crate::persist::{Persist, PersistSlot};
use crate::routing::handler::Handler;
use crate::routing::params::Params;
use crate::routing::pattern;

/// Registration error for methods the underlying router cannot route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("cannot route method `{method}`: {reason}")]
    UnsupportedMethod { method: Method, reason: String },
}

/// Router adapter accepting standard handlers.
///
/// ```rust,no_run
/// use axum::{body::Body, http::Request};
/// use route_persist::{context, ContextPersist, Router};
///
/// async fn hello(req: Request<Body>) -> String {
///     format!("hello, {}!", context::get(&req, "name").unwrap_or("stranger"))
/// }
///
/// let mut router = Router::new();
/// router.set_persist(ContextPersist);
/// router.get("/hello/:name", hello);
/// let app: axum::Router = router.into();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
    inner: axum::Router,
    persist: PersistSlot,
}

impl Router {
    /// Create a router that discards path parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the strategy slot. Clones of the handle stay valid after the
    /// router has been handed to a server.
    pub fn persist(&self) -> &PersistSlot {
        &self.persist
    }

    /// Replace the strategy used by every route on this router.
    pub fn set_persist<P: Persist>(&self, strategy: P) {
        self.persist.set(strategy);
    }

    /// Register `handler` for an arbitrary method.
    pub fn handle<H: Handler>(
        &mut self,
        method: Method,
        path: &str,
        handler: H,
    ) -> Result<&mut Self, RouteError> {
        let filter = MethodFilter::try_from(method.clone()).map_err(|e| {
            RouteError::UnsupportedMethod {
                method,
                reason: e.to_string(),
            }
        })?;
        Ok(self.route(filter, path, handler))
    }

    pub fn get<H: Handler>(&mut self, path: &str, handler: H) -> &mut Self {
        self.route(MethodFilter::GET, path, handler)
    }

    pub fn post<H: Handler>(&mut self, path: &str, handler: H) -> &mut Self {
        self.route(MethodFilter::POST, path, handler)
    }

    pub fn put<H: Handler>(&mut self, path: &str, handler: H) -> &mut Self {
        self.route(MethodFilter::PUT, path, handler)
    }

    pub fn patch<H: Handler>(&mut self, path: &str, handler: H) -> &mut Self {
        self.route(MethodFilter::PATCH, path, handler)
    }

    pub fn delete<H: Handler>(&mut self, path: &str, handler: H) -> &mut Self {
        self.route(MethodFilter::DELETE, path, handler)
    }

    pub fn head<H: Handler>(&mut self, path: &str, handler: H) -> &mut Self {
        self.route(MethodFilter::HEAD, path, handler)
    }

    pub fn options<H: Handler>(&mut self, path: &str, handler: H) -> &mut Self {
        self.route(MethodFilter::OPTIONS, path, handler)
    }

    /// Handler for requests no route matches. No parameters exist there, so
    /// it is registered as-is.
    pub fn fallback<H: Handler>(&mut self, handler: H) -> &mut Self {
        let inner = std::mem::take(&mut self.inner);
        self.inner = inner.fallback(move |req: Request<Body>| handler.call(req));
        self
    }

    /// The underlying router, ready to be served.
    pub fn into_inner(self) -> axum::Router {
        self.inner
    }

    fn route<H: Handler>(&mut self, filter: MethodFilter, path: &str, handler: H) -> &mut Self {
        let native = pattern::to_native(path);
        tracing::debug!(method = ?filter, path = %native, "Registering route");

        let inner = std::mem::take(&mut self.inner);
        self.inner = inner.route(&native, self.shim(filter, handler));
        self
    }

    /// Wrap a standard handler into the method route axum dispatches to.
    ///
    /// A matched request always reaches the strategy and the handler. Segments
    /// that do not decode to UTF-8 leave the parameter list empty.
    fn shim<H: Handler>(&self, filter: MethodFilter, handler: H) -> MethodRouter {
        let slot = self.persist.clone();
        on(filter, move |raw: Result<RawPathParams, RawPathParamsRejection>, mut req: Request<Body>| {
            let params = match raw {
                Ok(raw) => Params::from(&raw),
                Err(e) => {
                    tracing::debug!(error = %e, path = %req.uri().path(), "Path params not decodable");
                    Params::new()
                }
            };
            tracing::trace!(params = params.len(), path = %req.uri().path(), "Persisting path params");
            slot.persist(&mut req, &params);
            handler.call(req)
        })
    }
}

impl From<Router> for axum::Router {
    fn from(router: Router) -> Self {
        router.into_inner()
    }
}
