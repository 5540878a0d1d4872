//! Standard request handlers.
//!
//! A standard handler takes the whole request and produces a response. It has
//! no parameter channel of its own; path parameters reach it only through
//! whatever the persistence strategy left on the request.

use std::future::Future;

use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::{BoxFuture, FutureExt};

/// A handler of the standard `Request<Body> -> Response` shape.
pub trait Handler: Clone + Send + Sync + 'static {
    fn call(&self, req: Request<Body>) -> BoxFuture<'static, Response>;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request<Body>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + 'static,
{
    fn call(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        (self)(req).map(IntoResponse::into_response).boxed()
    }
}
