//! Request-scoped key/value context.
//!
//! # Responsibilities
//! - Carry string values alongside a request for the rest of its handling
//! - Give standard handlers a lookup by key
//!
//! # Design Decisions
//! - Stored in the request's extensions, so it lives and dies with the request
//! - Setting an existing key overwrites it

use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts, http::Request};

/// Key/value store attached to a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    values: HashMap<String, String>,
}

impl RequestContext {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Look up `key` in the request's context.
pub fn get<'a, B>(req: &'a Request<B>, key: &str) -> Option<&'a str> {
    req.extensions().get::<RequestContext>()?.get(key)
}

/// Set `key` in the request's context, creating the context if needed.
pub fn set<B>(req: &mut Request<B>, key: impl Into<String>, value: impl Into<String>) {
    let extensions = req.extensions_mut();
    match extensions.get_mut::<RequestContext>() {
        Some(ctx) => ctx.set(key, value),
        None => {
            let mut ctx = RequestContext::default();
            ctx.set(key, value);
            extensions.insert(ctx);
        }
    }
}

/// Extracts a copy of the context; empty when nothing was stored.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<RequestContext>().cloned().unwrap_or_default())
    }
}
