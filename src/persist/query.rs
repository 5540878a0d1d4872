//! Query-string merge strategy.
//!
//! # Design Decisions
//! - The URI is the only copy of the query; readers parse it on demand, so
//!   there is no parsed form that could go stale
//! - A parameter replaces every existing value under its key
//! - Keys are re-encoded in sorted order

use axum::{
    body::Body,
    http::{uri::PathAndQuery, Request, Uri},
};
use url::form_urlencoded;

use crate::http::request::query_values;
use crate::persist::Persist;
use crate::routing::Params;

/// Merges path parameters into the request's query string.
///
/// ```rust,no_run
/// use axum::{body::Body, http::Request};
/// use route_persist::http::form_value;
/// use route_persist::{QueryPersist, Router};
///
/// let mut router = Router::new();
/// router.set_persist(QueryPersist);
/// router.get("/users/:id", |req: Request<Body>| async move {
///     format!("User ID: {}", form_value(&req, "id").unwrap_or_default())
/// });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPersist;

impl Persist for QueryPersist {
    fn persist(&self, req: &mut Request<Body>, params: &Params) {
        if params.is_empty() {
            return;
        }

        let mut values = query_values(req);
        for param in params {
            values.insert(param.key.clone(), vec![param.value.clone()]);
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, list) in &values {
            for value in list {
                query.append_pair(key, value);
            }
        }

        match with_query(req.uri(), &query.finish()) {
            Ok(uri) => *req.uri_mut() = uri,
            Err(e) => {
                tracing::warn!(uri = %req.uri(), error = %e, "Could not apply merged query");
            }
        }
    }
}

fn with_query(uri: &Uri, query: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = if query.is_empty() {
        uri.path().to_string()
    } else {
        format!("{}?{}", uri.path(), query)
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>()?);
    Ok(Uri::from_parts(parts)?)
}
