//! Request query access.
//!
//! # Responsibilities
//! - Read form values from the request's query string
//!
//! # Design Decisions
//! - Parsed on every call from the URI; nothing is cached on the request

use std::collections::BTreeMap;

use axum::http::Request;
use url::form_urlencoded;

/// All query values grouped by key, in the order they appear per key.
pub fn query_values<B>(req: &Request<B>) -> BTreeMap<String, Vec<String>> {
    let mut values: BTreeMap<String, Vec<String>> = BTreeMap::new();
    if let Some(query) = req.uri().query() {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            values.entry(key.into_owned()).or_default().push(value.into_owned());
        }
    }
    values
}

/// First query value for `key`.
pub fn form_value<B>(req: &Request<B>, key: &str) -> Option<String> {
    let query = req.uri().query()?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).unwrap()
    }

    #[test]
    fn test_form_value_first_wins() {
        let req = request("/search?q=rust&q=go&page=2");
        assert_eq!(form_value(&req, "q").as_deref(), Some("rust"));
        assert_eq!(form_value(&req, "page").as_deref(), Some("2"));
        assert_eq!(form_value(&req, "missing"), None);
    }

    #[test]
    fn test_form_value_without_query() {
        assert_eq!(form_value(&request("/search"), "q"), None);
    }

    #[test]
    fn test_query_values_groups_and_decodes() {
        let values = query_values(&request("/x?b=1&a=hello+world&b=2"));
        assert_eq!(values["a"], ["hello world"]);
        assert_eq!(values["b"], ["1", "2"]);
        assert!(query_values(&request("/x")).is_empty());
    }
}
