//! Route pattern spelling.
//!
//! # Responsibilities
//! - Accept httprouter-style patterns (`/users/:id`, `/src/*filepath`)
//! - Rewrite them to the native axum spelling (`/users/{id}`, `/src/{*filepath}`)
//!
//! # Design Decisions
//! - Only whole segments starting with `:` or `*` are rewritten
//! - Native patterns pass through unchanged
//! - No validation here: the underlying router owns pattern rules

/// Rewrite an httprouter-style pattern into the native router syntax.
pub fn to_native(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if let Some(name) = segment.strip_prefix(':').filter(|n| !n.is_empty()) {
                format!("{{{name}}}")
            } else if let Some(name) = segment.strip_prefix('*').filter(|n| !n.is_empty()) {
                format!("{{*{name}}}")
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
