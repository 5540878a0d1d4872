//! Path parameter persistence.
//!
//! # Data Flow
//! ```text
//! shim (per matched request)
//!     → slot.rs (load the current strategy)
//!     → strategy.persist(&mut request, &params)
//!         Discard         → nothing
//!         ContextPersist  → RequestContext extension
//!         QueryPersist    → request URI query string
//!     → standard handler reads the values back from the request
//! ```
//!
//! # Design Decisions
//! - Strategies only have side effects on the request; they return nothing
//! - Built-ins skip all work for an empty parameter list
//! - Custom strategies are plain closures; their failures are not caught

pub mod builtin;
pub mod query;
pub mod slot;

use axum::{body::Body, http::Request};
use serde::{Deserialize, Serialize};

use crate::routing::Params;

pub use builtin::{ContextPersist, Discard};
pub use query::QueryPersist;
pub use slot::PersistSlot;

/// Makes matched path parameters reachable through the request itself.
pub trait Persist: Send + Sync + 'static {
    fn persist(&self, req: &mut Request<Body>, params: &Params);
}

impl<F> Persist for F
where
    F: Fn(&mut Request<Body>, &Params) + Send + Sync + 'static,
{
    fn persist(&self, req: &mut Request<Body>, params: &Params) {
        (self)(req, params)
    }
}

/// Selects one of the built-in strategies from configuration or the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PersistMode {
    #[default]
    Discard,
    Context,
    Query,
}

impl PersistMode {
    /// Install the selected strategy into `slot`.
    pub fn apply(self, slot: &PersistSlot) {
        match self {
            PersistMode::Discard => slot.set(Discard),
            PersistMode::Context => slot.set(ContextPersist),
            PersistMode::Query => slot.set(QueryPersist),
        }
    }
}

impl std::fmt::Display for PersistMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PersistMode::Discard => "discard",
            PersistMode::Context => "context",
            PersistMode::Query => "query",
        };
        f.write_str(name)
    }
}
