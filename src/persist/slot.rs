//! Swappable strategy slot.

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{body::Body, http::Request};

use crate::persist::{Discard, Persist};
use crate::routing::Params;

/// Shared handle to the strategy a router's shims run.
///
/// Every clone points at the same slot. Each request loads the strategy once,
/// so a [`PersistSlot::set`] affects only requests that arrive afterwards.
#[derive(Clone)]
pub struct PersistSlot {
    current: Arc<ArcSwap<Box<dyn Persist>>>,
}

impl PersistSlot {
    pub fn new<P: Persist>(strategy: P) -> Self {
        let strategy: Box<dyn Persist> = Box::new(strategy);
        Self {
            current: Arc::new(ArcSwap::from_pointee(strategy)),
        }
    }

    /// Replace the current strategy.
    pub fn set<P: Persist>(&self, strategy: P) {
        let strategy: Box<dyn Persist> = Box::new(strategy);
        self.current.store(Arc::new(strategy));
    }

    /// Run the current strategy against `req`.
    pub fn persist(&self, req: &mut Request<Body>, params: &Params) {
        let strategy = self.current.load_full();
        strategy.persist(req, params);
    }
}

impl Default for PersistSlot {
    fn default() -> Self {
        Self::new(Discard)
    }
}

impl std::fmt::Debug for PersistSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistSlot").finish_non_exhaustive()
    }
}
