//! Observability subsystem.
//!
//! Structured logging through `tracing`. Registration emits `debug` events,
//! the shim emits a `trace` event per persisted request.

pub mod logging;

pub use logging::init_logging;
