//! Shared runtime utilities.

pub mod logging;

pub use logging::init_tracing;
