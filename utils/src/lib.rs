//! Shared utilities for the Aula client.

mod logging;

pub use logging::init_tracing;
