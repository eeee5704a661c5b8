//! Observability infrastructure: structured logging via `tracing`.

pub mod logging;

pub use logging::{build_filter, init_from_config, init_tracing};
