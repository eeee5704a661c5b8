//! Tracing subscriber installation.

use agenda_domain::{AgendaError, LoggingConfig, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins over the configured level.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| AgendaError::Config(format!("invalid log level '{level}': {e}"))),
    }
}

/// Install the global subscriber
///
/// Emits human-readable lines by default or JSON when `json` is set. Fails
/// if a global subscriber is already installed.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let filter = build_filter(level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| AgendaError::Internal(format!("failed to install tracing subscriber: {e}")))
}

/// [`init_tracing`] from a loaded [`LoggingConfig`].
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    init_tracing(&config.level, config.json)
}
