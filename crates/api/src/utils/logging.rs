use std::time::Duration;

use agenda_domain::AgendaError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"schedules::list_schedules"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - The failure, if the command did not succeed.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&AgendaError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = error_label(err),
            error = %err,
            "command_execution_failure"
        ),
    }
}

/// Convert an `AgendaError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &AgendaError) -> &'static str {
    match error {
        AgendaError::Database(_) => "database",
        AgendaError::Config(_) => "config",
        AgendaError::NotFound(_) => "not_found",
        AgendaError::InvalidInput(_) => "invalid_input",
        AgendaError::InvalidDate(_) => "invalid_date",
        AgendaError::Internal(_) => "internal",
    }
}
