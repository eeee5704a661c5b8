//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Agenda
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AgendaError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Agenda operations
pub type Result<T> = std::result::Result<T, AgendaError>;

/// A stored schedule timestamp that could not be parsed.
///
/// Raised while normalizing a [`ScheduleRow`](crate::ScheduleRow) into a
/// [`Schedule`](crate::Schedule). Callers that aggregate many rows skip the
/// offending row instead of failing the whole view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("schedule {schedule_id}: invalid {field} '{value}': {reason}")]
pub struct InvalidDateError {
    pub schedule_id: i64,
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}

impl From<InvalidDateError> for AgendaError {
    fn from(err: InvalidDateError) -> Self {
        AgendaError::InvalidDate(err.to_string())
    }
}
