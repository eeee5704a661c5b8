//! Row types mirroring the persisted schema.
//!
//! Rows keep timestamps exactly as stored (ISO-8601 text). Conversion into
//! the canonical [`Schedule`](super::schedule::Schedule) happens once, via
//! `TryFrom`, so malformed values are caught at the boundary.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Row type for the `schedules` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_start: String,
    pub event_end: String,
    pub location: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Render a timestamp the way schedule rows store it (RFC 3339, UTC,
/// millisecond precision).
pub fn to_storage_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp into UTC.
///
/// Accepts RFC 3339 (with or without an explicit offset; a missing offset is
/// read as UTC) and SQLite's `YYYY-MM-DD HH:MM:SS[.fff]` form.
pub fn parse_storage_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty timestamp".to_string());
    }

    let has_explicit_timezone = trimmed.ends_with('Z')
        || trimmed.ends_with('z')
        || trimmed
            .rfind('T')
            .is_some_and(|idx| trimmed[idx + 1..].chars().any(|c| matches!(c, '+' | '-')));

    if trimmed.contains('T') {
        let candidate =
            if has_explicit_timezone { trimmed.to_string() } else { format!("{trimmed}Z") };
        return DateTime::parse_from_rfc3339(&candidate)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| e.to_string());
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| e.to_string())
}
