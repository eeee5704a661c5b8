//! Schedule ("jadwal") entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::database::{parse_storage_timestamp, ScheduleRow};
use crate::errors::InvalidDateError;

/// A scheduled event with canonical UTC timestamps.
///
/// Produced from a [`ScheduleRow`] by `TryFrom`; everything downstream of the
/// store works with this type only. Only `event_start` and `event_end` must
/// parse; unreadable bookkeeping timestamps fall back to `event_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub event_start: DateTime<Utc>,
    pub event_end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating or replacing a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub title: String,
    pub description: Option<String>,
    pub event_start: DateTime<Utc>,
    pub event_end: DateTime<Utc>,
    pub location: Option<String>,
}

impl TryFrom<ScheduleRow> for Schedule {
    type Error = InvalidDateError;

    fn try_from(row: ScheduleRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let parse = |field: &'static str, value: &str| {
            parse_storage_timestamp(value).map_err(|reason| InvalidDateError {
                schedule_id: id,
                field,
                value: value.to_string(),
                reason,
            })
        };

        let event_start = parse("event_start", &row.event_start)?;
        let event_end = parse("event_end", &row.event_end)?;
        let created_at = parse_storage_timestamp(&row.created_at).unwrap_or(event_start);
        let updated_at = parse_storage_timestamp(&row.updated_at).unwrap_or(created_at);

        Ok(Self {
            id,
            title: row.title,
            description: row.description,
            event_start,
            event_end,
            location: row.location,
            created_at,
            updated_at,
        })
    }
}
