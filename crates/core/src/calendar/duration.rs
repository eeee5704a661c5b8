//! Elapsed time of an event, rendered in Indonesian.

use std::fmt;

use agenda_common::time::format_duration_id;
use agenda_domain::Schedule;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_MINUTE: i64 = 60 * 1000;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Whole hours and remaining whole minutes between two instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl EventDuration {
    /// Truncating millisecond difference; negative spans saturate to zero.
    pub fn between(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Self {
        let millis = (*end - *start).num_milliseconds().max(0);
        Self {
            hours: millis / MILLIS_PER_HOUR,
            minutes: (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
        }
    }

    pub fn of(schedule: &Schedule) -> Self {
        Self::between(&schedule.event_start, &schedule.event_end)
    }

    /// `"H jam M menit"`, `"H jam"` or `"M menit"`.
    pub fn label(&self) -> String {
        format_duration_id(self.hours, self.minutes)
    }
}

impl fmt::Display for EventDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Convenience wrapper returning the label directly.
pub fn format_event_duration(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    EventDuration::between(start, end).label()
}
