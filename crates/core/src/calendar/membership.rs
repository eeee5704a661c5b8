//! Day membership: is an event active on a selected calendar day?

use agenda_domain::Schedule;
use chrono::{DateTime, NaiveDate, Utc};

use super::expander::expand;
use super::zone::CalendarZone;

/// True iff `day` lies within the inclusive day span of `[start, end]`.
///
/// Comparison is at day granularity in `zone`, so a 23:00 start matches a
/// selection of that same day. A reversed range is active on no day.
pub fn is_active_on(
    day: NaiveDate,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
    zone: &CalendarZone,
) -> bool {
    expand(start, end, zone).contains(day)
}

/// [`is_active_on`] for a schedule.
pub fn schedule_is_active_on(day: NaiveDate, schedule: &Schedule, zone: &CalendarZone) -> bool {
    is_active_on(day, &schedule.event_start, &schedule.event_end, zone)
}
