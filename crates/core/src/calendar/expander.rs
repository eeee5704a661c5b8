//! Date range expansion: an event's `[start, end]` as the calendar days it
//! touches.

use agenda_domain::Schedule;
use chrono::{DateTime, NaiveDate, Utc};

use super::window::DateWindow;
use super::zone::CalendarZone;

/// Inclusive, ordered run of calendar days.
///
/// Iterating yields each day once, first to last. An empty span yields
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    bounds: Option<(NaiveDate, NaiveDate)>,
}

impl DaySpan {
    /// Days from `first` through `last`; empty when `last < first`.
    pub fn new(first: NaiveDate, last: NaiveDate) -> Self {
        if last < first {
            Self::empty()
        } else {
            Self { bounds: Some((first, last)) }
        }
    }

    /// A span covering no days.
    pub fn empty() -> Self {
        Self { bounds: None }
    }

    /// Whether the span covers no days.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Earliest day, `None` when empty.
    pub fn first(&self) -> Option<NaiveDate> {
        self.bounds.map(|(first, _)| first)
    }

    /// Latest day, `None` when empty.
    pub fn last(&self) -> Option<NaiveDate> {
        self.bounds.map(|(_, last)| last)
    }

    /// Number of days in the span.
    pub fn day_count(&self) -> usize {
        self.bounds
            .map(|(first, last)| (last - first).num_days().unsigned_abs() as usize + 1)
            .unwrap_or(0)
    }

    /// Whether `day` lies within the span (inclusive on both ends).
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.bounds.is_some_and(|(first, last)| first <= day && day <= last)
    }

    /// Intersection with a visible window.
    pub fn clip(&self, window: &DateWindow) -> Self {
        match self.bounds {
            Some((first, last)) => Self::new(first.max(window.first()), last.min(window.last())),
            None => Self::empty(),
        }
    }

    /// Iterate over the days in the span.
    pub fn days(&self) -> Days {
        match self.bounds {
            Some((first, last)) => Days { next: Some(first), last },
            None => Days { next: None, last: NaiveDate::MIN },
        }
    }
}

impl IntoIterator for DaySpan {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator over the days of a [`DaySpan`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|day| *day <= self.last)?;
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .filter(|day| *day <= self.last)
            .map(|day| (self.last - day).num_days().unsigned_abs() as usize + 1)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

/// Expand `[start, end]` into the calendar days it touches in `zone`.
///
/// An end instant before the start instant yields an empty span.
pub fn expand(start: &DateTime<Utc>, end: &DateTime<Utc>, zone: &CalendarZone) -> DaySpan {
    if end < start {
        return DaySpan::empty();
    }
    DaySpan::new(zone.local_day(start), zone.local_day(end))
}

/// Day span of a schedule in `zone`.
pub fn schedule_span(schedule: &Schedule, zone: &CalendarZone) -> DaySpan {
    expand(&schedule.event_start, &schedule.event_end, zone)
}
