//! Folds expansion and membership over a snapshot of schedules.
//!
//! All functions borrow the snapshot read-only; the selected day is always
//! an explicit argument.

use std::collections::BTreeSet;

use agenda_domain::Schedule;
use chrono::NaiveDate;

use super::expander::schedule_span;
use super::membership::schedule_is_active_on;
use super::window::DateWindow;
use super::zone::CalendarZone;

/// Every day covered by at least one schedule.
pub fn marked_dates(schedules: &[Schedule], zone: &CalendarZone) -> BTreeSet<NaiveDate> {
    schedules.iter().flat_map(|schedule| schedule_span(schedule, zone)).collect()
}

/// [`marked_dates`] restricted to `window`.
///
/// Spans are clipped before iteration, so a long event costs at most the
/// window's length.
pub fn marked_dates_in(
    schedules: &[Schedule],
    zone: &CalendarZone,
    window: &DateWindow,
) -> BTreeSet<NaiveDate> {
    schedules
        .iter()
        .flat_map(|schedule| schedule_span(schedule, zone).clip(window))
        .collect()
}

/// Schedules active on `day`, ordered by start then id.
pub fn agenda_for<'a>(
    schedules: &'a [Schedule],
    day: NaiveDate,
    zone: &CalendarZone,
) -> Vec<&'a Schedule> {
    let mut agenda: Vec<&Schedule> = schedules
        .iter()
        .filter(|schedule| schedule_is_active_on(day, schedule, zone))
        .collect();
    agenda.sort_by(|a, b| a.event_start.cmp(&b.event_start).then(a.id.cmp(&b.id)));
    agenda
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn utc(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, h, 0, 0).unwrap()
    }

    fn schedule(id: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> Schedule {
        Schedule {
            id,
            title: format!("Jadwal {id}"),
            description: None,
            event_start: start,
            event_end: end,
            location: None,
            created_at: start,
            updated_at: start,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn empty_input_is_vacuous() {
        let zone = CalendarZone::default();
        assert!(marked_dates(&[], &zone).is_empty());
        assert!(agenda_for(&[], day(10), &zone).is_empty());
    }

    #[test]
    fn overlapping_spans_collapse() {
        let zone = CalendarZone::default();
        let schedules = vec![schedule(1, utc(10, 2), utc(11, 2)), schedule(2, utc(11, 2), utc(12, 2))];
        let marked: Vec<_> = marked_dates(&schedules, &zone).into_iter().collect();
        assert_eq!(marked, vec![day(10), day(11), day(12)]);
    }

    #[test]
    fn reversed_schedule_contributes_nothing() {
        let zone = CalendarZone::default();
        let schedules = vec![schedule(1, utc(12, 2), utc(10, 2))];
        assert!(marked_dates(&schedules, &zone).is_empty());
        assert!(agenda_for(&schedules, day(11), &zone).is_empty());
    }

    #[test]
    fn ties_on_start_break_by_id() {
        let zone = CalendarZone::default();
        let schedules = vec![
            schedule(9, utc(10, 2), utc(10, 4)),
            schedule(3, utc(10, 2), utc(10, 3)),
            schedule(5, utc(10, 1), utc(10, 3)),
        ];
        let ids: Vec<i64> = agenda_for(&schedules, day(10), &zone).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn window_clips_long_events() {
        let zone = CalendarZone::default();
        let long = schedule(1, utc(1, 2), Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
        let window = DateWindow::month(2024, 3).unwrap();

        let marked = marked_dates_in(std::slice::from_ref(&long), &zone, &window);
        assert_eq!(marked.len(), 31);
        assert_eq!(marked.first(), Some(&day(1)));
        assert_eq!(marked.last(), Some(&day(31)));
    }
}
