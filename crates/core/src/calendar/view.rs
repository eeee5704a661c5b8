//! Calendar page view model: marked dates plus the selected day's timeline.

use agenda_common::time::{format_long_date, format_time_hm};
use agenda_domain::Schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregator::{agenda_for, marked_dates, marked_dates_in};
use super::duration::EventDuration;
use super::window::DateWindow;
use super::zone::CalendarZone;

/// One row of the selected day's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEntry {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// `"09:00 - 17:00"` in the display zone
    pub time_range: String,
    pub duration_label: String,
}

/// Everything the calendar page renders for one selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub selected_date: NaiveDate,
    /// e.g. `"Minggu, 10 Maret 2024"`
    pub heading: String,
    /// IANA name of the display zone
    pub timezone: String,
    /// Ascending, deduplicated
    pub marked_dates: Vec<NaiveDate>,
    /// Ordered by start, then id
    pub agenda: Vec<AgendaEntry>,
    /// Ids of rows left out because of malformed timestamps
    pub skipped: Vec<i64>,
}

impl AgendaEntry {
    /// Present a schedule with times in `zone`.
    pub fn from_schedule(schedule: &Schedule, zone: &CalendarZone) -> Self {
        let start = zone.localize(&schedule.event_start);
        let end = zone.localize(&schedule.event_end);
        Self {
            id: schedule.id,
            title: schedule.title.clone(),
            description: schedule.description.clone(),
            location: schedule.location.clone(),
            time_range: format!("{} - {}", format_time_hm(&start), format_time_hm(&end)),
            duration_label: EventDuration::of(schedule).label(),
        }
    }
}

impl CalendarView {
    /// Aggregate `schedules` for `selected`.
    ///
    /// With a `window`, marked dates are limited to it; the agenda is not.
    pub fn build(
        schedules: &[Schedule],
        selected: NaiveDate,
        window: Option<&DateWindow>,
        zone: &CalendarZone,
    ) -> Self {
        let marked = match window {
            Some(window) => marked_dates_in(schedules, zone, window),
            None => marked_dates(schedules, zone),
        };

        Self {
            selected_date: selected,
            heading: format_long_date(selected),
            timezone: zone.name().to_string(),
            marked_dates: marked.into_iter().collect(),
            agenda: agenda_for(schedules, selected, zone)
                .into_iter()
                .map(|schedule| AgendaEntry::from_schedule(schedule, zone))
                .collect(),
            skipped: Vec::new(),
        }
    }

    /// Record ids of rows left out because of malformed timestamps.
    pub fn with_skipped(mut self, skipped: Vec<i64>) -> Self {
        self.skipped = skipped;
        self
    }

    /// Whether `day` should be highlighted.
    pub fn is_marked(&self, day: NaiveDate) -> bool {
        self.marked_dates.binary_search(&day).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn utc(d: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, h, m, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn schedule(id: i64, title: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Schedule {
        Schedule {
            id,
            title: title.into(),
            description: Some("Persiapan konser".into()),
            event_start: start,
            event_end: end,
            location: Some("Aula".into()),
            created_at: start,
            updated_at: start,
        }
    }

    #[test]
    fn entries_use_display_zone_times() {
        let zone = CalendarZone::default();
        // 09:00-11:30 WIB
        let schedules = vec![schedule(1, "Latihan", utc(10, 2, 0), utc(10, 4, 30))];
        let view = CalendarView::build(&schedules, day(10), None, &zone);

        assert_eq!(view.heading, "Minggu, 10 Maret 2024");
        assert_eq!(view.timezone, "Asia/Jakarta");
        assert_eq!(view.agenda.len(), 1);
        assert_eq!(view.agenda[0].time_range, "09:00 - 11:30");
        assert_eq!(view.agenda[0].duration_label, "2 jam 30 menit");
        assert!(view.is_marked(day(10)));
        assert!(!view.is_marked(day(11)));
    }

    #[test]
    fn window_limits_marked_dates_only() {
        let zone = CalendarZone::default();
        let schedules = vec![schedule(
            1,
            "Tur",
            utc(30, 2, 0),
            Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0).unwrap(),
        )];
        let march = DateWindow::month(2024, 3).unwrap();
        let view = CalendarView::build(&schedules, day(31), Some(&march), &zone);

        assert_eq!(view.marked_dates, vec![day(30), day(31)]);
        assert_eq!(view.agenda.len(), 1);
    }

    #[test]
    fn serializes_camel_case() {
        let zone = CalendarZone::default();
        let view = CalendarView::build(&[], day(10), None, &zone).with_skipped(vec![4]);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["selectedDate"], "2024-03-10");
        assert_eq!(json["markedDates"], serde_json::json!([]));
        assert_eq!(json["skipped"], serde_json::json!([4]));
    }
}
