//! Display timezone used for every day-boundary decision.

use std::fmt;
use std::str::FromStr;

use agenda_common::time::Clock;
use agenda_domain::{AgendaError, Result};
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The single IANA zone in which timestamps are cut into calendar days.
///
/// Never derived from the process's ambient local zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarZone {
    tz: Tz,
}

impl CalendarZone {
    /// Wrap an already resolved zone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Resolve an IANA zone name such as `Asia/Jakarta`.
    pub fn parse(name: &str) -> Result<Self> {
        Tz::from_str(name.trim())
            .map(Self::new)
            .map_err(|_| AgendaError::Config(format!("unknown timezone '{name}'")))
    }

    /// The underlying `chrono-tz` zone.
    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// IANA name, e.g. `Asia/Jakarta`.
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Convert an instant into this zone.
    pub fn localize(&self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    /// Calendar day an instant falls on in this zone.
    pub fn local_day(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.localize(instant).date_naive()
    }

    /// Today's date in this zone according to `clock`.
    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        self.local_day(&clock.now())
    }

    /// Interpret a wall-clock date and time in this zone as a UTC instant.
    ///
    /// For a repeated local time the earlier instant wins. A local time that
    /// does not exist (skipped by a DST transition) is rejected.
    pub fn resolve_local(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        match self.tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
            LocalResult::None => Err(AgendaError::InvalidInput(format!(
                "{local} does not exist in timezone {}",
                self.tz.name()
            ))),
        }
    }
}

impl Default for CalendarZone {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Jakarta)
    }
}

impl fmt::Display for CalendarZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use agenda_common::time::MockClock;

    use super::*;

    #[test]
    fn default_is_jakarta() {
        assert_eq!(CalendarZone::default().name(), "Asia/Jakarta");
    }

    #[test]
    fn unknown_zone_is_config_error() {
        let err = CalendarZone::parse("Asia/Atlantis").unwrap_err();
        assert!(matches!(err, AgendaError::Config(_)));
    }

    #[test]
    fn late_utc_evening_is_next_day_in_jakarta() {
        let zone = CalendarZone::default();
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap();
        assert_eq!(zone.local_day(&instant), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());

        let utc = CalendarZone::parse("UTC").unwrap();
        assert_eq!(utc.local_day(&instant), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn resolve_local_applies_offset() {
        let zone = CalendarZone::default();
        let local = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(
            zone.resolve_local(local).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 10, 2, 0, 0).unwrap()
        );
    }

    #[test]
    fn resolve_local_rejects_skipped_time() {
        let zone = CalendarZone::parse("Europe/Amsterdam").unwrap();
        let local = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(2, 30, 0).unwrap();
        assert!(matches!(zone.resolve_local(local), Err(AgendaError::InvalidInput(_))));
    }

    #[test]
    fn today_follows_clock() {
        let clock = MockClock::new(Utc.with_ymd_and_hms(2024, 3, 9, 17, 0, 0).unwrap());
        assert_eq!(
            CalendarZone::default().today(&clock),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
    }
}
