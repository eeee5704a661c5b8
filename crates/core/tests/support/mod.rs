//! Shared test helpers for `agenda-core` integration tests.

#![allow(dead_code)]

pub mod schedules;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Instant for a wall-clock time in Jakarta (UTC+7, no DST).
pub fn wib(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    chrono_tz::Asia::Jakarta
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
