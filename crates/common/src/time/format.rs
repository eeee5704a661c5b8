//! Indonesian (`id`) date, time and duration formatting
//!
//! Provides the human-readable strings the schedule pages show: durations
//! such as `"2 jam 30 menit"`, clock times such as `"09:00"` and long dates
//! such as `"Minggu, 10 Maret 2024"`.

use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

/// Month names for the `id` locale, January first.
pub const MONTH_NAMES_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Day names for the `id` locale, Monday first.
pub const DAY_NAMES_ID: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

/// Format an hours/minutes pair the way the schedule timeline does
///
/// Zero components are omitted; a fully zero duration renders as minutes.
///
/// # Examples
///
/// ```
/// use agenda_common::time::format::format_duration_id;
///
/// assert_eq!(format_duration_id(2, 30), "2 jam 30 menit");
/// assert_eq!(format_duration_id(2, 0), "2 jam");
/// assert_eq!(format_duration_id(0, 45), "45 menit");
/// assert_eq!(format_duration_id(0, 0), "0 menit");
/// ```
pub fn format_duration_id(hours: i64, minutes: i64) -> String {
    if hours > 0 && minutes > 0 {
        format!("{hours} jam {minutes} menit")
    } else if hours > 0 {
        format!("{hours} jam")
    } else {
        format!("{minutes} menit")
    }
}

/// Format the clock time of a timestamp as `HH:mm` in its own timezone
///
/// # Examples
///
/// ```
/// use agenda_common::time::format::format_time_hm;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2024, 3, 10, 9, 5, 0).unwrap();
/// assert_eq!(format_time_hm(&ts), "09:05");
/// ```
pub fn format_time_hm<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.format("%H:%M").to_string()
}

/// Indonesian month name for a 1-based month number
///
/// Out-of-range months yield an empty string.
pub fn month_name_id(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES_ID.get(idx as usize))
        .copied()
        .unwrap_or_default()
}

/// Indonesian day name for a weekday
pub fn day_name_id(weekday: Weekday) -> &'static str {
    DAY_NAMES_ID[weekday.num_days_from_monday() as usize]
}

/// Format a date as a calendar heading (`EEEE, dd MMMM yyyy`)
///
/// # Examples
///
/// ```
/// use agenda_common::time::format::format_long_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// assert_eq!(format_long_date(date), "Minggu, 10 Maret 2024");
/// ```
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {:02} {} {}",
        day_name_id(date.weekday()),
        date.day(),
        month_name_id(date.month()),
        date.year()
    )
}

/// Format a date for table cells (`d MMMM yyyy`, day not padded)
///
/// # Examples
///
/// ```
/// use agenda_common::time::format::format_table_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();
/// assert_eq!(format_table_date(date), "5 Agustus 2024");
/// ```
pub fn format_table_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name_id(date.month()), date.year())
}
