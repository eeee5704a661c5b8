//! Visible date windows (typically one calendar month).

use agenda_domain::{AgendaError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive range of days the calendar widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    first: NaiveDate,
    last: NaiveDate,
}

impl DateWindow {
    /// Window from `first` through `last`.
    ///
    /// # Errors
    /// `InvalidInput` when `last` precedes `first`.
    pub fn new(first: NaiveDate, last: NaiveDate) -> Result<Self> {
        if last < first {
            return Err(AgendaError::InvalidInput(format!(
                "window end {last} is before window start {first}"
            )));
        }
        Ok(Self { first, last })
    }

    /// Whole calendar month, `None` for an invalid year/month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self { first, last: next_month.pred_opt()? })
    }

    /// Month containing `day`.
    pub fn month_of(day: NaiveDate) -> Self {
        Self::month(day.year(), day.month()).unwrap_or(Self { first: day, last: day })
    }

    /// Parse a `YYYY-MM` month key.
    pub fn parse_month(value: &str) -> Result<Self> {
        let invalid = || AgendaError::InvalidInput(format!("invalid month '{value}', expected YYYY-MM"));

        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::month(year, month).ok_or_else(invalid)
    }

    /// First visible day.
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    /// Last visible day.
    pub fn last(&self) -> NaiveDate {
        self.last
    }

    /// Whether `day` is visible in the window.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.first <= day && day <= self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_covers_leap_february() {
        let window = DateWindow::month(2024, 2).unwrap();
        assert_eq!(window.first(), date(2024, 2, 1));
        assert_eq!(window.last(), date(2024, 2, 29));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let window = DateWindow::month(2024, 12).unwrap();
        assert_eq!(window.last(), date(2024, 12, 31));
    }

    #[test]
    fn parse_month_key() {
        let window = DateWindow::parse_month("2024-03").unwrap();
        assert_eq!(window, DateWindow::month(2024, 3).unwrap());
        assert!(window.contains(date(2024, 3, 31)));
        assert!(!window.contains(date(2024, 4, 1)));
    }

    #[test]
    fn parse_month_rejects_bad_input() {
        for bad in ["2024-13", "2024-3", "maret", "2024/03", ""] {
            assert!(
                matches!(DateWindow::parse_month(bad), Err(AgendaError::InvalidInput(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(DateWindow::new(date(2024, 3, 2), date(2024, 3, 1)).is_err());
        assert!(DateWindow::new(date(2024, 3, 1), date(2024, 3, 1)).is_ok());
    }
}
