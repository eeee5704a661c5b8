//! Calendar page commands

use std::time::Instant;

use agenda_core::{CalendarView, DateWindow};
use agenda_domain::{AgendaError, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Calendar view for a selected day
///
/// `date` is `YYYY-MM-DD` and defaults to today in the display timezone.
/// `month` (`YYYY-MM`) limits the marked dates to that month and defaults to
/// the month of the selected day.
pub async fn get_calendar_view(
    ctx: &AppContext,
    date: Option<&str>,
    month: Option<&str>,
) -> Result<CalendarView> {
    let command_name = "calendar::get_calendar_view";
    let start = Instant::now();

    let result = build_view(ctx, date, month).await;

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());
    result
}

async fn build_view(
    ctx: &AppContext,
    date: Option<&str>,
    month: Option<&str>,
) -> Result<CalendarView> {
    let selected = match date {
        Some(value) => parse_date(value)?,
        None => ctx.today(),
    };
    let window = match month {
        Some(value) => DateWindow::parse_month(value)?,
        None => DateWindow::month_of(selected),
    };

    info!(%selected, first = %window.first(), last = %window.last(), "Building calendar view");
    let view = ctx.schedules.calendar_view(selected, Some(&window)).await;
    Ok(view)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AgendaError::InvalidInput(format!("invalid date '{value}', expected YYYY-MM-DD"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(parse_date("2024-03-10").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert!(matches!(parse_date("10/03/2024"), Err(AgendaError::InvalidInput(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(AgendaError::InvalidInput(_))));
    }
}
