//! Admin form input for adding or editing a schedule.
//!
//! The form collects a date and an `HH:mm` time for each end of the event.
//! They are combined in the display zone and validated here, so only
//! well-formed ranges ever reach the store.

use agenda_domain::constants::{DEFAULT_END_TIME, DEFAULT_START_TIME};
use agenda_domain::{AgendaError, NewSchedule, Result, Schedule};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarZone;

fn default_start_time() -> String {
    DEFAULT_START_TIME.to_string()
}

fn default_end_time() -> String {
    DEFAULT_END_TIME.to_string()
}

/// Unvalidated schedule form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    pub end_date: NaiveDate,
    #[serde(default = "default_end_time")]
    pub end_time: String,
}

impl ScheduleDraft {
    /// A draft with the form's default times (09:00 - 17:00).
    pub fn new(title: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: None,
            location: None,
            start_date,
            start_time: default_start_time(),
            end_date,
            end_time: default_end_time(),
        }
    }

    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Prefill an edit form from an existing schedule.
    pub fn from_schedule(schedule: &Schedule, zone: &CalendarZone) -> Self {
        let start = zone.localize(&schedule.event_start);
        let end = zone.localize(&schedule.event_end);
        Self {
            title: schedule.title.clone(),
            description: schedule.description.clone(),
            location: schedule.location.clone(),
            start_date: start.date_naive(),
            start_time: start.format("%H:%M").to_string(),
            end_date: end.date_naive(),
            end_time: end.format("%H:%M").to_string(),
        }
    }

    /// Validate and resolve into instants.
    pub fn validate(&self, zone: &CalendarZone) -> Result<NewSchedule> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AgendaError::InvalidInput("title must not be empty".into()));
        }

        let start_time = parse_time("start time", &self.start_time)?;
        let end_time = parse_time("end time", &self.end_time)?;
        let event_start = zone.resolve_local(self.start_date.and_time(start_time))?;
        let event_end = zone.resolve_local(self.end_date.and_time(end_time))?;

        if event_end < event_start {
            return Err(AgendaError::InvalidInput(format!(
                "end {} {} is before start {} {}",
                self.end_date, self.end_time, self.start_date, self.start_time
            )));
        }

        Ok(NewSchedule {
            title: title.to_string(),
            description: non_empty(self.description.as_deref()),
            event_start,
            event_end,
            location: non_empty(self.location.as_deref()),
        })
    }
}

fn parse_time(label: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| AgendaError::InvalidInput(format!("invalid {label} '{value}', expected HH:mm")))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
