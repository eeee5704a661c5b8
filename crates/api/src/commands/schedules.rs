//! Schedule admin commands

use std::time::Instant;

use agenda_common::time::{format_table_date, format_time_hm};
use agenda_core::calendar::{CalendarZone, EventDuration};
use agenda_core::ScheduleDraft;
use agenda_domain::constants::MISSING_LOCATION_LABEL;
use agenda_domain::{Result, Schedule};
use serde::{Deserialize, Serialize};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Row of the admin schedule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTableRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Location, or "Tidak ada lokasi" when unset
    pub location: String,
    /// e.g. "10 Maret 2024"
    pub start_date: String,
    pub end_date: String,
    pub time_range: String,
    pub duration_label: String,
}

impl ScheduleTableRow {
    pub fn from_schedule(schedule: &Schedule, zone: &CalendarZone) -> Self {
        let start = zone.localize(&schedule.event_start);
        let end = zone.localize(&schedule.event_end);
        Self {
            id: schedule.id,
            title: schedule.title.clone(),
            description: schedule.description.clone(),
            location: schedule
                .location
                .clone()
                .unwrap_or_else(|| MISSING_LOCATION_LABEL.to_string()),
            start_date: format_table_date(start.date_naive()),
            end_date: format_table_date(end.date_naive()),
            time_range: format!("{} - {}", format_time_hm(&start), format_time_hm(&end)),
            duration_label: EventDuration::of(schedule).label(),
        }
    }
}

/// All schedules as table rows, earliest first
pub async fn list_schedules(ctx: &AppContext) -> Result<Vec<ScheduleTableRow>> {
    let start = Instant::now();
    let result = ctx.schedules.list().await.map(|schedules| {
        schedules.iter().map(|schedule| ScheduleTableRow::from_schedule(schedule, ctx.zone())).collect()
    });
    log_command_execution("schedules::list_schedules", start.elapsed(), result.as_ref().err());
    result
}

pub async fn get_schedule(ctx: &AppContext, id: i64) -> Result<Schedule> {
    let start = Instant::now();
    let result = ctx.schedules.get(id).await;
    log_command_execution("schedules::get_schedule", start.elapsed(), result.as_ref().err());
    result
}

/// Form values for editing an existing schedule
pub async fn get_schedule_draft(ctx: &AppContext, id: i64) -> Result<ScheduleDraft> {
    let start = Instant::now();
    let result = ctx
        .schedules
        .get(id)
        .await
        .map(|schedule| ScheduleDraft::from_schedule(&schedule, ctx.zone()));
    log_command_execution("schedules::get_schedule_draft", start.elapsed(), result.as_ref().err());
    result
}

pub async fn create_schedule(ctx: &AppContext, draft: ScheduleDraft) -> Result<Schedule> {
    let start = Instant::now();
    let result = ctx.schedules.create(&draft).await;
    log_command_execution("schedules::create_schedule", start.elapsed(), result.as_ref().err());
    result
}

pub async fn update_schedule(ctx: &AppContext, id: i64, draft: ScheduleDraft) -> Result<Schedule> {
    let start = Instant::now();
    let result = ctx.schedules.update(id, &draft).await;
    log_command_execution("schedules::update_schedule", start.elapsed(), result.as_ref().err());
    result
}

pub async fn delete_schedule(ctx: &AppContext, id: i64) -> Result<()> {
    let start = Instant::now();
    let result = ctx.schedules.delete(id).await;
    log_command_execution("schedules::delete_schedule", start.elapsed(), result.as_ref().err());
    result
}
