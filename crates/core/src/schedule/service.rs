//! Schedule service - core business logic for the schedule store and the
//! calendar view

use std::sync::Arc;

use agenda_domain::{AgendaError, Result, Schedule};
use chrono::NaiveDate;
use tracing::{debug, error, info};

use super::draft::ScheduleDraft;
use super::ports::ScheduleRepository;
use crate::calendar::{normalize_rows, CalendarView, CalendarZone, DateWindow};

/// Schedule service
pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepository>,
    zone: CalendarZone,
}

impl ScheduleService {
    /// Create a new schedule service cutting days in `zone`
    pub fn new(repository: Arc<dyn ScheduleRepository>, zone: CalendarZone) -> Self {
        Self { repository, zone }
    }

    /// Display timezone used for drafts and the calendar view.
    pub fn zone(&self) -> &CalendarZone {
        &self.zone
    }

    /// All schedules ordered by start; rows with malformed timestamps are
    /// skipped
    pub async fn list(&self) -> Result<Vec<Schedule>> {
        let rows = self.repository.list_schedules().await?;
        Ok(normalize_rows(rows).schedules)
    }

    /// Fetch one schedule
    pub async fn get(&self, id: i64) -> Result<Schedule> {
        let row = self
            .repository
            .find_schedule(id)
            .await?
            .ok_or_else(|| AgendaError::NotFound(format!("schedule {id}")))?;
        Ok(Schedule::try_from(row)?)
    }

    /// Validate a draft and store it
    pub async fn create(&self, draft: &ScheduleDraft) -> Result<Schedule> {
        let new = draft.validate(&self.zone)?;
        let row = self.repository.insert_schedule(new).await?;
        info!(schedule_id = row.id, "Schedule created");
        Ok(Schedule::try_from(row)?)
    }

    /// Validate a draft and replace an existing schedule with it
    pub async fn update(&self, id: i64, draft: &ScheduleDraft) -> Result<Schedule> {
        let new = draft.validate(&self.zone)?;
        let row = self.repository.update_schedule(id, new).await?;
        info!(schedule_id = id, "Schedule updated");
        Ok(Schedule::try_from(row)?)
    }

    /// Delete a schedule
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete_schedule(id).await?;
        info!(schedule_id = id, "Schedule deleted");
        Ok(())
    }

    /// Build the calendar view for `selected`
    ///
    /// Never fails: a store error is logged and the view is built over an
    /// empty snapshot; malformed rows are skipped and reported in
    /// [`CalendarView::skipped`].
    pub async fn calendar_view(
        &self,
        selected: NaiveDate,
        window: Option<&DateWindow>,
    ) -> CalendarView {
        let rows = match self.repository.list_schedules().await {
            Ok(rows) => rows,
            Err(err) => {
                error!(error = %err, "Failed to fetch schedules for calendar view");
                Vec::new()
            }
        };

        let ingested = normalize_rows(rows);
        debug!(
            schedules = ingested.schedules.len(),
            skipped = ingested.skipped.len(),
            %selected,
            "Aggregating calendar view"
        );

        CalendarView::build(&ingested.schedules, selected, window, &self.zone)
            .with_skipped(ingested.skipped)
    }
}
