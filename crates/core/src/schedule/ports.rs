//! Port interfaces for the schedule store
//!
//! Rows cross this boundary exactly as persisted; normalization into
//! [`Schedule`](agenda_domain::Schedule) happens in the service.

use agenda_domain::{NewSchedule, Result, ScheduleRow};
use async_trait::async_trait;

/// Persistence for schedules
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// All schedules, ascending by `event_start`
    async fn list_schedules(&self) -> Result<Vec<ScheduleRow>>;

    /// A single schedule, if it exists
    async fn find_schedule(&self, id: i64) -> Result<Option<ScheduleRow>>;

    /// Insert a schedule and return the stored row
    async fn insert_schedule(&self, schedule: NewSchedule) -> Result<ScheduleRow>;

    /// Replace every editable field of an existing schedule
    ///
    /// Fails with `NotFound` when `id` does not exist.
    async fn update_schedule(&self, id: i64, schedule: NewSchedule) -> Result<ScheduleRow>;

    /// Delete a schedule; fails with `NotFound` when `id` does not exist
    async fn delete_schedule(&self, id: i64) -> Result<()>;
}
