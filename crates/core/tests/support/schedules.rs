use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use agenda_core::ScheduleRepository;
use agenda_domain::{
    to_storage_timestamp, AgendaError, NewSchedule, Result as DomainResult, ScheduleRow,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

const SEEDED_AT: &str = "2024-03-01T00:00:00.000Z";

/// In-memory mock for `ScheduleRepository`.
///
/// Rows are kept verbatim so tests can seed malformed timestamps. Reads can
/// be switched to fail to exercise the service's degraded path.
#[derive(Default, Clone)]
pub struct MockScheduleRepository {
    rows: Arc<Mutex<Vec<ScheduleRow>>>,
    next_id: Arc<AtomicI64>,
    fail_reads: Arc<AtomicBool>,
}

impl MockScheduleRepository {
    pub fn new() -> Self {
        Self { next_id: Arc::new(AtomicI64::new(1)), ..Self::default() }
    }

    /// Seed a raw row.
    pub fn with_row(self, row: ScheduleRow) -> Self {
        self.next_id.fetch_max(row.id + 1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(row);
        self
    }

    /// Seed a well-formed schedule.
    pub fn with_schedule(self, id: i64, title: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.with_row(raw_row(id, title, &to_storage_timestamp(&start), &to_storage_timestamp(&end)))
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_reads(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AgendaError::Database("connection refused".into()));
        }
        Ok(())
    }
}

pub fn raw_row(id: i64, title: &str, start: &str, end: &str) -> ScheduleRow {
    ScheduleRow {
        id,
        title: title.into(),
        description: None,
        event_start: start.into(),
        event_end: end.into(),
        location: None,
        created_at: SEEDED_AT.into(),
        updated_at: SEEDED_AT.into(),
    }
}

fn apply(row: &mut ScheduleRow, schedule: NewSchedule) {
    row.title = schedule.title;
    row.description = schedule.description;
    row.event_start = to_storage_timestamp(&schedule.event_start);
    row.event_end = to_storage_timestamp(&schedule.event_end);
    row.location = schedule.location;
    row.updated_at = to_storage_timestamp(&Utc::now());
}

#[async_trait]
impl ScheduleRepository for MockScheduleRepository {
    async fn list_schedules(&self) -> DomainResult<Vec<ScheduleRow>> {
        self.check_reads()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.event_start.cmp(&b.event_start).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn find_schedule(&self, id: i64) -> DomainResult<Option<ScheduleRow>> {
        self.check_reads()?;
        Ok(self.rows.lock().unwrap().iter().find(|row| row.id == id).cloned())
    }

    async fn insert_schedule(&self, schedule: NewSchedule) -> DomainResult<ScheduleRow> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut row = raw_row(id, "", "", "");
        apply(&mut row, schedule);
        row.created_at = row.updated_at.clone();
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_schedule(&self, id: i64, schedule: NewSchedule) -> DomainResult<ScheduleRow> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| AgendaError::NotFound(format!("schedule {id}")))?;
        apply(row, schedule);
        Ok(row.clone())
    }

    async fn delete_schedule(&self, id: i64) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(AgendaError::NotFound(format!("schedule {id}")));
        }
        Ok(())
    }
}
