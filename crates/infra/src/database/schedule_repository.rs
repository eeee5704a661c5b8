//! SQLite implementation of the `ScheduleRepository` port.

use std::sync::Arc;

use agenda_core::ScheduleRepository;
use agenda_domain::{
    to_storage_timestamp, AgendaError, NewSchedule, Result as DomainResult, ScheduleRow,
};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use tracing::{debug, instrument};

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

const SCHEDULE_COLUMNS: &str =
    "id, title, description, event_start, event_end, location, created_at, updated_at";

/// SQLite-backed implementation of `ScheduleRepository`
pub struct SqliteScheduleRepository {
    db: Arc<DbManager>,
}

impl SqliteScheduleRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepository {
    #[instrument(skip(self))]
    async fn list_schedules(&self) -> DomainResult<Vec<ScheduleRow>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<ScheduleRow>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {SCHEDULE_COLUMNS} FROM schedules ORDER BY event_start ASC, id ASC"
                ))
                .map_err(map_sql_error)?;
            let rows = stmt
                .query_map([], map_schedule_row)
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;

            debug!(count = rows.len(), "loaded schedules");
            Ok(rows)
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self))]
    async fn find_schedule(&self, id: i64) -> DomainResult<Option<ScheduleRow>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<ScheduleRow>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("SELECT {SCHEDULE_COLUMNS} FROM schedules WHERE id = ?1"),
                params![id],
                map_schedule_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self, schedule), fields(title = %schedule.title))]
    async fn insert_schedule(&self, schedule: NewSchedule) -> DomainResult<ScheduleRow> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<ScheduleRow> {
            let conn = db.get_connection()?;
            let now = to_storage_timestamp(&Utc::now());

            let row = conn
                .query_row(
                    &format!(
                        "INSERT INTO schedules (
                            title, description, event_start, event_end, location,
                            created_at, updated_at
                        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
                        RETURNING {SCHEDULE_COLUMNS}"
                    ),
                    params![
                        schedule.title,
                        schedule.description,
                        to_storage_timestamp(&schedule.event_start),
                        to_storage_timestamp(&schedule.event_end),
                        schedule.location,
                        now,
                    ],
                    map_schedule_row,
                )
                .map_err(map_sql_error)?;

            debug!(schedule_id = row.id, "inserted schedule");
            Ok(row)
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self, schedule))]
    async fn update_schedule(&self, id: i64, schedule: NewSchedule) -> DomainResult<ScheduleRow> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<ScheduleRow> {
            let conn = db.get_connection()?;
            let now = to_storage_timestamp(&Utc::now());

            conn.query_row(
                &format!(
                    "UPDATE schedules
                     SET title = ?2, description = ?3, event_start = ?4, event_end = ?5,
                         location = ?6, updated_at = ?7
                     WHERE id = ?1
                     RETURNING {SCHEDULE_COLUMNS}"
                ),
                params![
                    id,
                    schedule.title,
                    schedule.description,
                    to_storage_timestamp(&schedule.event_start),
                    to_storage_timestamp(&schedule.event_end),
                    schedule.location,
                    now,
                ],
                map_schedule_row,
            )
            .optional()
            .map_err(map_sql_error)?
            .ok_or_else(|| AgendaError::NotFound(format!("schedule {id}")))
        })
        .await
        .map_err(map_join_error)?
    }

    #[instrument(skip(self))]
    async fn delete_schedule(&self, id: i64) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let affected = conn
                .execute("DELETE FROM schedules WHERE id = ?1", params![id])
                .map_err(map_sql_error)?;

            if affected == 0 {
                return Err(AgendaError::NotFound(format!("schedule {id}")));
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_schedule_row(row: &Row<'_>) -> rusqlite::Result<ScheduleRow> {
    Ok(ScheduleRow {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        event_start: row.get(3)?,
        event_end: row.get(4)?,
        location: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

fn map_join_error(err: task::JoinError) -> AgendaError {
    AgendaError::from(InfraError::from(err))
}
