//! Normalization of stored rows into schedules.

use agenda_domain::{parse_storage_timestamp, Schedule, ScheduleRow};
use tracing::warn;

/// Outcome of normalizing a batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    /// Successfully normalized schedules, in input order.
    pub schedules: Vec<Schedule>,
    /// Ids of rows dropped because a timestamp could not be parsed.
    pub skipped: Vec<i64>,
}

/// Parse every row once; malformed rows are logged and skipped.
///
/// Only an unreadable `event_start`/`event_end` drops a row. Bad
/// `created_at`/`updated_at` values are logged and the row is kept.
pub fn normalize_rows(rows: Vec<ScheduleRow>) -> Ingested {
    let mut ingested = Ingested { schedules: Vec::with_capacity(rows.len()), skipped: Vec::new() };

    for row in rows {
        let id = row.id;
        warn_on_bookkeeping(&row);
        match Schedule::try_from(row) {
            Ok(schedule) => ingested.schedules.push(schedule),
            Err(err) => {
                warn!(
                    schedule_id = id,
                    field = err.field,
                    value = %err.value,
                    error = %err,
                    "Skipping schedule with malformed timestamp"
                );
                ingested.skipped.push(id);
            }
        }
    }

    ingested
}

fn warn_on_bookkeeping(row: &ScheduleRow) {
    for (field, value) in [("created_at", &row.created_at), ("updated_at", &row.updated_at)] {
        if let Err(error) = parse_storage_timestamp(value) {
            warn!(
                schedule_id = row.id,
                field,
                value = %value,
                %error,
                "Unreadable bookkeeping timestamp, falling back to event start"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, start: &str) -> ScheduleRow {
        ScheduleRow {
            id,
            title: "Rapat".into(),
            description: None,
            event_start: start.into(),
            event_end: "2024-03-10T10:00:00.000Z".into(),
            location: None,
            created_at: "2024-03-01T00:00:00.000Z".into(),
            updated_at: "2024-03-01T00:00:00.000Z".into(),
        }
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let ingested = normalize_rows(vec![
            row(1, "2024-03-10T02:00:00.000Z"),
            row(2, "bukan tanggal"),
            row(3, "2024-03-10T03:00:00.000Z"),
        ]);

        let ids: Vec<i64> = ingested.schedules.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(ingested.skipped, vec![2]);
    }

    #[test]
    fn bad_bookkeeping_timestamps_keep_the_event() {
        let mut stale = row(1, "2024-03-10T02:00:00.000Z");
        stale.created_at = "kemarin".into();
        stale.updated_at = "kemarin".into();

        let ingested = normalize_rows(vec![stale]);

        assert!(ingested.skipped.is_empty());
        assert_eq!(ingested.schedules.len(), 1);
        assert_eq!(ingested.schedules[0].created_at, ingested.schedules[0].event_start);
    }

    #[test]
    fn empty_batch() {
        assert_eq!(normalize_rows(Vec::new()), Ingested::default());
    }
}
