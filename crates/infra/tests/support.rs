#![allow(dead_code)]

use std::sync::Arc;

use agenda_infra::database::DbManager;
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with migrations applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let manager = DbManager::new(temp_dir.path().join("agenda.db"), 4)
            .expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Insert a row bypassing the repository, e.g. with malformed timestamps.
    pub fn insert_raw(&self, title: &str, start: &str, end: &str) -> i64 {
        let conn = self.manager.get_connection().expect("connection");
        conn.execute(
            "INSERT INTO schedules (title, event_start, event_end) VALUES (?1, ?2, ?3)",
            rusqlite::params![title, start, end],
        )
        .expect("raw insert");
        conn.last_insert_rowid()
    }
}
