#![allow(dead_code)]

use std::sync::Arc;

use agenda_common::time::MockClock;
use agenda_core::ScheduleDraft;
use agenda_domain::{CalendarConfig, Config, DatabaseConfig};
use agenda_lib::AppContext;
use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

/// Application context over a throwaway database, with "now" pinned.
pub struct TestApp {
    pub ctx: Arc<AppContext>,
    pub clock: Arc<MockClock>,
    _temp_dir: TempDir,
}

/// Context whose clock reads 2024-03-10 12:00 WIB.
pub async fn setup_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("failed to create temporary directory");
    let db_path = temp_dir.path().join("agenda.db");

    let config = Config {
        database: DatabaseConfig { path: db_path.to_string_lossy().to_string(), pool_size: 2 },
        calendar: CalendarConfig { timezone: "Asia/Jakarta".to_string() },
        ..Config::default()
    };

    let clock = Arc::new(MockClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap()));
    let ctx = AppContext::new_with_config_and_clock(config, clock.clone())
        .await
        .expect("failed to create test context");

    TestApp { ctx: Arc::new(ctx), clock, _temp_dir: temp_dir }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Draft spanning `start`..`end` with explicit WIB clock times.
pub fn draft(title: &str, start: NaiveDate, start_time: &str, end: NaiveDate, end_time: &str) -> ScheduleDraft {
    ScheduleDraft::new(title, start, end).with_times(start_time, end_time)
}
