//! Application context - dependency injection container

use std::sync::Arc;

use agenda_common::time::{Clock, SystemClock};
use agenda_core::{CalendarZone, ScheduleService};
use agenda_domain::{AgendaError, Config, Result};
use agenda_infra::{DbManager, SqliteScheduleRepository};
use chrono::NaiveDate;
use tokio::task;
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub schedules: Arc<ScheduleService>,
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    /// Create a new application context from discovered configuration
    pub async fn new() -> Result<Self> {
        let config = agenda_infra::config::load_or_default()?;
        Self::new_with_config(config).await
    }

    /// Create a new application context with custom configuration
    pub async fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_config_and_clock(config, Arc::new(SystemClock)).await
    }

    /// Create a new application context with a custom clock
    ///
    /// Tests use this to pin "today".
    pub async fn new_with_config_and_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let zone = CalendarZone::parse(&config.calendar.timezone)?;

        let db_path = config.database.path.clone();
        let pool_size = config.database.pool_size;
        let db = task::spawn_blocking(move || -> Result<DbManager> {
            let db = DbManager::new(&db_path, pool_size)?;
            db.run_migrations()?;
            db.health_check()?;
            Ok(db)
        })
        .await
        .map_err(|e| AgendaError::Internal(format!("database setup task failed: {e}")))??;
        let db = Arc::new(db);

        let repository = Arc::new(SqliteScheduleRepository::new(Arc::clone(&db)));
        let schedules = Arc::new(ScheduleService::new(repository, zone));

        info!(
            db_path = %db.path().display(),
            timezone = %zone,
            "application context initialised"
        );

        Ok(Self { config, db, schedules, clock })
    }

    /// Display timezone for all day-boundary decisions
    pub fn zone(&self) -> &CalendarZone {
        self.schedules.zone()
    }

    /// Today's date in the display timezone
    pub fn today(&self) -> NaiveDate {
        self.zone().today(self.clock.as_ref())
    }
}
