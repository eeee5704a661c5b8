//! Database implementations

pub mod manager;
pub mod pool;
pub mod schedule_repository;

pub use manager::DbManager;
pub use pool::{apply_connection_pragmas, create_pool, PoolConfig, SqliteConnection, SqlitePool};
pub use schedule_repository::SqliteScheduleRepository;
