//! Domain types and models

pub mod database;
pub mod schedule;

// Re-export the row and entity types for convenience
pub use database::{parse_storage_timestamp, to_storage_timestamp, ScheduleRow};
pub use schedule::{NewSchedule, Schedule};
