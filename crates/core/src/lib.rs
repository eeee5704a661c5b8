//! # Agenda Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Calendar aggregation (day spans, membership, marked dates, agenda)
//! - Port interfaces for the schedule store
//! - The schedule service and form validation
//!
//! ## Architecture Principles
//! - Only depends on `agenda-common` and `agenda-domain`
//! - No database or platform code
//! - All external dependencies via traits

pub mod calendar;
pub mod schedule;

pub use calendar::{CalendarView, CalendarZone, DateWindow};
pub use schedule::{ScheduleDraft, ScheduleRepository, ScheduleService};
