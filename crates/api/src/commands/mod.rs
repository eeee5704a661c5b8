//! Commands - the bridge between callers (CLI, UI) and the services

mod calendar;
mod schedules;

pub use calendar::*;
pub use schedules::*;
