//! Shared utilities for the Agenda crates.
//!
//! Currently limited to time handling: a clock abstraction and the
//! Indonesian-locale formatting used by the calendar and schedule tables.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod time;

pub use time::{Clock, MockClock, SystemClock};
