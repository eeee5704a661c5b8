//! Wall-clock abstraction
//!
//! Commands that default to "today" read the time through [`Clock`] so tests
//! can pin the current instant.
//!
//! # Examples
//!
//! ```
//! use agenda_common::time::{Clock, MockClock};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2024, 3, 10, 2, 0, 0).unwrap();
//! let clock = MockClock::new(start);
//! clock.advance(Duration::hours(24));
//! assert_eq!(clock.now(), start + Duration::hours(24));
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// Source of the current wall-clock instant
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Real system clock. Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic tests
///
/// Clones share the same underlying instant.
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a mock clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: Arc::new(Mutex::new(start)) }
    }

    /// Move the clock forward (or backward, for negative durations)
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += by;
    }

    /// Jump to an absolute instant
    pub fn set(&self, to: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = to;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 2, 0, 0).unwrap()
    }

    /// Validates the mock clock stays frozen until advanced.
    #[test]
    fn test_mock_clock_is_frozen() {
        let clock = MockClock::new(base());
        assert_eq!(clock.now(), base());
        assert_eq!(clock.now(), base());
    }

    /// Validates clones observe advances made through any handle.
    #[test]
    fn test_mock_clock_clones_share_state() {
        let clock = MockClock::new(base());
        let other = clock.clone();

        other.advance(Duration::minutes(90));
        assert_eq!(clock.now(), base() + Duration::minutes(90));

        clock.set(base());
        assert_eq!(other.now(), base());
    }

    /// Validates the system clock reports a recent instant.
    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
