//! Wall-clock abstraction
//!
//! Readings are stamped through a [`Clock`] so tests can pin the capture
//! instant instead of racing the system time.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Source of capture timestamps for readings
pub trait Clock {
    /// Get the current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for tests
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock pinned to `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Pin the clock to second resolution; panics on an invalid date, which
    /// is acceptable for a test double.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self::new(Utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap())
    }

    /// Move the clock forward.
    pub fn advance(&mut self, seconds: i64) {
        self.instant += Duration::seconds(seconds);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
