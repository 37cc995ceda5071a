//! Clock abstraction
//!
//! Scheduling and streak computations depend on "today"; callers inject a
//! [`Clock`] so reviews can be backfilled and tests stay deterministic.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Source of the current calendar date and local timestamp.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;

    /// The current local timestamp, second precision.
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> NaiveDateTime {
        // Stored timestamps carry seconds only
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// A clock pinned to a fixed instant. Used by tests and for backfilling
/// reviews at a past date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Pin the clock to midnight of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self {
            now: date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        }
    }

    /// Pin the clock to an exact timestamp.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
