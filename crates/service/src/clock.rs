//! Injectable time source.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current instant.
///
/// Submission eligibility is keyed on the UTC calendar date, so tests
/// inject a fixed clock instead of waiting for midnight to roll over.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
