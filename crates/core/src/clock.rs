//! Injectable time source.
//!
//! The staleness cutoff is the only non-deterministic input to the core, so
//! it goes through a trait: production wires [`SystemClock`], tests wire
//! [`FixedClock`].

use chrono::{NaiveDate, Utc};

/// Source of "today" for cutoff computation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation (UTC calendar date).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Fixed date for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_the_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
