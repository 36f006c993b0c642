//! Calendar temporal types
//!
//! Warranty durations are expressed in calendar months, not fixed 30-day
//! blocks: a 12-month warranty starting 2024-01-01 ends at 2025-01-01, and
//! a warranty starting on the 31st clamps to the last day of shorter months.
//! Coverage periods are half-open: the end date itself is no longer covered.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Date arithmetic out of range: {0} plus {1} months")]
    OutOfRange(NaiveDate, u32),
}

/// Adds calendar months to a date, clamping the day to the end of the month
/// when the target month is shorter (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, TemporalError> {
    date.checked_add_months(Months::new(months))
        .ok_or(TemporalError::OutOfRange(date, months))
}

/// Formats a date as a `YYYY-MM` bucket key for monthly aggregation
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// A half-open date interval `[start, end)`
///
/// Used for warranty coverage windows: a claim dated exactly on `start` is
/// inside the period, a claim dated exactly on `end` is outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl CoveragePeriod {
    /// Creates a period, rejecting end-before-start
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a period spanning a whole number of calendar months
    pub fn from_months(start: NaiveDate, months: u32) -> Result<Self, TemporalError> {
        let end = add_months(start, months)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a date falls inside the half-open interval
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
