//! Loan-term temporal types
//!
//! This module provides the date arithmetic used by the lending domain:
//! fixed-length loan periods and whole-day overdue computation. All
//! timestamps are UTC; fractional days truncate toward zero, matching the
//! day-granularity fine rules.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Loan period must be at least one day, got {0}")]
    EmptyPeriod(u32),
}

/// A fixed loan term expressed in whole days
///
/// Used for the initial checkout period and for renewal extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanPeriod {
    days: u32,
}

impl LoanPeriod {
    /// Creates a loan period of the given number of days
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::EmptyPeriod`] for a zero-day period.
    pub fn new(days: u32) -> Result<Self, TemporalError> {
        if days == 0 {
            return Err(TemporalError::EmptyPeriod(days));
        }
        Ok(Self { days })
    }

    /// Returns the period length in days
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Computes the due date for a loan starting at the given instant
    pub fn due_from(&self, start: DateTime<Utc>) -> DateTime<Utc> {
        start + Duration::days(i64::from(self.days))
    }
}

/// Whole days between two instants, truncating fractional days toward zero
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_days()
}

/// Whole days `at` is past `due`, clamped at zero when not yet due
pub fn days_late(due: DateTime<Utc>, at: DateTime<Utc>) -> i64 {
    whole_days_between(due, at).max(0)
}
