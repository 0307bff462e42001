//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the library
//! system. These fixtures are designed to be consistent and predictable for
//! unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{BookId, Currency, LoanId, MemberId, Money};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The standard per-day overdue fine
    pub fn vnd_daily_fine() -> Money {
        Money::new(dec!(5000), Currency::VND)
    }

    /// The flat lost-copy fee
    pub fn vnd_lost_fee() -> Money {
        Money::new(dec!(100000), Currency::VND)
    }

    /// A five-day fine at the standard rate
    pub fn vnd_five_day_fine() -> Money {
        Money::new(dec!(25000), Currency::VND)
    }

    /// A zero fine
    pub fn vnd_zero() -> Money {
        Money::zero(Currency::VND)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard checkout instant (Jan 1, 2024 at 09:00 UTC)
    pub fn checkout_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    /// Due date matching [`Self::checkout_time`] under the 14-day default
    pub fn default_due_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    /// A return instant one week before the default due date
    pub fn timely_return() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap()
    }

    /// A return instant five whole days past the default due date
    pub fn five_days_late() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap()
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// A well-formed ISBN-13
    pub fn isbn() -> &'static str {
        "978-604-2-12345-6"
    }

    /// A second ISBN for multi-book scenarios
    pub fn other_isbn() -> &'static str {
        "978-0-13-468599-1"
    }

    /// A member code
    pub fn member_code() -> &'static str {
        "MEM001"
    }

    /// A member email address
    pub fn member_email() -> &'static str {
        "member@example.com"
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// A fresh book identifier
    pub fn book_id() -> BookId {
        BookId::new_v7()
    }

    /// A fresh member identifier
    pub fn member_id() -> MemberId {
        MemberId::new_v7()
    }

    /// A fresh loan identifier
    pub fn loan_id() -> LoanId {
        LoanId::new_v7()
    }
}
