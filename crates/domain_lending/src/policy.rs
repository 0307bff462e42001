//! Lending policy constants
//!
//! The knobs of the policy engine: loan length, renewal cap, and the fine
//! schedule. The struct is deserializable so the bootstrap layer can load it
//! from configuration; the constructor enforces that both fee amounts share
//! one currency.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, LoanPeriod, Money};

use crate::error::LendingError;

/// Policy constants governing loans, renewals, and fines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingPolicy {
    loan_period: LoanPeriod,
    max_renewals: u32,
    default_renewal_days: u32,
    daily_fine: Money,
    lost_fee: Money,
}

impl LendingPolicy {
    /// Creates a policy from explicit constants
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::Policy`] if the fine and the lost fee are in
    /// different currencies or the default renewal extension is zero days.
    pub fn new(
        loan_period: LoanPeriod,
        max_renewals: u32,
        default_renewal_days: u32,
        daily_fine: Money,
        lost_fee: Money,
    ) -> Result<Self, LendingError> {
        if daily_fine.currency() != lost_fee.currency() {
            return Err(LendingError::Policy(format!(
                "Fine currency {} does not match lost fee currency {}",
                daily_fine.currency(),
                lost_fee.currency()
            )));
        }
        if default_renewal_days == 0 {
            return Err(LendingError::Policy(
                "Default renewal extension must be at least one day".to_string(),
            ));
        }
        Ok(Self {
            loan_period,
            max_renewals,
            default_renewal_days,
            daily_fine,
            lost_fee,
        })
    }

    /// The initial checkout period
    pub fn loan_period(&self) -> LoanPeriod {
        self.loan_period
    }

    /// Maximum number of renewals per loan
    pub fn max_renewals(&self) -> u32 {
        self.max_renewals
    }

    /// Extension applied when the caller does not specify one
    pub fn default_renewal_days(&self) -> u32 {
        self.default_renewal_days
    }

    /// Fine charged per whole overdue day
    pub fn daily_fine(&self) -> Money {
        self.daily_fine
    }

    /// Flat fee charged for a lost copy
    pub fn lost_fee(&self) -> Money {
        self.lost_fee
    }

    /// The currency fines are assessed in
    pub fn fine_currency(&self) -> Currency {
        self.daily_fine.currency()
    }
}

impl Default for LendingPolicy {
    /// 14-day loans, two renewals of 7 days, 5,000 VND per overdue day,
    /// 100,000 VND lost fee
    fn default() -> Self {
        Self {
            loan_period: LoanPeriod::new(14).expect("non-zero constant"),
            max_renewals: 2,
            default_renewal_days: 7,
            daily_fine: Money::new(dec!(5000), Currency::VND),
            lost_fee: Money::new(dec!(100000), Currency::VND),
        }
    }
}
