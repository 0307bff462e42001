//! Lending domain errors

use thiserror::Error;

use core_kernel::{MoneyError, PortError, TemporalError};

/// Errors that can occur in the lending domain
#[derive(Debug, Error)]
pub enum LendingError {
    #[error("Loan not found: {0}")]
    LoanNotFound(String),

    #[error("Book not available for borrow: {0}")]
    BookUnavailable(String),

    #[error("Member is not in good standing: {0}")]
    MemberInactive(String),

    #[error("Borrow limit reached: {current} of {cap} active loans")]
    BorrowLimitReached { current: u32, cap: u32 },

    #[error("Renewal rejected: {0}")]
    RenewalRejected(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Policy error: {0}")]
    Policy(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Port error: {0}")]
    Port(#[from] PortError),
}
