//! Loan ledger entry
//!
//! One lending transaction: who borrowed which title, the dates, the fine,
//! and the renewal count. The entry owns its own date/fine/status fields and
//! holds identifier references to the member and the book; availability
//! mutation is delegated to [`Book`]'s own counter operations through the
//! reference passed to [`Loan::close`] and [`Loan::mark_lost`].
//!
//! # State machine
//!
//! ```text
//! Borrowed --renew--> Renewed
//! Borrowed/Renewed --close--> Returned (no fine) | Overdue (fine due)
//! Borrowed/Renewed --mark_lost--> Lost
//! ```
//!
//! Terminal states reject further transitions; the ledger entry is an audit
//! record and is never deleted.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{days_late, BookId, LoanId, MemberId, Money};
use domain_catalog::Book;

use crate::error::LendingError;
use crate::policy::LendingPolicy;

/// Status of a loan ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Out on loan, within the original period
    Borrowed,
    /// Out on loan, due date extended
    Renewed,
    /// Returned on time (or fine settled at zero)
    Returned,
    /// Returned late with a fine assessed
    Overdue,
    /// Copy reported lost
    Lost,
}

impl LoanStatus {
    /// The copy is still out with the member
    pub fn is_active(&self) -> bool {
        matches!(self, LoanStatus::Borrowed | LoanStatus::Renewed)
    }

    /// No further transitions are permitted
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

/// One lending transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier
    pub id: LoanId,
    /// Borrowing member (set at creation, immutable)
    pub member_id: MemberId,
    /// Borrowed title (set at creation, immutable)
    pub book_id: BookId,
    /// When the copy left the shelf
    pub borrow_date: DateTime<Utc>,
    /// When the copy is due back
    pub due_date: DateTime<Utc>,
    /// When the copy came back; set once on return
    pub return_date: Option<DateTime<Utc>>,
    /// Fine assessed on return or loss
    pub fine_amount: Money,
    /// Status
    pub status: LoanStatus,
    /// Free-form desk notes
    pub notes: Option<String>,
    /// Number of renewals granted
    pub renew_count: u32,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Loan {
    /// Opens a new loan at the given instant
    ///
    /// The caller has already checked [`Book::is_available_for_borrow`] and
    /// the member's eligibility, and must also invoke
    /// [`Book::decrease_available`] within the same transaction.
    pub fn open(
        member_id: MemberId,
        book_id: BookId,
        now: DateTime<Utc>,
        policy: &LendingPolicy,
    ) -> Self {
        Self {
            id: LoanId::new_v7(),
            member_id,
            book_id,
            borrow_date: now,
            due_date: policy.loan_period().due_from(now),
            return_date: None,
            fine_amount: Money::zero(policy.fine_currency()),
            status: LoanStatus::Borrowed,
            notes: None,
            renew_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whole days past due
    ///
    /// Pure function of the entry's state: measured to the return date once
    /// the copy is back, otherwise to `now`. Partial days truncate toward
    /// zero; never negative.
    pub fn overdue_days(&self, now: DateTime<Utc>) -> i64 {
        match self.return_date {
            Some(returned) => days_late(self.due_date, returned),
            None => days_late(self.due_date, now),
        }
    }

    /// Fine owed at the given instant under the policy's daily rate
    pub fn calculate_fine(&self, now: DateTime<Utc>, policy: &LendingPolicy) -> Money {
        let days = self.overdue_days(now);
        if days > 0 {
            policy.daily_fine().multiply(Decimal::from(days))
        } else {
            Money::zero(policy.fine_currency())
        }
    }

    /// Returns true if the copy is out past its due date
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.return_date.is_none() && now > self.due_date
    }

    /// Extends the due date by `additional_days`
    ///
    /// Returns `false` without mutating when the renewal cap is reached or
    /// the loan is not in `Borrowed` - renewal is only granted from the
    /// original period, so the cap and the state guard are enforced
    /// independently. Callers must check the result.
    pub fn renew(&mut self, additional_days: u32, policy: &LendingPolicy) -> bool {
        if self.renew_count >= policy.max_renewals() {
            return false;
        }
        if self.status != LoanStatus::Borrowed {
            return false;
        }

        self.due_date += Duration::days(i64::from(additional_days));
        self.renew_count += 1;
        self.status = LoanStatus::Renewed;
        self.updated_at = Utc::now();

        true
    }

    /// Closes the loan: the copy is back on the shelf
    ///
    /// Sets the return date, assesses the fine, and moves to `Overdue` when
    /// a fine is due, `Returned` otherwise. Puts the copy back via
    /// [`Book::increase_available`] on the entry's book, passed explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::InvalidStatusTransition`] from a terminal
    /// state - a second return must surface to the caller, not vanish.
    pub fn close(
        &mut self,
        now: DateTime<Utc>,
        book: &mut Book,
        policy: &LendingPolicy,
    ) -> Result<(), LendingError> {
        if self.status.is_terminal() {
            return Err(LendingError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: "Returned".to_string(),
            });
        }

        self.return_date = Some(now);
        self.fine_amount = self.calculate_fine(now, policy);
        self.status = if self.fine_amount.is_positive() {
            LoanStatus::Overdue
        } else {
            LoanStatus::Returned
        };
        self.updated_at = Utc::now();

        book.increase_available();

        Ok(())
    }

    /// Records the copy as lost
    ///
    /// Charges the flat loss fee and shrinks the collection via
    /// [`Book::reduce_total_on_loss`]. Allowed from any active state.
    ///
    /// # Errors
    ///
    /// Returns [`LendingError::InvalidStatusTransition`] from a terminal state.
    pub fn mark_lost(&mut self, book: &mut Book, policy: &LendingPolicy) -> Result<(), LendingError> {
        if self.status.is_terminal() {
            return Err(LendingError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: "Lost".to_string(),
            });
        }

        self.status = LoanStatus::Lost;
        self.fine_amount = policy.lost_fee();
        self.updated_at = Utc::now();

        book.reduce_total_on_loss();

        Ok(())
    }
}
