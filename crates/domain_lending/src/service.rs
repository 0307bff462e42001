//! Lending application service
//!
//! `LendingService` is the seam the request-handling layer calls: it runs
//! the eligibility gates, applies the [`Loan`] state machine, and records
//! the result through the loan index port. The caller owns the transaction
//! boundary and persists the book and loan it passed in; the service assumes
//! it is the only mutator within the call.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use core_kernel::Money;
use domain_catalog::Book;
use domain_member::Member;

use crate::error::LendingError;
use crate::loan::Loan;
use crate::policy::LendingPolicy;
use crate::ports::{LoanQuery, LoanStore};

/// Orchestrates checkout, renewal, return, and loss handling
pub struct LendingService {
    policy: LendingPolicy,
    loan_store: Arc<dyn LoanStore>,
}

impl LendingService {
    /// Creates a service over the given policy and loan index
    pub fn new(policy: LendingPolicy, loan_store: Arc<dyn LoanStore>) -> Self {
        Self { policy, loan_store }
    }

    /// The policy constants in force
    pub fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    /// Checks out one copy of `book` to `member`
    ///
    /// Eligibility gates, in order: the member is in good standing, the
    /// title has a borrowable copy, and the member's active-loan count is
    /// under the cap (counted through the loan index). On success the copy
    /// leaves the shelf and the new ledger entry is recorded.
    ///
    /// # Errors
    ///
    /// - [`LendingError::MemberInactive`] if the membership is suspended or expired
    /// - [`LendingError::BookUnavailable`] if no copy can be borrowed
    /// - [`LendingError::BorrowLimitReached`] if the cap is exhausted
    /// - [`LendingError::Port`] if the loan index fails
    #[instrument(skip(self, book, member), fields(book_id = %book.id, member_id = %member.id))]
    pub async fn checkout(
        &self,
        book: &mut Book,
        member: &Member,
        now: DateTime<Utc>,
    ) -> Result<Loan, LendingError> {
        if !member.is_active() {
            warn!(status = ?member.status, "checkout refused: member not active");
            return Err(LendingError::MemberInactive(member.member_code.clone()));
        }

        if !book.is_available_for_borrow() {
            warn!("checkout refused: no borrowable copy");
            return Err(LendingError::BookUnavailable(book.isbn.clone()));
        }

        let active = self.loan_store.count_active_for_member(member.id).await?;
        if !member.can_borrow_more(active) {
            warn!(active, cap = member.max_borrow_books, "checkout refused: borrow limit");
            return Err(LendingError::BorrowLimitReached {
                current: active,
                cap: member.max_borrow_books,
            });
        }

        let loan = Loan::open(member.id, book.id, now, &self.policy);
        book.decrease_available();
        self.loan_store.save_loan(&loan).await?;

        info!(loan_id = %loan.id, due = %loan.due_date, "checkout recorded");
        Ok(loan)
    }

    /// Extends a loan's due date
    ///
    /// Applies [`Loan::renew`] with the requested extension, or the policy
    /// default when none is given.
    ///
    /// # Errors
    ///
    /// [`LendingError::RenewalRejected`] when the state guard or renewal cap
    /// refuses the extension; the loan is unchanged.
    #[instrument(skip(self, loan), fields(loan_id = %loan.id))]
    pub async fn renew(
        &self,
        loan: &mut Loan,
        additional_days: Option<u32>,
    ) -> Result<(), LendingError> {
        let days = additional_days.unwrap_or_else(|| self.policy.default_renewal_days());

        if !loan.renew(days, &self.policy) {
            warn!(renew_count = loan.renew_count, status = ?loan.status, "renewal refused");
            return Err(LendingError::RenewalRejected(format!(
                "loan {} in status {:?} with {} renewal(s) used",
                loan.id, loan.status, loan.renew_count
            )));
        }

        self.loan_store.save_loan(loan).await?;
        info!(due = %loan.due_date, "renewal recorded");
        Ok(())
    }

    /// Takes a copy back and settles the fine
    ///
    /// # Returns
    ///
    /// The fine assessed (zero when returned on time).
    #[instrument(skip(self, loan, book), fields(loan_id = %loan.id, book_id = %book.id))]
    pub async fn return_book(
        &self,
        loan: &mut Loan,
        book: &mut Book,
        now: DateTime<Utc>,
    ) -> Result<Money, LendingError> {
        loan.close(now, book, &self.policy)?;
        self.loan_store.save_loan(loan).await?;

        info!(status = ?loan.status, fine = %loan.fine_amount, "return recorded");
        Ok(loan.fine_amount)
    }

    /// Records a copy as lost and charges the loss fee
    ///
    /// # Returns
    ///
    /// The loss fee charged to the member.
    #[instrument(skip(self, loan, book), fields(loan_id = %loan.id, book_id = %book.id))]
    pub async fn report_lost(
        &self,
        loan: &mut Loan,
        book: &mut Book,
    ) -> Result<Money, LendingError> {
        loan.mark_lost(book, &self.policy)?;
        self.loan_store.save_loan(loan).await?;

        info!(fee = %loan.fine_amount, remaining_copies = book.total_copies, "loss recorded");
        Ok(loan.fine_amount)
    }

    /// Active loans past their due date at the given instant
    pub async fn find_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Loan>, LendingError> {
        let active = self
            .loan_store
            .find_loans(LoanQuery::default().active())
            .await?;
        Ok(active.into_iter().filter(|l| l.is_overdue(now)).collect())
    }
}
