//! Lending Domain Ports
//!
//! The `LoanStore` trait is the loan index: the ledger's lookup-by-owner
//! collaborator. The member entity holds no loan collection; eligibility
//! counts go through [`LoanStore::count_active_for_member`]. The surrounding
//! persistence layer provides the production adapter; tests and single-node
//! setups use [`crate::adapters::memory::MemoryLoanStore`].

use async_trait::async_trait;

use core_kernel::{BookId, DomainPort, LoanId, MemberId, PortError};

use crate::loan::{Loan, LoanStatus};

/// Query parameters for finding loans
#[derive(Debug, Clone, Default)]
pub struct LoanQuery {
    /// Filter by borrowing member
    pub member_id: Option<MemberId>,
    /// Filter by borrowed title
    pub book_id: Option<BookId>,
    /// Filter by exact status
    pub status: Option<LoanStatus>,
    /// Only loans whose copy is still out (status Borrowed or Renewed)
    pub active_only: bool,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl LoanQuery {
    /// Creates a query for one member's loans
    pub fn for_member(member_id: MemberId) -> Self {
        Self {
            member_id: Some(member_id),
            ..Default::default()
        }
    }

    /// Creates a query for one title's loans
    pub fn for_book(book_id: BookId) -> Self {
        Self {
            book_id: Some(book_id),
            ..Default::default()
        }
    }

    /// Restricts to a single status
    pub fn with_status(mut self, status: LoanStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to active loans
    pub fn active(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// The main port trait for the loan ledger index
#[async_trait]
pub trait LoanStore: DomainPort {
    /// Retrieves a ledger entry by ID
    ///
    /// # Returns
    ///
    /// The loan if found, or `PortError::NotFound`
    async fn get_loan(&self, id: LoanId) -> Result<Loan, PortError>;

    /// Finds ledger entries matching the query criteria
    async fn find_loans(&self, query: LoanQuery) -> Result<Vec<Loan>, PortError>;

    /// Number of a member's loans in an active status (Borrowed or Renewed)
    async fn count_active_for_member(&self, member_id: MemberId) -> Result<u32, PortError>;

    /// Persists a ledger entry (insert or update)
    async fn save_loan(&self, loan: &Loan) -> Result<(), PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builders() {
        let member_id = MemberId::new();
        let q = LoanQuery::for_member(member_id).active().paginate(10, 0);
        assert_eq!(q.member_id, Some(member_id));
        assert!(q.active_only);
        assert_eq!(q.limit, Some(10));
    }

    #[test]
    fn test_status_filter() {
        let q = LoanQuery::for_book(BookId::new()).with_status(LoanStatus::Overdue);
        assert_eq!(q.status, Some(LoanStatus::Overdue));
        assert!(!q.active_only);
    }
}
