//! In-Memory Loan Store
//!
//! A `HashMap`-backed [`LoanStore`] adapter for tests and single-node use.
//! The production adapter belongs to the surrounding persistence layer; this
//! one applies the same query predicates (status filters, pagination) so
//! service-level behavior is exercised faithfully.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, LoanId, MemberId, PortError};

use crate::loan::Loan;
use crate::ports::{LoanQuery, LoanStore};

/// In-memory [`LoanStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryLoanStore {
    loans: RwLock<HashMap<LoanId, Loan>>,
}

impl MemoryLoanStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ledger entries held
    pub async fn len(&self) -> usize {
        self.loans.read().await.len()
    }

    /// Returns true if no ledger entries are held
    pub async fn is_empty(&self) -> bool {
        self.loans.read().await.is_empty()
    }
}

impl DomainPort for MemoryLoanStore {}

#[async_trait]
impl LoanStore for MemoryLoanStore {
    async fn get_loan(&self, id: LoanId) -> Result<Loan, PortError> {
        self.loans
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Loan", id))
    }

    async fn find_loans(&self, query: LoanQuery) -> Result<Vec<Loan>, PortError> {
        let loans = self.loans.read().await;

        let mut matches: Vec<Loan> = loans
            .values()
            .filter(|loan| query.member_id.map_or(true, |m| loan.member_id == m))
            .filter(|loan| query.book_id.map_or(true, |b| loan.book_id == b))
            .filter(|loan| query.status.map_or(true, |s| loan.status == s))
            .filter(|loan| !query.active_only || loan.status.is_active())
            .cloned()
            .collect();

        // Stable order for pagination
        matches.sort_by_key(|loan| (loan.borrow_date, loan.id.to_string()));

        let offset = query.offset.unwrap_or(0) as usize;
        let matches: Vec<Loan> = match query.limit {
            Some(limit) => matches.into_iter().skip(offset).take(limit as usize).collect(),
            None => matches.into_iter().skip(offset).collect(),
        };

        Ok(matches)
    }

    async fn count_active_for_member(&self, member_id: MemberId) -> Result<u32, PortError> {
        let count = self
            .loans
            .read()
            .await
            .values()
            .filter(|loan| loan.member_id == member_id && loan.status.is_active())
            .count();
        Ok(count as u32)
    }

    async fn save_loan(&self, loan: &Loan) -> Result<(), PortError> {
        self.loans.write().await.insert(loan.id, loan.clone());
        Ok(())
    }
}
