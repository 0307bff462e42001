//! Member entity and borrowing eligibility
//!
//! A `Member` owns its borrowing cap; whether more loans are permitted is a
//! pure read-side computation over the cap and the current active-loan count.
//! The count comes from the loan index (`LoanStore::count_active_for_member`
//! in the lending domain) - the member entity holds no loan collection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::MemberId;

/// Default borrowing cap applied to new members
pub const DEFAULT_MAX_BORROW_BOOKS: u32 = 5;

/// Membership tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberType {
    Student,
    Teacher,
    Staff,
    Public,
}

/// Membership lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    /// In good standing, may borrow
    Active,
    /// Temporarily barred (unpaid fines, conduct)
    Suspended,
    /// Membership lapsed
    Expired,
}

/// A library member eligible to borrow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,
    /// Member code, the natural key (uniqueness enforced by the persistence layer)
    pub member_code: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email, also a natural key
    pub email: String,
    /// Phone number
    pub phone: Option<String>,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address
    pub address: Option<String>,
    /// Membership tier
    pub member_type: MemberType,
    /// Lifecycle status
    pub status: MemberStatus,
    /// Date the membership was registered
    pub registration_date: NaiveDate,
    /// Maximum number of simultaneously active loans
    pub max_borrow_books: u32,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new active member with the default borrowing cap
    pub fn new(
        member_code: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        member_type: MemberType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: MemberId::new_v7(),
            member_code: member_code.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            date_of_birth: None,
            address: None,
            member_type,
            status: MemberStatus::Active,
            registration_date: now.date_naive(),
            max_borrow_books: DEFAULT_MAX_BORROW_BOOKS,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overrides the borrowing cap
    pub fn with_borrow_limit(mut self, max_borrow_books: u32) -> Self {
        self.max_borrow_books = max_borrow_books;
        self
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the membership is in good standing
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    /// Returns true if another loan is permitted given the current number of
    /// active loans (status Borrowed or Renewed) held by this member
    pub fn can_borrow_more(&self, active_loan_count: u32) -> bool {
        active_loan_count < self.max_borrow_books
    }

    /// Remaining loan allowance given the current active-loan count
    pub fn remaining_allowance(&self, active_loan_count: u32) -> u32 {
        self.max_borrow_books.saturating_sub(active_loan_count)
    }
}
