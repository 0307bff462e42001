//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::{DateTime, Utc};

use core_kernel::{AuthorId, CategoryId, MemberId};
use domain_catalog::Book;
use domain_lending::{LendingPolicy, Loan, LoanStatus};
use domain_member::{Member, MemberStatus, MemberType};

use crate::fixtures::{StringFixtures, TemporalFixtures};

/// Builder for constructing test books
pub struct TestBookBuilder {
    isbn: String,
    title: String,
    total_copies: u32,
    authors: Vec<AuthorId>,
    category_id: Option<CategoryId>,
    deleted: bool,
}

impl Default for TestBookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBookBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            isbn: StringFixtures::isbn().to_string(),
            title: "Test Book".to_string(),
            total_copies: 3,
            authors: Vec::new(),
            category_id: None,
            deleted: false,
        }
    }

    /// Sets the ISBN
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    /// Sets the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the copy count
    pub fn with_total_copies(mut self, total_copies: u32) -> Self {
        self.total_copies = total_copies;
        self
    }

    /// Adds an author reference
    pub fn with_author(mut self, author_id: AuthorId) -> Self {
        self.authors.push(author_id);
        self
    }

    /// Sets the category reference
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Marks the book soft-deleted
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds the book
    pub fn build(self) -> Book {
        let mut book = Book::new(self.isbn, self.title, self.total_copies)
            .expect("test book must be valid");
        book.authors = self.authors;
        book.category_id = self.category_id;
        if self.deleted {
            book.soft_delete();
        }
        book
    }
}

/// Builder for constructing test members
pub struct TestMemberBuilder {
    member_code: String,
    first_name: String,
    last_name: String,
    email: String,
    member_type: MemberType,
    status: MemberStatus,
    max_borrow_books: Option<u32>,
}

impl Default for TestMemberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMemberBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            member_code: StringFixtures::member_code().to_string(),
            first_name: "An".to_string(),
            last_name: "Nguyễn".to_string(),
            email: StringFixtures::member_email().to_string(),
            member_type: MemberType::Student,
            status: MemberStatus::Active,
            max_borrow_books: None,
        }
    }

    /// Sets the member code
    pub fn with_member_code(mut self, code: impl Into<String>) -> Self {
        self.member_code = code.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the membership tier
    pub fn with_member_type(mut self, member_type: MemberType) -> Self {
        self.member_type = member_type;
        self
    }

    /// Sets the lifecycle status
    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the borrowing cap
    pub fn with_borrow_limit(mut self, cap: u32) -> Self {
        self.max_borrow_books = Some(cap);
        self
    }

    /// Builds the member
    pub fn build(self) -> Member {
        let mut member = Member::new(
            self.member_code,
            self.first_name,
            self.last_name,
            self.email,
            self.member_type,
        );
        member.status = self.status;
        if let Some(cap) = self.max_borrow_books {
            member.max_borrow_books = cap;
        }
        member
    }
}

/// Builder for constructing test loans
pub struct TestLoanBuilder {
    member_id: MemberId,
    borrow_date: DateTime<Utc>,
    status: Option<LoanStatus>,
    policy: LendingPolicy,
}

impl Default for TestLoanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLoanBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            member_id: MemberId::new_v7(),
            borrow_date: TemporalFixtures::checkout_time(),
            status: None,
            policy: LendingPolicy::default(),
        }
    }

    /// Sets the borrowing member
    pub fn with_member(mut self, member_id: MemberId) -> Self {
        self.member_id = member_id;
        self
    }

    /// Sets the checkout instant
    pub fn with_borrow_date(mut self, borrow_date: DateTime<Utc>) -> Self {
        self.borrow_date = borrow_date;
        self
    }

    /// Overrides the status after opening
    pub fn with_status(mut self, status: LoanStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the policy the loan is opened under
    pub fn with_policy(mut self, policy: LendingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the loan against the given book
    pub fn build(self, book: &Book) -> Loan {
        let mut loan = Loan::open(self.member_id, book.id, self.borrow_date, &self.policy);
        if let Some(status) = self.status {
            loan.status = status;
        }
        loan
    }
}
