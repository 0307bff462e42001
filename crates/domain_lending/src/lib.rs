//! Lending Domain
//!
//! This crate implements the lending policy engine: the rules governing
//! borrow, renew, return, and loss of a book copy, and their effect on the
//! catalog's copy-availability counters.
//!
//! # Loan Lifecycle
//!
//! ```text
//! Borrowed -> Renewed -> {Returned, Overdue}
//!     |          |
//!     +----------+-> Lost
//! ```
//!
//! `Returned`, `Overdue`, and `Lost` are terminal; the ledger entry is an
//! audit record and is never deleted. Cross-entity effects (shelf counters,
//! collection size) go through the [`domain_catalog::Book`] passed explicitly
//! to each operation, so the contract is visible at the call site.

pub mod loan;
pub mod policy;
pub mod service;
pub mod ports;
pub mod adapters;
pub mod error;

pub use loan::{Loan, LoanStatus};
pub use policy::LendingPolicy;
pub use service::LendingService;
pub use ports::{LoanStore, LoanQuery};
pub use error::LendingError;
