//! Core Kernel - Foundational types and utilities for the library system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic for fines and fees
//! - Loan-term temporal types and whole-day overdue arithmetic
//! - Common identifiers and port abstractions

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{LoanPeriod, TemporalError, whole_days_between, days_late};
pub use identifiers::{BookId, AuthorId, CategoryId, MemberId, LoanId};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
