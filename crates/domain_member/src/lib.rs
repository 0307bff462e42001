//! Member Domain
//!
//! This crate models library members and their borrowing-limit policy.
//! A member may hold at most `max_borrow_books` active loans; the active-loan
//! count is supplied by the lending domain's loan index, not by a live
//! back-reference on the member.

pub mod member;
pub mod validation;
pub mod error;

pub use member::{Member, MemberType, MemberStatus};
pub use validation::{validate_member, ValidationResult};
pub use error::MemberError;
