//! Member domain errors

use thiserror::Error;

/// Errors that can occur in the member domain
#[derive(Debug, Error)]
pub enum MemberError {
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Duplicate member code: {0}")]
    DuplicateMemberCode(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
