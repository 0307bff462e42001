//! Member validation rules
//!
//! # Validation Rules
//!
//! - Member code must be present and at most 20 characters
//! - First and last name must be present
//! - Email must be a valid address
//! - Date of birth, if provided, must be in the past
//! - A zero borrowing cap is legal but flagged as a warning

use chrono::Utc;
use validator::ValidateEmail;

use crate::member::Member;

/// Result of member validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the member is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validates a member's fields and borrowing policy
///
/// # Returns
///
/// A [`ValidationResult`] containing any errors or warnings
pub fn validate_member(member: &Member) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if member.member_code.trim().is_empty() {
        result.add_error("Member code must not be empty");
    } else if member.member_code.len() > 20 {
        result.add_error(format!(
            "Member code exceeds 20 characters: {}",
            member.member_code
        ));
    }

    if member.first_name.trim().is_empty() {
        result.add_error("First name must not be empty");
    }
    if member.last_name.trim().is_empty() {
        result.add_error("Last name must not be empty");
    }

    if !member.email.validate_email() {
        result.add_error(format!("Invalid email format: {}", member.email));
    }

    if let Some(dob) = member.date_of_birth {
        if dob >= Utc::now().date_naive() {
            result.add_error("Date of birth must be in the past");
        }
    }

    if let Some(ref phone) = member.phone {
        if phone.trim().is_empty() {
            result.add_error("Phone number cannot be empty");
        }
    }

    if member.max_borrow_books == 0 {
        result.add_warning("Borrowing cap is zero; member will never pass the eligibility check");
    }

    result
}
