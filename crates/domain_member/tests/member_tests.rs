//! Comprehensive tests for domain_member

use domain_member::member::{Member, MemberStatus, MemberType, DEFAULT_MAX_BORROW_BOOKS};
use domain_member::validation::validate_member;

fn student() -> Member {
    Member::new("SV2024001", "Hà", "Nguyễn", "ha.nguyen@example.edu.vn", MemberType::Student)
}

// ============================================================================
// Eligibility Tests
// ============================================================================

mod eligibility_tests {
    use super::*;

    #[test]
    fn test_cap_reached_blocks_borrowing() {
        // cap 5, 5 active loans -> not eligible
        let m = student();
        assert_eq!(m.max_borrow_books, 5);
        assert!(!m.can_borrow_more(5));
    }

    #[test]
    fn test_returned_loans_free_allowance() {
        // 4 active + 1 returned counts as 4
        let m = student();
        assert!(m.can_borrow_more(4));
    }

    #[test]
    fn test_zero_cap_never_eligible() {
        let m = student().with_borrow_limit(0);
        assert!(!m.can_borrow_more(0));
        assert_eq!(m.remaining_allowance(0), 0);
    }

    #[test]
    fn test_status_does_not_change_cap_logic() {
        // Eligibility by count is pure; status gating is the service's job
        let mut m = student();
        m.status = MemberStatus::Suspended;
        assert!(m.can_borrow_more(0));
        assert!(!m.is_active());
    }
}

// ============================================================================
// Entity Tests
// ============================================================================

mod entity_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let m = student();
        assert_eq!(m.member_type, MemberType::Student);
        assert_eq!(m.status, MemberStatus::Active);
        assert_eq!(m.max_borrow_books, DEFAULT_MAX_BORROW_BOOKS);
        assert_eq!(m.registration_date, m.created_at.date_naive());
    }

    #[test]
    fn test_full_name_concatenation() {
        assert_eq!(student().full_name(), "Hà Nguyễn");
    }

    #[test]
    fn test_serde_round_trip() {
        let m = student();
        let json = serde_json::to_string(&m).unwrap();
        let back: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, m.id);
        assert_eq!(back.member_code, "SV2024001");
        assert_eq!(back.status, MemberStatus::Active);
    }

    #[test]
    fn test_all_member_types_serialize() {
        for t in [
            MemberType::Student,
            MemberType::Teacher,
            MemberType::Staff,
            MemberType::Public,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert!(!json.is_empty());
        }
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_member() {
        assert!(validate_member(&student()).is_valid);
    }

    #[test]
    fn test_collects_multiple_errors() {
        let mut m = student();
        m.member_code = String::new();
        m.first_name = String::new();
        m.email = "broken".to_string();

        let result = validate_member(&m);
        assert!(!result.is_valid);
        assert!(result.errors.len() >= 3);
    }

    #[test]
    fn test_overlong_member_code() {
        let mut m = student();
        m.member_code = "X".repeat(21);
        let result = validate_member(&m);
        assert!(!result.is_valid);
    }
}
