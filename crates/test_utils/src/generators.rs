//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use domain_lending::LoanStatus;
use domain_member::MemberType;
use proptest::prelude::*;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::VND),
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::SGD),
    ]
}

/// Strategy for generating positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating VND fine amounts (whole thousands)
pub fn vnd_fine_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000i64).prop_map(|n| Money::from_minor(n * 1_000, Currency::VND))
}

/// Strategy for generating copy counts (total, checked-out) that respect the
/// counter invariant
pub fn copy_count_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..50u32).prop_flat_map(|total| (Just(total), 0..=total))
}

/// Strategy for generating loan statuses
pub fn loan_status_strategy() -> impl Strategy<Value = LoanStatus> {
    prop_oneof![
        Just(LoanStatus::Borrowed),
        Just(LoanStatus::Renewed),
        Just(LoanStatus::Returned),
        Just(LoanStatus::Overdue),
        Just(LoanStatus::Lost),
    ]
}

/// Strategy for generating active loan statuses only
pub fn active_loan_status_strategy() -> impl Strategy<Value = LoanStatus> {
    prop_oneof![Just(LoanStatus::Borrowed), Just(LoanStatus::Renewed)]
}

/// Strategy for generating membership tiers
pub fn member_type_strategy() -> impl Strategy<Value = MemberType> {
    prop_oneof![
        Just(MemberType::Student),
        Just(MemberType::Teacher),
        Just(MemberType::Staff),
        Just(MemberType::Public),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_copy_counts_respect_invariant((total, out) in copy_count_strategy()) {
            prop_assert!(out <= total);
        }

        #[test]
        fn generated_fines_are_positive_vnd(fine in vnd_fine_strategy()) {
            prop_assert!(fine.is_positive());
            prop_assert_eq!(fine.currency(), Currency::VND);
        }

        #[test]
        fn active_statuses_are_active(status in active_loan_status_strategy()) {
            prop_assert!(status.is_active());
        }
    }
}
