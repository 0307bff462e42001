//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_catalog::Book;
use domain_lending::Loan;

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that two Money values are equal, with currencies reported on failure
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Money amounts differ: actual={}, expected={}",
        actual.amount(),
        expected.amount()
    );
}

/// Asserts the catalog copy-count invariant: 0 <= available <= total
pub fn assert_copy_invariant(book: &Book) {
    assert!(
        book.available_copies <= book.total_copies,
        "Copy invariant violated for {}: available={} > total={}",
        book.isbn,
        book.available_copies,
        book.total_copies
    );
}

/// Asserts that a loan is still active (copy out with the member)
pub fn assert_loan_active(loan: &Loan) {
    assert!(
        loan.status.is_active(),
        "Expected active loan {}, got status {:?}",
        loan.id,
        loan.status
    );
}

/// Asserts that a loan is closed and its ledger fields are consistent
pub fn assert_loan_settled(loan: &Loan) {
    assert!(
        loan.status.is_terminal(),
        "Expected settled loan {}, got status {:?}",
        loan.id,
        loan.status
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{TestBookBuilder, TestLoanBuilder};
    use crate::fixtures::MoneyFixtures;

    #[test]
    fn test_money_assertions_pass() {
        assert_money_zero(&MoneyFixtures::vnd_zero());
        assert_money_positive(&MoneyFixtures::vnd_daily_fine());
        assert_money_eq(&MoneyFixtures::vnd_lost_fee(), &MoneyFixtures::vnd_lost_fee());
    }

    #[test]
    #[should_panic(expected = "Expected positive money")]
    fn test_positive_assertion_panics_on_zero() {
        assert_money_positive(&MoneyFixtures::vnd_zero());
    }

    #[test]
    fn test_domain_assertions_pass() {
        let book = TestBookBuilder::new().build();
        assert_copy_invariant(&book);

        let loan = TestLoanBuilder::new().build(&book);
        assert_loan_active(&loan);
    }
}
