//! Tests for loan-term temporal arithmetic

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{days_late, whole_days_between, LoanPeriod, TemporalError};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

#[test]
fn test_loan_period_length() {
    let period = LoanPeriod::new(14).unwrap();
    assert_eq!(period.days(), 14);
}

#[test]
fn test_loan_period_rejects_zero_days() {
    assert_eq!(LoanPeriod::new(0), Err(TemporalError::EmptyPeriod(0)));
}

#[test]
fn test_due_date_crosses_month_boundary() {
    let period = LoanPeriod::new(14).unwrap();
    let start = at(2024, 1, 25, 10, 0);
    assert_eq!(period.due_from(start), at(2024, 2, 8, 10, 0));
}

#[test]
fn test_whole_days_exact() {
    assert_eq!(
        whole_days_between(at(2024, 1, 1, 0, 0), at(2024, 1, 6, 0, 0)),
        5
    );
}

#[test]
fn test_whole_days_partial_day_truncates() {
    // 23h59m short of a day does not count
    assert_eq!(
        whole_days_between(at(2024, 1, 1, 0, 0), at(2024, 1, 1, 23, 59)),
        0
    );
    assert_eq!(
        whole_days_between(at(2024, 1, 1, 0, 0), at(2024, 1, 2, 23, 59)),
        1
    );
}

#[test]
fn test_whole_days_negative_when_reversed() {
    assert_eq!(
        whole_days_between(at(2024, 1, 6, 0, 0), at(2024, 1, 1, 0, 0)),
        -5
    );
}

#[test]
fn test_days_late_before_due_is_zero() {
    let due = at(2024, 1, 10, 0, 0);
    assert_eq!(days_late(due, at(2024, 1, 9, 0, 0)), 0);
    assert_eq!(days_late(due, due), 0);
}

#[test]
fn test_days_late_after_due() {
    let due = at(2024, 1, 1, 0, 0);
    assert_eq!(days_late(due, at(2024, 1, 6, 0, 0)), 5);
}
