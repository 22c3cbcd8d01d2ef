//! Property-based tests for fiscal year end date computation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use super::calendar::compute_end_date;

/// Strategy to generate valid dates within a reasonable range.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    // Generate dates from 2000-01-01 to 2040-12-31, including month-end days
    (2000i32..=2040, 1u32..=12, 1u32..=31).prop_filter_map("invalid calendar date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any valid inputs, computing the end date twice yields the same
    /// date. No hidden state.
    #[test]
    fn prop_deterministic(start in date_strategy(), months in 1u32..=120) {
        let first = compute_end_date(start, months).unwrap();
        let second = compute_end_date(start, months).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The end boundary is always strictly after the start date.
    #[test]
    fn prop_end_after_start(start in date_strategy(), months in 1u32..=120) {
        let end = compute_end_date(start, months).unwrap();
        prop_assert!(end > start, "end {} must be after start {}", end, start);
    }

    /// A longer duration never produces an earlier end date.
    #[test]
    fn prop_monotonic_in_duration(start in date_strategy(), months in 1u32..=119) {
        let shorter = compute_end_date(start, months).unwrap();
        let longer = compute_end_date(start, months + 1).unwrap();
        prop_assert!(longer > shorter);
    }

    /// Clamping only ever moves the day-of-month backwards, never forwards.
    #[test]
    fn prop_day_never_exceeds_start_day(start in date_strategy(), months in 1u32..=120) {
        let end = compute_end_date(start, months).unwrap();
        prop_assert!(end.day() <= start.day());
    }

    /// Starts on the first of a month never need clamping.
    #[test]
    fn prop_first_of_month_is_exact(
        year in 2000i32..=2040,
        month in 1u32..=12,
        months in 1u32..=120,
    ) {
        let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let end = compute_end_date(start, months).unwrap();
        prop_assert_eq!(end.day(), 1);
    }

    /// Zero months is always rejected before any date arithmetic.
    #[test]
    fn prop_zero_months_rejected(start in date_strategy()) {
        prop_assert!(compute_end_date(start, 0).is_err());
    }
}
