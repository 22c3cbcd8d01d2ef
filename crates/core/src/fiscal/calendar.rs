//! Calendar-month arithmetic for fiscal year boundaries.

use chrono::{Months, NaiveDate};

use super::error::FiscalError;

/// Computes a fiscal year's end boundary from its start date and duration.
///
/// The end date is `start_date` advanced by `number_of_months` calendar
/// months, with month-end clamping: advancing Jan 31 by one month yields the
/// last valid day of February, never an invalid date. Pure and deterministic.
///
/// # Errors
///
/// Returns `FiscalError::InvalidDuration` if `number_of_months` is zero, and
/// `FiscalError::DateOverflow` if the result cannot be represented.
pub fn compute_end_date(
    start_date: NaiveDate,
    number_of_months: u32,
) -> Result<NaiveDate, FiscalError> {
    if number_of_months == 0 {
        return Err(FiscalError::InvalidDuration);
    }

    start_date
        .checked_add_months(Months::new(number_of_months))
        .ok_or(FiscalError::DateOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2024, 1, 31), 1, date(2024, 2, 29))] // leap year clamp
    #[case(date(2023, 1, 31), 1, date(2023, 2, 28))] // non-leap clamp
    #[case(date(2025, 1, 1), 12, date(2026, 1, 1))]
    #[case(date(2025, 3, 31), 1, date(2025, 4, 30))]
    #[case(date(2025, 12, 1), 1, date(2026, 1, 1))] // year rollover
    #[case(date(2024, 2, 29), 12, date(2025, 2, 28))] // leap day clamp forward
    #[case(date(2025, 7, 1), 6, date(2026, 1, 1))] // half-year
    fn test_compute_end_date(
        #[case] start: NaiveDate,
        #[case] months: u32,
        #[case] expected: NaiveDate,
    ) {
        assert_eq!(compute_end_date(start, months).unwrap(), expected);
    }

    #[test]
    fn test_zero_months_rejected() {
        let result = compute_end_date(date(2025, 1, 1), 0);
        assert!(matches!(result, Err(FiscalError::InvalidDuration)));
    }

    #[test]
    fn test_overflow_rejected() {
        let result = compute_end_date(NaiveDate::MAX, 1);
        assert!(matches!(result, Err(FiscalError::DateOverflow)));
    }
}
