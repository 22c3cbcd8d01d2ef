//! Fiscal year domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wardbook_shared::FiscalYearId;

use super::calendar::compute_end_date;
use super::error::FiscalError;

/// One accounting year.
///
/// `end_date` is derived, never authoritative: it is recomputed from
/// `start_date` and `number_of_months` before being surfaced or persisted,
/// and any client-supplied value is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYear {
    /// Unique identifier, immutable once assigned.
    pub id: FiscalYearId,
    /// Display label (e.g., "FY 2025").
    pub label: String,
    /// Start date of the fiscal year.
    pub start_date: NaiveDate,
    /// Duration in calendar months.
    pub number_of_months: u32,
    /// Derived end boundary, exclusive: the first day after the year.
    pub end_date: NaiveDate,
    /// Back-reference to the chronologically preceding year, if any.
    pub previous_year_id: Option<FiscalYearId>,
    /// Whether the year is locked against posting.
    pub locked: bool,
    /// Free-text note.
    pub note: Option<String>,
}

impl FiscalYear {
    /// Creates a fiscal year with a fresh id and a derived end date.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration is zero or the end date overflows.
    pub fn new(
        label: impl Into<String>,
        start_date: NaiveDate,
        number_of_months: u32,
    ) -> Result<Self, FiscalError> {
        let end_date = compute_end_date(start_date, number_of_months)?;
        Ok(Self {
            id: FiscalYearId::new(),
            label: label.into(),
            start_date,
            number_of_months,
            end_date,
            previous_year_id: None,
            locked: false,
            note: None,
        })
    }

    /// Validates the record before any boundary call is made.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::InvalidDuration` for a zero duration and
    /// `FiscalError::Validation` for an empty label or a self-referencing
    /// previous-year link.
    pub fn validate(&self) -> Result<(), FiscalError> {
        if self.number_of_months == 0 {
            return Err(FiscalError::InvalidDuration);
        }

        if self.label.trim().is_empty() {
            return Err(FiscalError::Validation("label must not be empty".into()));
        }

        if self.previous_year_id == Some(self.id) {
            return Err(FiscalError::Validation(
                "fiscal year cannot be its own previous year".into(),
            ));
        }

        Ok(())
    }

    /// Returns true if the given date falls within this year.
    ///
    /// The range is half-open: `start_date` inclusive, `end_date` exclusive.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_date
    }
}
