//! Fiscal error types.

use thiserror::Error;
use wardbook_shared::FiscalYearId;

use super::session::SessionState;

/// Fiscal-year related errors.
#[derive(Debug, Error)]
pub enum FiscalError {
    /// A precondition on the record failed; no boundary call was made.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Fiscal year not found in the store.
    #[error("Fiscal year not found: {0}")]
    NotFound(FiscalYearId),

    /// The store failed to persist the record. The prior record is untouched.
    #[error("Failed to persist fiscal year: {0}")]
    Persistence(String),

    /// Duration must be a positive number of months.
    #[error("Number of months must be at least 1")]
    InvalidDuration,

    /// Month arithmetic left chrono's representable range.
    #[error("End date computation overflowed the calendar range")]
    DateOverflow,

    /// A session operation was attempted in the wrong state.
    #[error("Invalid session state: expected {expected:?}, got {actual:?}")]
    InvalidState {
        /// The state the operation requires.
        expected: SessionState,
        /// The state the session was actually in.
        actual: SessionState,
    },
}
