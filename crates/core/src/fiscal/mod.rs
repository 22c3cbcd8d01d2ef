//! Fiscal year management.
//!
//! This module implements the fiscal year update workflow:
//! - Domain types for fiscal year records
//! - Calendar-month end date computation
//! - Edit session state machine
//! - The updater service orchestrating read, resolve, and persist
//! - Error types for fiscal operations

pub mod calendar;
pub mod error;
pub mod service;
pub mod session;
pub mod types;

#[cfg(test)]
mod calendar_props;

pub use calendar::compute_end_date;
pub use error::FiscalError;
pub use service::{FiscalYearUpdater, PeriodLocator, PeriodStore, SubmitOutcome};
pub use session::{EditSession, SessionState};
pub use types::FiscalYear;
