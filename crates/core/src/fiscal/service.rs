//! Fiscal year updater service.
//!
//! Orchestrates the read → compute → resolve → persist sequence for updating
//! one fiscal year. Either the full update lands, including the
//! previous-year link, or the store's record is left untouched: the store
//! update is a single atomic write and is only issued once the locator has
//! resolved. The outcome is returned to the caller as a value; this service
//! knows nothing about notification or navigation concerns.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use wardbook_shared::FiscalYearId;

use super::calendar::compute_end_date;
use super::error::FiscalError;
use super::session::EditSession;
use super::types::FiscalYear;

/// Persistence boundary for fiscal year records.
///
/// This trait is implemented by the store crate (or a database layer) to
/// provide the two calls the update workflow issues.
pub trait PeriodStore: Send + Sync {
    /// Reads a fiscal year by id.
    fn read(
        &self,
        id: FiscalYearId,
    ) -> impl std::future::Future<Output = Result<FiscalYear, FiscalError>> + Send;

    /// Persists the full record in one atomic write.
    ///
    /// On failure the prior record must be left untouched; a partial write is
    /// a contract violation.
    fn update(
        &self,
        id: FiscalYearId,
        year: FiscalYear,
    ) -> impl std::future::Future<Output = Result<(), FiscalError>> + Send;
}

/// Lookup boundary for resolving years by date.
pub trait PeriodLocator: Send + Sync {
    /// Returns the fiscal years whose range covers or precedes `date`,
    /// ordered latest `start_date` first. An empty sequence is valid: the
    /// queried date may precede every year on record.
    fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Vec<FiscalYear>, FiscalError>> + Send;
}

/// Result of a successful submit.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// The record as persisted, with the derived end date and the resolved
    /// previous-year link.
    pub year: FiscalYear,
    /// The caller must force a fresh read on the next listing display rather
    /// than reuse any cached rows.
    pub refresh_listing: bool,
}

/// Fiscal year updater.
///
/// Generic over the store and locator boundaries so the workflow can be
/// exercised against any backend.
pub struct FiscalYearUpdater<S: PeriodStore, L: PeriodLocator> {
    store: Arc<S>,
    locator: Arc<L>,
}

impl<S: PeriodStore, L: PeriodLocator> FiscalYearUpdater<S, L> {
    /// Creates a new updater over the given boundaries.
    #[must_use]
    pub fn new(store: Arc<S>, locator: Arc<L>) -> Self {
        Self { store, locator }
    }

    /// Loads the session's fiscal year and opens it for editing.
    ///
    /// The end date of the working copy is recomputed from the stored start
    /// date and duration; whatever the store carried is not trusted.
    ///
    /// # Errors
    ///
    /// Returns `FiscalError::NotFound` if the store has no such id (the
    /// session ends in `Failed` with no editable copy), or
    /// `FiscalError::InvalidState` if the session has already been used.
    pub async fn load_for_edit(&self, session: &mut EditSession) -> Result<(), FiscalError> {
        session.begin_loading()?;
        debug!(id = %session.id(), "loading fiscal year for edit");

        match self.read_fresh(session.id()).await {
            Ok(year) => {
                session.loaded(year);
                Ok(())
            }
            Err(e) => {
                warn!(id = %session.id(), error = %e, "fiscal year load failed");
                session.load_failed();
                Err(e)
            }
        }
    }

    async fn read_fresh(&self, id: FiscalYearId) -> Result<FiscalYear, FiscalError> {
        let mut year = self.store.read(id).await?;
        year.end_date = compute_end_date(year.start_date, year.number_of_months)?;
        Ok(year)
    }

    /// Submits the session's working copy.
    ///
    /// The sequence is strict: validate, recompute the end date, resolve the
    /// previous year through the locator, then issue the single store update.
    /// The update is never issued before the locator call has resolved. On
    /// any failure after validation the session returns to `Editing` with the
    /// working copy unchanged, so the caller can resubmit without reloading.
    ///
    /// # Errors
    ///
    /// - `FiscalError::Validation` / `FiscalError::InvalidDuration` when the
    ///   working copy fails its preconditions; no boundary call is made.
    /// - `FiscalError::Persistence` when the store update fails; the store's
    ///   prior record is untouched.
    /// - `FiscalError::InvalidState` when the session is not `Editing`.
    pub async fn submit(&self, session: &mut EditSession) -> Result<SubmitOutcome, FiscalError> {
        let mut year = session.begin_submit()?;

        if let Err(e) = year.validate() {
            session.submit_failed();
            return Err(e);
        }

        match self.resolve_and_persist(&mut year).await {
            Ok(()) => {
                info!(
                    id = %year.id,
                    previous = ?year.previous_year_id,
                    end = %year.end_date,
                    "fiscal year updated"
                );
                session.succeeded(year.clone());
                Ok(SubmitOutcome {
                    year,
                    refresh_listing: true,
                })
            }
            Err(e) => {
                warn!(id = %year.id, error = %e, "fiscal year update failed");
                session.submit_failed();
                Err(e)
            }
        }
    }

    async fn resolve_and_persist(&self, year: &mut FiscalYear) -> Result<(), FiscalError> {
        // Derived state: any caller-supplied end date is discarded.
        year.end_date = compute_end_date(year.start_date, year.number_of_months)?;

        // Resolve the chronologically preceding year. The locator orders
        // candidates latest start date first; the record's own id never
        // qualifies as its previous year.
        let candidates = self.locator.find_by_date(year.start_date).await?;
        year.previous_year_id = candidates
            .iter()
            .find(|candidate| candidate.id != year.id)
            .map(|candidate| candidate.id);

        debug!(
            id = %year.id,
            candidates = candidates.len(),
            previous = ?year.previous_year_id,
            "resolved previous fiscal year"
        );

        self.store.update(year.id, year.clone()).await
    }
}
