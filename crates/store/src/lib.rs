//! In-memory fiscal year store.
//!
//! Reference implementation of the [`PeriodStore`] and [`PeriodLocator`]
//! boundaries from `wardbook-core`. A database-backed implementation must
//! honor the same contract: reads return the full record or `NotFound`,
//! updates replace the whole record in one atomic write, and date lookups
//! return candidates ordered latest start date first.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use wardbook_core::fiscal::{FiscalError, FiscalYear, PeriodLocator, PeriodStore};
use wardbook_shared::FiscalYearId;

/// Thread-safe in-memory store of fiscal year records.
#[derive(Debug, Default)]
pub struct MemoryPeriodStore {
    years: Mutex<HashMap<FiscalYearId, FiscalYear>>,
}

impl MemoryPeriodStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, HashMap<FiscalYearId, FiscalYear>> {
        // A poisoned map is still structurally intact: every write replaces a
        // whole record, so recover rather than propagate the panic.
        self.years.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seeds a record, replacing any existing record with the same id.
    pub fn insert(&self, year: FiscalYear) {
        self.guard().insert(year.id, year);
    }

    /// Returns a copy of the record with the given id, if present.
    #[must_use]
    pub fn get(&self, id: FiscalYearId) -> Option<FiscalYear> {
        self.guard().get(&id).cloned()
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl PeriodStore for MemoryPeriodStore {
    async fn read(&self, id: FiscalYearId) -> Result<FiscalYear, FiscalError> {
        self.guard().get(&id).cloned().ok_or(FiscalError::NotFound(id))
    }

    async fn update(&self, id: FiscalYearId, year: FiscalYear) -> Result<(), FiscalError> {
        let mut years = self.guard();
        if !years.contains_key(&id) {
            return Err(FiscalError::NotFound(id));
        }
        years.insert(id, year);
        Ok(())
    }
}

impl PeriodLocator for MemoryPeriodStore {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<FiscalYear>, FiscalError> {
        let mut candidates: Vec<FiscalYear> = self
            .guard()
            .values()
            .filter(|year| year.start_date <= date)
            .cloned()
            .collect();

        // Latest start date first; ties broken by id so the order is total.
        candidates.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(candidates)
    }
}
