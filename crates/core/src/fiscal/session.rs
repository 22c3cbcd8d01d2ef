//! Edit session state machine.
//!
//! An [`EditSession`] is the explicit, caller-owned handle for one fiscal
//! year edit. It replaces any ambient "current record" state: every updater
//! operation takes the session it acts on, and the working copy lives nowhere
//! else. Sessions move `Idle → Loading → Editing → Submitting` and end in
//! `Succeeded` or `Failed`; a failed submit returns to `Editing` with the
//! working copy intact so the caller can resubmit without reloading.

use wardbook_shared::FiscalYearId;

use super::error::FiscalError;
use super::types::FiscalYear;

/// State of one edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session created, nothing loaded yet.
    Idle,
    /// Store read in flight.
    Loading,
    /// Working copy available for mutation.
    Editing,
    /// Submit in flight; no second submit may be issued.
    Submitting,
    /// Update persisted. Terminal.
    Succeeded,
    /// Load failed; no editable copy exists. Terminal.
    Failed,
}

/// One fiscal year edit session.
///
/// Owns the working copy exclusively until it is persisted or discarded.
#[derive(Debug, Clone)]
pub struct EditSession {
    id: FiscalYearId,
    state: SessionState,
    working: Option<FiscalYear>,
}

impl EditSession {
    /// Creates an idle session for the given fiscal year id.
    #[must_use]
    pub fn new(id: FiscalYearId) -> Self {
        Self {
            id,
            state: SessionState::Idle,
            working: None,
        }
    }

    /// The id of the fiscal year under edit.
    #[must_use]
    pub fn id(&self) -> FiscalYearId {
        self.id
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The working copy, if one has been loaded.
    #[must_use]
    pub fn year(&self) -> Option<&FiscalYear> {
        self.working.as_ref()
    }

    /// Mutable access to the working copy. Only available while `Editing`.
    #[must_use]
    pub fn year_mut(&mut self) -> Option<&mut FiscalYear> {
        match self.state {
            SessionState::Editing => self.working.as_mut(),
            _ => None,
        }
    }

    fn expect_state(&self, expected: SessionState) -> Result<(), FiscalError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(FiscalError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    /// `Idle -> Loading`.
    pub(crate) fn begin_loading(&mut self) -> Result<(), FiscalError> {
        self.expect_state(SessionState::Idle)?;
        self.state = SessionState::Loading;
        Ok(())
    }

    /// `Loading -> Editing` with a freshly read working copy.
    pub(crate) fn loaded(&mut self, year: FiscalYear) {
        self.working = Some(year);
        self.state = SessionState::Editing;
    }

    /// `Loading -> Failed`. No editable copy exists.
    pub(crate) fn load_failed(&mut self) {
        self.working = None;
        self.state = SessionState::Failed;
    }

    /// `Editing -> Submitting`. Returns a copy of the record to submit.
    pub(crate) fn begin_submit(&mut self) -> Result<FiscalYear, FiscalError> {
        self.expect_state(SessionState::Editing)?;
        let year = self.working.clone().ok_or(FiscalError::InvalidState {
            expected: SessionState::Editing,
            actual: self.state,
        })?;
        self.state = SessionState::Submitting;
        Ok(year)
    }

    /// `Submitting -> Editing`. The working copy is left untouched.
    pub(crate) fn submit_failed(&mut self) {
        self.state = SessionState::Editing;
    }

    /// `Submitting -> Succeeded` with the record as persisted.
    pub(crate) fn succeeded(&mut self, persisted: FiscalYear) {
        self.working = Some(persisted);
        self.state = SessionState::Succeeded;
    }
}
