//! Patient history editor.
//!
//! Three independent free-text fields, written to the store verbatim on
//! every change. No validation, no length limits; empty is valid.

use crate::error::SessionError;
use crate::store::SessionHandle;

pub struct HistoryEditor {
    session: SessionHandle,
}

impl HistoryEditor {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    pub fn set_family_history(&self, value: &str) -> Result<(), SessionError> {
        self.session
            .write(|state| state.history.family_history = value.to_string())
    }

    pub fn set_past_diagnosis(&self, value: &str) -> Result<(), SessionError> {
        self.session
            .write(|state| state.history.past_diagnosis = value.to_string())
    }

    pub fn set_medication_history(&self, value: &str) -> Result<(), SessionError> {
        self.session
            .write(|state| state.history.medication_history = value.to_string())
    }
}
