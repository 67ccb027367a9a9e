//! Shared session state for one browsing session.
//!
//! [`Session`] owns the state; editors and the orchestrator hold
//! [`SessionHandle`]s. Each field has a single writer (its owning editor),
//! mutations are synchronous, and every reader sees them immediately. A
//! handle that outlives its session fails loudly instead of operating on
//! stale state. Nothing persists across sessions.

use std::sync::{Arc, Mutex, Weak};

use mentis_core::models::diagnosis::DiagnosisRequest;
use mentis_core::models::history::PatientHistory;
use mentis_core::models::symptom::Symptom;

use crate::error::SessionError;

#[derive(Debug, Default)]
pub struct SessionState {
    pub symptoms: Vec<Symptom>,
    pub history: PatientHistory,
}

/// Owns the session state for the lifetime of one session.
pub struct Session {
    state: Arc<Mutex<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            state: Arc::downgrade(&self.state),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct SessionHandle {
    state: Weak<Mutex<SessionState>>,
}

impl SessionHandle {
    fn upgrade(&self) -> Result<Arc<Mutex<SessionState>>, SessionError> {
        self.state.upgrade().ok_or(SessionError::Closed)
    }

    pub fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> Result<R, SessionError> {
        let state = self.upgrade()?;
        let guard = state.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&guard))
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Result<R, SessionError> {
        let state = self.upgrade()?;
        let mut guard = state.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&mut guard))
    }

    /// Snapshot the store as a submission payload. History fields are
    /// concrete strings in the store, so absent values are already
    /// normalized to empty.
    pub fn diagnosis_request(&self) -> Result<DiagnosisRequest, SessionError> {
        self.read(|state| DiagnosisRequest::new(state.symptoms.clone(), state.history.clone()))
    }
}
