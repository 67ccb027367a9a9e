//! Diagnosis request orchestrator.
//!
//! Drives the submit lifecycle: validate the latest store contents, issue
//! at most one outstanding service call, and publish the result or error as
//! a single assignment. Re-entrant from any terminal state.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use mentis_core::models::diagnosis::DiagnosisResult;
use mentis_core::validate::validate_request;

use crate::api::DiagnosisApi;
use crate::error::OrchestratorError;
use crate::store::SessionHandle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Default)]
struct Inner {
    phase: Phase,
    result: Option<DiagnosisResult>,
    error: Option<String>,
}

/// Point-in-time view of the orchestrator, consumed by the result renderer.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub phase: Phase,
    pub result: Option<DiagnosisResult>,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct Orchestrator {
    session: SessionHandle,
    inner: Arc<Mutex<Inner>>,
}

impl Orchestrator {
    pub fn new(session: SessionHandle) -> Self {
        Self {
            session,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, OrchestratorError> {
        self.inner.lock().map_err(|_| OrchestratorError::Poisoned)
    }

    pub fn snapshot(&self) -> Snapshot {
        match self.inner.lock() {
            Ok(inner) => Snapshot {
                phase: inner.phase,
                result: inner.result.clone(),
                error: inner.error.clone(),
            },
            Err(_) => Snapshot {
                phase: Phase::Failed,
                result: None,
                error: Some(OrchestratorError::Poisoned.to_string()),
            },
        }
    }

    /// Whether the submit control should be enabled. False exactly while a
    /// request is outstanding.
    pub fn can_submit(&self) -> bool {
        self.inner
            .lock()
            .map(|inner| inner.phase != Phase::Submitting)
            .unwrap_or(false)
    }

    /// Run one submission against the latest store contents.
    ///
    /// The in-flight guard and the transition to `Submitting` happen under
    /// one lock acquisition, so a concurrent submit observes `Submitting`
    /// before this one suspends — at most one request is ever outstanding
    /// per orchestrator. No lock is held across the await.
    pub async fn submit(
        &self,
        api: &DiagnosisApi,
    ) -> Result<DiagnosisResult, OrchestratorError> {
        let request = {
            let mut inner = self.lock()?;
            if inner.phase == Phase::Submitting {
                return Err(OrchestratorError::SubmitInFlight);
            }

            inner.phase = Phase::Validating;
            inner.result = None;
            inner.error = None;

            let request = match self.session.diagnosis_request() {
                Ok(request) => request,
                Err(e) => {
                    inner.phase = Phase::Idle;
                    return Err(e.into());
                }
            };

            if let Err(e) = validate_request(&request) {
                inner.phase = Phase::Idle;
                return Err(e.into());
            }

            inner.phase = Phase::Submitting;
            request
        };

        info!(symptoms = request.symptoms.len(), "submitting diagnosis request");
        let outcome = api.get_diagnosis(&request).await;

        let mut inner = self.lock()?;
        match outcome {
            Ok(diagnoses) => {
                info!(candidates = diagnoses.len(), "diagnosis request succeeded");
                inner.phase = Phase::Succeeded;
                inner.result = Some(diagnoses.clone());
                Ok(diagnoses)
            }
            Err(e) => {
                inner.phase = Phase::Failed;
                inner.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}
