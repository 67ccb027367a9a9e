use thiserror::Error;

use mentis_core::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A handle was used after its owning session was dropped. Consumers
    /// must live inside the session's provisioning scope.
    #[error("session state accessed outside an active session scope")]
    Closed,

    #[error("session state lock poisoned")]
    Poisoned,
}

/// Editor failures, worded as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("You can only select up to 5 symptoms.")]
    SelectionLimit,

    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Submission rejected before any request was issued.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A prior submission has not resolved yet. The submit control stays
    /// disabled for the duration; this is the enforcement behind it.
    #[error("a diagnosis request is already in flight")]
    SubmitInFlight,

    #[error("orchestrator state lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Api(#[from] crate::api::ApiClientError),
}
