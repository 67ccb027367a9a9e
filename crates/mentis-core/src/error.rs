use thiserror::Error;

/// Submission validation failures, worded as shown to the user.
///
/// With the bounded unsigned fields on [`crate::models::symptom::Symptom`],
/// "unset" and "non-positive" collapse into the zero check — zero is the
/// editor's encoding for "not provided".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select at least one symptom.")]
    NoSymptoms,

    #[error("Please provide severity and duration for the symptom: {name}.")]
    MissingSeverityOrDuration { name: String },
}
