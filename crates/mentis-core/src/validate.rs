//! Submission validation.
//!
//! Re-run in full on every submission attempt against the latest store
//! contents; a failure means no request is sent.

use crate::error::ValidationError;
use crate::models::diagnosis::DiagnosisRequest;

/// Check the submission invariant: a non-empty symptom list in which every
/// symptom carries a provided (non-zero) severity and duration.
pub fn validate_request(request: &DiagnosisRequest) -> Result<(), ValidationError> {
    if request.symptoms.is_empty() {
        return Err(ValidationError::NoSymptoms);
    }

    for symptom in &request.symptoms {
        if symptom.severity == 0 || symptom.duration == 0 {
            return Err(ValidationError::MissingSeverityOrDuration {
                name: symptom.name.clone(),
            });
        }
    }

    Ok(())
}
