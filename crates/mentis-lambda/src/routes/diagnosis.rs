use axum::Json;
use axum::extract::State;
use serde::Serialize;

use mentis_core::models::diagnosis::{DiagnosisCandidate, DiagnosisRequest};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct DiagnosisResponse {
    pub diagnoses: Vec<DiagnosisCandidate>,
}

/// Suggest diagnoses for the submitted symptoms and history.
///
/// Structural validation happens before any upstream call: an empty symptom
/// list never leaves the service. The candidate array parsed from the model
/// is returned verbatim.
pub async fn get_diagnosis(
    State(state): State<AppState>,
    Json(request): Json<DiagnosisRequest>,
) -> Result<Json<DiagnosisResponse>, ApiError> {
    let Some(client) = &state.anthropic else {
        return Err(ApiError::MissingApiKey);
    };

    if request.symptoms.is_empty() {
        return Err(ApiError::BadRequest(
            "Symptoms are required and should be a non-empty array.".to_string(),
        ));
    }

    let transaction = mentis_anthropic::diagnose::suggest_diagnoses(client, &request).await?;

    tracing::info!(
        transaction_id = %transaction.id,
        model = %transaction.model_id,
        candidates = transaction.output.len(),
        input_tokens = transaction.usage.tokens.input,
        output_tokens = transaction.usage.tokens.output,
        cost_usd = transaction.usage.cost_usd,
        "diagnosis transaction complete"
    );

    Ok(Json(DiagnosisResponse {
        diagnoses: transaction.output,
    }))
}
