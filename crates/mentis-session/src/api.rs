//! HTTP client for the diagnosis service endpoint.

use serde::Deserialize;
use thiserror::Error;

use mentis_core::models::diagnosis::{DiagnosisCandidate, DiagnosisRequest, DiagnosisResult};

/// Shown when the transport fails or the response body is unreadable.
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred. Please try again later.";

/// Shown when the service answered non-success without a parseable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing the diagnosis.";

#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The call failed at the transport level.
    #[error("{0}")]
    Network(String),
}

#[derive(Debug, Clone)]
pub struct DiagnosisApi {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct DiagnosisResponse {
    diagnoses: Vec<DiagnosisCandidate>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl DiagnosisApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST the request to `/api/getDiagnosis` and return the candidate
    /// list. Error bodies are reduced to their `message` field; anything
    /// unreadable falls back to a generic message.
    pub async fn get_diagnosis(
        &self,
        request: &DiagnosisRequest,
    ) -> Result<DiagnosisResult, ApiClientError> {
        let url = format!("{}/api/getDiagnosis", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "diagnosis request transport failure");
                ApiClientError::Network(NETWORK_ERROR_MESSAGE.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            return Err(ApiClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: DiagnosisResponse = response
            .json()
            .await
            .map_err(|_| ApiClientError::Network(NETWORK_ERROR_MESSAGE.to_string()))?;
        Ok(body.diagnoses)
    }
}
