use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mentis_anthropic::error::AnthropicError;

/// Unified API error type for all route handlers.
///
/// The wire body is always `{ "message": ... }`; the malformed-model-output
/// case additionally carries the raw upstream text for diagnosis.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Required credential absent from the environment.
    MissingApiKey,
    /// The upstream model API answered with a non-success status, echoed
    /// back to the client.
    Upstream(u16),
    /// The upstream response envelope had no usable content.
    InvalidModelResponse(String),
    /// The model's text was not the expected JSON array.
    MalformedModelOutput { raw_text: String },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "rawText", skip_serializing_if = "Option::is_none")]
    raw_text: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, raw_text) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Missing API key".to_string(),
                None,
            ),
            ApiError::Upstream(status) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "Error from Anthropics API".to_string(),
                None,
            ),
            ApiError::InvalidModelResponse(detail) => {
                tracing::error!(detail = %detail, "invalid model response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Invalid AI response format".to_string(),
                    None,
                )
            }
            ApiError::MalformedModelOutput { raw_text } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error parsing AI response".to_string(),
                Some(raw_text),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { message, raw_text })).into_response()
    }
}

impl From<AnthropicError> for ApiError {
    fn from(e: AnthropicError) -> Self {
        match e {
            AnthropicError::MissingApiKey => ApiError::MissingApiKey,
            AnthropicError::Upstream { status, body } => {
                tracing::error!(status, body = %body, "upstream model API error");
                ApiError::Upstream(status)
            }
            AnthropicError::ResponseParse(detail) => ApiError::InvalidModelResponse(detail),
            AnthropicError::MalformedOutput { message, raw_text } => {
                tracing::error!(detail = %message, "model output parse failure");
                ApiError::MalformedModelOutput { raw_text }
            }
            AnthropicError::Transport(detail) => ApiError::Internal(detail),
            AnthropicError::Serialization(e) => ApiError::Internal(e.to_string()),
        }
    }
}
