use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnthropicError {
    #[error("missing API key")]
    MissingApiKey,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    /// The transport and response envelope were fine, but the model's text
    /// was not the expected JSON array. Carries the raw text for diagnosis.
    #[error("model output did not conform to expected schema: {message}")]
    MalformedOutput { message: String, raw_text: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
