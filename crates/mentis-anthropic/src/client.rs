//! HTTP client for the Anthropic Messages API.
//!
//! One request shape is used: a single user message, a fixed model id and
//! token budget. The base URL is overridable so tests (and staging) can
//! point at a stub server.

use serde::{Deserialize, Serialize};

use crate::error::AnthropicError;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL_ID: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Protocol version sent with every request.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Environment variable carrying the required credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model_id: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Build a client from the process environment. `ANTHROPIC_API_KEY` is
    /// required; `MENTIS_MODEL_ID`, `MENTIS_MAX_TOKENS`, and
    /// `MENTIS_ANTHROPIC_BASE_URL` override the defaults when set.
    pub fn from_env() -> Result<Self, AnthropicError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(AnthropicError::MissingApiKey)?;

        let mut client = Self::new(api_key);
        if let Ok(model_id) = std::env::var("MENTIS_MODEL_ID") {
            client = client.with_model(model_id);
        }
        if let Ok(max_tokens) = std::env::var("MENTIS_MAX_TOKENS")
            && let Ok(max_tokens) = max_tokens.parse()
        {
            client = client.with_max_tokens(max_tokens);
        }
        if let Ok(base_url) = std::env::var("MENTIS_ANTHROPIC_BASE_URL") {
            client = client.with_base_url(&base_url);
        }
        Ok(client)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Send a single user message and return the raw Messages API response.
    ///
    /// A non-success status becomes [`AnthropicError::Upstream`] with the
    /// upstream status and body; an unreadable success body becomes
    /// [`AnthropicError::ResponseParse`].
    pub async fn send_message(&self, content: &str) -> Result<MessagesResponse, AnthropicError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = MessagesRequest {
            model: &self.model_id,
            max_tokens: self.max_tokens,
            messages: vec![MessageParam {
                role: "user",
                content,
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnthropicError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnthropicError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<MessagesResponse>()
            .await
            .map_err(|e| AnthropicError::ResponseParse(e.to_string()))
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Serialize)]
struct MessageParam<'a> {
    role: &'a str,
    content: &'a str,
}

/// The subset of the Messages API response consumed here.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<ApiUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ApiUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
