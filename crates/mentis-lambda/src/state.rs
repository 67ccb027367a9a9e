use mentis_anthropic::client::AnthropicClient;

/// Shared application state, injected into route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    /// `None` when the API key is absent from the environment; the
    /// diagnosis route reports this as a configuration failure per request.
    pub anthropic: Option<AnthropicClient>,
}
