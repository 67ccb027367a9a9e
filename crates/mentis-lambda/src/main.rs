use tracing_subscriber::EnvFilter;

use mentis_anthropic::client::AnthropicClient;
use mentis_anthropic::error::AnthropicError;
use mentis_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    // A missing key is not a startup failure: the endpoint answers 500 at
    // request time until the credential is provided.
    let anthropic = match AnthropicClient::from_env() {
        Ok(client) => Some(client),
        Err(AnthropicError::MissingApiKey) => {
            tracing::warn!("ANTHROPIC_API_KEY not set; diagnosis requests will fail");
            None
        }
        Err(e) => return Err(eyre::eyre!(e)),
    };

    let app = mentis_lambda::app(AppState { anthropic });

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
