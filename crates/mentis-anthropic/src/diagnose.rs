use tracing::info;
use uuid::Uuid;

use mentis_core::models::diagnosis::{DiagnosisCandidate, DiagnosisRequest};
use mentis_core::models::token_count::{TokenCount, TokenUsage};

use crate::client::AnthropicClient;
use crate::error::AnthropicError;
use crate::prompt::build_diagnosis_prompt;
use crate::tokens;

/// The result of an upstream transaction, before the output is returned to
/// the caller.
#[derive(Debug)]
pub struct TransactionResult<T> {
    pub id: Uuid,
    pub model_id: String,
    pub usage: TokenUsage,
    pub output: T,
}

/// Invoke the model for diagnosis suggestion.
///
/// Sends the assembled prompt, takes the first content block's text, and
/// parses it as a JSON array of candidates. A response without content
/// blocks is [`AnthropicError::ResponseParse`]; text that is not the
/// expected array is [`AnthropicError::MalformedOutput`] with the raw text
/// preserved. Candidate fields beyond `name` pass through leniently.
pub async fn suggest_diagnoses(
    client: &AnthropicClient,
    request: &DiagnosisRequest,
) -> Result<TransactionResult<Vec<DiagnosisCandidate>>, AnthropicError> {
    let transaction_id = Uuid::new_v4();
    info!(
        transaction_id = %transaction_id,
        model = client.model_id(),
        symptoms = request.symptoms.len(),
        "starting diagnosis suggestion"
    );

    let prompt = build_diagnosis_prompt(request);
    let response = client.send_message(&prompt).await?;

    let pricing = tokens::get_pricing(client.model_id());
    let usage = response
        .usage
        .map(|u| {
            let token_count = tokens::extract_token_usage(&u);
            if let Some(p) = &pricing {
                tokens::calculate_cost(token_count, p)
            } else {
                TokenUsage {
                    tokens: token_count,
                    cost_usd: 0.0,
                }
            }
        })
        .unwrap_or(TokenUsage {
            tokens: TokenCount {
                input: 0,
                output: 0,
            },
            cost_usd: 0.0,
        });

    let text = response
        .content
        .first()
        .map(|block| block.text.as_str())
        .ok_or_else(|| AnthropicError::ResponseParse("no content blocks in response".to_string()))?;

    let candidates: Vec<DiagnosisCandidate> =
        serde_json::from_str(text).map_err(|e| AnthropicError::MalformedOutput {
            message: e.to_string(),
            raw_text: text.to_string(),
        })?;

    info!(
        transaction_id = %transaction_id,
        candidates = candidates.len(),
        cost_usd = usage.cost_usd,
        "diagnosis suggestion complete"
    );

    Ok(TransactionResult {
        id: transaction_id,
        model_id: client.model_id().to_string(),
        usage,
        output: candidates,
    })
}
