use mentis_core::models::cost::ModelPricing;
use mentis_core::models::token_count::{TokenCount, TokenUsage};

use crate::client::ApiUsage;

/// Extract token counts from a Messages API usage block.
pub fn extract_token_usage(usage: &ApiUsage) -> TokenCount {
    TokenCount {
        input: usage.input_tokens,
        output: usage.output_tokens,
    }
}

/// Calculate the cost for a token count given model pricing.
pub fn calculate_cost(tokens: TokenCount, pricing: &ModelPricing) -> TokenUsage {
    TokenUsage {
        tokens,
        cost_usd: pricing.estimate_cost(tokens),
    }
}

/// Known model pricing (per million tokens).
/// These are approximate and should be updated as pricing changes.
pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        id if id.contains("claude-3-opus") => Some(ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        }),
        id if id.contains("claude-3-5-sonnet") => Some(ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        }),
        id if id.contains("claude-3-5-haiku") => Some(ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        }),
        _ => None,
    }
}
