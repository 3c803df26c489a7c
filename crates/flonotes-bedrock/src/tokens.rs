use flonotes_core::models::token_count::{ModelPricing, TokenCount, TokenUsage};

/// Extract token counts from a Bedrock Converse response.
pub fn extract_token_usage(
    usage: &aws_sdk_bedrockruntime::types::TokenUsage,
) -> TokenCount {
    TokenCount {
        input: usage.input_tokens.max(0) as u64,
        output: usage.output_tokens.max(0) as u64,
    }
}

/// Token counts with the cost filled in from the model's pricing, or zero
/// cost when the model has no known pricing.
pub fn calculate_usage(model_id: &str, tokens: TokenCount) -> TokenUsage {
    TokenUsage {
        tokens,
        cost_usd: get_pricing(model_id)
            .map(|p| p.estimate_cost(tokens))
            .unwrap_or(0.0),
    }
}

/// Known model pricing (per million tokens).
/// These are approximate and should be updated as pricing changes.
pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        id if id.contains("claude-opus-4") => Some(ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        }),
        id if id.contains("claude-sonnet-4") => Some(ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        }),
        id if id.contains("claude-haiku") => Some(ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        }),
        _ => None,
    }
}
