use flonotes_bedrock::tokens::{calculate_usage, get_pricing};
use flonotes_core::models::token_count::TokenCount;

#[test]
fn known_models_have_pricing() {
    assert!(get_pricing("us.anthropic.claude-sonnet-4-20250514-v1:0").is_some());
    assert!(get_pricing("us.anthropic.claude-opus-4-1-20250805-v1:0").is_some());
    assert!(get_pricing("amazon.titan-text-express-v1").is_none());
}

#[test]
fn usage_cost_follows_pricing() {
    let tokens = TokenCount {
        input: 1_000_000,
        output: 100_000,
    };
    let usage = calculate_usage("us.anthropic.claude-sonnet-4-20250514-v1:0", tokens);
    assert_eq!(usage.tokens.total(), 1_100_000);
    assert!((usage.cost_usd - 4.5).abs() < 1e-9);
}

#[test]
fn unknown_model_costs_nothing() {
    let tokens = TokenCount {
        input: 500,
        output: 200,
    };
    let usage = calculate_usage("some.unpriced-model", tokens);
    assert_eq!(usage.cost_usd, 0.0);
    assert_eq!(usage.tokens, tokens);
}
