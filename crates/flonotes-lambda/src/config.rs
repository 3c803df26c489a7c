use std::time::Duration;

/// Inference profile used when `FLONOTES_MODEL_ID` is not set.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Runtime configuration, read from the Lambda environment at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub model_id: String,
    pub region: String,
    /// `None` when `FLONOTES_GENERATION_TIMEOUT_SECS` is `0`.
    pub generation_timeout: Option<Duration>,
}

impl LambdaConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults for
    /// unset or empty values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_id = get("FLONOTES_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let region = get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let timeout_secs = match get("FLONOTES_GENERATION_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                eyre::eyre!("FLONOTES_GENERATION_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}: {e}")
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let generation_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Ok(Self {
            model_id,
            region,
            generation_timeout,
        })
    }
}
