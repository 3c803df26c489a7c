use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
