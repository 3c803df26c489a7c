use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid session input: {0}")]
    Validation(#[from] ValidationError),
}
