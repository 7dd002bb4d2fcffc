//! Domain-level error types.

use thiserror::Error;

use crate::ports::StoreError;

/// Domain errors - state transition failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Session store failure: {0}")]
    Store(#[from] StoreError),

    #[error("State encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}
