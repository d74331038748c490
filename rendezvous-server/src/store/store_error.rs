use thiserror::Error;

/// Failures of the backing store that are unrelated to write preconditions.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("invalid store request: {0}")]
    InvalidRequest(String),
}
