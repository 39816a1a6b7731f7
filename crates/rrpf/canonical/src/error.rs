use thiserror::Error;

/// Errors raised while fingerprinting a request.
#[derive(Debug, Error)]
pub enum CanonicalError {
    #[error("as_of mode 'timestamp' requires a timestamp")]
    MissingAsOfTimestamp,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
