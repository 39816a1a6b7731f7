use rrpf_types::Digest;
use thiserror::Error;

/// Result type for payload store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Payload store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("payload not found: {0}")]
    NotFound(Digest),

    #[error("refusing to use the empty digest as a payload key")]
    EmptyDigest,

    #[error("malformed digest key: {0:?}")]
    InvalidDigest(String),

    #[error("integrity check failed: stored digest {recorded} does not match requested digest {expected}")]
    IntegrityMismatch { expected: Digest, recorded: Digest },

    #[error("corrupt payload for {digest}: {reason}")]
    CorruptPayload { digest: Digest, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// True when stored content no longer corresponds to its key.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            StoreError::IntegrityMismatch { .. } | StoreError::CorruptPayload { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Errors loading or applying a [`crate::StoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("filesystem backend requires a root directory")]
    MissingRoot,

    #[error("failed to open store: {0}")]
    Store(#[from] StoreError),
}
