use thiserror::Error;

/// Failures that prevent the orchestrator from producing a response.
///
/// Protocol-level problems (invalid requests, row budgets, missing
/// sections) are not errors here; they are reported inside the response.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("canonicalization failed: {0}")]
    Canonical(#[from] rrpf_canonical::CanonicalError),

    #[error("payload store failed: {0}")]
    Store(#[from] rrpf_store::StoreError),
}
