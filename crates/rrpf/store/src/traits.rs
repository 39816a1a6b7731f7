use rrpf_types::{Digest, Response};

use crate::{StoreError, StoreResult};

/// Digest-addressed persistence for fulfilled responses.
///
/// Storage is immutable by convention: a digest names one request's
/// canonical form, so rewriting it with an equal response is a no-op and
/// rewriting it with a different one is last-write-wins.
pub trait PayloadStore: Send + Sync {
    /// Persist `response` under `digest`. Idempotent.
    ///
    /// Must reject the empty digest.
    fn store(&self, digest: &Digest, response: &Response) -> StoreResult<()>;

    /// Load an independent copy of a stored response, or
    /// [`StoreError::NotFound`].
    fn load(&self, digest: &Digest) -> StoreResult<Response>;
}

/// Shared key check so every backend accepts and refuses the same keys.
pub(crate) fn check_key(digest: &Digest) -> StoreResult<()> {
    if digest.is_empty() {
        tracing::warn!("refusing empty digest");
        return Err(StoreError::EmptyDigest);
    }
    if !digest.is_well_formed() {
        tracing::warn!(digest = %digest, "refusing malformed digest");
        return Err(StoreError::InvalidDigest(digest.to_string()));
    }
    Ok(())
}
