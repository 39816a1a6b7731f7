use rrpf_types::{Digest, Response};

use crate::traits::PayloadStore;
use crate::StoreResult;

/// Replay a fulfilled payload without re-executing fulfillment.
///
/// A pure pass-through to [`PayloadStore::load`]; safe to call any number of
/// times.
pub fn replay_from_store<S>(digest: &Digest, store: &S) -> StoreResult<Response>
where
    S: PayloadStore + ?Sized,
{
    tracing::debug!(digest = %digest, "replaying payload");
    store.load(digest)
}
