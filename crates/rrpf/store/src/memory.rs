//! In-memory reference implementation of [`PayloadStore`].
//!
//! Deterministic and test-friendly. Every load hands out a fresh clone, so
//! callers can never reach the stored value.

use std::collections::HashMap;
use std::sync::RwLock;

use rrpf_types::{Digest, Response};

use crate::traits::{check_key, PayloadStore};
use crate::{StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryPayloadStore {
    payloads: RwLock<HashMap<Digest, Response>>,
}

impl MemoryPayloadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> StoreResult<usize> {
        let guard = self
            .payloads
            .read()
            .map_err(|_| StoreError::Backend("payload lock poisoned".to_string()))?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl PayloadStore for MemoryPayloadStore {
    fn store(&self, digest: &Digest, response: &Response) -> StoreResult<()> {
        check_key(digest)?;
        let mut guard = self
            .payloads
            .write()
            .map_err(|_| StoreError::Backend("payload lock poisoned".to_string()))?;
        if guard.insert(digest.clone(), response.clone()).is_some() {
            tracing::debug!(digest = %digest, "replaced payload in memory");
        } else {
            tracing::debug!(digest = %digest, "stored payload in memory");
        }
        Ok(())
    }

    fn load(&self, digest: &Digest) -> StoreResult<Response> {
        check_key(digest)?;
        let guard = self
            .payloads
            .read()
            .map_err(|_| StoreError::Backend("payload lock poisoned".to_string()))?;
        guard
            .get(digest)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(digest.clone()))
    }
}
