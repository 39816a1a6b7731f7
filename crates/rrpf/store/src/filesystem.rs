//! Filesystem implementation of [`PayloadStore`].
//!
//! One `<digest>.json` file per payload, holding the canonical JSON of the
//! response. Writes go to a uniquely named temporary file in the same
//! directory and are then renamed over the target, so readers only ever see
//! complete files and concurrent writers of different digests never share a
//! temporary path.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use rrpf_canonical::to_canonical_json_value;
use rrpf_types::{Digest, Response};

use crate::traits::{check_key, PayloadStore};
use crate::{StoreError, StoreResult};

const PAYLOAD_EXTENSION: &str = "json";
const TEMP_PREFIX: &str = ".payload-";
const TEMP_SUFFIX: &str = ".tmp";

pub struct FilesystemPayloadStore {
    root: PathBuf,
    sync_writes: bool,
}

impl FilesystemPayloadStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            sync_writes: true,
        })
    }

    /// Whether to fsync each payload before it is renamed into place.
    pub fn with_sync_writes(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the payload file for `digest`.
    pub fn payload_path(&self, digest: &Digest) -> PathBuf {
        self.root
            .join(format!("{}.{}", digest.as_str(), PAYLOAD_EXTENSION))
    }
}

impl PayloadStore for FilesystemPayloadStore {
    fn store(&self, digest: &Digest, response: &Response) -> StoreResult<()> {
        check_key(digest)?;
        let content = to_canonical_json_value(response)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&self.root)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        if self.sync_writes {
            tmp.as_file().sync_all()?;
        }

        let path = self.payload_path(digest);
        tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;
        tracing::debug!(digest = %digest, path = %path.display(), bytes = content.len(), "stored payload");
        Ok(())
    }

    fn load(&self, digest: &Digest) -> StoreResult<Response> {
        check_key(digest)?;
        let path = self.payload_path(digest);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(digest.clone()));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let response: Response = serde_json::from_str(&content).map_err(|e| {
            tracing::warn!(digest = %digest, error = %e, "unreadable payload");
            StoreError::CorruptPayload {
                digest: digest.clone(),
                reason: e.to_string(),
            }
        })?;

        let recorded = &response.provenance.inputs_digest;
        if recorded != digest {
            tracing::warn!(
                expected = %digest,
                recorded = %recorded,
                "payload integrity check failed"
            );
            return Err(StoreError::IntegrityMismatch {
                expected: digest.clone(),
                recorded: recorded.clone(),
            });
        }

        tracing::debug!(digest = %digest, "loaded payload");
        Ok(response)
    }
}
