//! Payload store configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{FilesystemPayloadStore, MemoryPayloadStore, PayloadStore};

/// Which [`PayloadStore`] implementation to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Memory,
    Filesystem,
}

/// Payload store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,

    /// Payload directory; required by the filesystem backend.
    pub root: Option<PathBuf>,

    /// fsync each payload before renaming it into place.
    pub sync_writes: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            root: None,
            sync_writes: true,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no store config, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Open the configured store.
    pub fn open(&self) -> Result<Box<dyn PayloadStore>, ConfigError> {
        match self.backend {
            StoreBackend::Memory => Ok(Box::new(MemoryPayloadStore::new())),
            StoreBackend::Filesystem => {
                let root = self.root.as_ref().ok_or(ConfigError::MissingRoot)?;
                tracing::info!(root = %root.display(), "opening filesystem payload store");
                let store =
                    FilesystemPayloadStore::new(root)?.with_sync_writes(self.sync_writes);
                Ok(Box::new(store))
            }
        }
    }
}
