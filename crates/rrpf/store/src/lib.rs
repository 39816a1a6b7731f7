//! RRPF payload storage.
//!
//! Responses are persisted under the digest of the request that produced
//! them and replayed without re-running fulfillment:
//! - [`MemoryPayloadStore`]: map-backed, for tests and embedding
//! - [`FilesystemPayloadStore`]: one canonical JSON file per digest, atomic
//!   writes, integrity verification on load
//!
//! Both backends refuse the empty digest and accept exactly the same keys.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod config;
mod error;
pub mod filesystem;
pub mod memory;
mod replay;
#[cfg(test)]
mod test_support;
mod traits;

pub use config::{StoreBackend, StoreConfig};
pub use error::{ConfigError, StoreError, StoreResult};
pub use filesystem::FilesystemPayloadStore;
pub use memory::MemoryPayloadStore;
pub use replay::replay_from_store;
pub use traits::PayloadStore;
