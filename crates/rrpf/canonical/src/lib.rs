//! # rrpf-canonical
//!
//! Deterministic fingerprinting of RRP requests.
//!
//! - [`canonicalize_request`] maps a request to an order-independent JSON
//!   tree with an explicit, fixed field set per record.
//! - [`to_canonical_json`] renders a tree with sorted keys, no whitespace and
//!   literal UTF-8. It is the only serializer used for both fingerprints and
//!   persisted responses.
//! - [`compute_digest`] hashes canonical JSON with SHA-256.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod canonicalize;
mod digest;
mod error;
mod json;
pub mod sorting;

pub use canonicalize::canonicalize_request;
pub use digest::{compute_digest, fingerprint, Fingerprint};
pub use error::CanonicalError;
pub use json::{to_canonical_json, to_canonical_json_value};
pub use sorting::stable_sorted;
