//! # RRPF - Reproducible Request Protocol Framework
//!
//! Every successful fulfillment is reproducible: semantically identical
//! requests canonicalize to the same bytes and hash to the same digest, and a
//! stored response replays without re-running the engine.
//!
//! ```ignore
//! use rrpf::prelude::*;
//!
//! let store = MemoryPayloadStore::new();
//! let run = run_and_store(&request, &InMemoryEngine::new(), &store)?;
//! let replayed = replay_from_store(&run.digest, &store)?;
//! assert_eq!(replayed, run.response);
//! ```
//!
//! The building blocks live in their own crates and are re-exported here:
//! [`types`], [`validator`], [`canonical`], [`store`] and [`fulfillment`].

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub use rrpf_canonical as canonical;
pub use rrpf_fulfillment as fulfillment;
pub use rrpf_store as store;
pub use rrpf_types as types;
pub use rrpf_validator as validator;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Protocol version spoken on the wire.
pub use rrpf_types::RRP_VERSION;

pub mod prelude {
    //! Convenient re-exports for RRPF users
    pub use rrpf_canonical::{
        canonicalize_request, compute_digest, fingerprint, to_canonical_json, CanonicalError,
        Fingerprint,
    };
    pub use rrpf_fulfillment::{
        run_and_store, run_fulfillment, FulfillmentEngine, FulfillmentError, FulfillmentResult,
        InMemoryEngine, Outcome, RunResult,
    };
    pub use rrpf_store::{
        replay_from_store, FilesystemPayloadStore, MemoryPayloadStore, PayloadStore, StoreConfig,
        StoreError,
    };
    pub use rrpf_types::{
        AsOf, Constraints, DataRequests, Digest, EventRequest, Intent, IntentMode, Provenance,
        QueryStats, Request, RequestId, Response, RrpError, TableRequest, RRP_VERSION,
    };
    pub use rrpf_validator::{validate_request, ValidationCode, ValidationError};
}
