//! # rrpf-types
//!
//! Immutable value types for the Reproducible Request Protocol (RRP).
//!
//! A [`Request`] describes a data-fulfillment request: which tables and
//! event streams to read, under which row budget, as of which instant.
//! A [`Response`] carries the fulfilled data together with its
//! [`Provenance`], whose `inputs_digest` fingerprints the canonical form of
//! the request that produced it.
//!
//! The core never mutates a request; every component borrows it.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod ids;
mod request;
mod response;
pub mod section;
pub mod time;

pub use ids::{CorrelationId, Digest, RequestId, DIGEST_HEX_LEN};
pub use request::{
    AsOf, AsOfMode, Constraints, DataRequests, EventRequest, Intent, IntentMode, Request,
    TableRequest,
};
pub use response::{Provenance, QueryStats, Response, RrpError};

/// The single protocol version this implementation speaks.
pub const RRP_VERSION: &str = "1.0";

/// `as_of` value reported on responses to rejected requests.
pub const AS_OF_UNKNOWN: &str = "unknown";

/// `as_of` value reported under [`AsOfMode::Latest`].
pub const AS_OF_LATEST: &str = "latest";
