//! # rrpf-fulfillment
//!
//! Sequences one RRP run: validation, fingerprinting, a single engine call,
//! row budget enforcement, missing-section detection, and classification
//! into a [`Response`](rrpf_types::Response).
//!
//! Engines plug in through [`FulfillmentEngine`]. [`InMemoryEngine`] is a
//! deterministic reference implementation for tests and demos.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod accounting;
mod engine;
mod error;
pub mod memory_engine;
mod ordering;
pub mod runner;

pub use accounting::check_row_constraints;
pub use engine::{FulfillmentEngine, FulfillmentResult};
pub use error::FulfillmentError;
pub use memory_engine::InMemoryEngine;
pub use ordering::stable_order;
pub use runner::{run_and_store, run_fulfillment, Outcome, RunResult};
