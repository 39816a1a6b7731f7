//! Structural validation for RRP requests.
//!
//! [`validate_request`] runs every rule in a fixed order and concatenates
//! the results, so a given invalid request always yields the same error
//! list. Any error is fatal: the request is neither fingerprinted nor
//! fulfilled.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod error;
pub mod rules;

pub use error::{ValidationCode, ValidationError};

use rrpf_types::Request;

type Rule = fn(&Request) -> Vec<ValidationError>;

const RULES: [Rule; 7] = [
    rules::validate_version,
    rules::validate_as_of,
    rules::validate_constraints,
    rules::validate_tables,
    rules::validate_events,
    rules::validate_group_count,
    rules::validate_not_empty,
];

/// Run all protocol validation rules.
pub fn validate_request(request: &Request) -> Vec<ValidationError> {
    RULES.iter().flat_map(|rule| rule(request)).collect()
}
