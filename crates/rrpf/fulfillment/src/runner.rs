//! The fulfillment orchestrator.
//!
//! A run ends in exactly one [`Outcome`]; the shape of the response in each
//! state is tabulated on [`Response`].

use std::collections::BTreeMap;
use std::fmt;

use rrpf_canonical::fingerprint;
use rrpf_store::PayloadStore;
use rrpf_types::time::{canonical_utc, now_utc};
use rrpf_types::{
    AsOf, AsOfMode, Digest, Provenance, Request, Response, RrpError, AS_OF_LATEST, AS_OF_UNKNOWN,
};
use rrpf_validator::validate_request;

use crate::accounting::check_row_constraints;
use crate::engine::FulfillmentEngine;
use crate::error::FulfillmentError;

pub const MAX_TOTAL_ROWS_EXCEEDED: &str = "max_total_rows_exceeded";
pub const MISSING_SECTION: &str = "missing_section";

/// Section reported on row budget violations.
pub const CONSTRAINTS_SECTION: &str = "constraints";

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rejected,
    Failed,
    Partial,
    Complete,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Failed => "failed",
            Self::Partial => "partial",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a run produced.
///
/// Rejected runs carry an empty `canonical_json` and the empty digest.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub response: Response,
    pub canonical_json: String,
    pub digest: Digest,
}

impl RunResult {
    pub fn outcome(&self) -> Outcome {
        match (self.response.ok, self.response.partial) {
            (false, _) if self.digest.is_empty() => Outcome::Rejected,
            (false, _) => Outcome::Failed,
            (true, true) => Outcome::Partial,
            (true, false) => Outcome::Complete,
        }
    }
}

/// Validate, fingerprint and fulfill a request.
///
/// The engine is only called for valid requests and is called exactly once.
/// Engine panics propagate.
pub fn run_fulfillment<E>(request: &Request, engine: &E) -> Result<RunResult, FulfillmentError>
where
    E: FulfillmentEngine + ?Sized,
{
    let validation_errors = validate_request(request);
    if !validation_errors.is_empty() {
        tracing::warn!(
            request_id = %request.request_id,
            errors = validation_errors.len(),
            first = %validation_errors[0],
            "request rejected"
        );
        return Ok(rejected(request, validation_errors.into_iter().map(RrpError::from).collect()));
    }

    let fingerprint = fingerprint(request)?;
    tracing::debug!(request_id = %request.request_id, digest = %fingerprint.digest, "request fingerprinted");

    let result = engine.fulfill(request);
    let total_rows = result.total_rows();
    tracing::debug!(
        request_id = %request.request_id,
        sections = result.data.len(),
        total_rows,
        "engine returned"
    );

    let mut errors = Vec::new();
    if !check_row_constraints(total_rows, &request.constraints) {
        errors.push(RrpError::new(
            MAX_TOTAL_ROWS_EXCEEDED,
            format!(
                "Total rows {} exceeds limit {}",
                total_rows, request.constraints.max_total_rows
            ),
            Some(CONSTRAINTS_SECTION.to_string()),
        ));
    }

    // BTreeSet iteration yields missing sections in lexicographic order.
    for section in request.data.expected_sections() {
        if !result.data.contains_key(&section) {
            errors.push(RrpError::new(
                MISSING_SECTION,
                format!("Section {section} was not fulfilled"),
                Some(section),
            ));
        }
    }

    let failed = !errors.is_empty() && request.constraints.fail_on_partial;
    let partial = !errors.is_empty() && !request.constraints.fail_on_partial;
    let data = if failed { BTreeMap::new() } else { result.data };

    let response = Response {
        ok: !failed,
        request_id: request.request_id.clone(),
        as_of: resolve_as_of(&request.as_of),
        data,
        partial,
        errors,
        provenance: Provenance {
            fulfilled_at: now_utc(),
            inputs_digest: fingerprint.digest.clone(),
            query_stats: result.query_stats,
        },
    };

    let run = RunResult {
        response,
        canonical_json: fingerprint.canonical_json,
        digest: fingerprint.digest,
    };
    tracing::info!(
        request_id = %request.request_id,
        digest = %run.digest,
        outcome = %run.outcome(),
        errors = run.response.errors.len(),
        "fulfillment finished"
    );
    Ok(run)
}

/// [`run_fulfillment`], then persist the response under its digest.
///
/// Rejected runs have no digest and are never stored.
pub fn run_and_store<E, S>(
    request: &Request,
    engine: &E,
    store: &S,
) -> Result<RunResult, FulfillmentError>
where
    E: FulfillmentEngine + ?Sized,
    S: PayloadStore + ?Sized,
{
    let run = run_fulfillment(request, engine)?;
    if !run.digest.is_empty() {
        store.store(&run.digest, &run.response)?;
        tracing::debug!(digest = %run.digest, "response persisted");
    }
    Ok(run)
}

fn rejected(request: &Request, errors: Vec<RrpError>) -> RunResult {
    RunResult {
        response: Response {
            ok: false,
            request_id: request.request_id.clone(),
            as_of: AS_OF_UNKNOWN.to_string(),
            data: BTreeMap::new(),
            partial: false,
            errors,
            provenance: Provenance {
                fulfilled_at: now_utc(),
                inputs_digest: Digest::empty(),
                query_stats: BTreeMap::new(),
            },
        },
        canonical_json: String::new(),
        digest: Digest::empty(),
    }
}

fn resolve_as_of(as_of: &AsOf) -> String {
    match (as_of.mode, as_of.timestamp.as_ref()) {
        (AsOfMode::Latest, _) => AS_OF_LATEST.to_string(),
        (AsOfMode::Timestamp, Some(timestamp)) => canonical_utc(timestamp),
        (AsOfMode::Timestamp, None) => AS_OF_UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FulfillmentResult;
    use chrono::{DateTime, FixedOffset};
    use rrpf_types::{
        Constraints, DataRequests, EventRequest, Intent, IntentMode, QueryStats, TableRequest,
    };
    use serde_json::json;
    use std::cell::Cell;

    struct Fixed {
        result: FulfillmentResult,
        calls: Cell<usize>,
    }

    impl Fixed {
        fn new(result: FulfillmentResult) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl FulfillmentEngine for Fixed {
        fn fulfill(&self, _request: &Request) -> FulfillmentResult {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn request(fail_on_partial: bool) -> Request {
        Request::new(
            "req-1",
            ts("2023-01-01T12:00:00Z"),
            Intent::new("test", IntentMode::Snapshot),
            AsOf::latest(),
            Constraints {
                max_total_rows: 10,
                max_groups: 5,
                fail_on_partial,
            },
            DataRequests {
                tables: vec![TableRequest::new("t1", ["f1"], 5)],
                events: vec![EventRequest::new(["logout", "login"], ["user"], 5)],
            },
        )
    }

    fn full_result(rows_each: u64) -> FulfillmentResult {
        let mut result = FulfillmentResult::new();
        result.insert_section("table:t1", json!({"rows": []}), QueryStats::new(rows_each, 1));
        result.insert_section(
            "event:login+logout",
            json!({"rows": []}),
            QueryStats::new(rows_each, 1),
        );
        result
    }

    #[test]
    fn complete_run() {
        let engine = Fixed::new(full_result(2));
        let run = run_fulfillment(&request(true), &engine).unwrap();
        assert_eq!(run.outcome(), Outcome::Complete);
        assert!(run.response.ok);
        assert!(!run.response.partial);
        assert!(run.response.errors.is_empty());
        assert_eq!(run.response.data.len(), 2);
        assert_eq!(run.response.as_of, "latest");
        assert_eq!(run.response.provenance.inputs_digest, run.digest);
        assert!(run.digest.is_well_formed());
        assert_eq!(engine.calls.get(), 1);
    }

    #[test]
    fn rejected_run_skips_engine() {
        let engine = Fixed::new(full_result(1));
        let mut invalid = request(true);
        invalid.rrp_version = "2.0".into();

        let run = run_fulfillment(&invalid, &engine).unwrap();
        assert_eq!(run.outcome(), Outcome::Rejected);
        assert_eq!(engine.calls.get(), 0);
        assert!(run.canonical_json.is_empty());
        assert!(run.digest.is_empty());
        assert_eq!(run.response.as_of, "unknown");
        assert!(run.response.data.is_empty());
        assert!(run.response.provenance.query_stats.is_empty());
        assert_eq!(run.response.errors.len(), 1);
        assert_eq!(run.response.errors[0].code, "invalid_version");
        assert_eq!(run.response.errors[0].section.as_deref(), Some("rrp_version"));
    }

    #[test]
    fn row_budget_violation_fails_under_strict_policy() {
        let engine = Fixed::new(full_result(6));
        let run = run_fulfillment(&request(true), &engine).unwrap();
        assert_eq!(run.outcome(), Outcome::Failed);
        assert!(run.response.data.is_empty());
        assert_eq!(run.response.provenance.query_stats.len(), 2);
        assert!(!run.digest.is_empty());

        let error = &run.response.errors[0];
        assert_eq!(error.code, "max_total_rows_exceeded");
        assert_eq!(error.message, "Total rows 12 exceeds limit 10");
        assert_eq!(error.section.as_deref(), Some("constraints"));
    }

    #[test]
    fn row_budget_violation_is_partial_under_lenient_policy() {
        let engine = Fixed::new(full_result(6));
        let run = run_fulfillment(&request(false), &engine).unwrap();
        assert_eq!(run.outcome(), Outcome::Partial);
        assert!(run.response.ok);
        assert_eq!(run.response.data.len(), 2);
    }

    #[test]
    fn budget_exactly_reached_is_complete() {
        let engine = Fixed::new(full_result(5));
        let run = run_fulfillment(&request(true), &engine).unwrap();
        assert_eq!(run.outcome(), Outcome::Complete);
    }

    #[test]
    fn missing_sections_are_reported_in_order() {
        let engine = Fixed::new(FulfillmentResult::new());
        let run = run_fulfillment(&request(false), &engine).unwrap();
        assert_eq!(run.outcome(), Outcome::Partial);
        let sections: Vec<_> = run
            .response
            .errors
            .iter()
            .map(|e| (e.code.as_str(), e.section.as_deref().unwrap()))
            .collect();
        assert_eq!(
            sections,
            vec![
                ("missing_section", "event:login+logout"),
                ("missing_section", "table:t1"),
            ]
        );
        assert_eq!(
            run.response.errors[1].message,
            "Section table:t1 was not fulfilled"
        );
    }

    #[test]
    fn budget_error_precedes_missing_sections() {
        let mut result = FulfillmentResult::new();
        result.insert_section("table:t1", json!({"rows": []}), QueryStats::new(11, 1));
        let run = run_fulfillment(&request(false), &Fixed::new(result)).unwrap();
        let codes: Vec<_> = run.response.errors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["max_total_rows_exceeded", "missing_section"]);
    }

    #[test]
    fn timestamp_as_of_renders_in_utc() {
        let mut req = request(true);
        req.as_of = AsOf::at(ts("2023-06-01T14:30:00+02:00"));
        let run = run_fulfillment(&req, &Fixed::new(full_result(1))).unwrap();
        assert_eq!(run.response.as_of, "2023-06-01T12:30:00Z");
    }

    #[test]
    fn works_with_trait_objects() {
        let engine: Box<dyn FulfillmentEngine> = Box::new(Fixed::new(full_result(1)));
        let run = run_fulfillment(&request(true), engine.as_ref()).unwrap();
        assert_eq!(run.outcome(), Outcome::Complete);
    }
}
