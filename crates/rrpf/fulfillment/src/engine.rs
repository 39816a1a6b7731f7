//! The pluggable data source behind the orchestrator.

use std::collections::BTreeMap;

use rrpf_types::{QueryStats, Request};
use serde_json::Value;

/// Data and per-section statistics produced by an engine.
///
/// Both maps are keyed by section identifier (see [`rrpf_types::section`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FulfillmentResult {
    pub data: BTreeMap<String, Value>,
    pub query_stats: BTreeMap<String, QueryStats>,
}

impl FulfillmentResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fulfilled section.
    pub fn insert_section(&mut self, section: impl Into<String>, data: Value, stats: QueryStats) {
        let section = section.into();
        self.data.insert(section.clone(), data);
        self.query_stats.insert(section, stats);
    }

    /// Sum of `rows` across all sections.
    pub fn total_rows(&self) -> u64 {
        self.query_stats
            .values()
            .fold(0u64, |total, stats| total.saturating_add(stats.rows))
    }
}

/// A concrete data source.
///
/// Implementations must only fulfill what is explicitly requested, respect
/// every per-group limit and return rows in a deterministic order (see
/// [`crate::stable_order`]). The orchestrator treats the call as a single
/// blocking operation.
pub trait FulfillmentEngine {
    fn fulfill(&self, request: &Request) -> FulfillmentResult;
}

impl<E: FulfillmentEngine + ?Sized> FulfillmentEngine for &E {
    fn fulfill(&self, request: &Request) -> FulfillmentResult {
        (**self).fulfill(request)
    }
}

impl<E: FulfillmentEngine + ?Sized> FulfillmentEngine for Box<E> {
    fn fulfill(&self, request: &Request) -> FulfillmentResult {
        (**self).fulfill(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn total_rows_sums_all_sections() {
        let mut result = FulfillmentResult::new();
        result.insert_section("table:a", json!({"rows": []}), QueryStats::new(4, 1));
        result.insert_section("event:x", json!({"rows": []}), QueryStats::new(7, 1));
        assert_eq!(result.total_rows(), 11);
        assert_eq!(result.data.len(), 2);
    }

    #[test]
    fn total_rows_saturates() {
        let mut result = FulfillmentResult::new();
        result.insert_section("table:a", Value::Null, QueryStats::new(u64::MAX, 1));
        result.insert_section("table:b", Value::Null, QueryStats::new(1, 1));
        assert_eq!(result.total_rows(), u64::MAX);
    }
}
