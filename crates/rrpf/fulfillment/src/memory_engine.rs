//! Reference engine producing deterministic synthetic rows.

use std::collections::BTreeSet;

use rrpf_types::{QueryStats, Request};
use serde_json::{json, Value};

use crate::engine::{FulfillmentEngine, FulfillmentResult};

/// Upper bound on synthetic rows per section.
pub const MAX_SYNTHETIC_ROWS: i64 = 3;

/// An engine with no data source behind it.
///
/// Each table section gets `min(limit, 3)` rows of `{"id": i}`, each event
/// section the same count of `{"id": i, "type": <first requested type>}`.
/// Every section reports one group. Sections named in the skip list are left
/// out, which exercises the partial and failed paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEngine {
    skipped: BTreeSet<String>,
}

impl InMemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never fulfill `section`.
    pub fn skip_section(mut self, section: impl Into<String>) -> Self {
        self.skipped.insert(section.into());
        self
    }

    fn row_count(limit: i64) -> u64 {
        limit.clamp(0, MAX_SYNTHETIC_ROWS) as u64
    }
}

impl FulfillmentEngine for InMemoryEngine {
    fn fulfill(&self, request: &Request) -> FulfillmentResult {
        let mut result = FulfillmentResult::new();

        for table in &request.data.tables {
            let section = table.section_id();
            if self.skipped.contains(&section) {
                continue;
            }
            let count = Self::row_count(table.limit);
            let rows: Vec<Value> = (0..count).map(|i| json!({ "id": i })).collect();
            result.insert_section(section, json!({ "rows": rows }), QueryStats::new(count, 1));
        }

        for event in &request.data.events {
            let section = event.section_id();
            if self.skipped.contains(&section) {
                continue;
            }
            let event_type = event.types.first().map_or("unknown", String::as_str);
            let count = Self::row_count(event.limit);
            let rows: Vec<Value> = (0..count)
                .map(|i| json!({ "id": i, "type": event_type }))
                .collect();
            result.insert_section(section, json!({ "rows": rows }), QueryStats::new(count, 1));
        }

        tracing::trace!(sections = result.data.len(), "synthetic fulfillment");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use rrpf_types::{
        AsOf, Constraints, DataRequests, EventRequest, Intent, IntentMode, TableRequest,
    };

    fn request(table_limit: i64, event_limit: i64) -> Request {
        Request::new(
            "req-mem",
            DateTime::parse_from_rfc3339("2023-01-01T00:00:00Z").unwrap(),
            Intent::new("synthetic", IntentMode::Analysis),
            AsOf::latest(),
            Constraints {
                max_total_rows: 100,
                max_groups: 10,
                fail_on_partial: false,
            },
            DataRequests {
                tables: vec![TableRequest::new("orders", ["id"], table_limit)],
                events: vec![EventRequest::new(["logout", "login"], ["user"], event_limit)],
            },
        )
    }

    #[test]
    fn caps_rows_at_three() {
        let result = InMemoryEngine::new().fulfill(&request(10, 2));
        assert_eq!(
            result.data["table:orders"],
            json!({"rows": [{"id": 0}, {"id": 1}, {"id": 2}]})
        );
        assert_eq!(result.query_stats["table:orders"], QueryStats::new(3, 1));
        assert_eq!(result.query_stats["event:login+logout"], QueryStats::new(2, 1));
    }

    #[test]
    fn event_rows_use_first_requested_type() {
        let result = InMemoryEngine::new().fulfill(&request(1, 1));
        assert_eq!(
            result.data["event:login+logout"],
            json!({"rows": [{"id": 0, "type": "logout"}]})
        );
    }

    #[test]
    fn skipped_sections_are_omitted() {
        let result = InMemoryEngine::new()
            .skip_section("table:orders")
            .fulfill(&request(3, 3));
        assert!(!result.data.contains_key("table:orders"));
        assert!(!result.query_stats.contains_key("table:orders"));
        assert!(result.data.contains_key("event:login+logout"));
    }

    #[test]
    fn deterministic_across_calls() {
        let engine = InMemoryEngine::new();
        assert_eq!(engine.fulfill(&request(3, 3)), engine.fulfill(&request(3, 3)));
    }
}
