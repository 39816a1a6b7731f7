use rrpf_types::time::canonical_utc;
use rrpf_types::{
    AsOf, AsOfMode, Constraints, CorrelationId, DataRequests, EventRequest, Intent, Request,
    TableRequest,
};
use serde_json::{json, Value};

use crate::error::CanonicalError;
use crate::json::sort_keys;
use crate::sorting::stable_sorted;

/// Convert a request into its canonical, order-independent tree.
///
/// Pure: the request is only borrowed, and two requests differing only in
/// the order of their entries or of any list inside an entry produce equal
/// trees.
pub fn canonicalize_request(request: &Request) -> Result<Value, CanonicalError> {
    Ok(json!({
        "rrp_version": request.rrp_version,
        "request_id": request.request_id.as_str(),
        "correlation_id": request.correlation_id.as_ref().map(CorrelationId::as_str),
        "requested_at": canonical_utc(&request.requested_at),
        "intent": canonical_intent(&request.intent),
        "as_of": canonical_as_of(&request.as_of)?,
        "constraints": canonical_constraints(&request.constraints),
        "data": canonical_data(&request.data),
    }))
}

fn canonical_intent(intent: &Intent) -> Value {
    json!({
        "name": intent.name,
        "mode": intent.mode.as_str(),
    })
}

fn canonical_as_of(as_of: &AsOf) -> Result<Value, CanonicalError> {
    let timestamp = match as_of.mode {
        AsOfMode::Latest => Value::Null,
        AsOfMode::Timestamp => {
            let instant = as_of
                .timestamp
                .as_ref()
                .ok_or(CanonicalError::MissingAsOfTimestamp)?;
            Value::String(canonical_utc(instant))
        }
    };
    Ok(json!({
        "mode": as_of.mode.as_str(),
        "timestamp": timestamp,
    }))
}

fn canonical_constraints(constraints: &Constraints) -> Value {
    json!({
        "max_total_rows": constraints.max_total_rows,
        "max_groups": constraints.max_groups,
        "fail_on_partial": constraints.fail_on_partial,
    })
}

// Entries are ordered by their protocol sort key; the canonical rendering
// of the entry breaks ties so duplicate keys are order-independent too.
fn canonical_data(data: &DataRequests) -> Value {
    let tables = stable_sorted(
        data.tables.iter().map(|t| (t.table.clone(), canonical_table(t))),
        |(key, entry)| (key.clone(), sort_keys(entry).to_string()),
    );
    let events = stable_sorted(
        data.events.iter().map(|e| (event_sort_key(e), canonical_event(e))),
        |(key, entry)| (key.clone(), sort_keys(entry).to_string()),
    );
    json!({
        "tables": tables.into_iter().map(|(_, entry)| entry).collect::<Vec<_>>(),
        "events": events.into_iter().map(|(_, entry)| entry).collect::<Vec<_>>(),
    })
}

fn canonical_table(table: &TableRequest) -> Value {
    let derived = match table.derived.as_deref() {
        Some(derived) if !derived.is_empty() => json!(sorted_strings(derived)),
        _ => Value::Null,
    };
    json!({
        "table": table.table,
        "fields": sorted_strings(&table.fields),
        "limit": table.limit,
        "derived": derived,
    })
}

fn canonical_event(event: &EventRequest) -> Value {
    json!({
        "types": sorted_strings(&event.types),
        "fields": sorted_strings(&event.fields),
        "limit": event.limit,
    })
}

fn event_sort_key(event: &EventRequest) -> String {
    sorted_strings(&event.types).join(",")
}

fn sorted_strings(values: &[String]) -> Vec<String> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}
