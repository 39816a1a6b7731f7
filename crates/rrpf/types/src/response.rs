use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{Digest, RequestId};
use crate::time::canonical_utc_serde;

/// Outcome of one orchestration call.
///
/// | state      | `ok`  | `partial` | `data`    | digest   |
/// |------------|-------|-----------|-----------|----------|
/// | rejected   | false | false     | empty     | empty    |
/// | failed     | false | false     | empty     | computed |
/// | partial-ok | true  | true      | populated | computed |
/// | full-ok    | true  | false     | populated | computed |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    pub request_id: RequestId,
    pub as_of: String,
    pub data: BTreeMap<String, Value>,
    pub partial: bool,
    pub errors: Vec<RrpError>,
    pub provenance: Provenance,
}

/// Protocol-level error record carried inside a [`Response`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrpError {
    pub code: String,
    pub message: String,
    pub section: Option<String>,
}

impl RrpError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, section: Option<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            section,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(with = "canonical_utc_serde")]
    pub fulfilled_at: DateTime<Utc>,
    pub inputs_digest: Digest,
    pub query_stats: BTreeMap<String, QueryStats>,
}

/// Per-section engine accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStats {
    pub rows: u64,
    pub groups: u64,
}

impl QueryStats {
    pub fn new(rows: u64, groups: u64) -> Self {
        Self { rows, groups }
    }
}
