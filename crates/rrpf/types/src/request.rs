use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::ids::{CorrelationId, RequestId};
use crate::section;
use crate::RRP_VERSION;

/// A data-fulfillment request.
///
/// Collections are passed as ordered sequences but carry no ordering
/// semantics: permuting any of them yields the same canonical form and
/// digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub rrp_version: String,
    pub request_id: RequestId,
    pub correlation_id: Option<CorrelationId>,
    #[serde(with = "crate::time::instant_serde")]
    pub requested_at: DateTime<FixedOffset>,
    pub intent: Intent,
    pub as_of: AsOf,
    pub constraints: Constraints,
    pub data: DataRequests,
}

impl Request {
    /// Build a request pinned to [`RRP_VERSION`] with no correlation id.
    pub fn new(
        request_id: impl Into<RequestId>,
        requested_at: DateTime<FixedOffset>,
        intent: Intent,
        as_of: AsOf,
        constraints: Constraints,
        data: DataRequests,
    ) -> Self {
        Self {
            rrp_version: RRP_VERSION.to_string(),
            request_id: request_id.into(),
            correlation_id: None,
            requested_at,
            intent,
            as_of,
            constraints,
            data,
        }
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<CorrelationId>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }
}

/// Why the caller is asking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub mode: IntentMode,
}

impl Intent {
    pub fn new(name: impl Into<String>, mode: IntentMode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentMode {
    Snapshot,
    Analysis,
    Audit,
}

impl IntentMode {
    /// Stable wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentMode::Snapshot => "snapshot",
            IntentMode::Analysis => "analysis",
            IntentMode::Audit => "audit",
        }
    }
}

/// Point-in-time selector.
///
/// `timestamp` must be absent under [`AsOfMode::Latest`] and present under
/// [`AsOfMode::Timestamp`]; the validator reports either violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsOf {
    pub mode: AsOfMode,
    #[serde(default, with = "crate::time::instant_serde::option")]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl AsOf {
    pub fn latest() -> Self {
        Self {
            mode: AsOfMode::Latest,
            timestamp: None,
        }
    }

    pub fn at(timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            mode: AsOfMode::Timestamp,
            timestamp: Some(timestamp),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsOfMode {
    Latest,
    Timestamp,
}

impl AsOfMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AsOfMode::Latest => "latest",
            AsOfMode::Timestamp => "timestamp",
        }
    }
}

/// Budgets and failure policy for one request.
///
/// Signed so that non-positive values survive deserialization and reach the
/// validator instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub max_total_rows: i64,
    pub max_groups: i64,
    pub fail_on_partial: bool,
}

/// The requested groups: table reads and event-stream reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRequests {
    #[serde(default)]
    pub tables: Vec<TableRequest>,
    #[serde(default)]
    pub events: Vec<EventRequest>,
}

impl DataRequests {
    /// Number of requested groups, counted per entry.
    pub fn group_count(&self) -> usize {
        self.tables.len() + self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.events.is_empty()
    }

    /// Section identifiers the response is expected to carry.
    ///
    /// Entries mapping to the same identifier collapse into one.
    pub fn expected_sections(&self) -> BTreeSet<String> {
        self.tables
            .iter()
            .map(TableRequest::section_id)
            .chain(self.events.iter().map(EventRequest::section_id))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRequest {
    pub table: String,
    pub fields: Vec<String>,
    pub limit: i64,
    #[serde(default)]
    pub derived: Option<Vec<String>>,
}

impl TableRequest {
    pub fn new<I, S>(table: impl Into<String>, fields: I, limit: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            limit,
            derived: None,
        }
    }

    pub fn with_derived<I, S>(mut self, derived: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derived = Some(derived.into_iter().map(Into::into).collect());
        self
    }

    pub fn section_id(&self) -> String {
        section::table_section_id(&self.table)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    pub types: Vec<String>,
    pub fields: Vec<String>,
    pub limit: i64,
}

impl EventRequest {
    pub fn new<T, F, S>(types: T, fields: F, limit: i64) -> Self
    where
        T: IntoIterator<Item = S>,
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            fields: fields.into_iter().map(Into::into).collect(),
            limit,
        }
    }

    pub fn section_id(&self) -> String {
        section::event_section_id(&self.types)
    }
}
