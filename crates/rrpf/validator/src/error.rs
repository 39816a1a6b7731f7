use std::fmt;

use rrpf_types::RrpError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable codes for structural request errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    InvalidVersion,
    MissingTimestamp,
    UnexpectedTimestamp,
    InvalidMaxTotalRows,
    InvalidMaxGroups,
    EmptyTableName,
    EmptyFields,
    InvalidLimit,
    EmptyTypes,
    MaxGroupsExceeded,
    EmptyRequest,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::InvalidVersion => "invalid_version",
            ValidationCode::MissingTimestamp => "missing_timestamp",
            ValidationCode::UnexpectedTimestamp => "unexpected_timestamp",
            ValidationCode::InvalidMaxTotalRows => "invalid_max_total_rows",
            ValidationCode::InvalidMaxGroups => "invalid_max_groups",
            ValidationCode::EmptyTableName => "empty_table_name",
            ValidationCode::EmptyFields => "empty_fields",
            ValidationCode::InvalidLimit => "invalid_limit",
            ValidationCode::EmptyTypes => "empty_types",
            ValidationCode::MaxGroupsExceeded => "max_groups_exceeded",
            ValidationCode::EmptyRequest => "empty_request",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural problem with a request, located by a dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code} at {path}: {message}")]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: String,
    pub path: String,
}

impl ValidationError {
    pub fn new(code: ValidationCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.into(),
        }
    }
}

impl From<ValidationError> for RrpError {
    fn from(error: ValidationError) -> Self {
        RrpError::new(error.code.as_str(), error.message, Some(error.path))
    }
}
