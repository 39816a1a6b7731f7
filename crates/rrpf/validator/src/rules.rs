//! Individual validation rules.
//!
//! Each rule inspects one aspect of a request and returns every violation it
//! finds. Rules never depend on each other's results.

use rrpf_types::{AsOfMode, Request, RRP_VERSION};

use crate::error::{ValidationCode, ValidationError};

pub fn validate_version(request: &Request) -> Vec<ValidationError> {
    if request.rrp_version == RRP_VERSION {
        return Vec::new();
    }
    vec![ValidationError::new(
        ValidationCode::InvalidVersion,
        format!(
            "rrp_version must be '{}', got '{}'",
            RRP_VERSION, request.rrp_version
        ),
        "rrp_version",
    )]
}

pub fn validate_as_of(request: &Request) -> Vec<ValidationError> {
    match (request.as_of.mode, request.as_of.timestamp.is_some()) {
        (AsOfMode::Timestamp, false) => vec![ValidationError::new(
            ValidationCode::MissingTimestamp,
            "as_of mode TIMESTAMP requires a timestamp",
            "as_of.timestamp",
        )],
        (AsOfMode::Latest, true) => vec![ValidationError::new(
            ValidationCode::UnexpectedTimestamp,
            "as_of mode LATEST requires timestamp to be None",
            "as_of.timestamp",
        )],
        _ => Vec::new(),
    }
}

pub fn validate_constraints(request: &Request) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if request.constraints.max_total_rows <= 0 {
        errors.push(ValidationError::new(
            ValidationCode::InvalidMaxTotalRows,
            "max_total_rows must be > 0",
            "constraints.max_total_rows",
        ));
    }
    if request.constraints.max_groups <= 0 {
        errors.push(ValidationError::new(
            ValidationCode::InvalidMaxGroups,
            "max_groups must be > 0",
            "constraints.max_groups",
        ));
    }
    errors
}

pub fn validate_tables(request: &Request) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (index, table) in request.data.tables.iter().enumerate() {
        let prefix = format!("data.tables[{index}]");
        if table.table.is_empty() {
            errors.push(ValidationError::new(
                ValidationCode::EmptyTableName,
                "table name must be non-empty",
                format!("{prefix}.table"),
            ));
        }
        if table.fields.is_empty() {
            errors.push(ValidationError::new(
                ValidationCode::EmptyFields,
                "fields list must not be empty",
                format!("{prefix}.fields"),
            ));
        }
        if table.limit <= 0 {
            errors.push(ValidationError::new(
                ValidationCode::InvalidLimit,
                "limit must be > 0",
                format!("{prefix}.limit"),
            ));
        }
    }
    errors
}

pub fn validate_events(request: &Request) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (index, event) in request.data.events.iter().enumerate() {
        let prefix = format!("data.events[{index}]");
        if event.types.is_empty() {
            errors.push(ValidationError::new(
                ValidationCode::EmptyTypes,
                "types list must not be empty",
                format!("{prefix}.types"),
            ));
        }
        if event.fields.is_empty() {
            errors.push(ValidationError::new(
                ValidationCode::EmptyFields,
                "fields list must not be empty",
                format!("{prefix}.fields"),
            ));
        }
        if event.limit <= 0 {
            errors.push(ValidationError::new(
                ValidationCode::InvalidLimit,
                "limit must be > 0",
                format!("{prefix}.limit"),
            ));
        }
    }
    errors
}

pub fn validate_group_count(request: &Request) -> Vec<ValidationError> {
    let total = request.data.group_count();
    let allowed = request.constraints.max_groups;
    if i64::try_from(total).map_or(true, |total| total > allowed) {
        return vec![ValidationError::new(
            ValidationCode::MaxGroupsExceeded,
            format!("Total tables+events ({total}) exceeds max_groups ({allowed})"),
            "data",
        )];
    }
    Vec::new()
}

pub fn validate_not_empty(request: &Request) -> Vec<ValidationError> {
    if request.data.is_empty() {
        return vec![ValidationError::new(
            ValidationCode::EmptyRequest,
            "At least one table or event must be requested",
            "data",
        )];
    }
    Vec::new()
}
