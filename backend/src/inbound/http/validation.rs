//! Request field validation shared by the HTTP handlers.
//!
//! Request bodies deserialise every field as optional text so that a missing
//! or malformed value is reported with the field name and a stable code in
//! the error `details`, instead of actix's generic JSON rejection.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::{ComplaintStatus, Error, MovementKind};

/// Stable codes placed in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidType,
    InvalidDate,
    InvalidStatus,
}

impl ValidationCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidType => "invalid_type",
            Self::InvalidDate => "invalid_date",
            Self::InvalidStatus => "invalid_status",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: String, value: Option<&str>) -> Error {
    let details = match value {
        Some(value) => json!({ "field": field.0, "value": value, "code": code.as_str() }),
        None => json!({ "field": field.0, "code": code.as_str() }),
    };
    Error::invalid_request(message).with_details(details)
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {}", field.0),
        None,
    )
}

/// Require a non-blank text field.
pub(crate) fn required_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing_field_error(field)),
    }
}

/// Parse the `type` field of a check-in/out submission.
pub(crate) fn parse_movement_kind(value: Option<String>) -> Result<MovementKind, Error> {
    const FIELD: FieldName = FieldName::new("type");
    let raw = required_text(value, FIELD)?;
    raw.parse().map_err(|err: crate::domain::UnknownMovementKind| {
        field_error(FIELD, ValidationCode::InvalidType, err.to_string(), Some(&raw))
    })
}

/// Parse an ISO 8601 calendar date such as `2024-09-01`.
pub(crate) fn parse_date(value: Option<String>, field: FieldName) -> Result<NaiveDate, Error> {
    let raw = required_text(value, field)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        field_error(
            field,
            ValidationCode::InvalidDate,
            format!("{} must be a date in YYYY-MM-DD form", field.0),
            Some(&raw),
        )
    })
}

/// Parse the optional `status` query of a complaint update.
///
/// An absent value means [`ComplaintStatus::Approved`].
pub(crate) fn parse_complaint_status(value: Option<&str>) -> Result<ComplaintStatus, Error> {
    const FIELD: FieldName = FieldName::new("status");
    match value {
        None => Ok(ComplaintStatus::Approved),
        Some(raw) => raw.parse().map_err(|err: crate::domain::UnknownComplaintStatus| {
            field_error(FIELD, ValidationCode::InvalidStatus, err.to_string(), Some(raw))
        }),
    }
}
