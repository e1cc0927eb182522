// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shape validation for loosely typed JSON input.
//!
//! Request bodies arrive as `serde_json::Value` fields so that a wrong type
//! becomes a validation error with a field name rather than a decoder
//! failure. Identifiers accept numbers and numeric strings; quantities must
//! be JSON numbers with no fractional part.

use num_traits::cast::ToPrimitive;
use serde_json::{Number, Value};
use thiserror::Error;
use uniform_domain::{RequestItemInput, RequestStatus};

/// Boundary validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// A required field is absent or null.
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// A field is not an integer.
    #[error("{field} must be an integer")]
    NotAnInteger { field: &'static str },

    /// A field is not an array.
    #[error("{field} must be an array")]
    NotAnArray { field: &'static str },

    /// A field is not an object.
    #[error("{field} must be an object")]
    NotAnObject { field: &'static str },

    /// A field is not a string.
    #[error("{field} must be a string")]
    NotAString { field: &'static str },

    /// The status is missing or not one of the lifecycle values.
    #[error("status is required and must be one of REQUESTED, DISPATCHED, ARRIVED, COLLECTED (got '{0}')")]
    InvalidStatus(String),

    /// A path id is not an integer.
    #[error("id must be a positive integer (got '{0}')")]
    InvalidId(String),
}

impl BoundaryError {
    /// The input field this error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotAnInteger { field }
            | Self::NotAnArray { field }
            | Self::NotAnObject { field }
            | Self::NotAString { field } => field,
            Self::InvalidStatus(_) => "status",
            Self::InvalidId(_) => "id",
        }
    }
}

/// Converts a JSON number to `i64` if it has no fractional part.
fn number_to_i64(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.fract().abs() < f64::EPSILON)
            .and_then(|value| value.to_i64())
    })
}

/// Reads an integer that may also be sent as a numeric string.
///
/// # Errors
///
/// Returns `BoundaryError::Missing` for an absent value and
/// `BoundaryError::NotAnInteger` for anything that is not integral.
pub fn coerce_integer(field: &'static str, value: Option<&Value>) -> Result<i64, BoundaryError> {
    match value {
        None | Some(Value::Null) => Err(BoundaryError::Missing { field }),
        Some(Value::Number(number)) => {
            number_to_i64(number).ok_or(BoundaryError::NotAnInteger { field })
        }
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| BoundaryError::NotAnInteger { field }),
        Some(_) => Err(BoundaryError::NotAnInteger { field }),
    }
}

/// Reads an integer that must be a JSON number.
///
/// # Errors
///
/// Returns `BoundaryError::Missing` for an absent value and
/// `BoundaryError::NotAnInteger` otherwise.
pub fn strict_integer(field: &'static str, value: Option<&Value>) -> Result<i64, BoundaryError> {
    match value {
        None | Some(Value::Null) => Err(BoundaryError::Missing { field }),
        Some(Value::Number(number)) => {
            number_to_i64(number).ok_or(BoundaryError::NotAnInteger { field })
        }
        Some(_) => Err(BoundaryError::NotAnInteger { field }),
    }
}

/// Reads an optional string. Absent and null both give `None`.
///
/// # Errors
///
/// Returns `BoundaryError::NotAString` for any other JSON type.
pub fn optional_string(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<String>, BoundaryError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(BoundaryError::NotAString { field }),
    }
}

/// Reads the `items` array of a create or edit body.
///
/// Only shapes are checked here. Positivity and duplicates are left to the
/// domain validator so that its error order applies.
///
/// # Errors
///
/// Returns an error if `items` is absent, not an array, or contains an
/// entry that is not an object with integral `uniformItemId` and
/// `quantity`.
pub fn parse_items(value: Option<&Value>) -> Result<Vec<RequestItemInput>, BoundaryError> {
    let entries: &Vec<Value> = match value {
        None | Some(Value::Null) => return Err(BoundaryError::Missing { field: "items" }),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(BoundaryError::NotAnArray { field: "items" }),
    };

    entries
        .iter()
        .map(|entry| {
            let Value::Object(fields) = entry else {
                return Err(BoundaryError::NotAnObject { field: "items" });
            };
            let uniform_item_id: i64 = coerce_integer("uniformItemId", fields.get("uniformItemId"))?;
            let quantity: i64 = strict_integer("quantity", fields.get("quantity"))?;
            Ok(RequestItemInput::new(uniform_item_id, quantity))
        })
        .collect()
}

/// Reads a lifecycle status.
///
/// # Errors
///
/// Returns `BoundaryError::InvalidStatus` unless the value is one of the
/// four status strings.
pub fn parse_status(value: Option<&Value>) -> Result<RequestStatus, BoundaryError> {
    match value {
        Some(Value::String(text)) => text
            .parse::<RequestStatus>()
            .map_err(|_| BoundaryError::InvalidStatus(text.clone())),
        Some(other) => Err(BoundaryError::InvalidStatus(other.to_string())),
        None => Err(BoundaryError::InvalidStatus(String::new())),
    }
}

/// Parses a request id taken from a URL path.
///
/// Sign is not checked here; non-positive ids are rejected by the engine.
///
/// # Errors
///
/// Returns `BoundaryError::InvalidId` if the text is not an integer.
pub fn parse_path_id(raw: &str) -> Result<i64, BoundaryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| BoundaryError::InvalidId(raw.to_string()))
}

/// Parses an optional integer query parameter. Blank values are ignored.
///
/// # Errors
///
/// Returns `BoundaryError::NotAnInteger` if a non-blank value does not
/// parse.
pub fn parse_query_integer(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<i64>, BoundaryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<i64>()
            .map(Some)
            .map_err(|_| BoundaryError::NotAnInteger { field }),
    }
}

/// Parses an optional status query parameter. Blank values are ignored.
///
/// # Errors
///
/// Returns `BoundaryError::InvalidStatus` for an unknown status.
pub fn parse_query_status(raw: Option<&str>) -> Result<Option<RequestStatus>, BoundaryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<RequestStatus>()
            .map(Some)
            .map_err(|_| BoundaryError::InvalidStatus(text.to_string())),
    }
}
