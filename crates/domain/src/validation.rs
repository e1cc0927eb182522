// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{LineItem, RequestItemInput, ValidatedRequest};
use std::collections::HashSet;

/// Maximum length of a request note, in characters, after trimming.
pub const MAX_NOTE_LENGTH: usize = 500;

/// Validates a new request before any store access.
///
/// # Arguments
///
/// * `staff_id` - The staff member the request is for
/// * `items` - The requested line items
/// * `note` - Optional free-text note
///
/// # Returns
///
/// * `Ok(ValidatedRequest)` with typed line items and the normalized note
/// * `Err(DomainError)` describing the first rule broken
///
/// # Errors
///
/// Rules are checked in this order and the first failure wins:
/// - `staff_id` must be positive
/// - `items` must not be empty
/// - every item needs a positive id and a positive quantity
/// - no uniform item may appear twice
/// - the trimmed note must not exceed [`MAX_NOTE_LENGTH`] characters
pub fn validate_new_request(
    staff_id: i64,
    items: &[RequestItemInput],
    note: Option<&str>,
) -> Result<ValidatedRequest, DomainError> {
    if staff_id <= 0 {
        return Err(DomainError::InvalidStaffId(staff_id));
    }

    validate_request_body(items, note)
}

/// Validates an edit of an existing request's items and note.
///
/// Applies the same item and note rules as [`validate_new_request`], with
/// the request id checked first.
///
/// # Errors
///
/// Returns `DomainError::InvalidRequestId` for a non-positive id, otherwise
/// the first item or note rule broken.
pub fn validate_request_edit(
    request_id: i64,
    items: &[RequestItemInput],
    note: Option<&str>,
) -> Result<ValidatedRequest, DomainError> {
    validate_request_id(request_id)?;
    validate_request_body(items, note)
}

fn validate_request_body(
    items: &[RequestItemInput],
    note: Option<&str>,
) -> Result<ValidatedRequest, DomainError> {
    let items: Vec<LineItem> = validate_line_items(items)?;
    let note: Option<String> = normalize_note(note)?;
    Ok(ValidatedRequest { items, note })
}

/// Validates a set of line items.
///
/// # Errors
///
/// * `DomainError::EmptyItems` for an empty slice
/// * `DomainError::InvalidLineItem` for a non-positive id or quantity, or a
///   quantity too large to store
/// * `DomainError::DuplicateUniformItem` if an item id repeats
pub fn validate_line_items(items: &[RequestItemInput]) -> Result<Vec<LineItem>, DomainError> {
    if items.is_empty() {
        return Err(DomainError::EmptyItems);
    }

    let mut validated: Vec<LineItem> = Vec::with_capacity(items.len());
    for item in items {
        let quantity: Option<i32> = i32::try_from(item.quantity).ok().filter(|q| *q > 0);
        match quantity {
            Some(quantity) if item.uniform_item_id > 0 => validated.push(LineItem {
                uniform_item_id: item.uniform_item_id,
                quantity,
            }),
            _ => {
                return Err(DomainError::InvalidLineItem {
                    uniform_item_id: item.uniform_item_id,
                    quantity: item.quantity,
                });
            }
        }
    }

    // Checked only after every item is individually valid
    let mut seen: HashSet<i64> = HashSet::new();
    for item in &validated {
        if !seen.insert(item.uniform_item_id) {
            return Err(DomainError::DuplicateUniformItem(item.uniform_item_id));
        }
    }

    Ok(validated)
}

/// Trims a note and enforces its maximum length.
///
/// A note that is empty after trimming becomes `None`.
///
/// # Errors
///
/// Returns `DomainError::NoteTooLong` if the trimmed note exceeds
/// [`MAX_NOTE_LENGTH`] characters.
pub fn normalize_note(note: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(note) = note else {
        return Ok(None);
    };

    let trimmed: &str = note.trim();
    let length: usize = trimmed.chars().count();
    if length > MAX_NOTE_LENGTH {
        return Err(DomainError::NoteTooLong {
            length,
            max: MAX_NOTE_LENGTH,
        });
    }

    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}

/// Validates that a request id is positive.
///
/// # Errors
///
/// Returns `DomainError::InvalidRequestId` otherwise.
pub const fn validate_request_id(request_id: i64) -> Result<(), DomainError> {
    if request_id <= 0 {
        return Err(DomainError::InvalidRequestId(request_id));
    }
    Ok(())
}

/// Validates a configuration value such as a limit or a day count.
///
/// # Errors
///
/// Returns `DomainError::InvalidSettingValue` unless `0 <= value <= i32::MAX`.
pub fn validate_setting_value(field: &'static str, value: i64) -> Result<i32, DomainError> {
    i32::try_from(value)
        .ok()
        .filter(|v| *v >= 0)
        .ok_or(DomainError::InvalidSettingValue { field, value })
}
