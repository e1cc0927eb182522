// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, LineItem, MAX_NOTE_LENGTH, RequestItemInput, normalize_note,
    validate_new_request, validate_request_edit, validate_request_id, validate_setting_value,
};

fn items(pairs: &[(i64, i64)]) -> Vec<RequestItemInput> {
    pairs
        .iter()
        .map(|(id, quantity)| RequestItemInput::new(*id, *quantity))
        .collect()
}

#[test]
fn test_valid_request_is_accepted() {
    let result = validate_new_request(1, &items(&[(10, 2), (11, 1)]), Some("  size swap  "));
    let request = result.unwrap();
    assert_eq!(
        request.items,
        vec![
            LineItem {
                uniform_item_id: 10,
                quantity: 2,
            },
            LineItem {
                uniform_item_id: 11,
                quantity: 1,
            },
        ]
    );
    assert_eq!(request.note.as_deref(), Some("size swap"));
}

#[test]
fn test_non_positive_staff_id_is_rejected_first() {
    let result = validate_new_request(0, &[], None);
    assert_eq!(result, Err(DomainError::InvalidStaffId(0)));
}

#[test]
fn test_empty_items_are_rejected() {
    let result = validate_new_request(1, &[], None);
    assert_eq!(result, Err(DomainError::EmptyItems));
}

#[test]
fn test_zero_quantity_is_rejected() {
    let result = validate_new_request(1, &items(&[(10, 0)]), None);
    assert_eq!(
        result,
        Err(DomainError::InvalidLineItem {
            uniform_item_id: 10,
            quantity: 0,
        })
    );
}

#[test]
fn test_non_positive_item_id_is_rejected() {
    let result = validate_new_request(1, &items(&[(-4, 1)]), None);
    assert!(matches!(result, Err(DomainError::InvalidLineItem { .. })));
}

#[test]
fn test_oversized_quantity_is_rejected() {
    let result = validate_new_request(1, &items(&[(10, i64::from(i32::MAX) + 1)]), None);
    assert!(matches!(result, Err(DomainError::InvalidLineItem { .. })));
}

#[test]
fn test_duplicate_items_are_rejected() {
    let result = validate_new_request(1, &items(&[(10, 1), (11, 1), (10, 2)]), None);
    assert_eq!(result, Err(DomainError::DuplicateUniformItem(10)));
}

#[test]
fn test_invalid_item_reported_before_duplicate() {
    let result = validate_new_request(1, &items(&[(10, 1), (10, 1), (12, -1)]), None);
    assert!(matches!(result, Err(DomainError::InvalidLineItem { .. })));
}

#[test]
fn test_duplicate_reported_before_long_note() {
    let note: String = "x".repeat(MAX_NOTE_LENGTH + 1);
    let result = validate_new_request(1, &items(&[(10, 1), (10, 1)]), Some(&note));
    assert_eq!(result, Err(DomainError::DuplicateUniformItem(10)));
}

#[test]
fn test_note_length_counts_trimmed_characters() {
    let padded: String = format!("   {}   ", "é".repeat(MAX_NOTE_LENGTH));
    assert_eq!(
        normalize_note(Some(&padded)).unwrap().map(|n| n.chars().count()),
        Some(MAX_NOTE_LENGTH)
    );

    let too_long: String = "a".repeat(MAX_NOTE_LENGTH + 1);
    assert_eq!(
        normalize_note(Some(&too_long)),
        Err(DomainError::NoteTooLong {
            length: MAX_NOTE_LENGTH + 1,
            max: MAX_NOTE_LENGTH,
        })
    );
}

#[test]
fn test_blank_note_becomes_absent() {
    assert_eq!(normalize_note(Some("   ")), Ok(None));
    assert_eq!(normalize_note(None), Ok(None));
}

#[test]
fn test_edit_checks_request_id_first() {
    let result = validate_request_edit(-1, &[], None);
    assert_eq!(result, Err(DomainError::InvalidRequestId(-1)));
}

#[test]
fn test_edit_applies_item_rules() {
    let result = validate_request_edit(3, &items(&[(5, 1), (5, 1)]), None);
    assert_eq!(result, Err(DomainError::DuplicateUniformItem(5)));
}

#[test]
fn test_request_id_validation() {
    assert!(validate_request_id(1).is_ok());
    assert_eq!(validate_request_id(0), Err(DomainError::InvalidRequestId(0)));
}

#[test]
fn test_setting_value_bounds() {
    assert_eq!(validate_setting_value("cooldownDays", 0), Ok(0));
    assert_eq!(validate_setting_value("cooldownDays", 45), Ok(45));
    assert_eq!(
        validate_setting_value("annualLimit", -1),
        Err(DomainError::InvalidSettingValue {
            field: "annualLimit",
            value: -1,
        })
    );
    assert!(validate_setting_value("annualLimit", i64::from(i32::MAX) + 1).is_err());
}
