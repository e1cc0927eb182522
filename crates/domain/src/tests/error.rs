// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, RequestStatus};

#[test]
fn test_transition_error_names_both_statuses() {
    let error = DomainError::InvalidStatusTransition {
        from: RequestStatus::Requested,
        to: RequestStatus::Collected,
    };
    assert_eq!(
        error.to_string(),
        "Invalid status transition from REQUESTED to COLLECTED"
    );
}

#[test]
fn test_duplicate_item_message_includes_id() {
    let error = DomainError::DuplicateUniformItem(42);
    assert!(error.to_string().contains("42"));
}

#[test]
fn test_not_editable_message() {
    let error = DomainError::RequestNotEditable {
        request_id: 7,
        status: RequestStatus::Dispatched,
    };
    assert!(error.to_string().starts_with("Only REQUESTED requests can be edited"));
}

#[test]
fn test_errors_are_std_errors() {
    let error: Box<dyn std::error::Error> = Box::new(DomainError::EmptyItems);
    assert_eq!(error.to_string(), "items must be a non-empty array");
}
