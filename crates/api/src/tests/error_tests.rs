// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use uniform_core::CoreError;
use uniform_domain::{DomainError, RequestStatus};
use uniform_persistence::PersistenceError;

use crate::{ApiError, BoundaryError, translate_core_error, translate_domain_error};

#[test]
fn test_error_codes_and_statuses() {
    let cases: Vec<(ApiError, &str, u16)> = vec![
        (
            ApiError::InvalidInput {
                field: String::from("items"),
                message: String::from("bad"),
            },
            "VALIDATION_ERROR",
            400,
        ),
        (
            ApiError::DomainRuleViolation {
                rule: String::from("requested_only"),
                message: String::from("bad"),
            },
            "VALIDATION_ERROR",
            400,
        ),
        (
            ApiError::route_not_found("GET", "/nowhere"),
            "NOT_FOUND",
            404,
        ),
        (
            ApiError::InsufficientStock {
                message: String::new(),
            },
            "INSUFFICIENT_STOCK",
            409,
        ),
        (
            ApiError::AllowanceExceeded {
                message: String::new(),
            },
            "ALLOWANCE_EXCEEDED",
            409,
        ),
        (
            ApiError::CooldownActive {
                message: String::new(),
            },
            "COOLDOWN_ACTIVE",
            409,
        ),
        (
            ApiError::InvalidStatusTransition {
                message: String::new(),
            },
            "INVALID_STATUS_TRANSITION",
            409,
        ),
        (
            ApiError::Internal {
                message: String::new(),
            },
            "INTERNAL_SERVER_ERROR",
            500,
        ),
    ];

    for (err, code, status) in cases {
        assert_eq!(err.code(), code);
        assert_eq!(err.http_status(), status, "status for {code}");
    }
}

#[test]
fn test_route_not_found_message() {
    let err: ApiError = ApiError::route_not_found("DELETE", "/api/staff");
    assert_eq!(err.message(), "Route not found: DELETE /api/staff");
}

#[test]
fn test_boundary_error_becomes_invalid_input() {
    let err: ApiError = ApiError::from(BoundaryError::NotAnInteger { field: "staffId" });
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("staffId"),
            message: String::from("staffId must be an integer"),
        }
    );
}

#[test]
fn test_domain_validation_errors_name_their_field() {
    let field_of = |err: DomainError| match translate_domain_error(err) {
        ApiError::InvalidInput { field, .. } => field,
        other => panic!("Expected InvalidInput, got {other:?}"),
    };

    assert_eq!(field_of(DomainError::InvalidStaffId(0)), "staffId");
    assert_eq!(field_of(DomainError::InvalidRequestId(-1)), "id");
    assert_eq!(field_of(DomainError::EmptyItems), "items");
    assert_eq!(field_of(DomainError::DuplicateUniformItem(3)), "items");
    assert_eq!(
        field_of(DomainError::NoteTooLong {
            length: 501,
            max: 500
        }),
        "note"
    );
    assert_eq!(field_of(DomainError::EmptyRoleName), "roleName");
    assert_eq!(
        field_of(DomainError::InvalidSettingValue {
            field: "annualLimit",
            value: -1
        }),
        "annualLimit"
    );
}

#[test]
fn test_domain_rule_errors() {
    let err: ApiError = translate_domain_error(DomainError::RoleNotConfigured(String::from(
        "DRIVER",
    )));
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "role_allowance_configured"
    ));
    assert_eq!(err.http_status(), 400);

    let err: ApiError = translate_domain_error(DomainError::RequestNotEditable {
        request_id: 4,
        status: RequestStatus::Dispatched,
    });
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "requested_only"
    ));
}

#[test]
fn test_conflict_errors_keep_the_domain_message() {
    let domain: DomainError = DomainError::AllowanceExceeded {
        used: 2,
        requested: 1,
        limit: 2,
    };
    let expected: String = domain.to_string();

    let err: ApiError = translate_domain_error(domain);
    assert_eq!(err.code(), "ALLOWANCE_EXCEEDED");
    assert_eq!(err.message(), expected);
}

#[test]
fn test_core_not_found_errors() {
    let err: ApiError = translate_core_error(CoreError::StaffNotFound(99));
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.message(), "Staff not found: 99");

    let err: ApiError = translate_core_error(CoreError::RequestNotFound(7));
    assert_eq!(err.message(), "Request not found: 7");

    let err: ApiError = translate_core_error(CoreError::RoleNotFound(String::from("DRIVER")));
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Role"
    ));
}

#[test]
fn test_stock_lost_at_commit_is_a_conflict() {
    let err: ApiError = translate_core_error(CoreError::StockUnavailable { uniform_item_id: 6 });
    assert_eq!(err.code(), "INSUFFICIENT_STOCK");
    assert_eq!(err.http_status(), 409);
}

#[test]
fn test_internal_errors_hide_details() {
    let err: ApiError = translate_core_error(CoreError::from(PersistenceError::DatabaseError(
        String::from("disk I/O error at /var/lib/uniform.db"),
    )));
    assert_eq!(err.code(), "INTERNAL_SERVER_ERROR");
    assert!(!err.message().contains("disk"));

    let err: ApiError = translate_core_error(CoreError::StockReleaseFailed {
        uniform_item_id: 2,
        rows_affected: 0,
    });
    assert_eq!(err.http_status(), 500);
}
