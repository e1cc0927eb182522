// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use tracing::error;
use uniform_core::CoreError;
use uniform_domain::DomainError;

use crate::boundary::BoundaryError;

/// Message returned in place of internal error details.
const INTERNAL_MESSAGE: &str = "An unexpected error occurred.";

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Each variant maps to one stable error code and HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A requested quantity exceeds stock on hand.
    InsufficientStock {
        /// A human-readable description.
        message: String,
    },
    /// The request would exceed the annual allowance.
    AllowanceExceeded {
        /// A human-readable description.
        message: String,
    },
    /// An item was requested again before its cooldown elapsed.
    CooldownActive {
        /// A human-readable description.
        message: String,
    },
    /// The status change skips, repeats or reverses a lifecycle step.
    InvalidStatusTransition {
        /// A human-readable description.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// The stable error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } | Self::DomainRuleViolation { .. } => "VALIDATION_ERROR",
            Self::ResourceNotFound { .. } => "NOT_FOUND",
            Self::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            Self::AllowanceExceeded { .. } => "ALLOWANCE_EXCEEDED",
            Self::CooldownActive { .. } => "COOLDOWN_ACTIVE",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    /// The HTTP status code for this error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } | Self::DomainRuleViolation { .. } => 400,
            Self::ResourceNotFound { .. } => 404,
            Self::InsufficientStock { .. }
            | Self::AllowanceExceeded { .. }
            | Self::CooldownActive { .. }
            | Self::InvalidStatusTransition { .. } => 409,
            Self::Internal { .. } => 500,
        }
    }

    /// The client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message, .. }
            | Self::DomainRuleViolation { message, .. }
            | Self::ResourceNotFound { message, .. }
            | Self::InsufficientStock { message }
            | Self::AllowanceExceeded { message }
            | Self::CooldownActive { message }
            | Self::InvalidStatusTransition { message }
            | Self::Internal { message } => message,
        }
    }

    /// A not-found error for a route that does not exist.
    #[must_use]
    pub fn route_not_found(method: &str, path: &str) -> Self {
        Self::ResourceNotFound {
            resource_type: String::from("Route"),
            message: format!("Route not found: {method} {path}"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InsufficientStock { message }
            | Self::AllowanceExceeded { message }
            | Self::CooldownActive { message }
            | Self::InvalidStatusTransition { message } => {
                write!(f, "{}: {message}", self.code())
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<BoundaryError> for ApiError {
    fn from(err: BoundaryError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    let invalid = |field: &str| ApiError::InvalidInput {
        field: field.to_string(),
        message: message.clone(),
    };

    match err {
        DomainError::InvalidStaffId(_) => invalid("staffId"),
        DomainError::InvalidRequestId(_) => invalid("id"),
        DomainError::EmptyItems
        | DomainError::InvalidLineItem { .. }
        | DomainError::DuplicateUniformItem(_) => invalid("items"),
        DomainError::NoteTooLong { .. } => invalid("note"),
        DomainError::InvalidStatus(_) => invalid("status"),
        DomainError::EmptyRoleName => invalid("roleName"),
        DomainError::InvalidSettingValue { field, .. } => invalid(field),
        DomainError::RoleNotConfigured(_) | DomainError::InvalidAllowanceLimit { .. } => {
            ApiError::DomainRuleViolation {
                rule: String::from("role_allowance_configured"),
                message,
            }
        }
        DomainError::RequestNotEditable { .. } | DomainError::RequestNotDeletable { .. } => {
            ApiError::DomainRuleViolation {
                rule: String::from("requested_only"),
                message,
            }
        }
        DomainError::InsufficientStock { .. } => ApiError::InsufficientStock { message },
        DomainError::AllowanceExceeded { .. } => ApiError::AllowanceExceeded { message },
        DomainError::CooldownActive { .. } => ApiError::CooldownActive { message },
        DomainError::InvalidStatusTransition { .. } => {
            ApiError::InvalidStatusTransition { message }
        }
        DomainError::TimestampFormat(_) => {
            error!(%message, "Timestamp formatting failed");
            ApiError::Internal {
                message: String::from(INTERNAL_MESSAGE),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// Store failures and integrity faults are logged and reported without
/// their details.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let not_found = |resource_type: &str, err: &CoreError| ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: err.to_string(),
    };

    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::StaffNotFound(_) => not_found("Staff", &err),
        CoreError::UniformItemNotFound(_) => not_found("Uniform item", &err),
        CoreError::RequestNotFound(_) => not_found("Request", &err),
        CoreError::RoleNotFound(_) => not_found("Role", &err),
        CoreError::StockUnavailable { .. } => ApiError::InsufficientStock {
            message: err.to_string(),
        },
        CoreError::StockReleaseFailed { .. } | CoreError::Store(_) => {
            error!(error = %err, "Internal failure while handling request");
            ApiError::Internal {
                message: String::from(INTERNAL_MESSAGE),
            }
        }
    }
}
