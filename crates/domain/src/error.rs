// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_status::RequestStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The staff identifier is not a positive integer.
    InvalidStaffId(i64),
    /// The request identifier is not a positive integer.
    InvalidRequestId(i64),
    /// A request must contain at least one line item.
    EmptyItems,
    /// A line item has a non-positive item id or quantity.
    InvalidLineItem {
        /// The uniform item id supplied.
        uniform_item_id: i64,
        /// The quantity supplied.
        quantity: i64,
    },
    /// The same uniform item appears more than once in a request.
    DuplicateUniformItem(i64),
    /// The note exceeds the maximum length after trimming.
    NoteTooLong {
        /// Length of the trimmed note in characters.
        length: usize,
        /// The maximum permitted length.
        max: usize,
    },
    /// The requested quantity exceeds the stock currently on hand.
    InsufficientStock {
        /// The uniform item id.
        uniform_item_id: i64,
        /// The quantity requested.
        requested: i32,
        /// The quantity on hand.
        available: i32,
    },
    /// The staff member's role has no annual allowance configured.
    RoleNotConfigured(String),
    /// The configured annual limit for a role is negative.
    InvalidAllowanceLimit {
        /// The role name.
        role: String,
        /// The configured limit.
        limit: i64,
    },
    /// The request would push yearly usage past the role's annual limit.
    AllowanceExceeded {
        /// Quantity already used this year.
        used: i64,
        /// Quantity being requested.
        requested: i64,
        /// The annual limit.
        limit: u32,
    },
    /// The item was requested again before its cooldown elapsed.
    CooldownActive {
        /// The uniform item id.
        uniform_item_id: i64,
        /// The instant the cooldown ends (storage format).
        cooldown_until: String,
    },
    /// A status string is not one of the known request statuses.
    InvalidStatus(String),
    /// The status change violates the linear request lifecycle.
    InvalidStatusTransition {
        /// Current status.
        from: RequestStatus,
        /// Requested status.
        to: RequestStatus,
    },
    /// Only requests in the REQUESTED status can be edited.
    RequestNotEditable {
        /// The request id.
        request_id: i64,
        /// The current status.
        status: RequestStatus,
    },
    /// Only requests in the REQUESTED status can be deleted.
    RequestNotDeletable {
        /// The request id.
        request_id: i64,
        /// The current status.
        status: RequestStatus,
    },
    /// A role name is empty after trimming.
    EmptyRoleName,
    /// A configuration value must be an integer >= 0.
    InvalidSettingValue {
        /// The setting being updated.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A timestamp could not be rendered in storage format.
    TimestampFormat(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStaffId(id) => {
                write!(f, "staffId must be a positive integer, got {id}")
            }
            Self::InvalidRequestId(id) => {
                write!(f, "id must be a positive integer, got {id}")
            }
            Self::EmptyItems => write!(f, "items must be a non-empty array"),
            Self::InvalidLineItem {
                uniform_item_id,
                quantity,
            } => {
                write!(
                    f,
                    "Each item must include uniformItemId and positive integer quantity \
                     (uniformItemId={uniform_item_id}, quantity={quantity})"
                )
            }
            Self::DuplicateUniformItem(id) => {
                write!(f, "Duplicate uniformItemId in request: {id}")
            }
            Self::NoteTooLong { length, max } => {
                write!(f, "note must be {max} characters or less (got {length})")
            }
            Self::InsufficientStock {
                uniform_item_id,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient stock for uniform item {uniform_item_id}: requested {requested}, available {available}"
                )
            }
            Self::RoleNotConfigured(role) => {
                write!(f, "Role '{role}' is not configured for allowance limits")
            }
            Self::InvalidAllowanceLimit { role, limit } => {
                write!(
                    f,
                    "Configured allowance limit for role '{role}' is invalid: {limit}"
                )
            }
            Self::AllowanceExceeded {
                used,
                requested,
                limit,
            } => {
                write!(
                    f,
                    "Request exceeds allowance limit: {used} used + {requested} requested > {limit}"
                )
            }
            Self::CooldownActive {
                uniform_item_id,
                cooldown_until,
            } => {
                write!(
                    f,
                    "Cooldown active for uniform item {uniform_item_id} until {cooldown_until}"
                )
            }
            Self::InvalidStatus(status) => write!(f, "Invalid request status: '{status}'"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Invalid status transition from {from} to {to}")
            }
            Self::RequestNotEditable { request_id, status } => {
                write!(
                    f,
                    "Only REQUESTED requests can be edited (request {request_id} is {status})"
                )
            }
            Self::RequestNotDeletable { request_id, status } => {
                write!(
                    f,
                    "Only REQUESTED requests can be deleted (request {request_id} is {status})"
                )
            }
            Self::EmptyRoleName => write!(f, "roleName is required"),
            Self::InvalidSettingValue { field, value } => {
                write!(f, "{field} must be an integer >= 0, got {value}")
            }
            Self::TimestampFormat(msg) => write!(f, "Failed to format timestamp: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
