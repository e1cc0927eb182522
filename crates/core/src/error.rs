// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use uniform_domain::DomainError;

/// Errors raised by the request lifecycle engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No staff member exists with this id.
    StaffNotFound(i64),
    /// No uniform item exists with this id.
    UniformItemNotFound(i64),
    /// No request exists with this id.
    RequestNotFound(i64),
    /// No role exists with this name.
    RoleNotFound(String),
    /// The conditional stock decrement matched no row at commit time.
    StockUnavailable {
        /// The uniform item whose stock ran out.
        uniform_item_id: i64,
    },
    /// Reserved stock could not be returned to its item.
    StockReleaseFailed {
        /// The uniform item that should have been incremented.
        uniform_item_id: i64,
        /// Rows affected by the increment.
        rows_affected: usize,
    },
    /// The backing store failed.
    Store(String),
}

impl CoreError {
    /// Wraps any store failure.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(err.to_string())
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::StaffNotFound(id) => write!(f, "Staff not found: {id}"),
            Self::UniformItemNotFound(id) => write!(f, "Uniform item not found: {id}"),
            Self::RequestNotFound(id) => write!(f, "Request not found: {id}"),
            Self::RoleNotFound(role) => write!(f, "Role not found: {role}"),
            Self::StockUnavailable { uniform_item_id } => {
                write!(f, "Insufficient stock for uniform item: {uniform_item_id}")
            }
            Self::StockReleaseFailed {
                uniform_item_id,
                rows_affected,
            } => {
                write!(
                    f,
                    "Failed to release stock for item {uniform_item_id} ({rows_affected} rows affected)"
                )
            }
            Self::Store(msg) => write!(f, "Store error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
