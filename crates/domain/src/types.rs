// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::request_status::RequestStatus;
use serde::{Deserialize, Serialize};

/// A staff role name.
///
/// Role names are case-insensitive and always held upper-cased, so
/// `"manager"` and `"MANAGER"` refer to the same role.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleName(String);

impl RoleName {
    /// Creates a role name, trimming and upper-casing the input.
    ///
    /// No validation is performed; use [`RoleName::parse`] for user input.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_uppercase())
    }

    /// Parses a role name supplied by a caller.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRoleName` if the name is blank.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let role: Self = Self::new(name);
        if role.0.is_empty() {
            return Err(DomainError::EmptyRoleName);
        }
        Ok(role)
    }

    /// Returns the normalized role name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A staff member as seen by the request engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub staff_id: i64,
    pub name: String,
    pub store_id: i64,
    pub store_name: String,
    pub role: RoleName,
}

/// A sized uniform item and its stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformItem {
    pub uniform_item_id: i64,
    pub sku: String,
    pub size: String,
    pub item_name: String,
    /// Never negative; only reduced through a conditional decrement.
    pub stock_on_hand: i32,
}

/// A persisted request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformRequest {
    pub request_id: i64,
    pub staff_id: i64,
    pub status: RequestStatus,
    pub note: Option<String>,
    pub requested_at: String,
    pub dispatched_at: Option<String>,
    pub arrived_at: Option<String>,
    pub collected_at: Option<String>,
}

/// A validated line item ready to be reserved and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub uniform_item_id: i64,
    pub quantity: i32,
}

/// A stored line item expanded with item details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLine {
    pub uniform_item_id: i64,
    pub item_name: String,
    pub size: String,
    pub quantity: i32,
}

/// List projection of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    pub request_id: i64,
    pub staff_name: String,
    pub store_name: String,
    pub status: RequestStatus,
    pub requested_at: String,
}

/// Detail projection of a request, with line items in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetail {
    pub request_id: i64,
    pub staff_id: i64,
    pub staff_name: String,
    pub store_name: String,
    pub status: RequestStatus,
    pub note: Option<String>,
    pub requested_at: String,
    pub dispatched_at: Option<String>,
    pub arrived_at: Option<String>,
    pub collected_at: Option<String>,
    pub items: Vec<RequestLine>,
}

/// Filters for listing requests. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub staff_id: Option<i64>,
    pub store_id: Option<i64>,
}

/// A staff directory row with the quantity already used in a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffUsage {
    pub staff: StaffRecord,
    pub used_quantity: i64,
}

/// A line item as supplied by a caller, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItemInput {
    pub uniform_item_id: i64,
    pub quantity: i64,
}

impl RequestItemInput {
    #[must_use]
    pub const fn new(uniform_item_id: i64, quantity: i64) -> Self {
        Self {
            uniform_item_id,
            quantity,
        }
    }
}

/// A request that passed input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub items: Vec<LineItem>,
    pub note: Option<String>,
}

impl ValidatedRequest {
    /// Total quantity across all line items.
    #[must_use]
    pub fn requested_total(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }
}
