// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use uniform_domain::{RequestStatus, RoleName, UniformItem, UniformRequest, is_low_stock};

/// Outcome of a successful request creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRequest {
    pub request_id: i64,
    pub staff_id: i64,
    pub status: RequestStatus,
    pub note: Option<String>,
    pub requested_at: String,
}

impl From<UniformRequest> for CreatedRequest {
    fn from(request: UniformRequest) -> Self {
        Self {
            request_id: request.request_id,
            staff_id: request.staff_id,
            status: request.status,
            note: request.note,
            requested_at: request.requested_at,
        }
    }
}

/// Outcome of a successful deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedRequest {
    pub request_id: i64,
    pub deleted: bool,
}

/// Outcome of a successful status advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub request_id: i64,
    pub status: RequestStatus,
}

/// The global cooldown in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownSetting {
    pub cooldown_days: u32,
}

/// A persisted annual limit override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLimit {
    pub role: RoleName,
    pub annual_limit: i32,
}

/// A persisted cooldown override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCooldown {
    pub role: RoleName,
    pub cooldown_days: i32,
}

/// A staff directory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffDirectoryEntry {
    pub staff_id: i64,
    pub name: String,
    pub store_name: String,
    pub role: RoleName,
    pub remaining_allowance: i64,
}

/// A uniform item with its low-stock flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformItemView {
    pub item: UniformItem,
    pub is_low_stock: bool,
}

impl From<UniformItem> for UniformItemView {
    fn from(item: UniformItem) -> Self {
        let is_low_stock: bool = is_low_stock(item.stock_on_hand);
        Self { item, is_low_stock }
    }
}
