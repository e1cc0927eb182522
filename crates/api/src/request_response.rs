// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Request bodies keep their fields as raw JSON values; the `boundary`
//! module turns them into typed input. Responses serialize with camelCase
//! keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uniform_core::{
    CooldownSetting, CreatedRequest, DeletedRequest, RoleCooldown, RoleLimit,
    StaffDirectoryEntry, StatusChange, UniformItemView,
};
use uniform_domain::{RequestDetail, RequestLine, RequestStatus, RequestSummary};

/// API request to create a uniform request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    pub staff_id: Option<Value>,
    pub items: Option<Value>,
    pub note: Option<Value>,
}

/// API request to replace a request's items and note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestItemsBody {
    pub items: Option<Value>,
    pub note: Option<Value>,
}

/// API request to advance a request's status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusBody {
    pub status: Option<Value>,
}

/// API request to change the global cooldown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCooldownBody {
    pub cooldown_days: Option<Value>,
}

/// API request to set a role's annual limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleLimitBody {
    pub role_name: Option<Value>,
    pub annual_limit: Option<Value>,
}

/// API request to set a role's cooldown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleCooldownBody {
    pub role_name: Option<Value>,
    pub cooldown_days: Option<Value>,
}

/// Query string filters for listing requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequestsQuery {
    pub status: Option<String>,
    pub staff_id: Option<String>,
    pub store_id: Option<String>,
}

/// API response for a successful creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestResponse {
    pub id: i64,
    pub staff_id: i64,
    pub status: RequestStatus,
    pub note: Option<String>,
    pub requested_at: String,
}

impl From<CreatedRequest> for CreateRequestResponse {
    fn from(created: CreatedRequest) -> Self {
        Self {
            id: created.request_id,
            staff_id: created.staff_id,
            status: created.status,
            note: created.note,
            requested_at: created.requested_at,
        }
    }
}

/// One row of the request list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummaryInfo {
    pub id: i64,
    pub staff_name: String,
    pub store_name: String,
    pub status: RequestStatus,
    pub requested_at: String,
}

impl From<RequestSummary> for RequestSummaryInfo {
    fn from(summary: RequestSummary) -> Self {
        Self {
            id: summary.request_id,
            staff_name: summary.staff_name,
            store_name: summary.store_name,
            status: summary.status,
            requested_at: summary.requested_at,
        }
    }
}

/// API response for listing requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequestsResponse {
    pub items: Vec<RequestSummaryInfo>,
}

/// A line item of a request detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLineInfo {
    pub uniform_item_id: i64,
    pub item_name: String,
    pub size: String,
    pub quantity: i32,
}

impl From<RequestLine> for RequestLineInfo {
    fn from(line: RequestLine) -> Self {
        Self {
            uniform_item_id: line.uniform_item_id,
            item_name: line.item_name,
            size: line.size,
            quantity: line.quantity,
        }
    }
}

/// API response carrying a full request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetailResponse {
    pub id: i64,
    pub staff_id: i64,
    pub staff_name: String,
    pub store_name: String,
    pub status: RequestStatus,
    pub note: Option<String>,
    pub requested_at: String,
    pub dispatched_at: Option<String>,
    pub arrived_at: Option<String>,
    pub collected_at: Option<String>,
    pub items: Vec<RequestLineInfo>,
}

impl From<RequestDetail> for RequestDetailResponse {
    fn from(detail: RequestDetail) -> Self {
        Self {
            id: detail.request_id,
            staff_id: detail.staff_id,
            staff_name: detail.staff_name,
            store_name: detail.store_name,
            status: detail.status,
            note: detail.note,
            requested_at: detail.requested_at,
            dispatched_at: detail.dispatched_at,
            arrived_at: detail.arrived_at,
            collected_at: detail.collected_at,
            items: detail.items.into_iter().map(RequestLineInfo::from).collect(),
        }
    }
}

/// API response for a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequestResponse {
    pub id: i64,
    pub deleted: bool,
}

impl From<DeletedRequest> for DeleteRequestResponse {
    fn from(deleted: DeletedRequest) -> Self {
        Self {
            id: deleted.request_id,
            deleted: deleted.deleted,
        }
    }
}

/// API response for a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeResponse {
    pub id: i64,
    pub status: RequestStatus,
}

impl From<StatusChange> for StatusChangeResponse {
    fn from(change: StatusChange) -> Self {
        Self {
            id: change.request_id,
            status: change.status,
        }
    }
}

/// One row of the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffInfo {
    pub id: i64,
    pub name: String,
    pub store_name: String,
    pub role: String,
    pub remaining_allowance: i64,
}

impl From<StaffDirectoryEntry> for StaffInfo {
    fn from(entry: StaffDirectoryEntry) -> Self {
        Self {
            id: entry.staff_id,
            name: entry.name,
            store_name: entry.store_name,
            role: entry.role.value().to_string(),
            remaining_allowance: entry.remaining_allowance,
        }
    }
}

/// API response for the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStaffResponse {
    pub items: Vec<StaffInfo>,
}

/// One row of the uniform item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniformItemInfo {
    pub id: i64,
    pub sku: String,
    pub size: String,
    pub item_name: String,
    pub stock_on_hand: i32,
    pub is_low_stock: bool,
}

impl From<UniformItemView> for UniformItemInfo {
    fn from(view: UniformItemView) -> Self {
        Self {
            id: view.item.uniform_item_id,
            sku: view.item.sku,
            size: view.item.size,
            item_name: view.item.item_name,
            stock_on_hand: view.item.stock_on_hand,
            is_low_stock: view.is_low_stock,
        }
    }
}

/// API response for the uniform item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUniformItemsResponse {
    pub items: Vec<UniformItemInfo>,
}

/// API response carrying the global cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CooldownResponse {
    pub cooldown_days: u32,
}

impl From<CooldownSetting> for CooldownResponse {
    fn from(setting: CooldownSetting) -> Self {
        Self {
            cooldown_days: setting.cooldown_days,
        }
    }
}

/// A role's annual limit override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleLimitInfo {
    pub role: String,
    pub annual_limit: i32,
}

impl From<RoleLimit> for RoleLimitInfo {
    fn from(limit: RoleLimit) -> Self {
        Self {
            role: limit.role.value().to_string(),
            annual_limit: limit.annual_limit,
        }
    }
}

/// API response listing annual limit overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoleLimitsResponse {
    pub items: Vec<RoleLimitInfo>,
}

/// A role's cooldown override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCooldownInfo {
    pub role: String,
    pub cooldown_days: i32,
}

impl From<RoleCooldown> for RoleCooldownInfo {
    fn from(cooldown: RoleCooldown) -> Self {
        Self {
            role: cooldown.role.value().to_string(),
            cooldown_days: cooldown.cooldown_days,
        }
    }
}

/// API response listing cooldown overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoleCooldownsResponse {
    pub items: Vec<RoleCooldownInfo>,
}
