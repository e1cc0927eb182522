// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for uniform provisioning.
//!
//! Takes loosely typed request bodies, validates their shape, runs the
//! request lifecycle engine and translates every failure into an
//! [`ApiError`] with a stable code and HTTP status. Transport lives in the
//! server crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod boundary;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use boundary::{
    BoundaryError, coerce_integer, optional_string, parse_items, parse_path_id,
    parse_query_integer, parse_query_status, parse_status, strict_integer,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    create_request, delete_request, get_cooldown, get_request, get_role_cooldowns,
    get_role_limits, list_requests, list_staff, list_uniform_items, update_cooldown,
    update_request_items, update_request_status, update_role_cooldown, update_role_limit,
};
pub use request_response::{
    CooldownResponse, CreateRequestBody, CreateRequestResponse, DeleteRequestResponse,
    ListRequestsQuery, ListRequestsResponse, ListRoleCooldownsResponse, ListRoleLimitsResponse,
    ListStaffResponse, ListUniformItemsResponse, RequestDetailResponse, RequestLineInfo,
    RequestSummaryInfo, RoleCooldownInfo, RoleLimitInfo, StaffInfo, StatusChangeResponse,
    UniformItemInfo, UpdateCooldownBody, UpdateRequestItemsBody, UpdateRoleCooldownBody,
    UpdateRoleLimitBody, UpdateStatusBody,
};
