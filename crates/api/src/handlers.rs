// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Each handler validates the shape of its input, calls the engine against
//! the given persistence adapter and projects the result. The caller
//! supplies `now` wherever time matters.

use time::OffsetDateTime;
use tracing::{debug, info};
use uniform_domain::{RequestFilter, RequestItemInput, RequestStatus, RoleName};
use uniform_persistence::Persistence;

use crate::boundary::{
    coerce_integer, optional_string, parse_items, parse_path_id, parse_query_integer,
    parse_query_status, parse_status,
};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CooldownResponse, CreateRequestBody, CreateRequestResponse, DeleteRequestResponse,
    ListRequestsQuery, ListRequestsResponse, ListRoleCooldownsResponse, ListRoleLimitsResponse,
    ListStaffResponse, ListUniformItemsResponse, RequestDetailResponse, RequestSummaryInfo,
    RoleCooldownInfo, RoleLimitInfo, StaffInfo, StatusChangeResponse, UniformItemInfo,
    UpdateCooldownBody, UpdateRequestItemsBody, UpdateRoleCooldownBody, UpdateRoleLimitBody,
    UpdateStatusBody,
};

/// Creates a uniform request.
///
/// # Arguments
///
/// * `persistence` - The persistence adapter
/// * `body` - The request body
/// * `now` - The instant of the request
///
/// # Errors
///
/// Returns an error if:
/// - The body has the wrong shape
/// - Any engine check fails (validation, existence, stock, allowance, cooldown)
/// - The store fails
pub fn create_request(
    persistence: &mut Persistence,
    body: &CreateRequestBody,
    now: OffsetDateTime,
) -> Result<CreateRequestResponse, ApiError> {
    let staff_id: i64 = coerce_integer("staffId", body.staff_id.as_ref())?;
    let items: Vec<RequestItemInput> = parse_items(body.items.as_ref())?;
    let note: Option<String> = optional_string("note", body.note.as_ref())?;

    let created = uniform_core::create_request(persistence, staff_id, &items, note.as_deref(), now)
        .map_err(translate_core_error)?;

    info!(request_id = created.request_id, staff_id, "Request created via API");
    Ok(CreateRequestResponse::from(created))
}

/// Lists requests matching the query filters.
///
/// # Errors
///
/// Returns an error if a filter is malformed or the store fails.
pub fn list_requests(
    persistence: &mut Persistence,
    query: &ListRequestsQuery,
) -> Result<ListRequestsResponse, ApiError> {
    let filter: RequestFilter = RequestFilter {
        status: parse_query_status(query.status.as_deref())?,
        staff_id: parse_query_integer("staffId", query.staff_id.as_deref())?,
        store_id: parse_query_integer("storeId", query.store_id.as_deref())?,
    };

    let items: Vec<RequestSummaryInfo> = uniform_core::list_requests(persistence, &filter)
        .map_err(translate_core_error)?
        .into_iter()
        .map(RequestSummaryInfo::from)
        .collect();

    debug!(count = items.len(), "Listed requests via API");
    Ok(ListRequestsResponse { items })
}

/// Returns one request with its line items.
///
/// # Errors
///
/// Returns an error if the id is malformed or not positive, the request
/// does not exist, or the store fails.
pub fn get_request(
    persistence: &mut Persistence,
    raw_id: &str,
) -> Result<RequestDetailResponse, ApiError> {
    let request_id: i64 = parse_path_id(raw_id)?;
    let detail = uniform_core::get_request_by_id(persistence, request_id)
        .map_err(translate_core_error)?;
    Ok(RequestDetailResponse::from(detail))
}

/// Replaces the items and note of a REQUESTED request.
///
/// # Errors
///
/// Returns an error if the id or body is malformed, the request is missing
/// or no longer REQUESTED, any engine check fails, or the store fails.
pub fn update_request_items(
    persistence: &mut Persistence,
    raw_id: &str,
    body: &UpdateRequestItemsBody,
    now: OffsetDateTime,
) -> Result<RequestDetailResponse, ApiError> {
    let request_id: i64 = parse_path_id(raw_id)?;
    let items: Vec<RequestItemInput> = parse_items(body.items.as_ref())?;
    let note: Option<String> = optional_string("note", body.note.as_ref())?;

    let detail =
        uniform_core::update_request_items(persistence, request_id, &items, note.as_deref(), now)
            .map_err(translate_core_error)?;

    info!(request_id, "Request items replaced via API");
    Ok(RequestDetailResponse::from(detail))
}

/// Deletes a REQUESTED request.
///
/// # Errors
///
/// Returns an error if the id is malformed, the request is missing or no
/// longer REQUESTED, or the store fails.
pub fn delete_request(
    persistence: &mut Persistence,
    raw_id: &str,
) -> Result<DeleteRequestResponse, ApiError> {
    let request_id: i64 = parse_path_id(raw_id)?;
    let deleted =
        uniform_core::delete_request(persistence, request_id).map_err(translate_core_error)?;

    info!(request_id, "Request deleted via API");
    Ok(DeleteRequestResponse::from(deleted))
}

/// Advances a request to the next status.
///
/// The status is checked before the id.
///
/// # Errors
///
/// Returns an error if the status or id is malformed, the request is
/// missing, the transition is not the next step, or the store fails.
pub fn update_request_status(
    persistence: &mut Persistence,
    raw_id: &str,
    body: &UpdateStatusBody,
    now: OffsetDateTime,
) -> Result<StatusChangeResponse, ApiError> {
    let status: RequestStatus = parse_status(body.status.as_ref())?;
    let request_id: i64 = parse_path_id(raw_id)?;

    let change = uniform_core::update_request_status(persistence, request_id, status, now)
        .map_err(translate_core_error)?;

    info!(request_id, status = %change.status, "Request status changed via API");
    Ok(StatusChangeResponse::from(change))
}

/// Lists staff with their remaining allowance for the year of `now`.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_staff(
    persistence: &mut Persistence,
    now: OffsetDateTime,
) -> Result<ListStaffResponse, ApiError> {
    let items: Vec<StaffInfo> = uniform_core::list_staff(persistence, now)
        .map_err(translate_core_error)?
        .into_iter()
        .map(StaffInfo::from)
        .collect();
    Ok(ListStaffResponse { items })
}

/// Lists uniform items with their low-stock flag.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_uniform_items(
    persistence: &mut Persistence,
) -> Result<ListUniformItemsResponse, ApiError> {
    let items: Vec<UniformItemInfo> = uniform_core::list_uniform_items(persistence)
        .map_err(translate_core_error)?
        .into_iter()
        .map(UniformItemInfo::from)
        .collect();
    Ok(ListUniformItemsResponse { items })
}

/// Returns the global cooldown.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_cooldown(persistence: &mut Persistence) -> Result<CooldownResponse, ApiError> {
    let setting = uniform_core::get_cooldown(persistence).map_err(translate_core_error)?;
    Ok(CooldownResponse::from(setting))
}

/// Sets the global cooldown.
///
/// # Errors
///
/// Returns an error if `cooldownDays` is missing, not an integer, negative,
/// or the store fails.
pub fn update_cooldown(
    persistence: &mut Persistence,
    body: &UpdateCooldownBody,
) -> Result<CooldownResponse, ApiError> {
    let days: i64 = coerce_integer("cooldownDays", body.cooldown_days.as_ref())?;
    let setting = uniform_core::update_cooldown(persistence, days).map_err(translate_core_error)?;
    Ok(CooldownResponse::from(setting))
}

/// Lists annual limit overrides.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_role_limits(persistence: &mut Persistence) -> Result<ListRoleLimitsResponse, ApiError> {
    let items: Vec<RoleLimitInfo> = uniform_core::get_role_limits(persistence)
        .map_err(translate_core_error)?
        .into_iter()
        .map(RoleLimitInfo::from)
        .collect();
    Ok(ListRoleLimitsResponse { items })
}

/// Sets a role's annual limit.
///
/// # Errors
///
/// Returns an error if the role name is blank or not a string, the limit
/// is not a non-negative integer, the role does not exist, or the store
/// fails.
pub fn update_role_limit(
    persistence: &mut Persistence,
    body: &UpdateRoleLimitBody,
) -> Result<RoleLimitInfo, ApiError> {
    let role_name: String = optional_string("roleName", body.role_name.as_ref())?.unwrap_or_default();
    // A blank role name is reported before a bad value
    RoleName::parse(&role_name).map_err(translate_domain_error)?;
    let annual_limit: i64 = coerce_integer("annualLimit", body.annual_limit.as_ref())?;

    let saved = uniform_core::update_role_limit(persistence, &role_name, annual_limit)
        .map_err(translate_core_error)?;
    Ok(RoleLimitInfo::from(saved))
}

/// Lists cooldown overrides.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_role_cooldowns(
    persistence: &mut Persistence,
) -> Result<ListRoleCooldownsResponse, ApiError> {
    let items: Vec<RoleCooldownInfo> = uniform_core::get_role_cooldowns(persistence)
        .map_err(translate_core_error)?
        .into_iter()
        .map(RoleCooldownInfo::from)
        .collect();
    Ok(ListRoleCooldownsResponse { items })
}

/// Sets a role's cooldown.
///
/// # Errors
///
/// Returns an error if the role name is blank or not a string, the day
/// count is not a non-negative integer, the role does not exist, or the
/// store fails.
pub fn update_role_cooldown(
    persistence: &mut Persistence,
    body: &UpdateRoleCooldownBody,
) -> Result<RoleCooldownInfo, ApiError> {
    let role_name: String = optional_string("roleName", body.role_name.as_ref())?.unwrap_or_default();
    RoleName::parse(&role_name).map_err(translate_domain_error)?;
    let cooldown_days: i64 = coerce_integer("cooldownDays", body.cooldown_days.as_ref())?;

    let saved = uniform_core::update_role_cooldown(persistence, &role_name, cooldown_days)
        .map_err(translate_core_error)?;
    Ok(RoleCooldownInfo::from(saved))
}
