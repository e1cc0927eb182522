// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router and request handlers.
//!
//! Handlers read the clock, lock the persistence adapter and delegate to the
//! API layer. Successful bodies are wrapped as `{ "data": ... }`.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{Method, StatusCode, Uri},
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::info;
use uniform_api::{
    ApiError, CooldownResponse, CreateRequestBody, CreateRequestResponse, DeleteRequestResponse,
    ListRequestsQuery, ListRequestsResponse, ListRoleCooldownsResponse, ListRoleLimitsResponse,
    ListStaffResponse, ListUniformItemsResponse, RequestDetailResponse, RoleCooldownInfo,
    RoleLimitInfo, StatusChangeResponse, UpdateCooldownBody, UpdateRequestItemsBody,
    UpdateRoleCooldownBody, UpdateRoleLimitBody, UpdateStatusBody,
};
use uniform_persistence::Persistence;

use crate::error::HttpError;

/// Application state shared across handlers.
///
/// Every handler holds the lock for the whole engine call, so operations
/// run one at a time against the connection.
#[derive(Clone)]
pub struct AppState {
    pub persistence: Arc<Mutex<Persistence>>,
}

impl AppState {
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }
}

/// Success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

type ApiResult<T> = Result<Json<DataResponse<T>>, HttpError>;

const fn data<T>(value: T) -> Json<DataResponse<T>> {
    Json(DataResponse { data: value })
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

async fn handle_list_requests(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListRequestsQuery>, QueryRejection>,
) -> ApiResult<ListRequestsResponse> {
    let Query(query) = query?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::list_requests(&mut persistence, &query)?))
}

async fn handle_create_request(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<CreateRequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<CreateRequestResponse>>), HttpError> {
    let Json(body) = body?;
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    let mut persistence = app_state.persistence.lock().await;
    let created: CreateRequestResponse = uniform_api::create_request(&mut persistence, &body, now)?;
    drop(persistence);

    info!(request_id = created.id, "Handled create_request");
    Ok((StatusCode::CREATED, data(created)))
}

async fn handle_get_request(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<RequestDetailResponse> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::get_request(&mut persistence, &raw_id)?))
}

async fn handle_update_request_items(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateRequestItemsBody>, JsonRejection>,
) -> ApiResult<RequestDetailResponse> {
    let Json(body) = body?;
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::update_request_items(
        &mut persistence,
        &raw_id,
        &body,
        now,
    )?))
}

async fn handle_delete_request(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<DeleteRequestResponse> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::delete_request(&mut persistence, &raw_id)?))
}

async fn handle_update_request_status(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> ApiResult<StatusChangeResponse> {
    let Json(body) = body?;
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::update_request_status(
        &mut persistence,
        &raw_id,
        &body,
        now,
    )?))
}

async fn handle_list_staff(AxumState(app_state): AxumState<AppState>) -> ApiResult<ListStaffResponse> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::list_staff(&mut persistence, now)?))
}

async fn handle_list_uniform_items(
    AxumState(app_state): AxumState<AppState>,
) -> ApiResult<ListUniformItemsResponse> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::list_uniform_items(&mut persistence)?))
}

async fn handle_get_cooldown(AxumState(app_state): AxumState<AppState>) -> ApiResult<CooldownResponse> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::get_cooldown(&mut persistence)?))
}

async fn handle_update_cooldown(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<UpdateCooldownBody>, JsonRejection>,
) -> ApiResult<CooldownResponse> {
    let Json(body) = body?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::update_cooldown(&mut persistence, &body)?))
}

async fn handle_get_role_limits(
    AxumState(app_state): AxumState<AppState>,
) -> ApiResult<ListRoleLimitsResponse> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::get_role_limits(&mut persistence)?))
}

async fn handle_update_role_limit(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<UpdateRoleLimitBody>, JsonRejection>,
) -> ApiResult<RoleLimitInfo> {
    let Json(body) = body?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::update_role_limit(&mut persistence, &body)?))
}

async fn handle_get_role_cooldowns(
    AxumState(app_state): AxumState<AppState>,
) -> ApiResult<ListRoleCooldownsResponse> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::get_role_cooldowns(&mut persistence)?))
}

async fn handle_update_role_cooldown(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<UpdateRoleCooldownBody>, JsonRejection>,
) -> ApiResult<RoleCooldownInfo> {
    let Json(body) = body?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(data(uniform_api::update_role_cooldown(&mut persistence, &body)?))
}

/// Answers unknown paths and unsupported methods alike.
async fn handle_route_not_found(method: Method, uri: Uri) -> HttpError {
    let target: &str = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    HttpError::from(ApiError::route_not_found(method.as_str(), target))
}

/// Builds the application router with all endpoints.
#[must_use]
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/api/requests",
            get(handle_list_requests).post(handle_create_request),
        )
        .route(
            "/api/requests/{id}",
            get(handle_get_request)
                .put(handle_update_request_items)
                .delete(handle_delete_request),
        )
        .route("/api/requests/{id}/status", patch(handle_update_request_status))
        .route("/api/staff", get(handle_list_staff))
        .route("/api/uniform-items", get(handle_list_uniform_items))
        .route(
            "/api/settings/cooldown",
            get(handle_get_cooldown).put(handle_update_cooldown),
        )
        .route(
            "/api/settings/role-limits",
            get(handle_get_role_limits).put(handle_update_role_limit),
        )
        .route(
            "/api/settings/role-cooldowns",
            get(handle_get_role_cooldowns).put(handle_update_role_cooldown),
        )
        .fallback(handle_route_not_found)
        .method_not_allowed_fallback(handle_route_not_found)
        .with_state(app_state)
}
