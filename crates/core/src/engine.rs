// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The request lifecycle engine.
//!
//! Each mutating operation validates its input, checks stock, allowance and
//! cooldown, then applies every write inside a single store transaction.
//! Callers supply `now`; the engine never reads a clock.

use crate::config::{annual_limit, cooldown_days};
use crate::cooldown::ensure_no_active_cooldown;
use crate::error::CoreError;
use crate::results::{CreatedRequest, DeletedRequest, StatusChange};
use crate::store::UniformStore;
use std::collections::HashMap;
use time::OffsetDateTime;
use tracing::{debug, info};
use uniform_domain::{
    AllowanceWindow, DomainError, LineItem, RequestDetail, RequestFilter, RequestItemInput,
    RequestLine, RequestStatus, RequestSummary, StaffRecord, UniformRequest, ValidatedRequest,
    check_allowance, format_timestamp, validate_new_request, validate_request_edit,
    validate_request_id,
};

/// Creates a request and reserves its stock.
///
/// Checks run in a fixed order and the first failure wins: input rules,
/// staff existence, item existence, stock on hand, role allowance, then
/// cooldown per item. Only the stock reservation is re-checked once the
/// transaction is open.
///
/// # Arguments
///
/// * `store` - The backing store
/// * `staff_id` - The staff member requesting
/// * `items` - Requested line items
/// * `note` - Optional note, trimmed before storage
/// * `now` - The instant of the request
///
/// # Errors
///
/// Returns an error if:
/// - The input breaks a validation rule
/// - The staff member or any item does not exist
/// - Any quantity exceeds stock on hand, before or during commit
/// - The role is unconfigured or the request exceeds the annual allowance
/// - Any item is still under cooldown
/// - The store fails (all writes are rolled back)
pub fn create_request<S: UniformStore>(
    store: &mut S,
    staff_id: i64,
    items: &[RequestItemInput],
    note: Option<&str>,
    now: OffsetDateTime,
) -> Result<CreatedRequest, CoreError> {
    let request: ValidatedRequest = validate_new_request(staff_id, items, note)?;

    let staff: StaffRecord = store
        .get_staff_by_id(staff_id)?
        .ok_or(CoreError::StaffNotFound(staff_id))?;

    let stock: HashMap<i64, i32> = load_stock_levels(store, &request.items)?;
    check_stock(&request.items, &stock)?;

    let limit: u32 = annual_limit(store, &staff.role)?;
    let window: AllowanceWindow = AllowanceWindow::containing(now);
    let used: i64 = store.used_allowance(staff_id, &window, None)?;
    check_allowance(used, request.requested_total(), limit)?;

    let days: u32 = cooldown_days(store, &staff.role)?;
    ensure_no_active_cooldown(store, staff_id, &request.items, days, now, None)?;

    let requested_at: String = format_timestamp(now)?;

    let created: UniformRequest = store.transaction(|tx| {
        let header: UniformRequest =
            tx.insert_request(staff_id, request.note.as_deref(), &requested_at)?;
        reserve_stock(tx, &request.items)?;
        for item in &request.items {
            tx.insert_request_item(header.request_id, item)?;
        }
        Ok(header)
    })?;

    info!(
        request_id = created.request_id,
        staff_id,
        item_count = request.items.len(),
        quantity = request.requested_total(),
        "Created uniform request"
    );

    Ok(CreatedRequest::from(created))
}

/// Replaces the line items and note of a REQUESTED request.
///
/// The previous reservation is released inside the transaction and the new
/// item set is checked against the released stock levels. The request's own
/// usage is left out of the allowance and cooldown checks.
///
/// # Errors
///
/// Returns an error if:
/// - The input breaks a validation rule
/// - The request, its staff member or any new item does not exist
/// - The request is no longer REQUESTED
/// - Stock, allowance or cooldown checks fail for the new items
/// - Releasing the old reservation does not affect exactly one row per item
/// - The store fails (all writes, including releases, are rolled back)
pub fn update_request_items<S: UniformStore>(
    store: &mut S,
    request_id: i64,
    items: &[RequestItemInput],
    note: Option<&str>,
    now: OffsetDateTime,
) -> Result<RequestDetail, CoreError> {
    let request: ValidatedRequest = validate_request_edit(request_id, items, note)?;

    let current: UniformRequest = store
        .get_request_by_id(request_id)?
        .ok_or(CoreError::RequestNotFound(request_id))?;

    if !current.status.is_editable() {
        return Err(CoreError::DomainViolation(DomainError::RequestNotEditable {
            request_id,
            status: current.status,
        }));
    }

    let staff_id: i64 = current.staff_id;
    let staff: StaffRecord = store
        .get_staff_by_id(staff_id)?
        .ok_or(CoreError::StaffNotFound(staff_id))?;

    let limit: u32 = annual_limit(store, &staff.role)?;
    let window: AllowanceWindow = AllowanceWindow::containing(now);
    let days: u32 = cooldown_days(store, &staff.role)?;

    store.transaction(|tx| {
        let previous: Vec<RequestLine> = tx.get_request_lines(request_id)?;
        release_stock(tx, &previous)?;

        let stock: HashMap<i64, i32> = load_stock_levels(tx, &request.items)?;
        check_stock(&request.items, &stock)?;

        let used: i64 = tx.used_allowance(staff_id, &window, Some(request_id))?;
        check_allowance(used, request.requested_total(), limit)?;

        ensure_no_active_cooldown(tx, staff_id, &request.items, days, now, Some(request_id))?;

        reserve_stock(tx, &request.items)?;

        tx.delete_request_items(request_id)?;
        for item in &request.items {
            tx.insert_request_item(request_id, item)?;
        }

        tx.update_request_note(request_id, request.note.as_deref())
    })?;

    info!(
        request_id,
        staff_id,
        item_count = request.items.len(),
        quantity = request.requested_total(),
        "Updated uniform request items"
    );

    get_request_by_id(store, request_id)
}

/// Deletes a REQUESTED request and returns its reserved stock.
///
/// # Errors
///
/// Returns an error if:
/// - The id is not positive
/// - The request does not exist or is no longer REQUESTED
/// - Releasing stock does not affect exactly one row per item
/// - The store fails (all writes are rolled back)
pub fn delete_request<S: UniformStore>(
    store: &mut S,
    request_id: i64,
) -> Result<DeletedRequest, CoreError> {
    validate_request_id(request_id)?;

    let current: UniformRequest = store
        .get_request_by_id(request_id)?
        .ok_or(CoreError::RequestNotFound(request_id))?;

    if !current.status.is_editable() {
        return Err(CoreError::DomainViolation(
            DomainError::RequestNotDeletable {
                request_id,
                status: current.status,
            },
        ));
    }

    store.transaction(|tx| {
        let lines: Vec<RequestLine> = tx.get_request_lines(request_id)?;
        release_stock(tx, &lines)?;
        tx.delete_request_items(request_id)?;
        tx.delete_request(request_id)?;
        Ok(())
    })?;

    info!(request_id, "Deleted uniform request");

    Ok(DeletedRequest {
        request_id,
        deleted: true,
    })
}

/// Advances a request one step along its lifecycle.
///
/// Stamps the timestamp belonging to the new status with `now`. Stock and
/// allowance are not affected.
///
/// # Errors
///
/// Returns an error if:
/// - The id is not positive
/// - The request does not exist
/// - `new_status` is not the immediate successor of the current status
/// - The store fails
pub fn update_request_status<S: UniformStore>(
    store: &mut S,
    request_id: i64,
    new_status: RequestStatus,
    now: OffsetDateTime,
) -> Result<StatusChange, CoreError> {
    validate_request_id(request_id)?;

    let current: UniformRequest = store
        .get_request_by_id(request_id)?
        .ok_or(CoreError::RequestNotFound(request_id))?;

    current.status.validate_transition(new_status)?;

    let stamped_at: String = format_timestamp(now)?;
    let updated: UniformRequest = store.update_request_status(request_id, new_status, &stamped_at)?;

    info!(
        request_id,
        from = %current.status,
        to = %updated.status,
        "Advanced uniform request status"
    );

    Ok(StatusChange {
        request_id: updated.request_id,
        status: updated.status,
    })
}

/// Returns the detail projection of a request.
///
/// # Errors
///
/// Returns an error if the id is not positive, the request does not exist,
/// or the store fails.
pub fn get_request_by_id<S: UniformStore>(
    store: &mut S,
    request_id: i64,
) -> Result<RequestDetail, CoreError> {
    validate_request_id(request_id)?;
    store
        .get_request_detail(request_id)?
        .ok_or(CoreError::RequestNotFound(request_id))
}

/// Lists requests matching every present filter, newest first.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_requests<S: UniformStore>(
    store: &mut S,
    filter: &RequestFilter,
) -> Result<Vec<RequestSummary>, CoreError> {
    store.list_requests(filter)
}

/// Loads the stock level of every item, failing on the first missing one.
fn load_stock_levels<S: UniformStore>(
    store: &mut S,
    items: &[LineItem],
) -> Result<HashMap<i64, i32>, CoreError> {
    let mut stock: HashMap<i64, i32> = HashMap::with_capacity(items.len());
    for item in items {
        let uniform_item = store
            .get_uniform_item_by_id(item.uniform_item_id)?
            .ok_or(CoreError::UniformItemNotFound(item.uniform_item_id))?;
        stock.insert(uniform_item.uniform_item_id, uniform_item.stock_on_hand);
    }
    Ok(stock)
}

fn check_stock(items: &[LineItem], stock: &HashMap<i64, i32>) -> Result<(), CoreError> {
    for item in items {
        let available: i32 = stock.get(&item.uniform_item_id).copied().unwrap_or(0);
        if item.quantity > available {
            return Err(CoreError::DomainViolation(DomainError::InsufficientStock {
                uniform_item_id: item.uniform_item_id,
                requested: item.quantity,
                available,
            }));
        }
    }
    Ok(())
}

/// Conditionally decrements stock for every item.
fn reserve_stock<S: UniformStore>(store: &mut S, items: &[LineItem]) -> Result<(), CoreError> {
    for item in items {
        let rows: usize = store.decrement_stock_if_available(item.uniform_item_id, item.quantity)?;
        if rows != 1 {
            debug!(
                uniform_item_id = item.uniform_item_id,
                quantity = item.quantity,
                "Stock reservation lost at commit"
            );
            return Err(CoreError::StockUnavailable {
                uniform_item_id: item.uniform_item_id,
            });
        }
    }
    Ok(())
}

/// Returns reserved stock for every stored line.
fn release_stock<S: UniformStore>(store: &mut S, lines: &[RequestLine]) -> Result<(), CoreError> {
    for line in lines {
        let rows: usize = store.increment_stock(line.uniform_item_id, line.quantity)?;
        if rows != 1 {
            return Err(CoreError::StockReleaseFailed {
                uniform_item_id: line.uniform_item_id,
                rows_affected: rows,
            });
        }
    }
    Ok(())
}
