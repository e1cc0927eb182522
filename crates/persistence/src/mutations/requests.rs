// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;
use uniform_domain::{LineItem, RequestStatus, UniformRequest};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{uniform_request_items, uniform_requests};
use crate::error::PersistenceError;
use crate::queries::requests::get_request_by_id;

/// Inserts a request header in the `REQUESTED` status.
///
/// # Errors
///
/// Returns an error if the insert fails or the new row cannot be read back.
pub fn insert_request(
    conn: &mut SqliteConnection,
    staff_id: i64,
    note: Option<&str>,
    requested_at: &str,
) -> Result<UniformRequest, PersistenceError> {
    diesel::insert_into(uniform_requests::table)
        .values((
            uniform_requests::staff_id.eq(staff_id),
            uniform_requests::status.eq(RequestStatus::Requested.as_str()),
            uniform_requests::note.eq(note),
            uniform_requests::requested_at.eq(requested_at),
        ))
        .execute(conn)?;

    let request_id: i64 = conn.get_last_insert_rowid()?;
    debug!(request_id, staff_id, "Inserted request header");

    get_request_by_id(conn, request_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("request {request_id}")))
}

/// Inserts one line item.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_request_item(
    conn: &mut SqliteConnection,
    request_id: i64,
    item: &LineItem,
) -> Result<(), PersistenceError> {
    diesel::insert_into(uniform_request_items::table)
        .values((
            uniform_request_items::request_id.eq(request_id),
            uniform_request_items::uniform_item_id.eq(item.uniform_item_id),
            uniform_request_items::quantity.eq(item.quantity),
        ))
        .execute(conn)?;
    Ok(())
}

/// Deletes every line item of a request.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_request_items(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<usize, PersistenceError> {
    Ok(diesel::delete(
        uniform_request_items::table.filter(uniform_request_items::request_id.eq(request_id)),
    )
    .execute(conn)?)
}

/// Deletes a request header.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_request(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<usize, PersistenceError> {
    Ok(
        diesel::delete(uniform_requests::table.filter(uniform_requests::request_id.eq(request_id)))
            .execute(conn)?,
    )
}

/// Replaces a request's note.
///
/// # Errors
///
/// Returns an error if the update fails or no such request exists.
pub fn update_request_note(
    conn: &mut SqliteConnection,
    request_id: i64,
    note: Option<&str>,
) -> Result<(), PersistenceError> {
    let rows: usize =
        diesel::update(uniform_requests::table.filter(uniform_requests::request_id.eq(request_id)))
            .set(uniform_requests::note.eq(note))
            .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!("request {request_id}")));
    }
    Ok(())
}

/// Sets a request's status and stamps the timestamp column of that stage.
///
/// # Errors
///
/// Returns an error if the update fails or no such request exists.
pub fn update_request_status(
    conn: &mut SqliteConnection,
    request_id: i64,
    status: RequestStatus,
    stamped_at: &str,
) -> Result<UniformRequest, PersistenceError> {
    let target = uniform_requests::table.filter(uniform_requests::request_id.eq(request_id));
    let status_value: &str = status.as_str();

    let rows: usize = match status {
        RequestStatus::Requested => diesel::update(target)
            .set(uniform_requests::status.eq(status_value))
            .execute(conn)?,
        RequestStatus::Dispatched => diesel::update(target)
            .set((
                uniform_requests::status.eq(status_value),
                uniform_requests::dispatched_at.eq(Some(stamped_at)),
            ))
            .execute(conn)?,
        RequestStatus::Arrived => diesel::update(target)
            .set((
                uniform_requests::status.eq(status_value),
                uniform_requests::arrived_at.eq(Some(stamped_at)),
            ))
            .execute(conn)?,
        RequestStatus::Collected => diesel::update(target)
            .set((
                uniform_requests::status.eq(status_value),
                uniform_requests::collected_at.eq(Some(stamped_at)),
            ))
            .execute(conn)?,
    };

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!("request {request_id}")));
    }

    get_request_by_id(conn, request_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("request {request_id}")))
}
