// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request header, line item and usage queries.
//!
//! Allowance and cooldown lookups live here because both are derived from
//! stored request rows rather than kept as counters.

use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use diesel::SqliteConnection;
use tracing::debug;
use uniform_domain::{
    AllowanceWindow, RequestDetail, RequestFilter, RequestLine, RequestStatus, RequestSummary,
    UniformRequest,
};

use crate::diesel_schema::{staff, stores, uniform_items, uniform_request_items, uniform_requests};
use crate::error::PersistenceError;

diesel::define_sql_function! {
    /// `COALESCE` over a nullable and a non-null text column.
    fn coalesce(x: Nullable<Text>, y: Text) -> Text;
}

/// Diesel Queryable struct for request headers.
#[derive(Queryable, Selectable)]
#[diesel(table_name = uniform_requests)]
struct UniformRequestRow {
    request_id: i64,
    staff_id: i64,
    status: String,
    note: Option<String>,
    requested_at: String,
    dispatched_at: Option<String>,
    arrived_at: Option<String>,
    collected_at: Option<String>,
}

impl TryFrom<UniformRequestRow> for UniformRequest {
    type Error = PersistenceError;

    fn try_from(row: UniformRequestRow) -> Result<Self, Self::Error> {
        Ok(Self {
            request_id: row.request_id,
            staff_id: row.staff_id,
            status: parse_status(row.request_id, &row.status)?,
            note: row.note,
            requested_at: row.requested_at,
            dispatched_at: row.dispatched_at,
            arrived_at: row.arrived_at,
            collected_at: row.collected_at,
        })
    }
}

/// Diesel Queryable struct for list projections.
#[derive(Queryable)]
struct RequestSummaryRow {
    request_id: i64,
    staff_name: String,
    store_name: String,
    status: String,
    requested_at: String,
}

/// Diesel Queryable struct for line items joined with item details.
#[derive(Queryable)]
struct RequestLineRow {
    uniform_item_id: i64,
    item_name: String,
    size: String,
    quantity: i32,
}

impl From<RequestLineRow> for RequestLine {
    fn from(row: RequestLineRow) -> Self {
        Self {
            uniform_item_id: row.uniform_item_id,
            item_name: row.item_name,
            size: row.size,
            quantity: row.quantity,
        }
    }
}

fn parse_status(request_id: i64, raw: &str) -> Result<RequestStatus, PersistenceError> {
    raw.parse::<RequestStatus>().map_err(|_| {
        PersistenceError::CorruptRow(format!("request {request_id} has unknown status '{raw}'"))
    })
}

/// Retrieves a request header.
///
/// # Errors
///
/// Returns an error if the query fails or the stored status is unknown.
pub fn get_request_by_id(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Option<UniformRequest>, PersistenceError> {
    let row: Option<UniformRequestRow> = uniform_requests::table
        .filter(uniform_requests::request_id.eq(request_id))
        .select(UniformRequestRow::as_select())
        .first(conn)
        .optional()?;

    row.map(UniformRequest::try_from).transpose()
}

/// Retrieves the line items of a request in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_request_lines(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Vec<RequestLine>, PersistenceError> {
    let rows: Vec<RequestLineRow> = uniform_request_items::table
        .inner_join(uniform_items::table)
        .filter(uniform_request_items::request_id.eq(request_id))
        .select((
            uniform_request_items::uniform_item_id,
            uniform_items::item_name,
            uniform_items::size,
            uniform_request_items::quantity,
        ))
        .order(uniform_request_items::request_item_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(RequestLine::from).collect())
}

/// Retrieves the detail projection of a request.
///
/// # Errors
///
/// Returns an error if the query fails or the stored status is unknown.
pub fn get_request_detail(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Option<RequestDetail>, PersistenceError> {
    let row: Option<(UniformRequestRow, String, String)> = uniform_requests::table
        .inner_join(staff::table.inner_join(stores::table))
        .filter(uniform_requests::request_id.eq(request_id))
        .select((UniformRequestRow::as_select(), staff::name, stores::name))
        .first(conn)
        .optional()?;

    let Some((header, staff_name, store_name)) = row else {
        return Ok(None);
    };

    let header: UniformRequest = UniformRequest::try_from(header)?;
    let items: Vec<RequestLine> = get_request_lines(conn, request_id)?;

    Ok(Some(RequestDetail {
        request_id: header.request_id,
        staff_id: header.staff_id,
        staff_name,
        store_name,
        status: header.status,
        note: header.note,
        requested_at: header.requested_at,
        dispatched_at: header.dispatched_at,
        arrived_at: header.arrived_at,
        collected_at: header.collected_at,
        items,
    }))
}

/// Lists request summaries matching every present filter.
///
/// Ordered newest first, ties broken by the higher request id.
///
/// # Errors
///
/// Returns an error if the query fails or a stored status is unknown.
pub fn list_requests(
    conn: &mut SqliteConnection,
    filter: &RequestFilter,
) -> Result<Vec<RequestSummary>, PersistenceError> {
    let mut query = uniform_requests::table
        .inner_join(staff::table.inner_join(stores::table))
        .select((
            uniform_requests::request_id,
            staff::name,
            stores::name,
            uniform_requests::status,
            uniform_requests::requested_at,
        ))
        .into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(uniform_requests::status.eq(status.as_str()));
    }
    if let Some(staff_id) = filter.staff_id {
        query = query.filter(uniform_requests::staff_id.eq(staff_id));
    }
    if let Some(store_id) = filter.store_id {
        query = query.filter(staff::store_id.eq(store_id));
    }

    let rows: Vec<RequestSummaryRow> = query
        .order((
            uniform_requests::requested_at.desc(),
            uniform_requests::request_id.desc(),
        ))
        .load(conn)?;

    debug!(count = rows.len(), ?filter, "Listed uniform requests");

    rows.into_iter()
        .map(|row| {
            Ok(RequestSummary {
                status: parse_status(row.request_id, &row.status)?,
                request_id: row.request_id,
                staff_name: row.staff_name,
                store_name: row.store_name,
                requested_at: row.requested_at,
            })
        })
        .collect()
}

/// Sums the line item quantities of a staff member's requests made within
/// the window.
///
/// Every stored request counts regardless of status.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `staff_id` - The staff member
/// * `window` - The calendar year to count
/// * `exclude_request_id` - A request to leave out, used when editing
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn used_allowance(
    conn: &mut SqliteConnection,
    staff_id: i64,
    window: &AllowanceWindow,
    exclude_request_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    let mut query = uniform_request_items::table
        .inner_join(uniform_requests::table)
        .filter(uniform_requests::staff_id.eq(staff_id))
        .filter(uniform_requests::requested_at.ge(window.start()))
        .filter(uniform_requests::requested_at.lt(window.end()))
        .select(diesel::dsl::sum(uniform_request_items::quantity))
        .into_boxed();

    if let Some(excluded) = exclude_request_id {
        query = query.filter(uniform_requests::request_id.ne(excluded));
    }

    let used: Option<i64> = query.first(conn)?;
    Ok(used.unwrap_or(0))
}

/// Returns the cooldown anchor of the most recent request by a staff member
/// that contains an item.
///
/// The anchor is `collected_at` when set, otherwise `requested_at`. The
/// latest anchor wins, ties broken by the higher request id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn latest_cooldown_anchor(
    conn: &mut SqliteConnection,
    staff_id: i64,
    uniform_item_id: i64,
    exclude_request_id: Option<i64>,
) -> Result<Option<String>, PersistenceError> {
    let mut query = uniform_request_items::table
        .inner_join(uniform_requests::table)
        .filter(uniform_requests::staff_id.eq(staff_id))
        .filter(uniform_request_items::uniform_item_id.eq(uniform_item_id))
        .select(coalesce(
            uniform_requests::collected_at,
            uniform_requests::requested_at,
        ))
        .order((
            coalesce(uniform_requests::collected_at, uniform_requests::requested_at).desc(),
            uniform_requests::request_id.desc(),
        ))
        .into_boxed();

    if let Some(excluded) = exclude_request_id {
        query = query.filter(uniform_requests::request_id.ne(excluded));
    }

    Ok(query.first::<String>(conn).optional()?)
}
