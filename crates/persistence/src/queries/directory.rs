// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store, role and staff queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;
use uniform_domain::{AllowanceWindow, RoleName, StaffRecord, StaffUsage};

use crate::diesel_schema::{roles, staff, stores};
use crate::error::PersistenceError;
use crate::queries::requests::used_allowance;

/// Diesel Queryable struct for staff rows joined with store and role.
#[derive(Queryable)]
struct StaffRow {
    staff_id: i64,
    name: String,
    store_id: i64,
    store_name: String,
    role_name: String,
}

impl From<StaffRow> for StaffRecord {
    fn from(row: StaffRow) -> Self {
        Self {
            staff_id: row.staff_id,
            name: row.name,
            store_id: row.store_id,
            store_name: row.store_name,
            role: RoleName::new(&row.role_name),
        }
    }
}

/// Retrieves a staff member with their store name and role.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the staff member is not found.
pub fn get_staff_by_id(
    conn: &mut SqliteConnection,
    staff_id: i64,
) -> Result<Option<StaffRecord>, PersistenceError> {
    debug!(staff_id, "Looking up staff");

    let row: Option<StaffRow> = staff::table
        .inner_join(stores::table)
        .inner_join(roles::table)
        .filter(staff::staff_id.eq(staff_id))
        .select((
            staff::staff_id,
            staff::name,
            staff::store_id,
            stores::name,
            roles::name,
        ))
        .first::<StaffRow>(conn)
        .optional()?;

    Ok(row.map(StaffRecord::from))
}

/// Lists every staff member ordered by name, with the quantity each used
/// within the window.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_staff_usage(
    conn: &mut SqliteConnection,
    window: &AllowanceWindow,
) -> Result<Vec<StaffUsage>, PersistenceError> {
    let rows: Vec<StaffRow> = staff::table
        .inner_join(stores::table)
        .inner_join(roles::table)
        .select((
            staff::staff_id,
            staff::name,
            staff::store_id,
            stores::name,
            roles::name,
        ))
        .order((staff::name.asc(), staff::staff_id.asc()))
        .load::<StaffRow>(conn)?;

    let mut usage: Vec<StaffUsage> = Vec::with_capacity(rows.len());
    for row in rows {
        let used_quantity: i64 = used_allowance(conn, row.staff_id, window, None)?;
        usage.push(StaffUsage {
            staff: StaffRecord::from(row),
            used_quantity,
        });
    }

    Ok(usage)
}

/// Looks up a role id by normalized name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_role_id(
    conn: &mut SqliteConnection,
    role: &RoleName,
) -> Result<Option<i64>, PersistenceError> {
    Ok(roles::table
        .filter(roles::name.eq(role.value()))
        .select(roles::role_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Looks up a store id by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_store_id(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<i64>, PersistenceError> {
    Ok(stores::table
        .filter(stores::name.eq(name))
        .select(stores::store_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Lists every store as `(store_id, name)` ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_stores(conn: &mut SqliteConnection) -> Result<Vec<(i64, String)>, PersistenceError> {
    Ok(stores::table
        .select((stores::store_id, stores::name))
        .order(stores::name.asc())
        .load::<(i64, String)>(conn)?)
}
