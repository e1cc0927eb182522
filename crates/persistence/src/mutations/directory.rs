// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store, role and staff writes, plus the demo data set.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;
use uniform_domain::RoleName;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{roles, staff, stores};
use crate::error::PersistenceError;
use crate::mutations::inventory::create_uniform_item;
use crate::queries::directory::{get_role_id, get_store_id};

/// Demo stores.
const DEMO_STORES: &[&str] = &["Central", "Harbour", "Northside"];

/// Demo staff as `(name, store, role)`.
const DEMO_STAFF: &[(&str, &str, &str)] = &[
    ("Alice Manager", "Central", "MANAGER"),
    ("Bob Casual", "Central", "CASUAL"),
    ("Chloe Casual", "Harbour", "CASUAL"),
    ("Dan Manager", "Northside", "MANAGER"),
];

/// Demo uniform items as `(sku, size, item name, stock)`.
const DEMO_ITEMS: &[(&str, &str, &str, i32)] = &[
    ("SHIRT-POLO", "S", "Polo Shirt", 12),
    ("SHIRT-POLO", "M", "Polo Shirt", 20),
    ("SHIRT-POLO", "L", "Polo Shirt", 8),
    ("PANTS-WORK", "M", "Work Pants", 10),
    ("PANTS-WORK", "L", "Work Pants", 4),
    ("CAP", "OS", "Cap", 3),
];

/// Inserts a store and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails, including a duplicate name.
pub fn create_store(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(stores::table)
        .values(stores::name.eq(name))
        .execute(conn)?;

    let store_id: i64 = conn.get_last_insert_rowid()?;
    info!(store_id, name, "Created store");
    Ok(store_id)
}

/// Returns the id of a role, inserting it first if needed.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn ensure_role(conn: &mut SqliteConnection, role: &RoleName) -> Result<i64, PersistenceError> {
    if let Some(role_id) = get_role_id(conn, role)? {
        return Ok(role_id);
    }

    diesel::insert_into(roles::table)
        .values(roles::name.eq(role.value()))
        .execute(conn)?;

    let role_id: i64 = conn.get_last_insert_rowid()?;
    info!(role_id, role = %role, "Created role");
    Ok(role_id)
}

/// Inserts a staff member and returns their id.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the role does not exist, or an
/// error if the insert fails, including an unknown store.
pub fn create_staff(
    conn: &mut SqliteConnection,
    name: &str,
    store_id: i64,
    role: &RoleName,
) -> Result<i64, PersistenceError> {
    let role_id: i64 =
        get_role_id(conn, role)?.ok_or_else(|| PersistenceError::NotFound(format!("role {role}")))?;

    diesel::insert_into(staff::table)
        .values((
            staff::name.eq(name),
            staff::store_id.eq(store_id),
            staff::role_id.eq(role_id),
        ))
        .execute(conn)?;

    let staff_id: i64 = conn.get_last_insert_rowid()?;
    info!(staff_id, name, store_id, role = %role, "Created staff member");
    Ok(staff_id)
}

/// Loads a small demo data set: stores, staff and stocked items.
///
/// Stores that already exist are reused. Staff and items are always
/// inserted, so this is meant for a fresh database.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub fn seed_demo_data(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    for name in DEMO_STORES {
        if get_store_id(conn, name)?.is_none() {
            create_store(conn, name)?;
        }
    }

    for (name, store, role) in DEMO_STAFF {
        let store_id: i64 = get_store_id(conn, store)?
            .ok_or_else(|| PersistenceError::NotFound(format!("store {store}")))?;
        let role: RoleName = RoleName::new(role);
        ensure_role(conn, &role)?;
        create_staff(conn, name, store_id, &role)?;
    }

    for (sku, size, item_name, stock) in DEMO_ITEMS {
        create_uniform_item(conn, sku, size, item_name, *stock)?;
    }

    info!(
        stores = DEMO_STORES.len(),
        staff = DEMO_STAFF.len(),
        items = DEMO_ITEMS.len(),
        "Seeded demo data"
    );
    Ok(())
}
