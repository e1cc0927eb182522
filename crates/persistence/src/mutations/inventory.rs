// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::uniform_items;
use crate::error::PersistenceError;

/// Inserts a uniform item and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails, including a duplicate
/// `(sku, size)` pair or a negative stock level.
pub fn create_uniform_item(
    conn: &mut SqliteConnection,
    sku: &str,
    size: &str,
    item_name: &str,
    stock_on_hand: i32,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(uniform_items::table)
        .values((
            uniform_items::sku.eq(sku),
            uniform_items::size.eq(size),
            uniform_items::item_name.eq(item_name),
            uniform_items::stock_on_hand.eq(stock_on_hand),
        ))
        .execute(conn)?;

    let uniform_item_id: i64 = conn.get_last_insert_rowid()?;
    info!(uniform_item_id, sku, size, stock_on_hand, "Created uniform item");
    Ok(uniform_item_id)
}

/// Reduces stock only when at least `quantity` is on hand.
///
/// Returns the number of rows updated. Zero means the item is missing or
/// short of stock, and nothing changed.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn decrement_stock_if_available(
    conn: &mut SqliteConnection,
    uniform_item_id: i64,
    quantity: i32,
) -> Result<usize, PersistenceError> {
    let rows: usize = diesel::update(
        uniform_items::table
            .filter(uniform_items::uniform_item_id.eq(uniform_item_id))
            .filter(uniform_items::stock_on_hand.ge(quantity)),
    )
    .set(uniform_items::stock_on_hand.eq(uniform_items::stock_on_hand - quantity))
    .execute(conn)?;

    debug!(uniform_item_id, quantity, rows, "Conditional stock decrement");
    Ok(rows)
}

/// Returns `quantity` units to stock.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn increment_stock(
    conn: &mut SqliteConnection,
    uniform_item_id: i64,
    quantity: i32,
) -> Result<usize, PersistenceError> {
    let rows: usize = diesel::update(
        uniform_items::table.filter(uniform_items::uniform_item_id.eq(uniform_item_id)),
    )
    .set(uniform_items::stock_on_hand.eq(uniform_items::stock_on_hand + quantity))
    .execute(conn)?;

    debug!(uniform_item_id, quantity, rows, "Stock released");
    Ok(rows)
}
