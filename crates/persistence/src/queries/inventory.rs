// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Uniform item queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use uniform_domain::UniformItem;

use crate::diesel_schema::uniform_items;
use crate::error::PersistenceError;

/// Diesel Queryable struct for uniform item rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = uniform_items)]
struct UniformItemRow {
    uniform_item_id: i64,
    sku: String,
    size: String,
    item_name: String,
    stock_on_hand: i32,
}

impl From<UniformItemRow> for UniformItem {
    fn from(row: UniformItemRow) -> Self {
        Self {
            uniform_item_id: row.uniform_item_id,
            sku: row.sku,
            size: row.size,
            item_name: row.item_name,
            stock_on_hand: row.stock_on_hand,
        }
    }
}

/// Retrieves a uniform item.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the item is not found.
pub fn get_uniform_item_by_id(
    conn: &mut SqliteConnection,
    uniform_item_id: i64,
) -> Result<Option<UniformItem>, PersistenceError> {
    let result: Result<UniformItemRow, diesel::result::Error> = uniform_items::table
        .filter(uniform_items::uniform_item_id.eq(uniform_item_id))
        .select(UniformItemRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(UniformItem::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists every uniform item ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_uniform_items(
    conn: &mut SqliteConnection,
) -> Result<Vec<UniformItem>, PersistenceError> {
    let rows: Vec<UniformItemRow> = uniform_items::table
        .select(UniformItemRow::as_select())
        .order(uniform_items::uniform_item_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(UniformItem::from).collect())
}
