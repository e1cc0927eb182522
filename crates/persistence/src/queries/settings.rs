// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! System setting and role override queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use uniform_domain::RoleOverrides;

use crate::diesel_schema::{role_allowance_limits, role_cooldown_limits, system_settings};
use crate::error::PersistenceError;

/// Reads a raw system setting.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_setting(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    Ok(system_settings::table
        .filter(system_settings::setting_key.eq(key))
        .select(system_settings::setting_value)
        .first::<String>(conn)
        .optional()?)
}

/// Loads every stored annual limit override.
///
/// Role names are normalized on read so rows written by other tools still
/// match.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn role_allowance_overrides(
    conn: &mut SqliteConnection,
) -> Result<RoleOverrides, PersistenceError> {
    let rows: Vec<(String, i32)> = role_allowance_limits::table
        .select((
            role_allowance_limits::role_name,
            role_allowance_limits::annual_limit,
        ))
        .order(role_allowance_limits::role_name.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(role, limit)| (role.trim().to_uppercase(), limit))
        .collect())
}

/// Loads every stored cooldown override.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn role_cooldown_overrides(
    conn: &mut SqliteConnection,
) -> Result<RoleOverrides, PersistenceError> {
    let rows: Vec<(String, i32)> = role_cooldown_limits::table
        .select((
            role_cooldown_limits::role_name,
            role_cooldown_limits::cooldown_days,
        ))
        .order(role_cooldown_limits::role_name.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(role, days)| (role.trim().to_uppercase(), days))
        .collect())
}
