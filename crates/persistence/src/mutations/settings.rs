// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;
use uniform_domain::RoleName;

use crate::diesel_schema::{role_allowance_limits, role_cooldown_limits, system_settings};
use crate::error::PersistenceError;

/// Inserts or replaces a system setting.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn upsert_setting(
    conn: &mut SqliteConnection,
    key: &str,
    value: &str,
) -> Result<(), PersistenceError> {
    diesel::insert_into(system_settings::table)
        .values((
            system_settings::setting_key.eq(key),
            system_settings::setting_value.eq(value),
        ))
        .on_conflict(system_settings::setting_key)
        .do_update()
        .set(system_settings::setting_value.eq(value))
        .execute(conn)?;

    info!(key, value, "Saved system setting");
    Ok(())
}

/// Inserts or replaces a role's annual limit override.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn upsert_role_allowance(
    conn: &mut SqliteConnection,
    role: &RoleName,
    annual_limit: i32,
) -> Result<(), PersistenceError> {
    diesel::insert_into(role_allowance_limits::table)
        .values((
            role_allowance_limits::role_name.eq(role.value()),
            role_allowance_limits::annual_limit.eq(annual_limit),
        ))
        .on_conflict(role_allowance_limits::role_name)
        .do_update()
        .set(role_allowance_limits::annual_limit.eq(annual_limit))
        .execute(conn)?;

    info!(role = %role, annual_limit, "Saved role allowance limit");
    Ok(())
}

/// Inserts or replaces a role's cooldown override.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn upsert_role_cooldown(
    conn: &mut SqliteConnection,
    role: &RoleName,
    cooldown_days: i32,
) -> Result<(), PersistenceError> {
    diesel::insert_into(role_cooldown_limits::table)
        .values((
            role_cooldown_limits::role_name.eq(role.value()),
            role_cooldown_limits::cooldown_days.eq(cooldown_days),
        ))
        .on_conflict(role_cooldown_limits::role_name)
        .do_update()
        .set(role_cooldown_limits::cooldown_days.eq(cooldown_days))
        .execute(conn)?;

    info!(role = %role, cooldown_days, "Saved role cooldown");
    Ok(())
}
