// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrative configuration: the global cooldown and per-role
//! overrides.

use crate::config::global_cooldown_days;
use crate::error::CoreError;
use crate::results::{CooldownSetting, RoleCooldown, RoleLimit};
use crate::store::UniformStore;
use tracing::info;
use uniform_domain::{COOLDOWN_SETTING_KEY, RoleName, validate_setting_value};

/// Returns the global cooldown in effect.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_cooldown<S: UniformStore>(store: &mut S) -> Result<CooldownSetting, CoreError> {
    Ok(CooldownSetting {
        cooldown_days: global_cooldown_days(store)?,
    })
}

/// Stores a new global cooldown.
///
/// # Errors
///
/// Returns an error if `cooldown_days` is negative or the store fails.
pub fn update_cooldown<S: UniformStore>(
    store: &mut S,
    cooldown_days: i64,
) -> Result<CooldownSetting, CoreError> {
    let days: i32 = validate_setting_value("cooldownDays", cooldown_days)?;
    store.upsert_setting(COOLDOWN_SETTING_KEY, &days.to_string())?;
    info!(cooldown_days = days, "Updated global cooldown");
    Ok(CooldownSetting {
        cooldown_days: days.unsigned_abs(),
    })
}

/// Lists stored annual limit overrides ordered by role.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_role_limits<S: UniformStore>(store: &mut S) -> Result<Vec<RoleLimit>, CoreError> {
    Ok(store
        .role_allowance_overrides()?
        .into_iter()
        .map(|(role, annual_limit)| RoleLimit {
            role: RoleName::new(&role),
            annual_limit,
        })
        .collect())
}

/// Lists stored cooldown overrides ordered by role.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_role_cooldowns<S: UniformStore>(
    store: &mut S,
) -> Result<Vec<RoleCooldown>, CoreError> {
    Ok(store
        .role_cooldown_overrides()?
        .into_iter()
        .map(|(role, cooldown_days)| RoleCooldown {
            role: RoleName::new(&role),
            cooldown_days,
        })
        .collect())
}

/// Stores an annual limit override for an existing role.
///
/// # Errors
///
/// Returns an error if:
/// - The role name is blank
/// - The limit is negative
/// - The role does not exist
/// - The store fails
pub fn update_role_limit<S: UniformStore>(
    store: &mut S,
    role_name: &str,
    annual_limit: i64,
) -> Result<RoleLimit, CoreError> {
    let role: RoleName = RoleName::parse(role_name)?;
    let annual_limit: i32 = validate_setting_value("annualLimit", annual_limit)?;
    ensure_role_exists(store, &role)?;

    store.upsert_role_allowance(&role, annual_limit)?;
    info!(role = %role, annual_limit, "Updated role allowance limit");

    Ok(RoleLimit { role, annual_limit })
}

/// Stores a cooldown override for an existing role.
///
/// # Errors
///
/// Returns an error if:
/// - The role name is blank
/// - The day count is negative
/// - The role does not exist
/// - The store fails
pub fn update_role_cooldown<S: UniformStore>(
    store: &mut S,
    role_name: &str,
    cooldown_days: i64,
) -> Result<RoleCooldown, CoreError> {
    let role: RoleName = RoleName::parse(role_name)?;
    let cooldown_days: i32 = validate_setting_value("cooldownDays", cooldown_days)?;
    ensure_role_exists(store, &role)?;

    store.upsert_role_cooldown(&role, cooldown_days)?;
    info!(role = %role, cooldown_days, "Updated role cooldown");

    Ok(RoleCooldown {
        role,
        cooldown_days,
    })
}

fn ensure_role_exists<S: UniformStore>(store: &mut S, role: &RoleName) -> Result<(), CoreError> {
    if store.role_exists(role)? {
        Ok(())
    } else {
        Err(CoreError::RoleNotFound(role.value().to_string()))
    }
}
