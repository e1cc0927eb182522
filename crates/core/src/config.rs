// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of role configuration against the store.

use crate::error::CoreError;
use crate::store::UniformStore;
use uniform_domain::{
    COOLDOWN_SETTING_KEY, RoleName, parse_global_cooldown, resolve_annual_limit,
    resolve_cooldown_days,
};

/// Resolves the annual limit for a role from stored overrides and defaults.
///
/// # Errors
///
/// Returns a domain violation if the role is unconfigured or its limit is
/// negative, or a store error.
pub fn annual_limit<S: UniformStore>(store: &mut S, role: &RoleName) -> Result<u32, CoreError> {
    let overrides = store.role_allowance_overrides()?;
    Ok(resolve_annual_limit(role, &overrides)?)
}

/// Reads the global cooldown setting, defaulting when absent or malformed.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn global_cooldown_days<S: UniformStore>(store: &mut S) -> Result<u32, CoreError> {
    let raw: Option<String> = store.get_setting(COOLDOWN_SETTING_KEY)?;
    Ok(parse_global_cooldown(raw.as_deref()))
}

/// Resolves the effective cooldown days for a role.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn cooldown_days<S: UniformStore>(store: &mut S, role: &RoleName) -> Result<u32, CoreError> {
    let overrides = store.role_cooldown_overrides()?;
    let global: u32 = global_cooldown_days(store)?;
    Ok(resolve_cooldown_days(role, &overrides, global))
}
