// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-based configuration resolution.
//!
//! Annual limits and cooldown periods come from two layers: overrides
//! persisted per role, and the compiled-in defaults below. The layers are
//! merged on every lookup so a stored override takes effect immediately.

use crate::error::DomainError;
use crate::types::RoleName;
use std::collections::BTreeMap;

/// Compiled-in annual allowance per role.
pub const DEFAULT_ROLE_LIMITS: &[(&str, u32)] = &[("MANAGER", 5), ("CASUAL", 2)];

/// Compiled-in cooldown days per role.
pub const DEFAULT_ROLE_COOLDOWNS: &[(&str, u32)] = &[("MANAGER", 30), ("CASUAL", 30)];

/// Cooldown applied when neither role nor global configuration yields one.
pub const DEFAULT_COOLDOWN_DAYS: u32 = 30;

/// Key of the global cooldown setting.
pub const COOLDOWN_SETTING_KEY: &str = "COOLDOWN_DAYS";

/// Items at or below this stock level are flagged as low.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Persisted per-role overrides, keyed by normalized role name.
pub type RoleOverrides = BTreeMap<String, i32>;

fn compiled_default(table: &[(&str, u32)], role: &RoleName) -> Option<u32> {
    table
        .iter()
        .find(|(name, _)| *name == role.value())
        .map(|(_, value)| *value)
}

/// Resolves the annual allowance for a role.
///
/// # Errors
///
/// * `DomainError::RoleNotConfigured` if neither layer knows the role.
/// * `DomainError::InvalidAllowanceLimit` if the stored override is negative.
pub fn resolve_annual_limit(role: &RoleName, overrides: &RoleOverrides) -> Result<u32, DomainError> {
    if let Some(limit) = overrides.get(role.value()) {
        return u32::try_from(*limit).map_err(|_| DomainError::InvalidAllowanceLimit {
            role: role.value().to_string(),
            limit: i64::from(*limit),
        });
    }

    compiled_default(DEFAULT_ROLE_LIMITS, role)
        .ok_or_else(|| DomainError::RoleNotConfigured(role.value().to_string()))
}

/// Interprets the stored global cooldown setting.
///
/// Anything other than a non-negative integer resolves to
/// [`DEFAULT_COOLDOWN_DAYS`].
#[must_use]
pub fn parse_global_cooldown(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_COOLDOWN_DAYS)
}

/// Resolves the cooldown days for a role.
///
/// A stored role override wins, then the compiled-in role default, then the
/// global setting. A negative role override is ignored.
#[must_use]
pub fn resolve_cooldown_days(role: &RoleName, overrides: &RoleOverrides, global_days: u32) -> u32 {
    if let Some(days) = overrides.get(role.value()) {
        if let Ok(days) = u32::try_from(*days) {
            return days;
        }
        return global_days;
    }

    compiled_default(DEFAULT_ROLE_COOLDOWNS, role).unwrap_or(global_days)
}

/// Whether an item's stock level counts as low.
#[must_use]
pub const fn is_low_stock(stock_on_hand: i32) -> bool {
    stock_on_hand <= LOW_STOCK_THRESHOLD
}
