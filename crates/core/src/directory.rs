// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::results::{StaffDirectoryEntry, UniformItemView};
use crate::store::UniformStore;
use time::OffsetDateTime;
use uniform_domain::{AllowanceWindow, RoleOverrides, remaining_allowance, resolve_annual_limit};

/// Lists staff with the allowance they have left in the year of `now`.
///
/// A role with no usable limit is shown with a limit of zero.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_staff<S: UniformStore>(
    store: &mut S,
    now: OffsetDateTime,
) -> Result<Vec<StaffDirectoryEntry>, CoreError> {
    let window: AllowanceWindow = AllowanceWindow::containing(now);
    let overrides: RoleOverrides = store.role_allowance_overrides()?;

    Ok(store
        .list_staff_usage(&window)?
        .into_iter()
        .map(|usage| {
            let limit: u32 = resolve_annual_limit(&usage.staff.role, &overrides).unwrap_or(0);
            StaffDirectoryEntry {
                staff_id: usage.staff.staff_id,
                name: usage.staff.name,
                store_name: usage.staff.store_name,
                role: usage.staff.role,
                remaining_allowance: remaining_allowance(limit, usage.used_quantity),
            }
        })
        .collect())
}

/// Lists uniform items with their low-stock flag, ordered by id.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_uniform_items<S: UniformStore>(
    store: &mut S,
) -> Result<Vec<UniformItemView>, CoreError> {
    Ok(store
        .list_uniform_items()?
        .into_iter()
        .map(UniformItemView::from)
        .collect())
}
