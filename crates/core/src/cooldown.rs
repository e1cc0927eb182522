// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::UniformStore;
use time::OffsetDateTime;
use tracing::debug;
use uniform_domain::{DomainError, LineItem, evaluate_cooldown};

/// Returns true while a staff member must wait before requesting an item
/// again.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn is_under_cooldown<S: UniformStore>(
    store: &mut S,
    staff_id: i64,
    uniform_item_id: i64,
    cooldown_days: u32,
    now: OffsetDateTime,
    exclude_request_id: Option<i64>,
) -> Result<bool, CoreError> {
    let until: Option<String> = active_cooldown_until(
        store,
        staff_id,
        uniform_item_id,
        cooldown_days,
        now,
        exclude_request_id,
    )?;
    Ok(until.is_some())
}

/// End of the cooldown still running for this staff member and item, if any.
fn active_cooldown_until<S: UniformStore>(
    store: &mut S,
    staff_id: i64,
    uniform_item_id: i64,
    cooldown_days: u32,
    now: OffsetDateTime,
    exclude_request_id: Option<i64>,
) -> Result<Option<String>, CoreError> {
    let anchor: Option<String> =
        store.latest_cooldown_anchor(staff_id, uniform_item_id, exclude_request_id)?;
    Ok(evaluate_cooldown(anchor.as_deref(), cooldown_days, now))
}

/// Fails on the first item still under cooldown.
pub(crate) fn ensure_no_active_cooldown<S: UniformStore>(
    store: &mut S,
    staff_id: i64,
    items: &[LineItem],
    cooldown_days: u32,
    now: OffsetDateTime,
    exclude_request_id: Option<i64>,
) -> Result<(), CoreError> {
    for item in items {
        let until: Option<String> = active_cooldown_until(
            store,
            staff_id,
            item.uniform_item_id,
            cooldown_days,
            now,
            exclude_request_id,
        )?;
        if let Some(cooldown_until) = until {
            debug!(
                staff_id,
                uniform_item_id = item.uniform_item_id,
                cooldown_until = %cooldown_until,
                "Cooldown active"
            );
            return Err(CoreError::DomainViolation(DomainError::CooldownActive {
                uniform_item_id: item.uniform_item_id,
                cooldown_until,
            }));
        }
    }
    Ok(())
}
