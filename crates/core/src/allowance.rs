// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::UniformStore;
use uniform_domain::AllowanceWindow;

/// Quantity a staff member has used in a calendar year.
///
/// Every existing request counts, whatever its status. Pass
/// `exclude_request_id` to leave one request out, as an edit does for the
/// request being replaced.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn used_allowance<S: UniformStore>(
    store: &mut S,
    staff_id: i64,
    year: i32,
    exclude_request_id: Option<i64>,
) -> Result<i64, CoreError> {
    let window: AllowanceWindow = AllowanceWindow::for_year(year);
    store.used_allowance(staff_id, &window, exclude_request_id)
}
