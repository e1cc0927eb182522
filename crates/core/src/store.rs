// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The storage contract the engine runs against.

use crate::error::CoreError;
use uniform_domain::{
    AllowanceWindow, LineItem, RequestDetail, RequestFilter, RequestLine, RequestStatus,
    RequestSummary, RoleName, RoleOverrides, StaffRecord, StaffUsage, UniformItem,
    UniformRequest,
};

/// Storage collaborator for the request lifecycle engine.
///
/// Every method runs against the current connection state, so calls made
/// inside [`UniformStore::transaction`] observe and participate in the open
/// transaction.
pub trait UniformStore {
    /// Looks up a staff member with their store and role.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_staff_by_id(&mut self, staff_id: i64) -> Result<Option<StaffRecord>, CoreError>;

    /// Looks up a uniform item.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_uniform_item_by_id(
        &mut self,
        uniform_item_id: i64,
    ) -> Result<Option<UniformItem>, CoreError>;

    /// Lists every uniform item ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_uniform_items(&mut self) -> Result<Vec<UniformItem>, CoreError>;

    /// Reduces stock by `quantity` only if at least that much is on hand.
    ///
    /// Returns the number of rows changed; zero means the reservation failed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn decrement_stock_if_available(
        &mut self,
        uniform_item_id: i64,
        quantity: i32,
    ) -> Result<usize, CoreError>;

    /// Returns `quantity` units to stock. Returns the number of rows changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn increment_stock(&mut self, uniform_item_id: i64, quantity: i32)
    -> Result<usize, CoreError>;

    /// Persisted annual limit overrides keyed by role name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn role_allowance_overrides(&mut self) -> Result<RoleOverrides, CoreError>;

    /// Persisted cooldown day overrides keyed by role name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn role_cooldown_overrides(&mut self) -> Result<RoleOverrides, CoreError>;

    /// Reads a raw system setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_setting(&mut self, key: &str) -> Result<Option<String>, CoreError>;

    /// Inserts or replaces a system setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn upsert_setting(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Returns true if the role exists in the role directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn role_exists(&mut self, role: &RoleName) -> Result<bool, CoreError>;

    /// Inserts or replaces a role's annual limit override.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn upsert_role_allowance(&mut self, role: &RoleName, annual_limit: i32)
    -> Result<(), CoreError>;

    /// Inserts or replaces a role's cooldown override.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn upsert_role_cooldown(&mut self, role: &RoleName, cooldown_days: i32)
    -> Result<(), CoreError>;

    /// Sums line item quantities of a staff member's requests made within
    /// `window`, optionally leaving one request out.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn used_allowance(
        &mut self,
        staff_id: i64,
        window: &AllowanceWindow,
        exclude_request_id: Option<i64>,
    ) -> Result<i64, CoreError>;

    /// Every staff member with the quantity they used within `window`,
    /// ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_staff_usage(&mut self, window: &AllowanceWindow)
    -> Result<Vec<StaffUsage>, CoreError>;

    /// Cooldown anchor of the most recent request by this staff member that
    /// contains this item.
    ///
    /// The anchor is the collection time when set, otherwise the request
    /// time. Ties are broken by the highest request id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn latest_cooldown_anchor(
        &mut self,
        staff_id: i64,
        uniform_item_id: i64,
        exclude_request_id: Option<i64>,
    ) -> Result<Option<String>, CoreError>;

    /// Inserts a request header in the REQUESTED status.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn insert_request(
        &mut self,
        staff_id: i64,
        note: Option<&str>,
        requested_at: &str,
    ) -> Result<UniformRequest, CoreError>;

    /// Inserts one line item for a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn insert_request_item(&mut self, request_id: i64, item: &LineItem) -> Result<(), CoreError>;

    /// Looks up a request header.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_request_by_id(&mut self, request_id: i64) -> Result<Option<UniformRequest>, CoreError>;

    /// Line items of a request in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_request_lines(&mut self, request_id: i64) -> Result<Vec<RequestLine>, CoreError>;

    /// Deletes every line item of a request. Returns the rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn delete_request_items(&mut self, request_id: i64) -> Result<usize, CoreError>;

    /// Deletes a request header. Returns the rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn delete_request(&mut self, request_id: i64) -> Result<usize, CoreError>;

    /// Replaces a request's note.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn update_request_note(&mut self, request_id: i64, note: Option<&str>)
    -> Result<(), CoreError>;

    /// Sets a request's status and stamps the matching stage timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn update_request_status(
        &mut self,
        request_id: i64,
        status: RequestStatus,
        stamped_at: &str,
    ) -> Result<UniformRequest, CoreError>;

    /// Detail projection of a request including its line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_request_detail(&mut self, request_id: i64) -> Result<Option<RequestDetail>, CoreError>;

    /// Summary projections matching every present filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_requests(&mut self, filter: &RequestFilter) -> Result<Vec<RequestSummary>, CoreError>;

    /// Runs `f` inside one transaction.
    ///
    /// Commits when `f` returns `Ok`; rolls back every change made through
    /// `self` when it returns `Err`.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or a store error if the transaction
    /// itself cannot be opened or committed.
    fn transaction<T, F>(&mut self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Self) -> Result<T, CoreError>;
}
