// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `UniformStore` implementation over the `SQLite` connection.

use tracing::error;
use uniform_core::{CoreError, UniformStore};
use uniform_domain::{
    AllowanceWindow, LineItem, RequestDetail, RequestFilter, RequestLine, RequestStatus,
    RequestSummary, RoleName, RoleOverrides, StaffRecord, StaffUsage, UniformItem,
    UniformRequest,
};

use crate::backend::sqlite::{begin_transaction, commit_transaction, rollback_transaction};
use crate::queries::directory::get_role_id;
use crate::{Persistence, mutations, queries};

impl UniformStore for Persistence {
    fn get_staff_by_id(&mut self, staff_id: i64) -> Result<Option<StaffRecord>, CoreError> {
        Ok(queries::directory::get_staff_by_id(&mut self.conn, staff_id)?)
    }

    fn get_uniform_item_by_id(
        &mut self,
        uniform_item_id: i64,
    ) -> Result<Option<UniformItem>, CoreError> {
        Ok(queries::inventory::get_uniform_item_by_id(
            &mut self.conn,
            uniform_item_id,
        )?)
    }

    fn list_uniform_items(&mut self) -> Result<Vec<UniformItem>, CoreError> {
        Ok(queries::inventory::list_uniform_items(&mut self.conn)?)
    }

    fn decrement_stock_if_available(
        &mut self,
        uniform_item_id: i64,
        quantity: i32,
    ) -> Result<usize, CoreError> {
        Ok(mutations::inventory::decrement_stock_if_available(
            &mut self.conn,
            uniform_item_id,
            quantity,
        )?)
    }

    fn increment_stock(
        &mut self,
        uniform_item_id: i64,
        quantity: i32,
    ) -> Result<usize, CoreError> {
        Ok(mutations::inventory::increment_stock(
            &mut self.conn,
            uniform_item_id,
            quantity,
        )?)
    }

    fn role_allowance_overrides(&mut self) -> Result<RoleOverrides, CoreError> {
        Ok(queries::settings::role_allowance_overrides(&mut self.conn)?)
    }

    fn role_cooldown_overrides(&mut self) -> Result<RoleOverrides, CoreError> {
        Ok(queries::settings::role_cooldown_overrides(&mut self.conn)?)
    }

    fn get_setting(&mut self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(queries::settings::get_setting(&mut self.conn, key)?)
    }

    fn upsert_setting(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        Ok(mutations::settings::upsert_setting(&mut self.conn, key, value)?)
    }

    fn role_exists(&mut self, role: &RoleName) -> Result<bool, CoreError> {
        Ok(get_role_id(&mut self.conn, role)?.is_some())
    }

    fn upsert_role_allowance(
        &mut self,
        role: &RoleName,
        annual_limit: i32,
    ) -> Result<(), CoreError> {
        Ok(mutations::settings::upsert_role_allowance(
            &mut self.conn,
            role,
            annual_limit,
        )?)
    }

    fn upsert_role_cooldown(
        &mut self,
        role: &RoleName,
        cooldown_days: i32,
    ) -> Result<(), CoreError> {
        Ok(mutations::settings::upsert_role_cooldown(
            &mut self.conn,
            role,
            cooldown_days,
        )?)
    }

    fn used_allowance(
        &mut self,
        staff_id: i64,
        window: &AllowanceWindow,
        exclude_request_id: Option<i64>,
    ) -> Result<i64, CoreError> {
        Ok(queries::requests::used_allowance(
            &mut self.conn,
            staff_id,
            window,
            exclude_request_id,
        )?)
    }

    fn list_staff_usage(&mut self, window: &AllowanceWindow) -> Result<Vec<StaffUsage>, CoreError> {
        Ok(queries::directory::list_staff_usage(&mut self.conn, window)?)
    }

    fn latest_cooldown_anchor(
        &mut self,
        staff_id: i64,
        uniform_item_id: i64,
        exclude_request_id: Option<i64>,
    ) -> Result<Option<String>, CoreError> {
        Ok(queries::requests::latest_cooldown_anchor(
            &mut self.conn,
            staff_id,
            uniform_item_id,
            exclude_request_id,
        )?)
    }

    fn insert_request(
        &mut self,
        staff_id: i64,
        note: Option<&str>,
        requested_at: &str,
    ) -> Result<UniformRequest, CoreError> {
        Ok(mutations::requests::insert_request(
            &mut self.conn,
            staff_id,
            note,
            requested_at,
        )?)
    }

    fn insert_request_item(&mut self, request_id: i64, item: &LineItem) -> Result<(), CoreError> {
        Ok(mutations::requests::insert_request_item(
            &mut self.conn,
            request_id,
            item,
        )?)
    }

    fn get_request_by_id(&mut self, request_id: i64) -> Result<Option<UniformRequest>, CoreError> {
        Ok(queries::requests::get_request_by_id(&mut self.conn, request_id)?)
    }

    fn get_request_lines(&mut self, request_id: i64) -> Result<Vec<RequestLine>, CoreError> {
        Ok(queries::requests::get_request_lines(&mut self.conn, request_id)?)
    }

    fn delete_request_items(&mut self, request_id: i64) -> Result<usize, CoreError> {
        Ok(mutations::requests::delete_request_items(
            &mut self.conn,
            request_id,
        )?)
    }

    fn delete_request(&mut self, request_id: i64) -> Result<usize, CoreError> {
        Ok(mutations::requests::delete_request(&mut self.conn, request_id)?)
    }

    fn update_request_note(&mut self, request_id: i64, note: Option<&str>) -> Result<(), CoreError> {
        Ok(mutations::requests::update_request_note(
            &mut self.conn,
            request_id,
            note,
        )?)
    }

    fn update_request_status(
        &mut self,
        request_id: i64,
        status: RequestStatus,
        stamped_at: &str,
    ) -> Result<UniformRequest, CoreError> {
        Ok(mutations::requests::update_request_status(
            &mut self.conn,
            request_id,
            status,
            stamped_at,
        )?)
    }

    fn get_request_detail(&mut self, request_id: i64) -> Result<Option<RequestDetail>, CoreError> {
        Ok(queries::requests::get_request_detail(
            &mut self.conn,
            request_id,
        )?)
    }

    fn list_requests(&mut self, filter: &RequestFilter) -> Result<Vec<RequestSummary>, CoreError> {
        Ok(queries::requests::list_requests(&mut self.conn, filter)?)
    }

    fn transaction<T, F>(&mut self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Self) -> Result<T, CoreError>,
    {
        begin_transaction(&mut self.conn)?;

        match f(self) {
            Ok(value) => {
                // A failed COMMIT is rolled back by the transaction manager
                commit_transaction(&mut self.conn)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = rollback_transaction(&mut self.conn) {
                    error!(%rollback_err, cause = %err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}
