// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-memory `UniformStore` for engine tests.

use crate::{CoreError, UniformStore};
use std::collections::{BTreeMap, BTreeSet};
use time::{Duration, OffsetDateTime};
use uniform_domain::{
    AllowanceWindow, LineItem, RequestDetail, RequestFilter, RequestItemInput, RequestLine,
    RequestStatus, RequestSummary, RoleName, RoleOverrides, StaffRecord, StaffUsage, UniformItem,
    UniformRequest,
};

pub const STORE_ID: i64 = 1;
pub const MANAGER_ID: i64 = 1;
pub const CASUAL_ID: i64 = 2;
pub const SHIRT_M: i64 = 1;
pub const SHIRT_L: i64 = 2;
pub const PANTS_M: i64 = 3;
pub const CAP_OS: i64 = 4;

#[derive(Debug, Clone, Default)]
struct MemoryState {
    stores: BTreeMap<i64, String>,
    roles: BTreeSet<String>,
    staff: BTreeMap<i64, (String, i64, RoleName)>,
    items: BTreeMap<i64, UniformItem>,
    requests: BTreeMap<i64, UniformRequest>,
    lines: Vec<(i64, LineItem)>,
    settings: BTreeMap<String, String>,
    allowance_overrides: RoleOverrides,
    cooldown_overrides: RoleOverrides,
    next_request_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: MemoryState,
    /// Makes the conditional decrement for this item affect no rows.
    pub fail_decrement_for: Option<i64>,
    /// Makes the stock increment for this item affect no rows.
    pub fail_increment_for: Option<i64>,
    pub transactions_committed: usize,
    pub transactions_rolled_back: usize,
}

impl MemoryStore {
    pub fn add_store(&mut self, store_id: i64, name: &str) {
        self.state.stores.insert(store_id, name.to_string());
    }

    pub fn add_role(&mut self, role: &str) {
        self.state.roles.insert(RoleName::new(role).value().to_string());
    }

    pub fn add_staff(&mut self, staff_id: i64, name: &str, store_id: i64, role: &str) {
        self.add_role(role);
        self.state
            .staff
            .insert(staff_id, (name.to_string(), store_id, RoleName::new(role)));
    }

    pub fn add_item(&mut self, uniform_item_id: i64, item_name: &str, size: &str, stock: i32) {
        self.state.items.insert(
            uniform_item_id,
            UniformItem {
                uniform_item_id,
                sku: format!("SKU-{uniform_item_id}"),
                size: size.to_string(),
                item_name: item_name.to_string(),
                stock_on_hand: stock,
            },
        );
    }

    pub fn stock_of(&self, uniform_item_id: i64) -> i32 {
        self.state.items[&uniform_item_id].stock_on_hand
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.len()
    }

    pub fn line_count(&self) -> usize {
        self.state.lines.len()
    }

    pub fn set_allowance_override(&mut self, role: &str, limit: i32) {
        self.state
            .allowance_overrides
            .insert(role.to_string(), limit);
    }

    pub fn set_cooldown_override(&mut self, role: &str, days: i32) {
        self.state.cooldown_overrides.insert(role.to_string(), days);
    }

    pub fn set_raw_setting(&mut self, key: &str, value: &str) {
        self.state
            .settings
            .insert(key.to_string(), value.to_string());
    }

    /// Overwrites a stored timestamp, simulating past activity.
    pub fn set_collected_at(&mut self, request_id: i64, collected_at: &str) {
        if let Some(request) = self.state.requests.get_mut(&request_id) {
            request.collected_at = Some(collected_at.to_string());
        }
    }

    fn detail_names(&self, staff_id: i64) -> (String, String, i64) {
        self.state
            .staff
            .get(&staff_id)
            .map(|(name, store_id, _)| {
                let store_name = self
                    .state
                    .stores
                    .get(store_id)
                    .cloned()
                    .unwrap_or_default();
                (name.clone(), store_name, *store_id)
            })
            .unwrap_or_default()
    }

    fn lines_for(&self, request_id: i64) -> Vec<RequestLine> {
        self.state
            .lines
            .iter()
            .filter(|(id, _)| *id == request_id)
            .map(|(_, line)| {
                let item = &self.state.items[&line.uniform_item_id];
                RequestLine {
                    uniform_item_id: line.uniform_item_id,
                    item_name: item.item_name.clone(),
                    size: item.size.clone(),
                    quantity: line.quantity,
                }
            })
            .collect()
    }
}

impl UniformStore for MemoryStore {
    fn get_staff_by_id(&mut self, staff_id: i64) -> Result<Option<StaffRecord>, CoreError> {
        Ok(self
            .state
            .staff
            .get(&staff_id)
            .map(|(name, store_id, role)| StaffRecord {
                staff_id,
                name: name.clone(),
                store_id: *store_id,
                store_name: self
                    .state
                    .stores
                    .get(store_id)
                    .cloned()
                    .unwrap_or_default(),
                role: role.clone(),
            }))
    }

    fn get_uniform_item_by_id(
        &mut self,
        uniform_item_id: i64,
    ) -> Result<Option<UniformItem>, CoreError> {
        Ok(self.state.items.get(&uniform_item_id).cloned())
    }

    fn list_uniform_items(&mut self) -> Result<Vec<UniformItem>, CoreError> {
        Ok(self.state.items.values().cloned().collect())
    }

    fn decrement_stock_if_available(
        &mut self,
        uniform_item_id: i64,
        quantity: i32,
    ) -> Result<usize, CoreError> {
        if self.fail_decrement_for == Some(uniform_item_id) {
            return Ok(0);
        }
        match self.state.items.get_mut(&uniform_item_id) {
            Some(item) if item.stock_on_hand >= quantity => {
                item.stock_on_hand -= quantity;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    fn increment_stock(
        &mut self,
        uniform_item_id: i64,
        quantity: i32,
    ) -> Result<usize, CoreError> {
        if self.fail_increment_for == Some(uniform_item_id) {
            return Ok(0);
        }
        match self.state.items.get_mut(&uniform_item_id) {
            Some(item) => {
                item.stock_on_hand += quantity;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn role_allowance_overrides(&mut self) -> Result<RoleOverrides, CoreError> {
        Ok(self.state.allowance_overrides.clone())
    }

    fn role_cooldown_overrides(&mut self) -> Result<RoleOverrides, CoreError> {
        Ok(self.state.cooldown_overrides.clone())
    }

    fn get_setting(&mut self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.state.settings.get(key).cloned())
    }

    fn upsert_setting(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.set_raw_setting(key, value);
        Ok(())
    }

    fn role_exists(&mut self, role: &RoleName) -> Result<bool, CoreError> {
        Ok(self.state.roles.contains(role.value()))
    }

    fn upsert_role_allowance(
        &mut self,
        role: &RoleName,
        annual_limit: i32,
    ) -> Result<(), CoreError> {
        self.set_allowance_override(role.value(), annual_limit);
        Ok(())
    }

    fn upsert_role_cooldown(
        &mut self,
        role: &RoleName,
        cooldown_days: i32,
    ) -> Result<(), CoreError> {
        self.set_cooldown_override(role.value(), cooldown_days);
        Ok(())
    }

    fn used_allowance(
        &mut self,
        staff_id: i64,
        window: &AllowanceWindow,
        exclude_request_id: Option<i64>,
    ) -> Result<i64, CoreError> {
        Ok(self
            .state
            .lines
            .iter()
            .filter(|(request_id, _)| Some(*request_id) != exclude_request_id)
            .filter(|(request_id, _)| {
                self.state.requests.get(request_id).is_some_and(|r| {
                    r.staff_id == staff_id && window.contains(&r.requested_at)
                })
            })
            .map(|(_, line)| i64::from(line.quantity))
            .sum())
    }

    fn list_staff_usage(
        &mut self,
        window: &AllowanceWindow,
    ) -> Result<Vec<StaffUsage>, CoreError> {
        let ids: Vec<i64> = self.state.staff.keys().copied().collect();
        let mut usage: Vec<StaffUsage> = Vec::new();
        for staff_id in ids {
            let used_quantity: i64 = self.used_allowance(staff_id, window, None)?;
            if let Some(staff) = self.get_staff_by_id(staff_id)? {
                usage.push(StaffUsage {
                    staff,
                    used_quantity,
                });
            }
        }
        usage.sort_by(|a, b| a.staff.name.cmp(&b.staff.name));
        Ok(usage)
    }

    fn latest_cooldown_anchor(
        &mut self,
        staff_id: i64,
        uniform_item_id: i64,
        exclude_request_id: Option<i64>,
    ) -> Result<Option<String>, CoreError> {
        Ok(self
            .state
            .lines
            .iter()
            .filter(|(request_id, line)| {
                line.uniform_item_id == uniform_item_id
                    && Some(*request_id) != exclude_request_id
            })
            .filter_map(|(request_id, _)| self.state.requests.get(request_id))
            .filter(|r| r.staff_id == staff_id)
            .map(|r| {
                let anchor = r.collected_at.clone().unwrap_or_else(|| r.requested_at.clone());
                (anchor, r.request_id)
            })
            .max()
            .map(|(anchor, _)| anchor))
    }

    fn insert_request(
        &mut self,
        staff_id: i64,
        note: Option<&str>,
        requested_at: &str,
    ) -> Result<UniformRequest, CoreError> {
        self.state.next_request_id += 1;
        let request = UniformRequest {
            request_id: self.state.next_request_id,
            staff_id,
            status: RequestStatus::Requested,
            note: note.map(str::to_string),
            requested_at: requested_at.to_string(),
            dispatched_at: None,
            arrived_at: None,
            collected_at: None,
        };
        self.state
            .requests
            .insert(request.request_id, request.clone());
        Ok(request)
    }

    fn insert_request_item(&mut self, request_id: i64, item: &LineItem) -> Result<(), CoreError> {
        self.state.lines.push((request_id, *item));
        Ok(())
    }

    fn get_request_by_id(&mut self, request_id: i64) -> Result<Option<UniformRequest>, CoreError> {
        Ok(self.state.requests.get(&request_id).cloned())
    }

    fn get_request_lines(&mut self, request_id: i64) -> Result<Vec<RequestLine>, CoreError> {
        Ok(self.lines_for(request_id))
    }

    fn delete_request_items(&mut self, request_id: i64) -> Result<usize, CoreError> {
        let before: usize = self.state.lines.len();
        self.state.lines.retain(|(id, _)| *id != request_id);
        Ok(before - self.state.lines.len())
    }

    fn delete_request(&mut self, request_id: i64) -> Result<usize, CoreError> {
        Ok(usize::from(self.state.requests.remove(&request_id).is_some()))
    }

    fn update_request_note(
        &mut self,
        request_id: i64,
        note: Option<&str>,
    ) -> Result<(), CoreError> {
        if let Some(request) = self.state.requests.get_mut(&request_id) {
            request.note = note.map(str::to_string);
        }
        Ok(())
    }

    fn update_request_status(
        &mut self,
        request_id: i64,
        status: RequestStatus,
        stamped_at: &str,
    ) -> Result<UniformRequest, CoreError> {
        let request = self
            .state
            .requests
            .get_mut(&request_id)
            .ok_or(CoreError::RequestNotFound(request_id))?;
        request.status = status;
        let stamp = Some(stamped_at.to_string());
        match status {
            RequestStatus::Requested => {}
            RequestStatus::Dispatched => request.dispatched_at = stamp,
            RequestStatus::Arrived => request.arrived_at = stamp,
            RequestStatus::Collected => request.collected_at = stamp,
        }
        Ok(request.clone())
    }

    fn get_request_detail(&mut self, request_id: i64) -> Result<Option<RequestDetail>, CoreError> {
        let Some(request) = self.state.requests.get(&request_id).cloned() else {
            return Ok(None);
        };
        let (staff_name, store_name, _) = self.detail_names(request.staff_id);
        Ok(Some(RequestDetail {
            request_id,
            staff_id: request.staff_id,
            staff_name,
            store_name,
            status: request.status,
            note: request.note,
            requested_at: request.requested_at,
            dispatched_at: request.dispatched_at,
            arrived_at: request.arrived_at,
            collected_at: request.collected_at,
            items: self.lines_for(request_id),
        }))
    }

    fn list_requests(&mut self, filter: &RequestFilter) -> Result<Vec<RequestSummary>, CoreError> {
        let mut rows: Vec<(RequestSummary, i64)> = self
            .state
            .requests
            .values()
            .filter_map(|r| {
                let (staff_name, store_name, store_id) = self.detail_names(r.staff_id);
                let matches: bool = filter.status.is_none_or(|s| s == r.status)
                    && filter.staff_id.is_none_or(|id| id == r.staff_id)
                    && filter.store_id.is_none_or(|id| id == store_id);
                matches.then(|| {
                    (
                        RequestSummary {
                            request_id: r.request_id,
                            staff_name,
                            store_name,
                            status: r.status,
                            requested_at: r.requested_at.clone(),
                        },
                        r.request_id,
                    )
                })
            })
            .collect();
        rows.sort_by(|(a, a_id), (b, b_id)| {
            b.requested_at
                .cmp(&a.requested_at)
                .then_with(|| b_id.cmp(a_id))
        });
        Ok(rows.into_iter().map(|(summary, _)| summary).collect())
    }

    fn transaction<T, F>(&mut self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Self) -> Result<T, CoreError>,
    {
        let snapshot: MemoryState = self.state.clone();
        match f(self) {
            Ok(value) => {
                self.transactions_committed += 1;
                Ok(value)
            }
            Err(err) => {
                self.state = snapshot;
                self.transactions_rolled_back += 1;
                Err(err)
            }
        }
    }
}

/// A store with one shop, a manager, a casual and four items.
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::default();
    store.add_store(STORE_ID, "Central");
    store.add_store(2, "Harbour");
    store.add_staff(MANAGER_ID, "Alice Manager", STORE_ID, "MANAGER");
    store.add_staff(CASUAL_ID, "Bob Casual", STORE_ID, "CASUAL");
    store.add_item(SHIRT_M, "Polo Shirt", "M", 10);
    store.add_item(SHIRT_L, "Polo Shirt", "L", 10);
    store.add_item(PANTS_M, "Work Pants", "M", 10);
    store.add_item(CAP_OS, "Cap", "OS", 1);
    store
}

/// Day `day` of 2026, at 09:00 UTC, counted from March 1st.
pub fn day(day: i64) -> OffsetDateTime {
    time::macros::datetime!(2026-03-01 09:00 UTC) + Duration::days(day)
}

pub fn items(pairs: &[(i64, i64)]) -> Vec<RequestItemInput> {
    pairs
        .iter()
        .map(|(id, quantity)| RequestItemInput::new(*id, *quantity))
        .collect()
}
