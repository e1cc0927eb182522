// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allowance;
mod config;
mod cooldown;
mod directory;
mod engine;
mod error;
mod results;
mod settings;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use allowance::used_allowance;
pub use config::{annual_limit, cooldown_days, global_cooldown_days};
pub use cooldown::is_under_cooldown;
pub use directory::{list_staff, list_uniform_items};
pub use engine::{
    create_request, delete_request, get_request_by_id, list_requests, update_request_items,
    update_request_status,
};
pub use error::CoreError;
pub use results::{
    CooldownSetting, CreatedRequest, DeletedRequest, RoleCooldown, RoleLimit,
    StaffDirectoryEntry, StatusChange, UniformItemView,
};
pub use settings::{
    get_cooldown, get_role_cooldowns, get_role_limits, update_cooldown, update_role_cooldown,
    update_role_limit,
};
pub use store::UniformStore;
