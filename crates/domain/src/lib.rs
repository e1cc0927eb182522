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
mod cooldown;
mod error;
mod request_status;
mod role_config;
mod timestamp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use allowance::{AllowanceWindow, check_allowance, remaining_allowance};
pub use cooldown::evaluate_cooldown;
pub use error::DomainError;
pub use request_status::RequestStatus;
pub use role_config::{
    COOLDOWN_SETTING_KEY, DEFAULT_COOLDOWN_DAYS, DEFAULT_ROLE_COOLDOWNS, DEFAULT_ROLE_LIMITS,
    LOW_STOCK_THRESHOLD, RoleOverrides, is_low_stock, parse_global_cooldown,
    resolve_annual_limit, resolve_cooldown_days,
};
pub use timestamp::{format_timestamp, parse_timestamp};

// Re-export public types
pub use types::{
    LineItem, RequestDetail, RequestFilter, RequestItemInput, RequestLine, RequestSummary,
    RoleName, StaffRecord, StaffUsage, UniformItem, UniformRequest, ValidatedRequest,
};
pub use validation::{
    MAX_NOTE_LENGTH, normalize_note, validate_line_items, validate_new_request,
    validate_request_edit, validate_request_id, validate_setting_value,
};
