// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `directory` — Stores, roles and staff
//! - `inventory` — Uniform items and stock levels
//! - `requests` — Request headers, line items, allowance and cooldown lookups
//! - `settings` — System settings and per-role overrides

pub mod directory;
pub mod inventory;
pub mod requests;
pub mod settings;
