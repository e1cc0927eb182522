// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for persistence layer.
//!
//! This module contains all write operations for the persistence layer.
//! None of them open a transaction; callers that need atomicity wrap them
//! in one.
//!
//! ## Module Organization
//!
//! - `directory` — Stores, roles, staff and demo seed data
//! - `inventory` — Uniform items and conditional stock changes
//! - `requests` — Request headers and line items
//! - `settings` — System settings and per-role overrides

pub mod directory;
pub mod inventory;
pub mod requests;
pub mod settings;
