// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for uniform provisioning.
//!
//! This crate stores stores, staff, uniform items, requests and settings in
//! `SQLite` through Diesel, and implements the engine's `UniformStore`
//! contract on top of them.
//!
//! ## Database Backend
//!
//! `SQLite` is the only backend. File databases run in WAL mode; tests use
//! a uniquely named shared in-memory database per adapter so they never
//! see each other's rows.
//!
//! Migrations are embedded from `migrations/` and applied on every open.
//! Foreign key enforcement is switched on and verified before the adapter
//! is handed out.
//!
//! ## Layout
//!
//! - `queries/` — read-only Diesel queries
//! - `mutations/` — writes, none of which open a transaction
//! - `store` — the `UniformStore` implementation and scoped transactions
//! - `backend/` — connection setup, PRAGMAs and transaction control

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use uniform_domain::RoleName;

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use backend::PersistenceBackend;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter owning a single `SQLite` connection.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Better read concurrency for file databases
        backend::sqlite::enable_wal_mode(&mut conn)?;

        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Reference Data
    // ========================================================================

    /// Creates a store.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or the insert fails.
    pub fn create_store(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::directory::create_store(&mut self.conn, name)
    }

    /// Lists every store as `(store_id, name)` ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_stores(&mut self) -> Result<Vec<(i64, String)>, PersistenceError> {
        queries::directory::list_stores(&mut self.conn)
    }

    /// Returns the id of a role, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn ensure_role(&mut self, role: &RoleName) -> Result<i64, PersistenceError> {
        mutations::directory::ensure_role(&mut self.conn, role)
    }

    /// Creates a staff member.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `store_id` - The store they work at
    /// * `role` - Their role, which must already exist
    ///
    /// # Errors
    ///
    /// Returns an error if the role or store does not exist, or the insert
    /// fails.
    pub fn create_staff(
        &mut self,
        name: &str,
        store_id: i64,
        role: &RoleName,
    ) -> Result<i64, PersistenceError> {
        mutations::directory::create_staff(&mut self.conn, name, store_id, role)
    }

    /// Creates a uniform item.
    ///
    /// # Errors
    ///
    /// Returns an error if the `(sku, size)` pair exists, the stock level is
    /// negative, or the insert fails.
    pub fn create_uniform_item(
        &mut self,
        sku: &str,
        size: &str,
        item_name: &str,
        stock_on_hand: i32,
    ) -> Result<i64, PersistenceError> {
        mutations::inventory::create_uniform_item(
            &mut self.conn,
            sku,
            size,
            item_name,
            stock_on_hand,
        )
    }

    /// Loads the demo data set in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is kept in that case.
    pub fn seed_demo_data(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::begin_transaction(&mut self.conn)?;
        match mutations::directory::seed_demo_data(&mut self.conn) {
            Ok(()) => backend::sqlite::commit_transaction(&mut self.conn),
            Err(err) => {
                backend::sqlite::rollback_transaction(&mut self.conn)?;
                Err(err)
            }
        }
    }
}
