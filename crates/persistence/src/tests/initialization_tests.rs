// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{request_count, seeded};
use crate::{Persistence, PersistenceError, queries};
use uniform_core::UniformStore;
use uniform_domain::{AllowanceWindow, RoleName};

#[test]
fn test_in_memory_database_enforces_foreign_keys() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_migrations_seed_reference_roles() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.role_exists(&RoleName::new("manager")).unwrap());
    assert!(persistence.role_exists(&RoleName::new("CASUAL")).unwrap());
    assert!(!persistence.role_exists(&RoleName::new("DRIVER")).unwrap());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first = seeded();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    first
        .persistence
        .insert_request(first.manager_id, None, "2026-03-01T09:00:00.000Z")
        .unwrap();

    assert_eq!(request_count(&mut first.persistence), 1);
    assert_eq!(request_count(&mut second), 0);
    assert!(second.list_uniform_items().unwrap().is_empty());
}

#[test]
fn test_file_database_persists_across_reopen() {
    let path = std::env::temp_dir().join(format!(
        "uniform_persistence_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence.create_uniform_item("VEST", "M", "Vest", 3).unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let listed = reopened.list_uniform_items().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].sku, "VEST");

    drop(reopened);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_seed_demo_data_loads_directory_and_stock() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.seed_demo_data().unwrap();

    let stores = persistence.list_stores().unwrap();
    assert_eq!(
        stores.iter().map(|(_, name)| name.as_str()).collect::<Vec<_>>(),
        vec!["Central", "Harbour", "Northside"]
    );

    assert_eq!(persistence.list_uniform_items().unwrap().len(), 6);

    let window: AllowanceWindow = AllowanceWindow::for_year(2026);
    let staff = queries::directory::list_staff_usage(&mut persistence.conn, &window).unwrap();
    assert_eq!(staff.len(), 4);
    assert!(staff.iter().all(|entry| entry.used_quantity == 0));
}

#[test]
fn test_create_staff_rejects_unknown_role() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let store_id: i64 = persistence.create_store("Central").unwrap();

    let result = persistence.create_staff("Eve", store_id, &RoleName::new("driver"));
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_create_staff_rejects_unknown_store() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.create_staff("Eve", 999, &RoleName::new("CASUAL"));
    assert!(result.is_err());
}

#[test]
fn test_negative_stock_is_rejected_by_schema() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.create_uniform_item("VEST", "M", "Vest", -1).is_err());
}

#[test]
fn test_duplicate_sku_and_size_is_rejected() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.create_uniform_item("VEST", "M", "Vest", 1).unwrap();
    assert!(persistence.create_uniform_item("VEST", "M", "Vest", 2).is_err());
    assert!(persistence.create_uniform_item("VEST", "L", "Vest", 2).is_ok());
}
