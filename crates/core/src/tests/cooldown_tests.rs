// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{MANAGER_ID, PANTS_M, SHIRT_M, day, items, seeded_store};
use crate::{create_request, is_under_cooldown};
use uniform_domain::format_timestamp;

#[test]
fn test_collected_at_anchors_the_cooldown() {
    let mut store = seeded_store();
    let created = create_request(&mut store, MANAGER_ID, &items(&[(SHIRT_M, 1)]), None, day(0))
        .unwrap();
    store.set_collected_at(created.request_id, &format_timestamp(day(10)).unwrap());

    assert!(is_under_cooldown(&mut store, MANAGER_ID, SHIRT_M, 30, day(35), None).unwrap());
    assert!(!is_under_cooldown(&mut store, MANAGER_ID, SHIRT_M, 30, day(40), None).unwrap());
}

#[test]
fn test_requested_at_anchors_until_collected() {
    let mut store = seeded_store();
    create_request(&mut store, MANAGER_ID, &items(&[(SHIRT_M, 1)]), None, day(0)).unwrap();

    assert!(is_under_cooldown(&mut store, MANAGER_ID, SHIRT_M, 30, day(29), None).unwrap());
    assert!(!is_under_cooldown(&mut store, MANAGER_ID, SHIRT_M, 30, day(30), None).unwrap());
}

#[test]
fn test_excluded_request_does_not_anchor() {
    let mut store = seeded_store();
    let created = create_request(&mut store, MANAGER_ID, &items(&[(SHIRT_M, 1)]), None, day(0))
        .unwrap();

    assert!(
        !is_under_cooldown(
            &mut store,
            MANAGER_ID,
            SHIRT_M,
            30,
            day(1),
            Some(created.request_id)
        )
        .unwrap()
    );
}

#[test]
fn test_no_prior_request_is_not_under_cooldown() {
    let mut store = seeded_store();
    create_request(&mut store, MANAGER_ID, &items(&[(SHIRT_M, 1)]), None, day(0)).unwrap();

    assert!(!is_under_cooldown(&mut store, MANAGER_ID, PANTS_M, 30, day(1), None).unwrap());
}

#[test]
fn test_unparseable_anchor_is_not_under_cooldown() {
    let mut store = seeded_store();
    let created = create_request(&mut store, MANAGER_ID, &items(&[(SHIRT_M, 1)]), None, day(0))
        .unwrap();
    store.set_collected_at(created.request_id, "not-a-timestamp");

    assert!(!is_under_cooldown(&mut store, MANAGER_ID, SHIRT_M, 30, day(1), None).unwrap());
}
