// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use crate::Persistence;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use uniform_core::UniformStore;
use uniform_domain::{RequestFilter, RequestItemInput, RoleName};

/// Ids of the rows created by [`seeded`].
pub struct Fixture {
    pub persistence: Persistence,
    pub central: i64,
    pub harbour: i64,
    pub manager_id: i64,
    pub casual_id: i64,
    pub shirt_m: i64,
    pub shirt_l: i64,
    pub pants_m: i64,
    pub cap_os: i64,
}

/// Two stores, one manager, one casual and four items.
///
/// Shirts and pants start with 10 in stock; the cap starts with 1.
pub fn seeded() -> Fixture {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory database");

    let central: i64 = persistence.create_store("Central").unwrap();
    let harbour: i64 = persistence.create_store("Harbour").unwrap();

    let manager_id: i64 = persistence
        .create_staff("Alice Manager", central, &RoleName::new("MANAGER"))
        .unwrap();
    let casual_id: i64 = persistence
        .create_staff("Bob Casual", harbour, &RoleName::new("casual"))
        .unwrap();

    let shirt_m: i64 = persistence
        .create_uniform_item("SHIRT", "M", "Shirt", 10)
        .unwrap();
    let shirt_l: i64 = persistence
        .create_uniform_item("SHIRT", "L", "Shirt", 10)
        .unwrap();
    let pants_m: i64 = persistence
        .create_uniform_item("PANTS", "M", "Pants", 10)
        .unwrap();
    let cap_os: i64 = persistence
        .create_uniform_item("CAP", "OS", "Cap", 1)
        .unwrap();

    Fixture {
        persistence,
        central,
        harbour,
        manager_id,
        casual_id,
        shirt_m,
        shirt_l,
        pants_m,
        cap_os,
    }
}

/// 2026-03-01 09:00 UTC plus `n` days.
pub fn day(n: i64) -> OffsetDateTime {
    datetime!(2026-03-01 09:00 UTC) + Duration::days(n)
}

pub fn items(pairs: &[(i64, i64)]) -> Vec<RequestItemInput> {
    pairs
        .iter()
        .map(|(id, quantity)| RequestItemInput::new(*id, *quantity))
        .collect()
}

pub fn stock_of(persistence: &mut Persistence, uniform_item_id: i64) -> i32 {
    persistence
        .get_uniform_item_by_id(uniform_item_id)
        .unwrap()
        .expect("item should exist")
        .stock_on_hand
}

pub fn request_count(persistence: &mut Persistence) -> usize {
    persistence
        .list_requests(&RequestFilter::default())
        .unwrap()
        .len()
}
