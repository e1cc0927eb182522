// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use serde_json::{Value, json};
use time::OffsetDateTime;
use time::macros::datetime;
use uniform_persistence::Persistence;

use crate::{CreateRequestBody, create_request};

/// Staff ids in the demo data set.
pub const ALICE_MANAGER: i64 = 1;
pub const BOB_CASUAL: i64 = 2;

/// Item ids in the demo data set.
pub const POLO_M: i64 = 2;
pub const PANTS_M: i64 = 4;
pub const CAP_OS: i64 = 6;

/// A fresh in-memory database loaded with the demo data set.
pub fn create_test_persistence() -> Persistence {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory database");
    persistence
        .seed_demo_data()
        .expect("Failed to seed demo data");
    persistence
}

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-05-04 10:30 UTC)
}

pub fn create_body(value: Value) -> CreateRequestBody {
    serde_json::from_value(value).expect("body should deserialize")
}

/// Creates a one-item request and returns its id.
pub fn create_simple_request(persistence: &mut Persistence, staff_id: i64, item: i64) -> i64 {
    let body: CreateRequestBody = create_body(json!({
        "staffId": staff_id,
        "items": [{ "uniformItemId": item, "quantity": 1 }],
    }));
    create_request(persistence, &body, test_now())
        .expect("request should be created")
        .id
}
