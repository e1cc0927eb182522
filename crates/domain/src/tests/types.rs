// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, LineItem, RoleName, ValidatedRequest};

#[test]
fn test_role_name_is_trimmed_and_upper_cased() {
    let role: RoleName = RoleName::new("  manager ");
    assert_eq!(role.value(), "MANAGER");
    assert_eq!(role, RoleName::new("MANAGER"));
}

#[test]
fn test_role_name_parse_rejects_blank() {
    assert_eq!(RoleName::parse("   "), Err(DomainError::EmptyRoleName));
    assert_eq!(RoleName::parse(""), Err(DomainError::EmptyRoleName));
}

#[test]
fn test_role_name_parse_accepts_mixed_case() {
    let role: RoleName = RoleName::parse("Casual").unwrap();
    assert_eq!(role.to_string(), "CASUAL");
}

#[test]
fn test_requested_total_sums_quantities() {
    let request = ValidatedRequest {
        items: vec![
            LineItem {
                uniform_item_id: 1,
                quantity: 2,
            },
            LineItem {
                uniform_item_id: 2,
                quantity: 3,
            },
        ],
        note: None,
    };
    assert_eq!(request.requested_total(), 5);
}
