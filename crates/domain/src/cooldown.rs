// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cooldown evaluation for repeat requests of the same item.

use crate::timestamp::{format_timestamp, parse_timestamp};
use time::{Duration, OffsetDateTime};

const MAX_COOLDOWN_UNTIL: &str = "9999-12-31T23:59:59.999Z";

/// Decides whether an item is still under cooldown.
///
/// `anchor` is the cooldown anchor of the most recent prior request for the
/// same staff member and item: its collection time if collected, otherwise
/// its request time. Returns the end of the cooldown (storage format) while
/// `now` is before it, and `None` once it has elapsed.
///
/// A missing or unparseable anchor never blocks a request. An end instant
/// beyond the representable range is reported as still active.
#[must_use]
pub fn evaluate_cooldown(
    anchor: Option<&str>,
    cooldown_days: u32,
    now: OffsetDateTime,
) -> Option<String> {
    let anchor_at = parse_timestamp(anchor?)?;

    let Some(until) = anchor_at.checked_add(Duration::days(i64::from(cooldown_days))) else {
        return Some(String::from(MAX_COOLDOWN_UNTIL));
    };

    if now < until {
        return Some(
            format_timestamp(until).unwrap_or_else(|_| String::from(MAX_COOLDOWN_UNTIL)),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_no_prior_request_is_not_cooling_down() {
        assert_eq!(
            evaluate_cooldown(None, 30, datetime!(2026-01-01 0:00 UTC)),
            None
        );
    }

    #[test]
    fn test_day_29_is_blocked_and_day_30_is_allowed() {
        let anchor = "2026-03-01T10:00:00.000Z";

        let day_29 = evaluate_cooldown(Some(anchor), 30, datetime!(2026-03-30 10:00 UTC));
        assert_eq!(day_29.as_deref(), Some("2026-03-31T10:00:00.000Z"));

        let day_30 = evaluate_cooldown(Some(anchor), 30, datetime!(2026-03-31 10:00 UTC));
        assert_eq!(day_30, None);
    }

    #[test]
    fn test_zero_days_never_blocks() {
        let anchor = "2026-03-01T10:00:00.000Z";
        assert_eq!(
            evaluate_cooldown(Some(anchor), 0, datetime!(2026-03-01 10:00 UTC)),
            None
        );
    }

    #[test]
    fn test_unparseable_anchor_fails_open() {
        assert_eq!(
            evaluate_cooldown(Some("not a date"), 30, datetime!(2026-03-01 10:00 UTC)),
            None
        );
    }

    #[test]
    fn test_overflowing_cooldown_blocks() {
        let anchor = "9999-12-31T00:00:00.000Z";
        let until = evaluate_cooldown(Some(anchor), u32::MAX, datetime!(9999-12-31 01:00 UTC));
        assert_eq!(until.as_deref(), Some(MAX_COOLDOWN_UNTIL));
    }
}
