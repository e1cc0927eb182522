// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Annual allowance accounting.
//!
//! Usage is counted per calendar year in UTC. Every request that still
//! exists counts towards the year it was requested in, whatever its
//! status, so collecting a request does not give the allowance back.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Half-open UTC interval `[start, end)` covering one calendar year.
///
/// Bounds are held in storage format so they can be compared directly
/// against persisted `requested_at` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceWindow {
    year: i32,
    start: String,
    end: String,
}

impl AllowanceWindow {
    /// Creates the window for a calendar year.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            start: format!("{year:04}-01-01T00:00:00.000Z"),
            end: format!("{:04}-01-01T00:00:00.000Z", year + 1),
        }
    }

    /// Creates the window for the UTC calendar year containing `now`.
    #[must_use]
    pub fn containing(now: OffsetDateTime) -> Self {
        Self::for_year(now.to_offset(time::UtcOffset::UTC).year())
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Exclusive upper bound.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Returns true if a stored timestamp falls inside the window.
    #[must_use]
    pub fn contains(&self, timestamp: &str) -> bool {
        timestamp >= self.start.as_str() && timestamp < self.end.as_str()
    }
}

/// Checks that `requested` more units fit within the annual `limit`.
///
/// # Errors
///
/// Returns `DomainError::AllowanceExceeded` if `used + requested > limit`.
pub fn check_allowance(used: i64, requested: i64, limit: u32) -> Result<(), DomainError> {
    if used.saturating_add(requested) > i64::from(limit) {
        return Err(DomainError::AllowanceExceeded {
            used,
            requested,
            limit,
        });
    }
    Ok(())
}

/// Units still available this year, never negative.
#[must_use]
pub fn remaining_allowance(limit: u32, used: i64) -> i64 {
    (i64::from(limit) - used).max(0)
}
