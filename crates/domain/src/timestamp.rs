// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage representation of instants.
//!
//! Every timestamp is stored as UTC text with millisecond precision
//! (`2026-03-01T09:30:00.000Z`). Because the width is fixed, string order
//! and chronological order agree, which the allowance window and cooldown
//! queries rely on.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::error::DomainError;

const STORAGE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Renders an instant in storage format, converting to UTC first.
///
/// # Errors
///
/// Returns `DomainError::TimestampFormat` if the instant cannot be rendered
/// (years outside `0000..=9999`).
pub fn format_timestamp(instant: OffsetDateTime) -> Result<String, DomainError> {
    instant
        .to_offset(UtcOffset::UTC)
        .format(STORAGE_FORMAT)
        .map_err(|e| DomainError::TimestampFormat(e.to_string()))
}

/// Parses a stored timestamp. Any RFC 3339 value is accepted.
///
/// Returns `None` for malformed input; callers decide how to treat that.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}
