// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request status tracking and transition logic.
//!
//! A uniform request moves through a strictly linear lifecycle:
//! `REQUESTED → DISPATCHED → ARRIVED → COLLECTED`. Status only ever
//! advances one step at a time and `COLLECTED` is terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fulfillment status of a uniform request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// Stock is reserved and the request awaits dispatch.
    Requested,
    /// The items have been sent to the store.
    Dispatched,
    /// The items have arrived at the store.
    Arrived,
    /// The staff member has collected the items.
    Collected,
}

impl RequestStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Requested,
        Self::Dispatched,
        Self::Arrived,
        Self::Collected,
    ];

    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::Dispatched => "DISPATCHED",
            Self::Arrived => "ARRIVED",
            Self::Collected => "COLLECTED",
        }
    }

    /// Position of this status in the lifecycle.
    #[must_use]
    pub const fn index(&self) -> u8 {
        match self {
            Self::Requested => 0,
            Self::Dispatched => 1,
            Self::Arrived => 2,
            Self::Collected => 3,
        }
    }

    /// The only status this one may advance to, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Requested => Some(Self::Dispatched),
            Self::Dispatched => Some(Self::Arrived),
            Self::Arrived => Some(Self::Collected),
            Self::Collected => None,
        }
    }

    /// Returns true if this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Collected)
    }

    /// Returns true while line items and stock may still be changed.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Requested)
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "REQUESTED" => Ok(Self::Requested),
            "DISPATCHED" => Ok(Self::Dispatched),
            "ARRIVED" => Ok(Self::Arrived),
            "COLLECTED" => Ok(Self::Collected),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// The transition is legal only when `new_status` is exactly one step
    /// after the current status. Skips, repeats, regressions and any change
    /// out of `COLLECTED` are rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if !self.is_terminal() && new_status.index() == self.index() + 1 {
            return Ok(());
        }

        Err(DomainError::InvalidStatusTransition {
            from: *self,
            to: new_status,
        })
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
