// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest, rundown, gift and design-page vocabulary.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category assigned to guests created without one.
pub const DEFAULT_GUEST_CATEGORY: &str = "Regular";

/// Guest categories counted as VIP on the dashboard.
pub const VIP_CATEGORIES: [&str; 2] = ["VIP", "VVIP"];

/// Gift kind used by the quick-entry form at the gift desk.
pub const DEFAULT_GIFT_KIND: &str = "Envelope";

/// Note attached to gifts logged through quick entry.
pub const QUICK_ENTRY_GIFT_NOTE: &str = "Quick entry at gift desk";

/// Couple title shown on a freshly created design config.
pub const DEFAULT_COUPLE_TITLE: &str = "Putra & Putri";

/// Event date shown on a freshly created design config.
pub const DEFAULT_EVENT_DATE: &str = "Minggu, 12 Oktober 2025";

/// Theme color of a freshly created design config.
pub const DEFAULT_THEME_COLOR: &str = "charcoal";

/// Number of recent check-ins shown on the dashboard.
pub const RECENT_CHECK_IN_LIMIT: i64 = 5;

/// RSVP state of a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RsvpStatus {
    /// No answer yet.
    #[default]
    Pending,
    /// Confirmed or checked in at the venue.
    Attending,
    /// Declined the invitation.
    Declined,
}

impl FromStr for RsvpStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Attending" => Ok(Self::Attending),
            "Declined" => Ok(Self::Declined),
            _ => Err(DomainError::InvalidRsvpStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RsvpStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Attending => "Attending",
            Self::Declined => "Declined",
        }
    }
}

/// Progress of a rundown item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RundownStatus {
    #[default]
    Upcoming,
    Ongoing,
    Done,
}

impl FromStr for RundownStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Upcoming" => Ok(Self::Upcoming),
            "Ongoing" => Ok(Self::Ongoing),
            "Done" => Ok(Self::Done),
            _ => Err(DomainError::InvalidRundownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RundownStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RundownStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Ongoing => "Ongoing",
            Self::Done => "Done",
        }
    }
}
