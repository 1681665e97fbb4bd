// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of characters in a crew access code.
pub const ACCESS_CODE_LENGTH: usize = 6;

/// Characters an access code is drawn from.
pub const ACCESS_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Reason stored on crew members put into `Warning` by an admin signal.
pub const EMERGENCY_REASON: &str = "Emergency signal from admin";

/// Represents the status of a crew member.
///
/// `Warning` and `Responded` belong to the SOS flow. Every other status
/// carries no note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CrewStatus {
    /// Crew member may log in and is on duty.
    #[default]
    Active,
    /// Crew access is disabled. Login is refused.
    Offline,
    /// An SOS signal is raised for this crew member.
    Warning,
    /// The SOS signal was acknowledged.
    Responded,
}

impl FromStr for CrewStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Offline" => Ok(Self::Offline),
            "Warning" => Ok(Self::Warning),
            "Responded" => Ok(Self::Responded),
            _ => Err(DomainError::InvalidCrewStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for CrewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CrewStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Offline => "Offline",
            Self::Warning => "Warning",
            Self::Responded => "Responded",
        }
    }

    /// Checks if the lifecycle permits moving from this status to `target`.
    ///
    /// Valid transitions are:
    /// - Active ⇄ Offline
    /// - Active/Offline → Warning
    /// - Warning → Responded
    /// - Warning/Responded → Active
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Active, Self::Offline)
                | (Self::Offline, Self::Active)
                | (Self::Active | Self::Offline, Self::Warning)
                | (Self::Warning, Self::Responded)
                | (Self::Warning | Self::Responded, Self::Active)
        )
    }

    /// Returns whether a crew member in this status may log in.
    #[must_use]
    pub const fn allows_login(&self) -> bool {
        !matches!(self, Self::Offline)
    }

    /// Returns whether this status is part of an open SOS.
    #[must_use]
    pub const fn is_sos(&self) -> bool {
        matches!(self, Self::Warning | Self::Responded)
    }

    /// Resolves the note to store alongside this status.
    ///
    /// A note survives only while the status is `Warning`.
    #[must_use]
    pub fn retained_note(&self, note: Option<String>) -> Option<String> {
        match self {
            Self::Warning => note.filter(|n| !n.trim().is_empty()),
            Self::Active | Self::Offline | Self::Responded => None,
        }
    }
}

/// A crew member's login code.
///
/// Codes are uppercase alphanumeric and exactly [`ACCESS_CODE_LENGTH`] long.
/// A code identifies a crew member; it is a shared secret, not a password.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessCode(String);

impl AccessCode {
    /// Validates and wraps an access code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code has the wrong length or contains
    /// characters outside [`ACCESS_CODE_ALPHABET`].
    pub fn new(code: &str) -> Result<Self, DomainError> {
        if code.len() != ACCESS_CODE_LENGTH {
            return Err(DomainError::InvalidAccessCode(format!(
                "expected {ACCESS_CODE_LENGTH} characters, got {}",
                code.len()
            )));
        }
        if !code.bytes().all(|b| ACCESS_CODE_ALPHABET.contains(&b)) {
            return Err(DomainError::InvalidAccessCode(format!(
                "'{code}' must contain only uppercase letters and digits"
            )));
        }
        Ok(Self(code.to_string()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
