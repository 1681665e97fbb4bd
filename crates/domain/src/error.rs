// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

use crate::crew::CrewStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or blank.
    #[error("Field '{field}' is required")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The crew status string is not one of the known states.
    #[error("Invalid crew status: '{0}'. Must be one of Active, Offline, Warning, Responded")]
    InvalidCrewStatus(String),

    /// A crew status transition is not permitted by the lifecycle.
    #[error("Crew status cannot change from {from} to {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: CrewStatus,
        /// The requested status.
        to: CrewStatus,
    },

    /// The access code does not have the expected shape.
    #[error("Invalid access code: {0}")]
    InvalidAccessCode(String),

    /// The asset kind is neither `cover` nor `twibbon`.
    #[error("Invalid asset kind: '{0}'. Must be 'cover' or 'twibbon'")]
    InvalidAssetKind(String),

    /// The uploaded filename is empty once sanitized.
    #[error("Invalid filename: '{0}'")]
    InvalidFilename(String),

    /// The RSVP status string is not recognized.
    #[error("Invalid RSVP status: '{0}'. Must be one of Pending, Attending, Declined")]
    InvalidRsvpStatus(String),

    /// The rundown status string is not recognized.
    #[error("Invalid rundown status: '{0}'. Must be one of Upcoming, Ongoing, Done")]
    InvalidRundownStatus(String),

    /// A menu item was given a negative portion count.
    #[error("Portion count must not be negative, got {0}")]
    InvalidPortions(i64),
}
