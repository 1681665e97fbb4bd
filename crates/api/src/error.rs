// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use asira_domain::DomainError;
use asira_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The supplied credential matched nobody.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The credential is valid but the crew member may not log in.
    Forbidden {
        /// Why access was refused.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A stored asset exists but holds no bytes.
    EmptyContent {
        /// A human-readable description.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Forbidden { reason } => write!(f, "Forbidden: {reason}"),
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::EmptyContent { message } => write!(f, "Empty content: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        DomainError::InvalidCrewStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidStatusTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("crew_status_transition"),
            message,
        },
        DomainError::InvalidAccessCode(_) => ApiError::InvalidInput {
            field: String::from("accessCode"),
            message,
        },
        DomainError::InvalidAssetKind(_) => ApiError::InvalidInput {
            field: String::from("kind"),
            message,
        },
        DomainError::InvalidFilename(_) => ApiError::InvalidInput {
            field: String::from("file"),
            message,
        },
        DomainError::InvalidRsvpStatus(_) => ApiError::InvalidInput {
            field: String::from("rsvpStatus"),
            message,
        },
        DomainError::InvalidRundownStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidPortions(_) => ApiError::InvalidInput {
            field: String::from("portions"),
            message,
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Lookups that came back empty become `ResourceNotFound`; everything else
/// is a store failure and surfaces as `Internal`.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::CrewNotFound(crew_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Crew member"),
            message: format!("Crew member {crew_id} does not exist"),
        },
        PersistenceError::AssetNotFound { kind, asset_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Asset"),
            message: format!("No {kind} asset with id {asset_id}"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
