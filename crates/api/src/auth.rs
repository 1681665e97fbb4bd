// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew authentication.
//!
//! An access code or a phone number identifies a crew member. Neither is a
//! password: the lookup grants access to whoever presents it, and `Offline`
//! is the only status that refuses entry.

use std::str::FromStr;

use asira_domain::{AccessCode, CrewStatus, phone_lookup_variants};
use asira_persistence::{CrewMemberData, Persistence};
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_persistence_error};

/// Authentication service for crew logins.
pub struct CrewAuthenticationService;

impl CrewAuthenticationService {
    /// Logs a crew member in by access code.
    ///
    /// Surrounding whitespace is trimmed; the comparison is otherwise exact.
    /// Crew members in `Warning` or `Responded` may still log in.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `access_code` - The submitted access code
    ///
    /// # Returns
    ///
    /// The crew member record with `last_login_at` refreshed.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the code is blank
    /// - `AuthenticationFailed` if the code is malformed or no crew member
    ///   holds it
    /// - `Forbidden` if the crew member is `Offline`
    pub fn login(
        persistence: &mut Persistence,
        access_code: &str,
    ) -> Result<CrewMemberData, ApiError> {
        let code: &str = access_code.trim();
        if code.is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("accessCode"),
                message: String::from("Access code is required"),
            });
        }

        // A malformed code cannot be held by anyone.
        let code: AccessCode = AccessCode::new(code).map_err(|e| {
            warn!(error = %e, "Rejected crew login with malformed access code");
            ApiError::AuthenticationFailed {
                reason: String::from("Invalid access code"),
            }
        })?;

        let crew: CrewMemberData = persistence
            .get_crew_member_by_access_code(code.value())
            .map_err(translate_persistence_error)?
            .ok_or_else(|| {
                warn!("Rejected crew login with unknown access code");
                ApiError::AuthenticationFailed {
                    reason: String::from("Invalid access code"),
                }
            })?;

        Self::admit(persistence, crew)
    }

    /// Logs a crew member in by phone number.
    ///
    /// The number is matched against every spelling produced by
    /// [`phone_lookup_variants`], exact input first.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the number is blank
    /// - `ResourceNotFound` if no crew member matches any spelling
    /// - `Forbidden` if the crew member is `Offline`
    pub fn login_by_phone(
        persistence: &mut Persistence,
        phone_number: &str,
    ) -> Result<CrewMemberData, ApiError> {
        let variants: Vec<String> = phone_lookup_variants(phone_number);
        if variants.is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("phoneNumber"),
                message: String::from("Phone number is required"),
            });
        }

        debug!(?variants, "Looking up crew member by phone");

        let crew: CrewMemberData = persistence
            .find_crew_member_by_phone_variants(&variants)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| {
                warn!("Rejected phone login for unregistered number");
                ApiError::ResourceNotFound {
                    resource_type: String::from("Crew member"),
                    message: String::from("Phone number is not registered"),
                }
            })?;

        Self::admit(persistence, crew)
    }

    /// Applies the status gate and records the login.
    fn admit(
        persistence: &mut Persistence,
        crew: CrewMemberData,
    ) -> Result<CrewMemberData, ApiError> {
        let status: CrewStatus =
            CrewStatus::from_str(&crew.status).map_err(|e| ApiError::Internal {
                message: format!("Stored crew status is invalid: {e}"),
            })?;

        if !status.allows_login() {
            warn!(crew_id = crew.crew_id, "Rejected login for offline crew member");
            return Err(ApiError::Forbidden {
                reason: String::from("Crew access is offline"),
            });
        }

        persistence
            .update_crew_last_login(crew.crew_id)
            .map_err(translate_persistence_error)?;

        info!(crew_id = crew.crew_id, status = %status, "Crew member logged in");

        persistence
            .get_crew_member(crew.crew_id)
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Crew member vanished during login"),
            })
    }
}
