// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew roster handlers and the status lifecycle.
//!
//! Every operation here is a single write against the crew table. The
//! "emergency active" flag is never stored; it is recomputed from the
//! roster whenever it is needed.

use std::str::FromStr;

use asira_domain::{
    ACCESS_CODE_ALPHABET, ACCESS_CODE_LENGTH, AccessCode, CrewStatus, DomainError,
    EMERGENCY_REASON, optional_field, require_field,
};
use asira_persistence::{CrewMemberData, CrewMemberUpdate, Persistence, PersistenceError};
use rand::seq::IndexedRandom;
use tracing::{error, info, warn};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    BulkStatusRequest, BulkStatusResponse, CreateCrewRequest, CrewMemberInfo,
    EmergencyStatusResponse, EmergencyToggleResponse, ListCrewResponse, SosRequest,
    UpdateCrewRequest,
};

/// Upper bound on attempts to claim an unused access code.
///
/// With 36^6 possible codes this is only reached when the table is
/// pathologically full or the code source keeps repeating itself.
pub const MAX_ACCESS_CODE_ATTEMPTS: usize = 32;

/// Draws a random access code, each symbol uniformly from the alphabet.
///
/// # Errors
///
/// Returns an error if the drawn code fails validation.
pub fn random_access_code() -> Result<AccessCode, ApiError> {
    let mut rng = rand::rng();
    let code: String = std::iter::repeat_with(|| ACCESS_CODE_ALPHABET.choose(&mut rng))
        .take(ACCESS_CODE_LENGTH)
        .flatten()
        .map(|&symbol| char::from(symbol))
        .collect();

    AccessCode::new(&code).map_err(|e| ApiError::Internal {
        message: format!("Generated access code is malformed: {e}"),
    })
}

/// Claims an access code that no crew member holds.
///
/// Each candidate from `next_code` is handed to `claim`, which writes it.
/// The unique index on `access_code` decides whether a code is free: a
/// held code fails the write with `DuplicateAccessCode` and the next
/// candidate is drawn.
///
/// # Errors
///
/// Returns an error if the store fails or no candidate could be claimed
/// within [`MAX_ACCESS_CODE_ATTEMPTS`] draws.
pub fn generate_unique_access_code<T>(
    persistence: &mut Persistence,
    next_code: &mut impl FnMut() -> Result<AccessCode, ApiError>,
    mut claim: impl FnMut(&mut Persistence, &AccessCode) -> Result<T, PersistenceError>,
) -> Result<T, ApiError> {
    for attempt in 1..=MAX_ACCESS_CODE_ATTEMPTS {
        let code: AccessCode = next_code()?;
        match claim(persistence, &code) {
            Ok(claimed) => return Ok(claimed),
            Err(PersistenceError::DuplicateAccessCode(_)) => {
                warn!(attempt, "Access code already held, drawing another");
            }
            Err(e) => return Err(translate_persistence_error(e)),
        }
    }

    error!("No free access code after {MAX_ACCESS_CODE_ATTEMPTS} attempts");
    Err(ApiError::Internal {
        message: String::from("Unable to claim a unique access code"),
    })
}

fn load_crew_member(persistence: &mut Persistence, crew_id: i64) -> Result<CrewMemberData, ApiError> {
    persistence
        .get_crew_member(crew_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| translate_persistence_error(PersistenceError::CrewNotFound(crew_id)))
}

fn stored_status(crew: &CrewMemberData) -> Result<CrewStatus, ApiError> {
    CrewStatus::from_str(&crew.status).map_err(|e| ApiError::Internal {
        message: format!("Stored crew status is invalid: {e}"),
    })
}

fn load_info(persistence: &mut Persistence, crew_id: i64) -> Result<CrewMemberInfo, ApiError> {
    load_crew_member(persistence, crew_id).map(CrewMemberInfo::from)
}

/// Creates a crew member with a fresh random access code.
///
/// # Errors
///
/// Returns an error if:
/// - `name` or `phone` is missing or blank
/// - No unique code could be claimed
/// - Database operations fail
pub fn create_crew_member(
    persistence: &mut Persistence,
    request: &CreateCrewRequest,
) -> Result<CrewMemberInfo, ApiError> {
    create_crew_member_with(persistence, request, &mut random_access_code)
}

/// Creates a crew member, drawing access codes from `next_code`.
///
/// # Errors
///
/// As [`create_crew_member`].
pub fn create_crew_member_with(
    persistence: &mut Persistence,
    request: &CreateCrewRequest,
    next_code: &mut impl FnMut() -> Result<AccessCode, ApiError>,
) -> Result<CrewMemberInfo, ApiError> {
    let name: String =
        require_field("name", request.name.as_deref()).map_err(translate_domain_error)?;
    let phone: String =
        require_field("phone", request.phone.as_deref()).map_err(translate_domain_error)?;
    let role: String = optional_field(request.role.as_deref()).unwrap_or_default();

    let crew_id: i64 = generate_unique_access_code(persistence, next_code, |p, code| {
        p.create_crew_member(&name, &role, &phone, code.value())
    })?;
    load_info(persistence, crew_id)
}

/// Lists the crew roster ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_crew_members(persistence: &mut Persistence) -> Result<ListCrewResponse, ApiError> {
    let crew: Vec<CrewMemberInfo> = persistence
        .list_crew_members()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(CrewMemberInfo::from)
        .collect();

    Ok(ListCrewResponse {
        total: crew.len(),
        crew,
    })
}

/// Retrieves one crew member.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the crew member does not exist.
pub fn get_crew_member(
    persistence: &mut Persistence,
    crew_id: i64,
) -> Result<CrewMemberInfo, ApiError> {
    load_info(persistence, crew_id)
}

/// Updates any subset of a crew member's editable fields.
///
/// Omitted fields keep their stored value. The note survives only if the
/// resulting status is `Warning`.
///
/// # Errors
///
/// Returns an error if:
/// - The crew member does not exist
/// - A supplied name or phone is blank
/// - The status is not recognized
/// - Database operations fail
pub fn update_crew_member(
    persistence: &mut Persistence,
    crew_id: i64,
    request: &UpdateCrewRequest,
) -> Result<CrewMemberInfo, ApiError> {
    let current: CrewMemberData = load_crew_member(persistence, crew_id)?;

    let status: CrewStatus = match request.status.as_deref() {
        Some(status) => CrewStatus::from_str(status.trim()).map_err(translate_domain_error)?,
        None => stored_status(&current)?,
    };
    let name: String = match request.name.as_deref() {
        Some(name) => require_field("name", Some(name)).map_err(translate_domain_error)?,
        None => current.name,
    };
    let phone: String = match request.phone.as_deref() {
        Some(phone) => require_field("phone", Some(phone)).map_err(translate_domain_error)?,
        None => current.phone,
    };
    let role: String = request
        .role
        .as_deref()
        .map_or(current.role, |r| r.trim().to_string());
    let note: Option<String> = match request.note.as_deref() {
        Some(note) => Some(note.to_string()),
        None => current.note,
    };

    let update: CrewMemberUpdate = CrewMemberUpdate {
        name,
        role,
        phone,
        status: status.as_str().to_string(),
        note: status.retained_note(note),
    };

    persistence
        .update_crew_member(crew_id, &update)
        .map_err(translate_persistence_error)?;

    info!(crew_id, status = %status, "Crew member updated");

    load_info(persistence, crew_id)
}

/// Deletes a crew member.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the crew member does not exist.
pub fn delete_crew_member(persistence: &mut Persistence, crew_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_crew_member(crew_id)
        .map_err(translate_persistence_error)
}

/// Assigns a status to one crew member.
///
/// This is a direct assignment with no transition check. `note` is stored
/// only for `Warning` and cleared otherwise.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the crew member does not exist.
pub fn set_crew_status(
    persistence: &mut Persistence,
    crew_id: i64,
    status: CrewStatus,
    note: Option<String>,
) -> Result<CrewMemberInfo, ApiError> {
    let note: Option<String> = status.retained_note(note);
    persistence
        .set_crew_status(crew_id, status.as_str(), note.as_deref())
        .map_err(translate_persistence_error)?;

    info!(crew_id, status = %status, "Crew status set");

    load_info(persistence, crew_id)
}

/// Sets every crew member to `Active` or `Offline` and clears all notes.
///
/// # Errors
///
/// Returns `InvalidInput` if the status is missing or is not `Active` or
/// `Offline`.
pub fn bulk_set_status(
    persistence: &mut Persistence,
    request: &BulkStatusRequest,
) -> Result<BulkStatusResponse, ApiError> {
    let raw: String =
        require_field("status", request.status.as_deref()).map_err(translate_domain_error)?;
    let target: CrewStatus = CrewStatus::from_str(&raw).map_err(translate_domain_error)?;

    if !matches!(target, CrewStatus::Active | CrewStatus::Offline) {
        return Err(ApiError::InvalidInput {
            field: String::from("status"),
            message: String::from("Bulk status must be 'Active' or 'Offline'"),
        });
    }

    let updated: usize = persistence
        .set_all_crew_status(target.as_str(), None)
        .map_err(translate_persistence_error)?;

    info!(target = %target, updated, "Bulk crew status applied");

    Ok(BulkStatusResponse {
        target_status: target.as_str().to_string(),
        updated,
    })
}

/// Reports whether any crew member is in `Warning`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn emergency_status(persistence: &mut Persistence) -> Result<EmergencyStatusResponse, ApiError> {
    let warning: i64 = persistence
        .count_crew_members_with_status(CrewStatus::Warning.as_str())
        .map_err(translate_persistence_error)?;

    Ok(EmergencyStatusResponse {
        active: warning > 0,
        warning,
    })
}

/// Flips the roster-wide emergency.
///
/// If any crew member is in `Warning`, all `Warning` members return to
/// `Active` with their notes cleared. Otherwise every crew member is put in
/// `Warning` with the admin emergency reason.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn toggle_global_emergency(
    persistence: &mut Persistence,
) -> Result<EmergencyToggleResponse, ApiError> {
    let status: EmergencyStatusResponse = emergency_status(persistence)?;

    if status.active {
        let affected: usize = persistence
            .reset_crew_status(CrewStatus::Warning.as_str(), CrewStatus::Active.as_str())
            .map_err(translate_persistence_error)?;
        info!(affected, "Global emergency cleared");
        Ok(EmergencyToggleResponse {
            activated: false,
            affected,
        })
    } else {
        let affected: usize = persistence
            .set_all_crew_status(CrewStatus::Warning.as_str(), Some(EMERGENCY_REASON))
            .map_err(translate_persistence_error)?;
        warn!(affected, "Global emergency raised");
        Ok(EmergencyToggleResponse {
            activated: true,
            affected,
        })
    }
}

/// Returns every crew member in `Warning` to `Active`.
///
/// # Returns
///
/// The number of crew members reset.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn stop_emergency(persistence: &mut Persistence) -> Result<usize, ApiError> {
    let affected: usize = persistence
        .reset_crew_status(CrewStatus::Warning.as_str(), CrewStatus::Active.as_str())
        .map_err(translate_persistence_error)?;

    info!(affected, "Emergency stopped");
    Ok(affected)
}

/// Flips the emergency state of one crew member.
///
/// `Warning`/`Responded` go back to `Active`; `Active`/`Offline` are put in
/// `Warning` with the admin emergency reason.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the crew member does not exist.
pub fn toggle_crew_emergency(
    persistence: &mut Persistence,
    crew_id: i64,
) -> Result<CrewMemberInfo, ApiError> {
    let crew: CrewMemberData = load_crew_member(persistence, crew_id)?;

    if stored_status(&crew)?.is_sos() {
        set_crew_status(persistence, crew_id, CrewStatus::Active, None)
    } else {
        set_crew_status(
            persistence,
            crew_id,
            CrewStatus::Warning,
            Some(EMERGENCY_REASON.to_string()),
        )
    }
}

/// Raises an SOS for one crew member.
///
/// # Errors
///
/// Returns an error if:
/// - The crew member does not exist
/// - The crew member is already in `Warning` or `Responded`
pub fn raise_sos(
    persistence: &mut Persistence,
    crew_id: i64,
    request: &SosRequest,
) -> Result<CrewMemberInfo, ApiError> {
    let crew: CrewMemberData = load_crew_member(persistence, crew_id)?;
    let current: CrewStatus = stored_status(&crew)?;

    if !current.can_transition_to(CrewStatus::Warning) {
        return Err(translate_domain_error(DomainError::InvalidStatusTransition {
            from: current,
            to: CrewStatus::Warning,
        }));
    }

    let note: String =
        optional_field(request.note.as_deref()).unwrap_or_else(|| EMERGENCY_REASON.to_string());

    warn!(crew_id, "SOS raised");
    set_crew_status(persistence, crew_id, CrewStatus::Warning, Some(note))
}

/// Acknowledges an SOS, moving the crew member from `Warning` to `Responded`.
///
/// # Errors
///
/// Returns an error if the crew member does not exist or is not in `Warning`.
pub fn acknowledge_sos(
    persistence: &mut Persistence,
    crew_id: i64,
) -> Result<CrewMemberInfo, ApiError> {
    let crew: CrewMemberData = load_crew_member(persistence, crew_id)?;
    let current: CrewStatus = stored_status(&crew)?;

    if current != CrewStatus::Warning {
        return Err(translate_domain_error(DomainError::InvalidStatusTransition {
            from: current,
            to: CrewStatus::Responded,
        }));
    }

    set_crew_status(persistence, crew_id, CrewStatus::Responded, None)
}

/// Replaces a crew member's access code with a fresh random one.
///
/// # Errors
///
/// Returns an error if the crew member does not exist or no unique code
/// could be claimed.
pub fn regenerate_access_code(
    persistence: &mut Persistence,
    crew_id: i64,
) -> Result<CrewMemberInfo, ApiError> {
    regenerate_access_code_with(persistence, crew_id, &mut random_access_code)
}

/// Replaces a crew member's access code, drawing candidates from `next_code`.
///
/// # Errors
///
/// As [`regenerate_access_code`].
pub fn regenerate_access_code_with(
    persistence: &mut Persistence,
    crew_id: i64,
    next_code: &mut impl FnMut() -> Result<AccessCode, ApiError>,
) -> Result<CrewMemberInfo, ApiError> {
    load_crew_member(persistence, crew_id)?;

    generate_unique_access_code(persistence, next_code, |p, code| {
        p.update_crew_access_code(crew_id, code.value())
    })?;
    info!(crew_id, "Access code regenerated");
    load_info(persistence, crew_id)
}
