// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew member mutations.
//!
//! This module contains backend-agnostic mutations for crew members.
//! Inserts that may collide on `access_code` surface the collision as
//! `PersistenceError::DuplicateAccessCode` so callers can retry with a
//! fresh code.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::CrewMemberUpdate;
use crate::diesel_schema::crew_members;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new crew member.
///
/// New members start `Active` with no note.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - Display name
/// * `role` - Free-text role
/// * `phone` - Phone number as entered
/// * `access_code` - A freshly generated access code
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateAccessCode` if the code is already
/// held by another crew member, or another error if the insert fails.
pub fn create_crew_member(
    conn: &mut _,
    name: &str,
    role: &str,
    phone: &str,
    access_code: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating crew member: {}, role: {}", name, role);

    diesel::insert_into(crew_members::table)
        .values((
            crew_members::name.eq(name),
            crew_members::role.eq(role),
            crew_members::phone.eq(phone),
            crew_members::access_code.eq(access_code),
        ))
        .execute(conn)
        .map_err(|e| PersistenceError::from(e).into_access_code_collision(access_code))?;

    let crew_id: i64 = conn.get_last_insert_rowid()?;

    info!(crew_id, "Crew member created successfully");

    Ok(crew_id)
}
}

backend_fn! {
/// Writes every editable field of a crew member.
///
/// # Errors
///
/// Returns `PersistenceError::CrewNotFound` if no row was updated.
pub fn update_crew_member(
    conn: &mut _,
    crew_id: i64,
    update: &CrewMemberUpdate,
) -> Result<(), PersistenceError> {
    info!("Updating crew member ID: {}", crew_id);

    let rows_affected: usize = diesel::update(crew_members::table)
        .filter(crew_members::crew_id.eq(crew_id))
        .set((
            crew_members::name.eq(&update.name),
            crew_members::role.eq(&update.role),
            crew_members::phone.eq(&update.phone),
            crew_members::status.eq(&update.status),
            crew_members::note.eq(update.note.as_deref()),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::CrewNotFound(crew_id));
    }

    Ok(())
}
}

backend_fn! {
/// Sets the status and note of one crew member.
///
/// # Errors
///
/// Returns `PersistenceError::CrewNotFound` if no row was updated.
pub fn set_crew_status(
    conn: &mut _,
    crew_id: i64,
    status: &str,
    note: Option<&str>,
) -> Result<(), PersistenceError> {
    info!(crew_id, status, "Setting crew member status");

    let rows_affected: usize = diesel::update(crew_members::table)
        .filter(crew_members::crew_id.eq(crew_id))
        .set((crew_members::status.eq(status), crew_members::note.eq(note)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::CrewNotFound(crew_id));
    }

    Ok(())
}
}

backend_fn! {
/// Sets the status and note of every crew member.
///
/// # Returns
///
/// The number of rows updated.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn set_all_crew_status(
    conn: &mut _,
    status: &str,
    note: Option<&str>,
) -> Result<usize, PersistenceError> {
    info!(status, "Setting status for all crew members");

    let rows_affected: usize = diesel::update(crew_members::table)
        .set((crew_members::status.eq(status), crew_members::note.eq(note)))
        .execute(conn)?;

    Ok(rows_affected)
}
}

backend_fn! {
/// Moves every crew member in `from_status` to `to_status` and clears their notes.
///
/// # Returns
///
/// The number of rows updated.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn reset_crew_status(
    conn: &mut _,
    from_status: &str,
    to_status: &str,
) -> Result<usize, PersistenceError> {
    info!(from_status, to_status, "Resetting crew member statuses");

    let rows_affected: usize = diesel::update(crew_members::table)
        .filter(crew_members::status.eq(from_status))
        .set((
            crew_members::status.eq(to_status),
            crew_members::note.eq(None::<&str>),
        ))
        .execute(conn)?;

    Ok(rows_affected)
}
}

backend_fn! {
/// Replaces a crew member's access code.
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateAccessCode` on collision and
/// `PersistenceError::CrewNotFound` if no row was updated.
pub fn update_crew_access_code(
    conn: &mut _,
    crew_id: i64,
    access_code: &str,
) -> Result<(), PersistenceError> {
    info!(crew_id, "Replacing crew member access code");

    let rows_affected: usize = diesel::update(crew_members::table)
        .filter(crew_members::crew_id.eq(crew_id))
        .set(crew_members::access_code.eq(access_code))
        .execute(conn)
        .map_err(|e| PersistenceError::from(e).into_access_code_collision(access_code))?;

    if rows_affected == 0 {
        return Err(PersistenceError::CrewNotFound(crew_id));
    }

    Ok(())
}
}

backend_fn! {
/// Updates the last login timestamp for a crew member.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_crew_last_login(conn: &mut _, crew_id: i64) -> Result<(), PersistenceError> {
    debug!("Updating last_login_at for crew member ID: {}", crew_id);

    diesel::update(crew_members::table)
        .filter(crew_members::crew_id.eq(crew_id))
        .set(crew_members::last_login_at.eq(diesel::dsl::sql::<
            diesel::sql_types::Nullable<diesel::sql_types::Text>,
        >("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a crew member.
///
/// # Errors
///
/// Returns `PersistenceError::CrewNotFound` if no row was deleted.
pub fn delete_crew_member(conn: &mut _, crew_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting crew member ID: {}", crew_id);

    let rows_affected: usize = diesel::delete(crew_members::table)
        .filter(crew_members::crew_id.eq(crew_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::CrewNotFound(crew_id));
    }

    Ok(())
}
}
