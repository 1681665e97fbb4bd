// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew member queries.
//!
//! This module contains backend-agnostic queries for retrieving crew
//! members. All queries use Diesel DSL and work across all supported
//! database backends.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::CrewMemberData;
use crate::diesel_schema::crew_members;
use crate::error::PersistenceError;

/// Diesel Queryable struct for crew member rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = crew_members)]
struct CrewMemberRow {
    crew_id: i64,
    name: String,
    role: String,
    phone: String,
    status: String,
    access_code: String,
    note: Option<String>,
    created_at: String,
    last_login_at: Option<String>,
}

impl From<CrewMemberRow> for CrewMemberData {
    fn from(row: CrewMemberRow) -> Self {
        Self {
            crew_id: row.crew_id,
            name: row.name,
            role: row.role,
            phone: row.phone,
            status: row.status,
            access_code: row.access_code,
            note: row.note,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        }
    }
}

backend_fn! {
/// Retrieves a crew member by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the crew member is not found.
pub fn get_crew_member_by_id(
    conn: &mut _,
    crew_id: i64,
) -> Result<Option<CrewMemberData>, PersistenceError> {
    debug!("Looking up crew member by ID: {}", crew_id);

    let result: Result<CrewMemberRow, diesel::result::Error> = crew_members::table
        .filter(crew_members::crew_id.eq(crew_id))
        .select(CrewMemberRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(CrewMemberData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a crew member by access code.
///
/// The comparison is exact; callers trim the submitted code beforehand.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `access_code` - The access code to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no crew member holds the code.
pub fn get_crew_member_by_access_code(
    conn: &mut _,
    access_code: &str,
) -> Result<Option<CrewMemberData>, PersistenceError> {
    debug!("Looking up crew member by access code");

    let result: Result<CrewMemberRow, diesel::result::Error> = crew_members::table
        .filter(crew_members::access_code.eq(access_code))
        .select(CrewMemberRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(CrewMemberData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves the crew member with the lowest ID whose stored phone equals `phone`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_first_crew_member_by_phone(
    conn: &mut _,
    phone: &str,
) -> Result<Option<CrewMemberData>, PersistenceError> {
    debug!("Looking up crew member by phone variant: {}", phone);

    let row: Option<CrewMemberRow> = crew_members::table
        .filter(crew_members::phone.eq(phone))
        .order(crew_members::crew_id.asc())
        .select(CrewMemberRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(CrewMemberData::from))
}
}

backend_fn! {
/// Lists all crew members ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_crew_members(conn: &mut _) -> Result<Vec<CrewMemberData>, PersistenceError> {
    let rows: Vec<CrewMemberRow> = crew_members::table
        .order(crew_members::crew_id.asc())
        .select(CrewMemberRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(CrewMemberData::from).collect())
}
}

backend_fn! {
/// Counts crew members currently in `status`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_crew_members_with_status(
    conn: &mut _,
    status: &str,
) -> Result<i64, PersistenceError> {
    let count: i64 = crew_members::table
        .filter(crew_members::status.eq(status))
        .count()
        .get_result(conn)?;

    Ok(count)
}
}
