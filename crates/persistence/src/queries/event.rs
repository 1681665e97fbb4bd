// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event-day queries: guests, rundown, gifts, venues, menu and design.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{
    DesignConfigData, GiftData, GuestData, MenuItemData, RundownItemData, VenueData,
};
use crate::diesel_schema::{design_configs, gifts, guests, menu_items, rundown_items, venues};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = guests)]
struct GuestRow {
    guest_id: i64,
    name: String,
    category: String,
    phone: Option<String>,
    table_number: Option<String>,
    rsvp_status: String,
    checked_in_at: Option<String>,
}

impl From<GuestRow> for GuestData {
    fn from(row: GuestRow) -> Self {
        Self {
            guest_id: row.guest_id,
            name: row.name,
            category: row.category,
            phone: row.phone,
            table_number: row.table_number,
            rsvp_status: row.rsvp_status,
            checked_in_at: row.checked_in_at,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = rundown_items)]
struct RundownItemRow {
    rundown_item_id: i64,
    time_slot: String,
    title: String,
    description: String,
    pic: String,
    status: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = gifts)]
struct GiftRow {
    gift_id: i64,
    envelope_number: String,
    sender_name: String,
    kind: String,
    notes: Option<String>,
    received_at: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = venues)]
struct VenueRow {
    venue_id: i64,
    name: String,
    address: String,
    maps_link: String,
    category: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = menu_items)]
struct MenuItemRow {
    menu_item_id: i64,
    name: String,
    kind: String,
    description: String,
    portions: i32,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = design_configs)]
struct DesignConfigRow {
    config_id: i64,
    couple_title: String,
    event_date: String,
    theme_color: String,
}

// ============================================================================
// Guests
// ============================================================================

backend_fn! {
/// Lists all guests, most recently added first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_guests(conn: &mut _) -> Result<Vec<GuestData>, PersistenceError> {
    let rows: Vec<GuestRow> = guests::table
        .order(guests::guest_id.desc())
        .select(GuestRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(GuestData::from).collect())
}
}

backend_fn! {
/// Retrieves a guest by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the guest is not found.
pub fn get_guest(conn: &mut _, guest_id: i64) -> Result<Option<GuestData>, PersistenceError> {
    debug!("Looking up guest by ID: {}", guest_id);

    let row: Option<GuestRow> = guests::table
        .filter(guests::guest_id.eq(guest_id))
        .select(GuestRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(GuestData::from))
}
}

backend_fn! {
/// Counts all guests.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_guests(conn: &mut _) -> Result<i64, PersistenceError> {
    Ok(guests::table.count().get_result(conn)?)
}
}

backend_fn! {
/// Counts guests with the given RSVP status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_guests_with_rsvp(conn: &mut _, rsvp_status: &str) -> Result<i64, PersistenceError> {
    Ok(guests::table
        .filter(guests::rsvp_status.eq(rsvp_status))
        .count()
        .get_result(conn)?)
}
}

backend_fn! {
/// Counts guests whose category is one of `categories`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_guests_in_categories(
    conn: &mut _,
    categories: &[&str],
) -> Result<i64, PersistenceError> {
    Ok(guests::table
        .filter(guests::category.eq_any(categories.to_vec()))
        .count()
        .get_result(conn)?)
}
}

backend_fn! {
/// Lists the most recently checked-in guests, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_recent_check_ins(conn: &mut _, limit: i64) -> Result<Vec<GuestData>, PersistenceError> {
    let rows: Vec<GuestRow> = guests::table
        .filter(guests::checked_in_at.is_not_null())
        .order((guests::checked_in_at.desc(), guests::guest_id.desc()))
        .limit(limit)
        .select(GuestRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(GuestData::from).collect())
}
}

// ============================================================================
// Rundown
// ============================================================================

backend_fn! {
/// Lists rundown items in schedule order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rundown_items(conn: &mut _) -> Result<Vec<RundownItemData>, PersistenceError> {
    let rows: Vec<RundownItemRow> = rundown_items::table
        .order((rundown_items::time_slot.asc(), rundown_items::rundown_item_id.asc()))
        .select(RundownItemRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| RundownItemData {
            rundown_item_id: row.rundown_item_id,
            time_slot: row.time_slot,
            title: row.title,
            description: row.description,
            pic: row.pic,
            status: row.status,
        })
        .collect())
}
}

// ============================================================================
// Gifts
// ============================================================================

backend_fn! {
/// Lists gift records, most recent first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_gifts(conn: &mut _) -> Result<Vec<GiftData>, PersistenceError> {
    let rows: Vec<GiftRow> = gifts::table
        .order(gifts::gift_id.desc())
        .select(GiftRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| GiftData {
            gift_id: row.gift_id,
            envelope_number: row.envelope_number,
            sender_name: row.sender_name,
            kind: row.kind,
            notes: row.notes,
            received_at: row.received_at,
        })
        .collect())
}
}

backend_fn! {
/// Counts all gift records.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_gifts(conn: &mut _) -> Result<i64, PersistenceError> {
    Ok(gifts::table.count().get_result(conn)?)
}
}

// ============================================================================
// Venues & Menu
// ============================================================================

backend_fn! {
/// Lists venues ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_venues(conn: &mut _) -> Result<Vec<VenueData>, PersistenceError> {
    let rows: Vec<VenueRow> = venues::table
        .order(venues::venue_id.asc())
        .select(VenueRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| VenueData {
            venue_id: row.venue_id,
            name: row.name,
            address: row.address,
            maps_link: row.maps_link,
            category: row.category,
        })
        .collect())
}
}

backend_fn! {
/// Lists menu items ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_menu_items(conn: &mut _) -> Result<Vec<MenuItemData>, PersistenceError> {
    let rows: Vec<MenuItemRow> = menu_items::table
        .order(menu_items::menu_item_id.asc())
        .select(MenuItemRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| MenuItemData {
            menu_item_id: row.menu_item_id,
            name: row.name,
            kind: row.kind,
            description: row.description,
            portions: row.portions,
        })
        .collect())
}
}

// ============================================================================
// Design
// ============================================================================

backend_fn! {
/// Retrieves the design config row, if one has been created.
///
/// Only the lowest-ID row is ever read.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_design_config(conn: &mut _) -> Result<Option<DesignConfigData>, PersistenceError> {
    let row: Option<DesignConfigRow> = design_configs::table
        .order(design_configs::config_id.asc())
        .select(DesignConfigRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| DesignConfigData {
        config_id: row.config_id,
        couple_title: row.couple_title,
        event_date: row.event_date,
        theme_color: row.theme_color,
    }))
}
}
