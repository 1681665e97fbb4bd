// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event-day mutations: guests, rundown, gifts, venues, menu and design.

use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{GuestFields, NewGift, NewMenuItem, NewVenue, RundownItemFields};
use crate::diesel_schema::{design_configs, gifts, guests, menu_items, rundown_items, venues};
use crate::error::PersistenceError;

/// Maps an empty update or delete to a not-found error.
fn require_affected(
    rows_affected: usize,
    resource: &str,
    id: i64,
) -> Result<(), PersistenceError> {
    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!("{resource} {id}")));
    }
    Ok(())
}

// ============================================================================
// Guests
// ============================================================================

backend_fn! {
/// Creates a guest with `Pending` RSVP.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_guest(conn: &mut _, fields: &GuestFields) -> Result<i64, PersistenceError> {
    info!("Creating guest: {}", fields.name);

    diesel::insert_into(guests::table)
        .values((
            guests::name.eq(&fields.name),
            guests::category.eq(&fields.category),
            guests::phone.eq(fields.phone.as_deref()),
            guests::table_number.eq(fields.table_number.as_deref()),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Overwrites a guest's editable fields.
///
/// RSVP state and check-in time are left untouched.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was updated.
pub fn update_guest(
    conn: &mut _,
    guest_id: i64,
    fields: &GuestFields,
) -> Result<(), PersistenceError> {
    info!("Updating guest ID: {}", guest_id);

    let rows_affected: usize = diesel::update(guests::table)
        .filter(guests::guest_id.eq(guest_id))
        .set((
            guests::name.eq(&fields.name),
            guests::category.eq(&fields.category),
            guests::phone.eq(fields.phone.as_deref()),
            guests::table_number.eq(fields.table_number.as_deref()),
        ))
        .execute(conn)?;

    require_affected(rows_affected, "guest", guest_id)
}
}

backend_fn! {
/// Records a guest's arrival and marks them `Attending`.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was updated.
pub fn check_in_guest(
    conn: &mut _,
    guest_id: i64,
    checked_in_at: &str,
    attending_status: &str,
) -> Result<(), PersistenceError> {
    info!(guest_id, checked_in_at, "Checking in guest");

    let rows_affected: usize = diesel::update(guests::table)
        .filter(guests::guest_id.eq(guest_id))
        .set((
            guests::checked_in_at.eq(Some(checked_in_at)),
            guests::rsvp_status.eq(attending_status),
        ))
        .execute(conn)?;

    require_affected(rows_affected, "guest", guest_id)
}
}

backend_fn! {
/// Deletes a guest.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_guest(conn: &mut _, guest_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting guest ID: {}", guest_id);

    let rows_affected: usize = diesel::delete(guests::table)
        .filter(guests::guest_id.eq(guest_id))
        .execute(conn)?;

    require_affected(rows_affected, "guest", guest_id)
}
}

// ============================================================================
// Rundown
// ============================================================================

backend_fn! {
/// Creates a rundown item.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_rundown_item(
    conn: &mut _,
    fields: &RundownItemFields,
) -> Result<i64, PersistenceError> {
    info!("Creating rundown item at {}: {}", fields.time_slot, fields.title);

    diesel::insert_into(rundown_items::table)
        .values((
            rundown_items::time_slot.eq(&fields.time_slot),
            rundown_items::title.eq(&fields.title),
            rundown_items::description.eq(&fields.description),
            rundown_items::pic.eq(&fields.pic),
            rundown_items::status.eq(&fields.status),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Overwrites a rundown item.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was updated.
pub fn update_rundown_item(
    conn: &mut _,
    rundown_item_id: i64,
    fields: &RundownItemFields,
) -> Result<(), PersistenceError> {
    info!("Updating rundown item ID: {}", rundown_item_id);

    let rows_affected: usize = diesel::update(rundown_items::table)
        .filter(rundown_items::rundown_item_id.eq(rundown_item_id))
        .set((
            rundown_items::time_slot.eq(&fields.time_slot),
            rundown_items::title.eq(&fields.title),
            rundown_items::description.eq(&fields.description),
            rundown_items::pic.eq(&fields.pic),
            rundown_items::status.eq(&fields.status),
        ))
        .execute(conn)?;

    require_affected(rows_affected, "rundown item", rundown_item_id)
}
}

backend_fn! {
/// Deletes a rundown item.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_rundown_item(conn: &mut _, rundown_item_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting rundown item ID: {}", rundown_item_id);

    let rows_affected: usize = diesel::delete(rundown_items::table)
        .filter(rundown_items::rundown_item_id.eq(rundown_item_id))
        .execute(conn)?;

    require_affected(rows_affected, "rundown item", rundown_item_id)
}
}

// ============================================================================
// Gifts
// ============================================================================

backend_fn! {
/// Records a received gift.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_gift(conn: &mut _, gift: &NewGift) -> Result<i64, PersistenceError> {
    info!(
        envelope_number = %gift.envelope_number,
        "Recording gift from {}",
        gift.sender_name
    );

    diesel::insert_into(gifts::table)
        .values((
            gifts::envelope_number.eq(&gift.envelope_number),
            gifts::sender_name.eq(&gift.sender_name),
            gifts::kind.eq(&gift.kind),
            gifts::notes.eq(gift.notes.as_deref()),
            gifts::received_at.eq(&gift.received_at),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Deletes a gift record.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_gift(conn: &mut _, gift_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting gift ID: {}", gift_id);

    let rows_affected: usize = diesel::delete(gifts::table)
        .filter(gifts::gift_id.eq(gift_id))
        .execute(conn)?;

    require_affected(rows_affected, "gift", gift_id)
}
}

// ============================================================================
// Venues & Menu
// ============================================================================

backend_fn! {
/// Creates a venue.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_venue(conn: &mut _, venue: &NewVenue) -> Result<i64, PersistenceError> {
    info!("Creating venue: {}", venue.name);

    diesel::insert_into(venues::table)
        .values((
            venues::name.eq(&venue.name),
            venues::address.eq(&venue.address),
            venues::maps_link.eq(&venue.maps_link),
            venues::category.eq(&venue.category),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Deletes a venue.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_venue(conn: &mut _, venue_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting venue ID: {}", venue_id);

    let rows_affected: usize = diesel::delete(venues::table)
        .filter(venues::venue_id.eq(venue_id))
        .execute(conn)?;

    require_affected(rows_affected, "venue", venue_id)
}
}

backend_fn! {
/// Creates a menu item.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_menu_item(conn: &mut _, item: &NewMenuItem) -> Result<i64, PersistenceError> {
    info!("Creating menu item: {} ({} portions)", item.name, item.portions);

    diesel::insert_into(menu_items::table)
        .values((
            menu_items::name.eq(&item.name),
            menu_items::kind.eq(&item.kind),
            menu_items::description.eq(&item.description),
            menu_items::portions.eq(item.portions),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Deletes a menu item.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_menu_item(conn: &mut _, menu_item_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting menu item ID: {}", menu_item_id);

    let rows_affected: usize = diesel::delete(menu_items::table)
        .filter(menu_items::menu_item_id.eq(menu_item_id))
        .execute(conn)?;

    require_affected(rows_affected, "menu item", menu_item_id)
}
}

// ============================================================================
// Design
// ============================================================================

backend_fn! {
/// Creates the design config row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_design_config(
    conn: &mut _,
    couple_title: &str,
    event_date: &str,
    theme_color: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating design config");

    diesel::insert_into(design_configs::table)
        .values((
            design_configs::couple_title.eq(couple_title),
            design_configs::event_date.eq(event_date),
            design_configs::theme_color.eq(theme_color),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}

backend_fn! {
/// Overwrites the design config row.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was updated.
pub fn update_design_config(
    conn: &mut _,
    config_id: i64,
    couple_title: &str,
    event_date: &str,
    theme_color: &str,
) -> Result<(), PersistenceError> {
    info!(config_id, theme_color, "Updating design config");

    let rows_affected: usize = diesel::update(design_configs::table)
        .filter(design_configs::config_id.eq(config_id))
        .set((
            design_configs::couple_title.eq(couple_title),
            design_configs::event_date.eq(event_date),
            design_configs::theme_color.eq(theme_color),
        ))
        .execute(conn)?;

    require_affected(rows_affected, "design config", config_id)
}
}
