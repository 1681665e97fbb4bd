// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest list, rundown, gift desk, venue, menu and design page handlers.
//!
//! These are thin CRUD operations: validate, write one table, return the
//! stored record.

use std::str::FromStr;

use asira_domain::{
    AssetKind, DEFAULT_COUPLE_TITLE, DEFAULT_EVENT_DATE, DEFAULT_GIFT_KIND, DEFAULT_GUEST_CATEGORY,
    DEFAULT_THEME_COLOR, QUICK_ENTRY_GIFT_NOTE, RECENT_CHECK_IN_LIMIT, RsvpStatus, RundownStatus,
    VIP_CATEGORIES, optional_field, require_field, validate_portions,
};
use asira_persistence::{
    DesignConfigData, GuestData, GuestFields, NewGift, NewMenuItem, NewVenue, Persistence,
    PersistenceError, RundownItemFields,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::assets::list_assets;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    DashboardResponse, DesignConfigInfo, DesignConfigRequest, DesignPageResponse, GiftInfo,
    GiftRequest, GuestInfo, GuestRequest, ListGiftsResponse, MenuItemInfo, MenuItemRequest,
    RundownItemInfo, RundownRequest, ScanRequest, VenueInfo, VenueRequest,
};

/// Current UTC time as an RFC 3339 string.
///
/// # Errors
///
/// Returns an internal error if the clock cannot be formatted.
pub fn now_timestamp() -> Result<String, ApiError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })
}

fn not_found(resource_type: &str, id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: format!("{resource_type} {id} does not exist"),
    }
}

/// Maps a store error, naming the resource when the row was missing.
fn translate_missing(resource_type: &str, id: i64) -> impl FnOnce(PersistenceError) -> ApiError {
    move |err| match err {
        PersistenceError::NotFound(_) => not_found(resource_type, id),
        other => translate_persistence_error(other),
    }
}

// ============================================================================
// Guests
// ============================================================================

fn load_guest(persistence: &mut Persistence, guest_id: i64) -> Result<GuestData, ApiError> {
    persistence
        .get_guest(guest_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Guest", guest_id))
}

fn guest_fields(request: &GuestRequest) -> Result<GuestFields, ApiError> {
    Ok(GuestFields {
        name: require_field("name", request.name.as_deref()).map_err(translate_domain_error)?,
        category: optional_field(request.category.as_deref())
            .unwrap_or_else(|| DEFAULT_GUEST_CATEGORY.to_string()),
        phone: optional_field(request.phone.as_deref()),
        table_number: optional_field(request.table_number.as_deref()),
    })
}

/// Lists all guests, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_guests(persistence: &mut Persistence) -> Result<Vec<GuestInfo>, ApiError> {
    Ok(persistence
        .list_guests()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(GuestInfo::from)
        .collect())
}

/// Adds a guest with RSVP `Pending`.
///
/// # Errors
///
/// Returns `InvalidInput` if the name is missing.
pub fn create_guest(
    persistence: &mut Persistence,
    request: &GuestRequest,
) -> Result<GuestInfo, ApiError> {
    let fields: GuestFields = guest_fields(request)?;
    let guest_id: i64 = persistence
        .create_guest(&fields)
        .map_err(translate_persistence_error)?;

    info!(guest_id, category = %fields.category, "Guest added");
    load_guest(persistence, guest_id).map(GuestInfo::from)
}

/// Overwrites a guest's contact details.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the guest does not exist, or
/// `InvalidInput` if the name is missing.
pub fn update_guest(
    persistence: &mut Persistence,
    guest_id: i64,
    request: &GuestRequest,
) -> Result<GuestInfo, ApiError> {
    let fields: GuestFields = guest_fields(request)?;
    persistence
        .update_guest(guest_id, &fields)
        .map_err(translate_missing("Guest", guest_id))?;

    info!(guest_id, "Guest updated");
    load_guest(persistence, guest_id).map(GuestInfo::from)
}

/// Checks a guest in, marking them as attending.
///
/// Checking in twice moves `checkedInAt` to the latest arrival.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the guest does not exist.
pub fn check_in_guest(persistence: &mut Persistence, guest_id: i64) -> Result<GuestInfo, ApiError> {
    let checked_in_at: String = now_timestamp()?;
    persistence
        .check_in_guest(guest_id, &checked_in_at, RsvpStatus::Attending.as_str())
        .map_err(translate_missing("Guest", guest_id))?;

    info!(guest_id, %checked_in_at, "Guest checked in");
    load_guest(persistence, guest_id).map(GuestInfo::from)
}

/// Checks a guest in from a scanned barcode, which carries the guest ID.
///
/// # Errors
///
/// Returns `InvalidInput` if the barcode is missing or not a number and
/// `ResourceNotFound` if no guest has that ID.
pub fn scan_check_in(
    persistence: &mut Persistence,
    request: &ScanRequest,
) -> Result<GuestInfo, ApiError> {
    let barcode: String =
        require_field("barcode", request.barcode.as_deref()).map_err(translate_domain_error)?;
    let guest_id: i64 = barcode.parse().map_err(|_| ApiError::InvalidInput {
        field: String::from("barcode"),
        message: format!("'{barcode}' is not a guest barcode"),
    })?;

    check_in_guest(persistence, guest_id)
}

/// Removes a guest.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the guest does not exist.
pub fn delete_guest(persistence: &mut Persistence, guest_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_guest(guest_id)
        .map_err(translate_missing("Guest", guest_id))
}

/// Computes the admin dashboard numbers.
///
/// # Errors
///
/// Returns an error if a database query fails.
pub fn dashboard(persistence: &mut Persistence) -> Result<DashboardResponse, ApiError> {
    let total: i64 = persistence
        .count_guests()
        .map_err(translate_persistence_error)?;
    let attending: i64 = persistence
        .count_guests_with_rsvp(RsvpStatus::Attending.as_str())
        .map_err(translate_persistence_error)?;
    let vip: i64 = persistence
        .count_guests_in_categories(&VIP_CATEGORIES)
        .map_err(translate_persistence_error)?;
    let recent_check_ins: Vec<GuestInfo> = persistence
        .list_recent_check_ins(RECENT_CHECK_IN_LIMIT)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(GuestInfo::from)
        .collect();

    Ok(DashboardResponse {
        total,
        attending,
        vip,
        recent_check_ins,
    })
}

// ============================================================================
// Rundown
// ============================================================================

fn rundown_fields(request: &RundownRequest) -> Result<RundownItemFields, ApiError> {
    let status: RundownStatus = match optional_field(request.status.as_deref()) {
        Some(status) => RundownStatus::from_str(&status).map_err(translate_domain_error)?,
        None => RundownStatus::default(),
    };

    Ok(RundownItemFields {
        time_slot: require_field("time", request.time.as_deref())
            .map_err(translate_domain_error)?,
        title: require_field("title", request.title.as_deref()).map_err(translate_domain_error)?,
        description: optional_field(request.description.as_deref()).unwrap_or_default(),
        pic: optional_field(request.pic.as_deref()).unwrap_or_default(),
        status: status.as_str().to_string(),
    })
}

fn find_rundown_item(
    persistence: &mut Persistence,
    rundown_item_id: i64,
) -> Result<RundownItemInfo, ApiError> {
    persistence
        .list_rundown_items()
        .map_err(translate_persistence_error)?
        .into_iter()
        .find(|item| item.rundown_item_id == rundown_item_id)
        .map(RundownItemInfo::from)
        .ok_or_else(|| not_found("Rundown item", rundown_item_id))
}

/// Lists the rundown ordered by time slot.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rundown(persistence: &mut Persistence) -> Result<Vec<RundownItemInfo>, ApiError> {
    Ok(persistence
        .list_rundown_items()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(RundownItemInfo::from)
        .collect())
}

/// Adds a rundown item.
///
/// # Errors
///
/// Returns `InvalidInput` if the time or title is missing or the status is
/// not recognized.
pub fn create_rundown_item(
    persistence: &mut Persistence,
    request: &RundownRequest,
) -> Result<RundownItemInfo, ApiError> {
    let fields: RundownItemFields = rundown_fields(request)?;
    let rundown_item_id: i64 = persistence
        .create_rundown_item(&fields)
        .map_err(translate_persistence_error)?;

    info!(rundown_item_id, time = %fields.time_slot, "Rundown item added");
    find_rundown_item(persistence, rundown_item_id)
}

/// Overwrites a rundown item.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the item does not exist, or `InvalidInput`
/// as for [`create_rundown_item`].
pub fn update_rundown_item(
    persistence: &mut Persistence,
    rundown_item_id: i64,
    request: &RundownRequest,
) -> Result<RundownItemInfo, ApiError> {
    let fields: RundownItemFields = rundown_fields(request)?;
    persistence
        .update_rundown_item(rundown_item_id, &fields)
        .map_err(translate_missing("Rundown item", rundown_item_id))?;

    info!(rundown_item_id, status = %fields.status, "Rundown item updated");
    find_rundown_item(persistence, rundown_item_id)
}

/// Removes a rundown item.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the item does not exist.
pub fn delete_rundown_item(
    persistence: &mut Persistence,
    rundown_item_id: i64,
) -> Result<(), ApiError> {
    persistence
        .delete_rundown_item(rundown_item_id)
        .map_err(translate_missing("Rundown item", rundown_item_id))
}

// ============================================================================
// Gifts
// ============================================================================

/// Lists gifts newest first, with the total count.
///
/// # Errors
///
/// Returns an error if a database query fails.
pub fn list_gifts(persistence: &mut Persistence) -> Result<ListGiftsResponse, ApiError> {
    let total: i64 = persistence
        .count_gifts()
        .map_err(translate_persistence_error)?;
    let gifts: Vec<GiftInfo> = persistence
        .list_gifts()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(GiftInfo::from)
        .collect();

    Ok(ListGiftsResponse { total, gifts })
}

/// Logs a gift received at the gift desk.
///
/// # Errors
///
/// Returns `InvalidInput` if the sender name or envelope number is missing.
pub fn create_gift(persistence: &mut Persistence, request: &GiftRequest) -> Result<GiftInfo, ApiError> {
    let gift: NewGift = NewGift {
        sender_name: require_field("senderName", request.sender_name.as_deref())
            .map_err(translate_domain_error)?,
        envelope_number: require_field("envelopeNumber", request.envelope_number.as_deref())
            .map_err(translate_domain_error)?,
        kind: optional_field(request.kind.as_deref())
            .unwrap_or_else(|| DEFAULT_GIFT_KIND.to_string()),
        notes: Some(
            optional_field(request.notes.as_deref())
                .unwrap_or_else(|| QUICK_ENTRY_GIFT_NOTE.to_string()),
        ),
        received_at: now_timestamp()?,
    };

    let gift_id: i64 = persistence
        .create_gift(&gift)
        .map_err(translate_persistence_error)?;

    info!(gift_id, envelope = %gift.envelope_number, "Gift recorded");

    Ok(GiftInfo {
        id: gift_id,
        envelope_number: gift.envelope_number,
        sender_name: gift.sender_name,
        kind: gift.kind,
        notes: gift.notes,
        received_at: gift.received_at,
    })
}

/// Removes a gift record.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the gift does not exist.
pub fn delete_gift(persistence: &mut Persistence, gift_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_gift(gift_id)
        .map_err(translate_missing("Gift", gift_id))
}

// ============================================================================
// Venues & Menu
// ============================================================================

/// Lists venues.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_venues(persistence: &mut Persistence) -> Result<Vec<VenueInfo>, ApiError> {
    Ok(persistence
        .list_venues()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(VenueInfo::from)
        .collect())
}

/// Adds a venue.
///
/// # Errors
///
/// Returns `InvalidInput` if the name is missing.
pub fn create_venue(
    persistence: &mut Persistence,
    request: &VenueRequest,
) -> Result<VenueInfo, ApiError> {
    let venue: NewVenue = NewVenue {
        name: require_field("name", request.name.as_deref()).map_err(translate_domain_error)?,
        address: optional_field(request.address.as_deref()).unwrap_or_default(),
        maps_link: optional_field(request.maps_link.as_deref()).unwrap_or_default(),
        category: optional_field(request.category.as_deref()).unwrap_or_default(),
    };

    let venue_id: i64 = persistence
        .create_venue(&venue)
        .map_err(translate_persistence_error)?;

    info!(venue_id, "Venue added");

    Ok(VenueInfo {
        id: venue_id,
        name: venue.name,
        address: venue.address,
        maps_link: venue.maps_link,
        category: venue.category,
    })
}

/// Removes a venue.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the venue does not exist.
pub fn delete_venue(persistence: &mut Persistence, venue_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_venue(venue_id)
        .map_err(translate_missing("Venue", venue_id))
}

/// Lists menu items.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_menu(persistence: &mut Persistence) -> Result<Vec<MenuItemInfo>, ApiError> {
    Ok(persistence
        .list_menu_items()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(MenuItemInfo::from)
        .collect())
}

/// Adds a menu item. Portions default to zero.
///
/// # Errors
///
/// Returns `InvalidInput` if the name is missing or the portion count is
/// negative.
pub fn create_menu_item(
    persistence: &mut Persistence,
    request: &MenuItemRequest,
) -> Result<MenuItemInfo, ApiError> {
    let item: NewMenuItem = NewMenuItem {
        name: require_field("name", request.name.as_deref()).map_err(translate_domain_error)?,
        kind: optional_field(request.kind.as_deref()).unwrap_or_default(),
        description: optional_field(request.description.as_deref()).unwrap_or_default(),
        portions: validate_portions(request.portions.unwrap_or(0))
            .map_err(translate_domain_error)?,
    };

    let menu_item_id: i64 = persistence
        .create_menu_item(&item)
        .map_err(translate_persistence_error)?;

    info!(menu_item_id, portions = item.portions, "Menu item added");

    Ok(MenuItemInfo {
        id: menu_item_id,
        name: item.name,
        kind: item.kind,
        description: item.description,
        portions: item.portions,
    })
}

/// Removes a menu item.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the item does not exist.
pub fn delete_menu_item(persistence: &mut Persistence, menu_item_id: i64) -> Result<(), ApiError> {
    persistence
        .delete_menu_item(menu_item_id)
        .map_err(translate_missing("Menu item", menu_item_id))
}

// ============================================================================
// Design
// ============================================================================

/// Returns the design config, creating it with defaults on first access.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn get_or_create_design_config(
    persistence: &mut Persistence,
) -> Result<DesignConfigData, ApiError> {
    if let Some(config) = persistence
        .get_design_config()
        .map_err(translate_persistence_error)?
    {
        return Ok(config);
    }

    let config_id: i64 = persistence
        .create_design_config(DEFAULT_COUPLE_TITLE, DEFAULT_EVENT_DATE, DEFAULT_THEME_COLOR)
        .map_err(translate_persistence_error)?;

    info!(config_id, "Design config created with defaults");

    Ok(DesignConfigData {
        config_id,
        couple_title: DEFAULT_COUPLE_TITLE.to_string(),
        event_date: DEFAULT_EVENT_DATE.to_string(),
        theme_color: DEFAULT_THEME_COLOR.to_string(),
    })
}

/// Saves the design config. Omitted or blank fields keep their value.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn save_design_config(
    persistence: &mut Persistence,
    request: &DesignConfigRequest,
) -> Result<DesignConfigInfo, ApiError> {
    let current: DesignConfigData = get_or_create_design_config(persistence)?;

    let couple_title: String =
        optional_field(request.couple_title.as_deref()).unwrap_or(current.couple_title);
    let event_date: String =
        optional_field(request.event_date.as_deref()).unwrap_or(current.event_date);
    let theme_color: String =
        optional_field(request.theme_color.as_deref()).unwrap_or(current.theme_color);

    persistence
        .update_design_config(current.config_id, &couple_title, &event_date, &theme_color)
        .map_err(translate_persistence_error)?;

    info!(config_id = current.config_id, %theme_color, "Design config saved");

    Ok(DesignConfigInfo {
        couple_title,
        event_date,
        theme_color,
    })
}

/// Collects the design config and both image collections.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn design_page(persistence: &mut Persistence) -> Result<DesignPageResponse, ApiError> {
    let config: DesignConfigInfo = get_or_create_design_config(persistence)?.into();
    let covers = list_assets(persistence, AssetKind::Cover)?;
    let twibbons = list_assets(persistence, AssetKind::Twibbon)?;

    Ok(DesignPageResponse {
        config,
        covers,
        twibbons,
    })
}
