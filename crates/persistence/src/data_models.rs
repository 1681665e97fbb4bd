// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A stored crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMemberData {
    pub crew_id: i64,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub status: String,
    pub access_code: String,
    pub note: Option<String>,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// Full set of editable crew member fields, written in one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMemberUpdate {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub status: String,
    pub note: Option<String>,
}

/// A stored image asset including its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetData {
    pub asset_id: i64,
    pub title: String,
    pub content: Vec<u8>,
    pub content_type: String,
    pub created_at: String,
}

/// Asset metadata without the image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSummaryData {
    pub asset_id: i64,
    pub title: String,
    pub content_type: String,
    pub created_at: String,
}

/// A stored guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestData {
    pub guest_id: i64,
    pub name: String,
    pub category: String,
    pub phone: Option<String>,
    pub table_number: Option<String>,
    pub rsvp_status: String,
    pub checked_in_at: Option<String>,
}

/// Editable guest fields. Used for both creation and full updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestFields {
    pub name: String,
    pub category: String,
    pub phone: Option<String>,
    pub table_number: Option<String>,
}

/// A stored rundown item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RundownItemData {
    pub rundown_item_id: i64,
    pub time_slot: String,
    pub title: String,
    pub description: String,
    pub pic: String,
    pub status: String,
}

/// Editable rundown fields. Used for both creation and full updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RundownItemFields {
    pub time_slot: String,
    pub title: String,
    pub description: String,
    pub pic: String,
    pub status: String,
}

/// A stored gift record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftData {
    pub gift_id: i64,
    pub envelope_number: String,
    pub sender_name: String,
    pub kind: String,
    pub notes: Option<String>,
    pub received_at: String,
}

/// Fields for a new gift record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGift {
    pub envelope_number: String,
    pub sender_name: String,
    pub kind: String,
    pub notes: Option<String>,
    pub received_at: String,
}

/// A stored venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueData {
    pub venue_id: i64,
    pub name: String,
    pub address: String,
    pub maps_link: String,
    pub category: String,
}

/// Fields for a new venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    pub maps_link: String,
    pub category: String,
}

/// A stored menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemData {
    pub menu_item_id: i64,
    pub name: String,
    pub kind: String,
    pub description: String,
    pub portions: i32,
}

/// Fields for a new menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub portions: i32,
}

/// The invitation design settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignConfigData {
    pub config_id: i64,
    pub couple_title: String,
    pub event_date: String,
    pub theme_color: String,
}
