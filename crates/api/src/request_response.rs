// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire. Request fields are optional so
//! that a missing value reaches validation and is reported as a 400 rather
//! than rejected by the deserializer.

use asira_persistence::{
    AssetSummaryData, CrewMemberData, DesignConfigData, GiftData, GuestData, MenuItemData,
    RundownItemData, VenueData,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Crew
// ============================================================================

/// API request to log in with an access code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewLoginRequest {
    pub access_code: Option<String>,
}

/// API request to log in with a phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLoginRequest {
    pub phone_number: Option<String>,
}

/// API request to create a crew member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCrewRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

/// API request to update any subset of a crew member's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCrewRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub note: Option<String>,
}

/// API request to set every crew member's status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusRequest {
    pub status: Option<String>,
}

/// API request raising an SOS for one crew member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosRequest {
    pub note: Option<String>,
}

/// A crew member as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMemberInfo {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub status: String,
    pub access_code: String,
    pub note: Option<String>,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl From<CrewMemberData> for CrewMemberInfo {
    fn from(data: CrewMemberData) -> Self {
        Self {
            id: data.crew_id,
            name: data.name,
            role: data.role,
            phone: data.phone,
            status: data.status,
            access_code: data.access_code,
            note: data.note,
            created_at: data.created_at,
            last_login_at: data.last_login_at,
        }
    }
}

/// API response listing the crew roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCrewResponse {
    pub total: usize,
    pub crew: Vec<CrewMemberInfo>,
}

/// API response for a roster-wide status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusResponse {
    pub target_status: String,
    pub updated: usize,
}

/// API response for the global emergency toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyToggleResponse {
    /// `true` when the toggle raised the emergency, `false` when it cleared it.
    pub activated: bool,
    pub affected: usize,
}

/// Current emergency state, derived from the roster on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyStatusResponse {
    pub active: bool,
    pub warning: i64,
}

// ============================================================================
// Assets
// ============================================================================

/// An upload as extracted from a multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreAssetRequest {
    pub kind: Option<String>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    /// `None` when the form had no `file` part at all.
    pub content: Option<Vec<u8>>,
}

/// API response for a stored asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAssetResponse {
    pub asset_id: i64,
    pub kind: String,
    pub message: String,
    // Mobile clients read the snake_case key
    #[serde(rename = "img_url")]
    pub img_url: String,
}

/// The bytes of a stored asset, ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetContent {
    pub content: Vec<u8>,
    pub content_type: String,
    pub filename: String,
}

/// Asset metadata as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub id: i64,
    pub title: String,
    pub content_type: String,
    pub created_at: String,
    pub url: String,
}

impl AssetInfo {
    /// Builds the API view of an asset of the given kind.
    #[must_use]
    pub fn from_summary(kind: asira_domain::AssetKind, data: AssetSummaryData) -> Self {
        Self {
            id: data.asset_id,
            url: kind.asset_url(data.asset_id),
            title: data.title,
            content_type: data.content_type,
            created_at: data.created_at,
        }
    }
}

// ============================================================================
// Guests & Dashboard
// ============================================================================

/// API request to create or update a guest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub table_number: Option<String>,
}

/// API request from the check-in scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub barcode: Option<String>,
}

/// A guest as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfo {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub phone: Option<String>,
    pub table_number: Option<String>,
    pub rsvp_status: String,
    pub checked_in_at: Option<String>,
}

impl From<GuestData> for GuestInfo {
    fn from(data: GuestData) -> Self {
        Self {
            id: data.guest_id,
            name: data.name,
            category: data.category,
            phone: data.phone,
            table_number: data.table_number,
            rsvp_status: data.rsvp_status,
            checked_in_at: data.checked_in_at,
        }
    }
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total: i64,
    pub attending: i64,
    pub vip: i64,
    pub recent_check_ins: Vec<GuestInfo>,
}

// ============================================================================
// Rundown
// ============================================================================

/// API request to create or update a rundown item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownRequest {
    pub time: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub pic: Option<String>,
    pub status: Option<String>,
}

/// A rundown item as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownItemInfo {
    pub id: i64,
    pub time: String,
    pub title: String,
    pub description: String,
    pub pic: String,
    pub status: String,
}

impl From<RundownItemData> for RundownItemInfo {
    fn from(data: RundownItemData) -> Self {
        Self {
            id: data.rundown_item_id,
            time: data.time_slot,
            title: data.title,
            description: data.description,
            pic: data.pic,
            status: data.status,
        }
    }
}

// ============================================================================
// Gifts
// ============================================================================

/// API request to record a gift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRequest {
    pub envelope_number: Option<String>,
    pub sender_name: Option<String>,
    pub kind: Option<String>,
    pub notes: Option<String>,
}

/// A gift record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftInfo {
    pub id: i64,
    pub envelope_number: String,
    pub sender_name: String,
    pub kind: String,
    pub notes: Option<String>,
    pub received_at: String,
}

impl From<GiftData> for GiftInfo {
    fn from(data: GiftData) -> Self {
        Self {
            id: data.gift_id,
            envelope_number: data.envelope_number,
            sender_name: data.sender_name,
            kind: data.kind,
            notes: data.notes,
            received_at: data.received_at,
        }
    }
}

/// API response listing gifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGiftsResponse {
    pub total: i64,
    pub gifts: Vec<GiftInfo>,
}

// ============================================================================
// Venues & Menu
// ============================================================================

/// API request to create a venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub maps_link: Option<String>,
    pub category: Option<String>,
}

/// A venue as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueInfo {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub maps_link: String,
    pub category: String,
}

impl From<VenueData> for VenueInfo {
    fn from(data: VenueData) -> Self {
        Self {
            id: data.venue_id,
            name: data.name,
            address: data.address,
            maps_link: data.maps_link,
            category: data.category,
        }
    }
}

/// API request to create a menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub portions: Option<i64>,
}

/// A menu item as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInfo {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub description: String,
    pub portions: i32,
}

impl From<MenuItemData> for MenuItemInfo {
    fn from(data: MenuItemData) -> Self {
        Self {
            id: data.menu_item_id,
            name: data.name,
            kind: data.kind,
            description: data.description,
            portions: data.portions,
        }
    }
}

// ============================================================================
// Design
// ============================================================================

/// API request to save the invitation design. Omitted fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConfigRequest {
    pub couple_title: Option<String>,
    pub event_date: Option<String>,
    pub theme_color: Option<String>,
}

/// The invitation design as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConfigInfo {
    pub couple_title: String,
    pub event_date: String,
    pub theme_color: String,
}

impl From<DesignConfigData> for DesignConfigInfo {
    fn from(data: DesignConfigData) -> Self {
        Self {
            couple_title: data.couple_title,
            event_date: data.event_date,
            theme_color: data.theme_color,
        }
    }
}

/// Everything the design page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPageResponse {
    pub config: DesignConfigInfo,
    pub covers: Vec<AssetInfo>,
    pub twibbons: Vec<AssetInfo>,
}
