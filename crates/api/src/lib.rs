// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Asira event backend.
//!
//! Handlers take a `&mut Persistence`, validate their input against the
//! domain rules and return DTOs or an [`ApiError`]. Nothing in this crate
//! knows about HTTP.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assets;
mod auth;
mod crew;
mod error;
mod event;
mod request_response;

#[cfg(test)]
mod tests;

pub use assets::{delete_asset, list_assets, parse_asset_kind, retrieve_asset, store_asset};
pub use auth::CrewAuthenticationService;
pub use crew::{
    MAX_ACCESS_CODE_ATTEMPTS, acknowledge_sos, bulk_set_status, create_crew_member,
    create_crew_member_with, delete_crew_member, emergency_status, generate_unique_access_code,
    get_crew_member, list_crew_members, raise_sos, random_access_code, regenerate_access_code,
    regenerate_access_code_with, set_crew_status, stop_emergency, toggle_crew_emergency,
    toggle_global_emergency, update_crew_member,
};
pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use event::{
    check_in_guest, create_gift, create_guest, create_menu_item, create_rundown_item,
    create_venue, dashboard, delete_gift, delete_guest, delete_menu_item, delete_rundown_item,
    delete_venue, design_page, get_or_create_design_config, list_gifts, list_guests, list_menu,
    list_rundown, list_venues, now_timestamp, save_design_config, scan_check_in, update_guest,
    update_rundown_item,
};
pub use request_response::{
    AssetContent, AssetInfo, BulkStatusRequest, BulkStatusResponse, CreateCrewRequest,
    CrewLoginRequest, CrewMemberInfo, DashboardResponse, DesignConfigInfo, DesignConfigRequest,
    DesignPageResponse, EmergencyStatusResponse, EmergencyToggleResponse, GiftInfo, GiftRequest,
    GuestInfo, GuestRequest, ListCrewResponse, ListGiftsResponse, MenuItemInfo, MenuItemRequest,
    PhoneLoginRequest, RundownItemInfo, RundownRequest, ScanRequest, SosRequest,
    StoreAssetRequest, StoredAssetResponse, UpdateCrewRequest, VenueInfo, VenueRequest,
};
