// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest list, rundown, gift desk, venue, menu and design routes.

use asira_api::{
    DashboardResponse, DesignConfigInfo, DesignConfigRequest, DesignPageResponse, GiftInfo,
    GiftRequest, GuestInfo, GuestRequest, MenuItemInfo, MenuItemRequest, RundownItemInfo,
    RundownRequest, ScanRequest, VenueInfo, VenueRequest, check_in_guest, create_gift,
    create_guest, create_menu_item, create_rundown_item, create_venue, dashboard, delete_gift,
    delete_guest, delete_menu_item, delete_rundown_item, delete_venue, design_page,
    get_or_create_design_config, list_gifts, list_guests, list_menu, list_rundown, list_venues,
    save_design_config, scan_check_in, update_guest, update_rundown_item,
};
use axum::{Json, extract::State as AxumState, http::StatusCode};

use crate::AppState;
use crate::http::{
    Envelope, HttpError, JsonBody, PathParams, success, success_list, success_message,
};

type Created<T> = (StatusCode, Json<Envelope<T>>);

/// Handler for GET `/dashboard`.
pub async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<DashboardResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(dashboard(&mut persistence)?))
}

// ============================================================================
// Guests
// ============================================================================

/// Handler for GET `/guests`.
pub async fn handle_list_guests(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<Vec<GuestInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success_list(list_guests(&mut persistence)?))
}

/// Handler for POST `/guests`.
pub async fn handle_create_guest(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<GuestRequest>,
) -> Result<Created<GuestInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let guest: GuestInfo = create_guest(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, success(guest)))
}

/// Handler for PUT `/guests/{id}`.
pub async fn handle_update_guest(
    AxumState(app_state): AxumState<AppState>,
    PathParams(guest_id): PathParams<i64>,
    JsonBody(req): JsonBody<GuestRequest>,
) -> Result<Json<Envelope<GuestInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(update_guest(&mut persistence, guest_id, &req)?))
}

/// Handler for DELETE `/guests/{id}`.
pub async fn handle_delete_guest(
    AxumState(app_state): AxumState<AppState>,
    PathParams(guest_id): PathParams<i64>,
) -> Result<Json<Envelope<()>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    delete_guest(&mut persistence, guest_id)?;
    Ok(success_message(format!("Guest {guest_id} deleted")))
}

/// Handler for POST `/guests/{id}/checkin`.
pub async fn handle_check_in_guest(
    AxumState(app_state): AxumState<AppState>,
    PathParams(guest_id): PathParams<i64>,
) -> Result<Json<Envelope<GuestInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(check_in_guest(&mut persistence, guest_id)?))
}

/// Handler for POST `/scan`.
pub async fn handle_scan(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<ScanRequest>,
) -> Result<Json<Envelope<GuestInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(scan_check_in(&mut persistence, &req)?))
}

// ============================================================================
// Rundown
// ============================================================================

/// Handler for GET `/rundown`.
pub async fn handle_list_rundown(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<Vec<RundownItemInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success_list(list_rundown(&mut persistence)?))
}

/// Handler for POST `/rundown`.
pub async fn handle_create_rundown(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<RundownRequest>,
) -> Result<Created<RundownItemInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let item: RundownItemInfo = create_rundown_item(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, success(item)))
}

/// Handler for PUT `/rundown/{id}`.
pub async fn handle_update_rundown(
    AxumState(app_state): AxumState<AppState>,
    PathParams(rundown_item_id): PathParams<i64>,
    JsonBody(req): JsonBody<RundownRequest>,
) -> Result<Json<Envelope<RundownItemInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(update_rundown_item(
        &mut persistence,
        rundown_item_id,
        &req,
    )?))
}

/// Handler for DELETE `/rundown/{id}`.
pub async fn handle_delete_rundown(
    AxumState(app_state): AxumState<AppState>,
    PathParams(rundown_item_id): PathParams<i64>,
) -> Result<Json<Envelope<()>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    delete_rundown_item(&mut persistence, rundown_item_id)?;
    Ok(success_message(format!(
        "Rundown item {rundown_item_id} deleted"
    )))
}

// ============================================================================
// Gifts
// ============================================================================

/// Handler for GET `/gifts`.
pub async fn handle_list_gifts(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<Vec<GiftInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let listed = list_gifts(&mut persistence)?;
    Ok(success_list(listed.gifts))
}

/// Handler for POST `/gifts`.
pub async fn handle_create_gift(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<GiftRequest>,
) -> Result<Created<GiftInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let gift: GiftInfo = create_gift(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, success(gift)))
}

/// Handler for DELETE `/gifts/{id}`.
pub async fn handle_delete_gift(
    AxumState(app_state): AxumState<AppState>,
    PathParams(gift_id): PathParams<i64>,
) -> Result<Json<Envelope<()>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    delete_gift(&mut persistence, gift_id)?;
    Ok(success_message(format!("Gift {gift_id} deleted")))
}

// ============================================================================
// Venues & Menu
// ============================================================================

/// Handler for GET `/venues`.
pub async fn handle_list_venues(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<Vec<VenueInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success_list(list_venues(&mut persistence)?))
}

/// Handler for POST `/venues`.
pub async fn handle_create_venue(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<VenueRequest>,
) -> Result<Created<VenueInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let venue: VenueInfo = create_venue(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, success(venue)))
}

/// Handler for DELETE `/venues/{id}`.
pub async fn handle_delete_venue(
    AxumState(app_state): AxumState<AppState>,
    PathParams(venue_id): PathParams<i64>,
) -> Result<Json<Envelope<()>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    delete_venue(&mut persistence, venue_id)?;
    Ok(success_message(format!("Venue {venue_id} deleted")))
}

/// Handler for GET `/menu`.
pub async fn handle_list_menu(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<Vec<MenuItemInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success_list(list_menu(&mut persistence)?))
}

/// Handler for POST `/menu`.
pub async fn handle_create_menu_item(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<MenuItemRequest>,
) -> Result<Created<MenuItemInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let item: MenuItemInfo = create_menu_item(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, success(item)))
}

/// Handler for DELETE `/menu/{id}`.
pub async fn handle_delete_menu_item(
    AxumState(app_state): AxumState<AppState>,
    PathParams(menu_item_id): PathParams<i64>,
) -> Result<Json<Envelope<()>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    delete_menu_item(&mut persistence, menu_item_id)?;
    Ok(success_message(format!("Menu item {menu_item_id} deleted")))
}

// ============================================================================
// Design
// ============================================================================

/// Handler for GET `/design`.
pub async fn handle_design_page(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<DesignPageResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(design_page(&mut persistence)?))
}

/// Handler for GET `/design/config`.
pub async fn handle_get_design_config(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<DesignConfigInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let config: DesignConfigInfo = get_or_create_design_config(&mut persistence)?.into();
    Ok(success(config))
}

/// Handler for POST `/design/config`.
pub async fn handle_save_design_config(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<DesignConfigRequest>,
) -> Result<Json<Envelope<DesignConfigInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(save_design_config(&mut persistence, &req)?))
}
