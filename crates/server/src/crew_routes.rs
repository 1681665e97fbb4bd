// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew login, roster and emergency routes.

use asira_api::{
    BulkStatusRequest, BulkStatusResponse, CreateCrewRequest, CrewAuthenticationService,
    CrewLoginRequest, CrewMemberInfo, EmergencyStatusResponse, EmergencyToggleResponse,
    PhoneLoginRequest, SosRequest, UpdateCrewRequest, acknowledge_sos, bulk_set_status,
    create_crew_member, delete_crew_member, emergency_status, get_crew_member, list_crew_members,
    raise_sos, regenerate_access_code, stop_emergency, toggle_crew_emergency,
    toggle_global_emergency, update_crew_member,
};
use axum::{
    Json,
    body::Bytes,
    extract::{State as AxumState, rejection::BytesRejection},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::info;

use crate::AppState;
use crate::http::{
    Envelope, HttpError, JsonBody, PathParams, STATUS_SUCCESS, success, success_list,
    success_message,
};

/// Handler for POST `/crew/login`.
pub async fn handle_crew_login(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<CrewLoginRequest>,
) -> Result<Json<Envelope<CrewMemberInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let crew = CrewAuthenticationService::login(
        &mut persistence,
        req.access_code.as_deref().unwrap_or_default(),
    )?;
    Ok(success(CrewMemberInfo::from(crew)))
}

/// Handler for POST `/login-phone`.
pub async fn handle_phone_login(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<PhoneLoginRequest>,
) -> Result<Json<Envelope<CrewMemberInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let crew = CrewAuthenticationService::login_by_phone(
        &mut persistence,
        req.phone_number.as_deref().unwrap_or_default(),
    )?;
    Ok(success(CrewMemberInfo::from(crew)))
}

/// Handler for GET `/crew`.
pub async fn handle_list_crew(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<Vec<CrewMemberInfo>>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let roster = list_crew_members(&mut persistence)?;
    Ok(success_list(roster.crew))
}

/// Handler for POST `/crew`.
pub async fn handle_create_crew(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<CreateCrewRequest>,
) -> Result<(StatusCode, Json<Envelope<CrewMemberInfo>>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let crew: CrewMemberInfo = create_crew_member(&mut persistence, &req)?;
    drop(persistence);

    info!(crew_id = crew.id, name = %crew.name, "Created crew member");
    Ok((StatusCode::CREATED, success(crew)))
}

/// Handler for GET `/crew/{id}`.
pub async fn handle_get_crew(
    AxumState(app_state): AxumState<AppState>,
    PathParams(crew_id): PathParams<i64>,
) -> Result<Json<Envelope<CrewMemberInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(get_crew_member(&mut persistence, crew_id)?))
}

/// Handler for PUT `/crew/{id}`.
pub async fn handle_update_crew(
    AxumState(app_state): AxumState<AppState>,
    PathParams(crew_id): PathParams<i64>,
    JsonBody(req): JsonBody<UpdateCrewRequest>,
) -> Result<Json<Envelope<CrewMemberInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(update_crew_member(&mut persistence, crew_id, &req)?))
}

/// Handler for DELETE `/crew/{id}`.
pub async fn handle_delete_crew(
    AxumState(app_state): AxumState<AppState>,
    PathParams(crew_id): PathParams<i64>,
) -> Result<Json<Envelope<()>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    delete_crew_member(&mut persistence, crew_id)?;
    drop(persistence);

    info!(crew_id, "Deleted crew member");
    Ok(success_message(format!("Crew member {crew_id} deleted")))
}

/// Handler for POST `/crew/status/all`.
pub async fn handle_bulk_status(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<BulkStatusRequest>,
) -> Result<Json<Envelope<BulkStatusResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(bulk_set_status(&mut persistence, &req)?))
}

/// Handler for POST `/emergency/toggle`.
pub async fn handle_toggle_emergency(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<EmergencyToggleResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(toggle_global_emergency(&mut persistence)?))
}

/// Handler for POST `/emergency/stop`.
pub async fn handle_stop_emergency(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Envelope<()>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let affected: usize = stop_emergency(&mut persistence)?;
    Ok(success_message(format!(
        "Emergency stopped, {affected} crew member(s) back to Active"
    )))
}

/// Handler for GET `/emergency`.
pub async fn handle_emergency_status(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Value>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let state: EmergencyStatusResponse = emergency_status(&mut persistence)?;
    Ok(Json(json!({
        "status": STATUS_SUCCESS,
        "active": state.active,
        "warning": state.warning,
    })))
}

/// Handler for POST `/crew/{id}/emergency`.
pub async fn handle_toggle_crew_emergency(
    AxumState(app_state): AxumState<AppState>,
    PathParams(crew_id): PathParams<i64>,
) -> Result<Json<Envelope<CrewMemberInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(toggle_crew_emergency(&mut persistence, crew_id)?))
}

/// Handler for POST `/crew/{id}/sos`.
///
/// The body is optional; an empty body raises the SOS with the default reason.
pub async fn handle_raise_sos(
    AxumState(app_state): AxumState<AppState>,
    PathParams(crew_id): PathParams<i64>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope<CrewMemberInfo>>, HttpError> {
    let body: Bytes = body?;
    let req: SosRequest = if body.is_empty() {
        SosRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| HttpError::bad_request(format!("Invalid SOS request: {e}")))?
    };

    let mut persistence = app_state.persistence.lock().await;
    Ok(success(raise_sos(&mut persistence, crew_id, &req)?))
}

/// Handler for POST `/crew/{id}/acknowledge`.
pub async fn handle_acknowledge_sos(
    AxumState(app_state): AxumState<AppState>,
    PathParams(crew_id): PathParams<i64>,
) -> Result<Json<Envelope<CrewMemberInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(acknowledge_sos(&mut persistence, crew_id)?))
}

/// Handler for POST `/crew/{id}/access-code`.
pub async fn handle_regenerate_access_code(
    AxumState(app_state): AxumState<AppState>,
    PathParams(crew_id): PathParams<i64>,
) -> Result<Json<Envelope<CrewMemberInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(success(regenerate_access_code(&mut persistence, crew_id)?))
}
