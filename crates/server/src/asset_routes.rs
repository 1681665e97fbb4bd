// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cover and twibbon upload, download and deletion.

use asira_api::{
    AssetContent, AssetInfo, StoreAssetRequest, StoredAssetResponse, delete_asset, list_assets,
    parse_asset_kind, retrieve_asset, store_asset,
};
use asira_domain::AssetKind;
use axum::{
    Json,
    extract::{Multipart, State as AxumState, multipart::MultipartRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::debug;

use crate::AppState;
use crate::http::{
    Envelope, HttpError, PathParams, STATUS_SUCCESS, success_list, success_message,
};

/// Reads the `file` and `kind` parts of an upload form.
async fn read_upload(mut multipart: Multipart) -> Result<StoreAssetRequest, HttpError> {
    let mut request: StoreAssetRequest = StoreAssetRequest::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                request.filename = field.file_name().map(ToString::to_string);
                request.content_type = field.content_type().map(ToString::to_string);
                request.content = Some(field.bytes().await?.to_vec());
            }
            Some("kind") => {
                request.kind = Some(field.text().await?);
            }
            other => debug!(field = ?other, "Ignoring unexpected upload field"),
        }
    }

    Ok(request)
}

/// Handler for POST `/assets`.
pub async fn handle_upload_asset(
    AxumState(app_state): AxumState<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, HttpError> {
    let request: StoreAssetRequest = read_upload(multipart?).await?;

    let mut persistence = app_state.persistence.lock().await;
    let stored: StoredAssetResponse = store_asset(&mut persistence, request)?;
    drop(persistence);

    Ok(Json(json!({
        "status": STATUS_SUCCESS,
        "message": stored.message,
        "img_url": stored.img_url,
        "assetId": stored.asset_id,
        "kind": stored.kind,
    })))
}

/// Handler for GET `/assets/{kind}/{id}`.
///
/// Serves the stored bytes inline with their recorded content type.
pub async fn handle_get_asset(
    AxumState(app_state): AxumState<AppState>,
    PathParams((kind, asset_id)): PathParams<(String, i64)>,
) -> Result<Response, HttpError> {
    let kind: AssetKind = parse_asset_kind(&kind)?;

    let mut persistence = app_state.persistence.lock().await;
    let asset: AssetContent = retrieve_asset(&mut persistence, kind, asset_id)?;
    drop(persistence);

    let content_type: HeaderValue = HeaderValue::from_str(&asset.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    // The title is sanitized to [A-Za-z0-9._-], so it is always a valid header value.
    let disposition: HeaderValue =
        HeaderValue::from_str(&format!("inline; filename=\"{}\"", asset.filename))
            .unwrap_or_else(|_| HeaderValue::from_static("inline"));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        asset.content,
    )
        .into_response())
}

/// Handler for POST `/assets/{kind}/{id}/delete`.
pub async fn handle_delete_asset(
    AxumState(app_state): AxumState<AppState>,
    PathParams((kind, asset_id)): PathParams<(String, i64)>,
) -> Result<Json<Envelope<()>>, HttpError> {
    let kind: AssetKind = parse_asset_kind(&kind)?;

    let mut persistence = app_state.persistence.lock().await;
    delete_asset(&mut persistence, kind, asset_id)?;

    Ok(success_message(format!("{kind} {asset_id} deleted")))
}

/// Handler for GET `/assets/{kind}`.
pub async fn handle_list_assets(
    AxumState(app_state): AxumState<AppState>,
    PathParams(kind): PathParams<String>,
) -> Result<Json<Envelope<Vec<AssetInfo>>>, HttpError> {
    let kind: AssetKind = parse_asset_kind(&kind)?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(success_list(list_assets(&mut persistence, kind)?))
}
