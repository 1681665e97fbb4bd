// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cover and twibbon image storage.

use std::str::FromStr;

use asira_domain::{AssetKind, effective_content_type, sanitize_filename};
use asira_persistence::{AssetData, Persistence, PersistenceError};
use tracing::{debug, info};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{AssetContent, AssetInfo, StoreAssetRequest, StoredAssetResponse};

/// Parses the asset kind from a request or path segment.
///
/// # Errors
///
/// Returns `InvalidInput` if the kind is not `cover` or `twibbon`.
pub fn parse_asset_kind(kind: &str) -> Result<AssetKind, ApiError> {
    AssetKind::from_str(kind).map_err(translate_domain_error)
}

/// Stores an uploaded image.
///
/// Checks run in a fixed order: the file part must be present, then it must
/// carry a filename, then the kind must be valid, then the filename must
/// survive sanitizing. The stored title is the sanitized filename.
///
/// # Errors
///
/// Returns `InvalidInput` for any of the failed checks above, or an internal
/// error if the insert fails.
pub fn store_asset(
    persistence: &mut Persistence,
    request: StoreAssetRequest,
) -> Result<StoredAssetResponse, ApiError> {
    let Some(content) = request.content else {
        return Err(ApiError::InvalidInput {
            field: String::from("file"),
            message: String::from("No file part in the request"),
        });
    };

    let filename: &str = request.filename.as_deref().map_or("", str::trim);
    if filename.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("file"),
            message: String::from("No file selected"),
        });
    }

    let kind: AssetKind = parse_asset_kind(request.kind.as_deref().unwrap_or_default())?;
    let title: String = sanitize_filename(filename).map_err(translate_domain_error)?;
    let content_type: String = effective_content_type(request.content_type.as_deref());

    let asset_id: i64 = persistence
        .store_asset(kind, &title, &content, &content_type)
        .map_err(translate_persistence_error)?;

    info!(
        kind = %kind,
        asset_id,
        bytes = content.len(),
        content_type = %content_type,
        "Stored asset"
    );

    Ok(StoredAssetResponse {
        asset_id,
        kind: kind.as_str().to_string(),
        message: format!("{title} uploaded"),
        img_url: kind.asset_url(asset_id),
    })
}

/// Retrieves the bytes of a stored image.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the asset does not exist and
/// `EmptyContent` if it holds no bytes.
pub fn retrieve_asset(
    persistence: &mut Persistence,
    kind: AssetKind,
    asset_id: i64,
) -> Result<AssetContent, ApiError> {
    debug!(kind = %kind, asset_id, "Retrieving asset");

    let asset: AssetData = persistence
        .get_asset(kind, asset_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| {
            translate_persistence_error(PersistenceError::AssetNotFound {
                kind: kind.as_str().to_string(),
                asset_id,
            })
        })?;

    if asset.content.is_empty() {
        return Err(ApiError::EmptyContent {
            message: format!("The {kind} asset {asset_id} holds no data"),
        });
    }

    Ok(AssetContent {
        content: asset.content,
        content_type: asset.content_type,
        filename: asset.title,
    })
}

/// Deletes a stored image.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the asset does not exist.
pub fn delete_asset(
    persistence: &mut Persistence,
    kind: AssetKind,
    asset_id: i64,
) -> Result<(), ApiError> {
    persistence
        .delete_asset(kind, asset_id)
        .map_err(translate_persistence_error)?;

    info!(kind = %kind, asset_id, "Deleted asset");
    Ok(())
}

/// Lists image metadata for one kind, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assets(persistence: &mut Persistence, kind: AssetKind) -> Result<Vec<AssetInfo>, ApiError> {
    Ok(persistence
        .list_assets(kind)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|data| AssetInfo::from_summary(kind, data))
        .collect())
}
