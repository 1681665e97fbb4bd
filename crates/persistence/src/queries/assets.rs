// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Asset queries.
//!
//! Covers and twibbons share one shape but live in separate tables, so every
//! query body is expanded once per kind through `with_asset_table!`.

use asira_domain::AssetKind;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{AssetData, AssetSummaryData};
use crate::error::PersistenceError;

/// Diesel Queryable struct for full asset rows.
#[derive(Queryable)]
struct AssetRow {
    asset_id: i64,
    title: String,
    content: Vec<u8>,
    content_type: String,
    created_at: String,
}

/// Diesel Queryable struct for asset rows without the image bytes.
#[derive(Queryable)]
struct AssetSummaryRow {
    asset_id: i64,
    title: String,
    content_type: String,
    created_at: String,
}

backend_fn! {
/// Retrieves an asset, including its bytes.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `kind` - Which asset table to read
/// * `asset_id` - The asset ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the asset is not found.
pub fn get_asset(
    conn: &mut _,
    kind: AssetKind,
    asset_id: i64,
) -> Result<Option<AssetData>, PersistenceError> {
    debug!("Looking up {} asset {}", kind, asset_id);

    let row: Option<AssetRow> = with_asset_table!(kind, assets => {
        assets::table
            .filter(assets::asset_id.eq(asset_id))
            .select((
                assets::asset_id,
                assets::title,
                assets::content,
                assets::content_type,
                assets::created_at,
            ))
            .first::<AssetRow>(conn)
            .optional()?
    });

    Ok(row.map(|r| AssetData {
        asset_id: r.asset_id,
        title: r.title,
        content: r.content,
        content_type: r.content_type,
        created_at: r.created_at,
    }))
}
}

backend_fn! {
/// Lists asset metadata for one kind, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assets(
    conn: &mut _,
    kind: AssetKind,
) -> Result<Vec<AssetSummaryData>, PersistenceError> {
    let rows: Vec<AssetSummaryRow> = with_asset_table!(kind, assets => {
        assets::table
            .order(assets::asset_id.desc())
            .select((
                assets::asset_id,
                assets::title,
                assets::content_type,
                assets::created_at,
            ))
            .load::<AssetSummaryRow>(conn)?
    });

    Ok(rows
        .into_iter()
        .map(|r| AssetSummaryData {
            asset_id: r.asset_id,
            title: r.title,
            content_type: r.content_type,
            created_at: r.created_at,
        })
        .collect())
}
}
