// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Asset mutations.

use asira_domain::AssetKind;
use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::error::PersistenceError;

backend_fn! {
/// Stores an uploaded image.
///
/// The bytes are written unmodified.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `kind` - Which asset table to write
/// * `title` - Sanitized filename
/// * `content` - Raw image bytes
/// * `content_type` - Declared MIME type
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_asset(
    conn: &mut _,
    kind: AssetKind,
    title: &str,
    content: &[u8],
    content_type: &str,
) -> Result<i64, PersistenceError> {
    info!(
        kind = %kind,
        title,
        size = content.len(),
        "Storing asset"
    );

    with_asset_table!(kind, assets => {
        diesel::insert_into(assets::table)
            .values((
                assets::title.eq(title),
                assets::content.eq(content),
                assets::content_type.eq(content_type),
            ))
            .execute(conn)?
    });

    let asset_id: i64 = conn.get_last_insert_rowid()?;

    info!(asset_id, "Asset stored successfully");

    Ok(asset_id)
}
}

backend_fn! {
/// Deletes an asset.
///
/// # Errors
///
/// Returns `PersistenceError::AssetNotFound` if no row was deleted.
pub fn delete_asset(conn: &mut _, kind: AssetKind, asset_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting {} asset {}", kind, asset_id);

    let rows_affected: usize = with_asset_table!(kind, assets => {
        diesel::delete(assets::table)
            .filter(assets::asset_id.eq(asset_id))
            .execute(conn)?
    });

    if rows_affected == 0 {
        return Err(PersistenceError::AssetNotFound {
            kind: kind.to_string(),
            asset_id,
        });
    }

    Ok(())
}
}
