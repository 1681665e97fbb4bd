// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Content type recorded when an upload does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Selects which image collection an asset operation targets.
///
/// Covers and twibbons have the same shape but live in separate tables.
/// An asset stored under one kind is never visible under the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Invitation cover image.
    Cover,
    /// Twibbon frame overlay.
    Twibbon,
}

impl FromStr for AssetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cover" => Ok(Self::Cover),
            "twibbon" => Ok(Self::Twibbon),
            _ => Err(DomainError::InvalidAssetKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AssetKind {
    /// Returns the path segment used for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Twibbon => "twibbon",
        }
    }

    /// Returns the retrieval URL for an asset of this kind.
    #[must_use]
    pub fn asset_url(&self, asset_id: i64) -> String {
        format!("/assets/{}/{asset_id}", self.as_str())
    }
}

/// Reduces an uploaded filename to a safe title.
///
/// Path separators are treated as whitespace, whitespace runs collapse to a
/// single `_`, every character outside `[A-Za-z0-9._-]` is dropped and
/// leading or trailing `.`/`_` are stripped. `../../etc/passwd` becomes
/// `etc_passwd`.
///
/// # Errors
///
/// Returns an error if nothing is left after sanitizing.
pub fn sanitize_filename(filename: &str) -> Result<String, DomainError> {
    let spaced: String = filename.replace(['/', '\\'], " ");
    let joined: String = spaced.split_whitespace().collect::<Vec<&str>>().join("_");
    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let trimmed: &str = filtered.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        return Err(DomainError::InvalidFilename(filename.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Returns the content type to store for an upload.
#[must_use]
pub fn effective_content_type(declared: Option<&str>) -> String {
    declared
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}
