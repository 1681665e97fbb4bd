// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod asset;
mod crew;
mod error;
mod event;
mod phone;
mod validation;

#[cfg(test)]
mod tests;

pub use asset::{AssetKind, DEFAULT_CONTENT_TYPE, effective_content_type, sanitize_filename};
pub use crew::{
    ACCESS_CODE_ALPHABET, ACCESS_CODE_LENGTH, AccessCode, CrewStatus, EMERGENCY_REASON,
};
pub use error::DomainError;
pub use event::{
    DEFAULT_COUPLE_TITLE, DEFAULT_EVENT_DATE, DEFAULT_GIFT_KIND, DEFAULT_GUEST_CATEGORY,
    DEFAULT_THEME_COLOR, QUICK_ENTRY_GIFT_NOTE, RECENT_CHECK_IN_LIMIT, RsvpStatus, RundownStatus,
    VIP_CATEGORIES,
};
pub use phone::phone_lookup_variants;
pub use validation::{optional_field, require_field, validate_portions};
