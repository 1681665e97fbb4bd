// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Phone number matching for crew phone login.
//!
//! Indonesian numbers reach the backend in three spellings: the national
//! trunk form (`0812…`), the bare country-code form (`62812…`) and the
//! international form (`+62812…`). Stored numbers are whatever an admin typed,
//! so a login attempt is matched against every spelling of the same number.

/// National trunk prefix.
const TRUNK_PREFIX: &str = "0";

/// Country code without the plus sign.
const COUNTRY_CODE: &str = "62";

/// Country code in international notation.
const INTERNATIONAL_PREFIX: &str = "+62";

/// Produces the ordered list of stored phone values that match `input`.
///
/// The exact (trimmed) input always comes first. The remaining candidates
/// are the other spellings of the same subscriber number in the fixed order
/// trunk (`0…`), country code (`62…`), international (`+62…`). Duplicates
/// are removed while keeping the first occurrence, so the list is a
/// deterministic precedence order for lookups.
///
/// Returns an empty list for blank input.
#[must_use]
pub fn phone_lookup_variants(input: &str) -> Vec<String> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut variants: Vec<String> = vec![trimmed.to_string()];

    if let Some(subscriber) = subscriber_number(trimmed) {
        for prefix in [TRUNK_PREFIX, COUNTRY_CODE, INTERNATIONAL_PREFIX] {
            let candidate: String = format!("{prefix}{subscriber}");
            if !variants.contains(&candidate) {
                variants.push(candidate);
            }
        }
    }

    variants
}

/// Strips whichever recognized prefix `number` carries.
///
/// The international prefix is checked before the bare country code so that
/// `+62…` is not misread.
fn subscriber_number(number: &str) -> Option<&str> {
    let subscriber: &str = number
        .strip_prefix(INTERNATIONAL_PREFIX)
        .or_else(|| number.strip_prefix(COUNTRY_CODE))
        .or_else(|| number.strip_prefix(TRUNK_PREFIX))?;

    if subscriber.is_empty() {
        None
    } else {
        Some(subscriber)
    }
}
