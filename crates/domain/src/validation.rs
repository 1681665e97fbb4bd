// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Requires a field to be present and not blank.
///
/// # Arguments
///
/// * `field` - The field name reported on failure
/// * `value` - The submitted value, if any
///
/// # Returns
///
/// The trimmed value.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the value is absent or blank.
pub fn require_field(field: &'static str, value: Option<&str>) -> Result<String, DomainError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(DomainError::MissingField { field }),
    }
}

/// Trims an optional field, mapping blank input to `None`.
#[must_use]
pub fn optional_field(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Validates a menu item's portion count.
///
/// # Errors
///
/// Returns an error if the count is negative or does not fit the stored column.
pub fn validate_portions(portions: i64) -> Result<i32, DomainError> {
    if portions < 0 {
        return Err(DomainError::InvalidPortions(portions));
    }
    i32::try_from(portions).map_err(|_| DomainError::InvalidPortions(portions))
}
