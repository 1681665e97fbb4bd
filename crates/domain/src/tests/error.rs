// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CrewStatus, DomainError};

#[test]
fn test_missing_field_message_names_field() {
    let err: DomainError = DomainError::MissingField { field: "accessCode" };
    assert_eq!(err.to_string(), "Field 'accessCode' is required");
}

#[test]
fn test_transition_message_names_both_states() {
    let err: DomainError = DomainError::InvalidStatusTransition {
        from: CrewStatus::Active,
        to: CrewStatus::Responded,
    };
    assert_eq!(
        err.to_string(),
        "Crew status cannot change from Active to Responded"
    );
}

#[test]
fn test_asset_kind_message_lists_valid_kinds() {
    let err: DomainError = DomainError::InvalidAssetKind(String::from("poster"));
    assert!(err.to_string().contains("'cover' or 'twibbon'"));
}
