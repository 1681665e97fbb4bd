// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use asira_domain::CrewStatus;
use asira_persistence::{CrewMemberData, Persistence};

use crate::{ApiError, CrewAuthenticationService, CrewMemberInfo, set_crew_status};

use super::helpers::{create_test_crew, create_test_persistence};

#[test]
fn test_login_with_valid_code() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    assert!(crew.last_login_at.is_none());

    let logged_in: CrewMemberData =
        CrewAuthenticationService::login(&mut persistence, &crew.access_code).unwrap();
    assert_eq!(logged_in.crew_id, crew.id);
    assert!(logged_in.last_login_at.is_some());
}

#[test]
fn test_login_trims_whitespace() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    let padded: String = format!("  {}\n", crew.access_code);
    let logged_in: CrewMemberData =
        CrewAuthenticationService::login(&mut persistence, &padded).unwrap();
    assert_eq!(logged_in.crew_id, crew.id);
}

#[test]
fn test_login_is_case_exact() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    // Codes are uppercase; a code made only of digits has no lowercase form.
    if crew.access_code.chars().any(|c| c.is_ascii_alphabetic()) {
        let lower: String = crew.access_code.to_ascii_lowercase();
        let result = CrewAuthenticationService::login(&mut persistence, &lower);
        assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
    }
}

#[test]
fn test_login_empty_code_is_invalid_input() {
    let mut persistence: Persistence = create_test_persistence();
    for code in ["", "   "] {
        let result = CrewAuthenticationService::login(&mut persistence, code);
        assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    }
}

#[test]
fn test_login_unknown_code_fails_authentication() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_crew(&mut persistence, "Andi", "0811");

    let result = CrewAuthenticationService::login(&mut persistence, "ZZZZZZ");
    assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
}

#[test]
fn test_login_malformed_code_never_reaches_store() {
    let mut persistence: Persistence = create_test_persistence();
    let crew_id: i64 = persistence
        .create_crew_member("Legacy", "", "0819", "abc-1")
        .unwrap();

    for code in ["abc-1", "ABC", "ABCDEFG"] {
        let result = CrewAuthenticationService::login(&mut persistence, code);
        assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
    }
    let stored: CrewMemberData = persistence.get_crew_member(crew_id).unwrap().unwrap();
    assert!(stored.last_login_at.is_none());
}

#[test]
fn test_login_offline_is_forbidden() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    set_crew_status(&mut persistence, crew.id, CrewStatus::Offline, None).unwrap();

    let result = CrewAuthenticationService::login(&mut persistence, &crew.access_code);
    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn test_login_during_warning_succeeds() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    set_crew_status(
        &mut persistence,
        crew.id,
        CrewStatus::Warning,
        Some(String::from("SOS")),
    )
    .unwrap();

    let logged_in: CrewMemberData =
        CrewAuthenticationService::login(&mut persistence, &crew.access_code).unwrap();
    assert_eq!(logged_in.status, "Warning");
    assert_eq!(logged_in.note.as_deref(), Some("SOS"));
}

#[test]
fn test_phone_login_trunk_matches_country_code() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "6281234567");

    let logged_in: CrewMemberData =
        CrewAuthenticationService::login_by_phone(&mut persistence, "081234567").unwrap();
    assert_eq!(logged_in.crew_id, crew.id);
}

#[test]
fn test_phone_login_country_code_matches_trunk() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "081234567");

    let logged_in: CrewMemberData =
        CrewAuthenticationService::login_by_phone(&mut persistence, "6281234567").unwrap();
    assert_eq!(logged_in.crew_id, crew.id);
}

#[test]
fn test_phone_login_international_matches_trunk() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "081234567");

    let logged_in: CrewMemberData =
        CrewAuthenticationService::login_by_phone(&mut persistence, "+6281234567").unwrap();
    assert_eq!(logged_in.crew_id, crew.id);
}

#[test]
fn test_phone_login_prefers_exact_match() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_crew(&mut persistence, "Trunk", "081234567");
    let exact: CrewMemberInfo = create_test_crew(&mut persistence, "Intl", "6281234567");

    let logged_in: CrewMemberData =
        CrewAuthenticationService::login_by_phone(&mut persistence, "6281234567").unwrap();
    assert_eq!(logged_in.crew_id, exact.id);
}

#[test]
fn test_phone_login_unknown_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_crew(&mut persistence, "Andi", "081234567");

    let result = CrewAuthenticationService::login_by_phone(&mut persistence, "0899999");
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_phone_login_blank_is_invalid_input() {
    let mut persistence: Persistence = create_test_persistence();
    let result = CrewAuthenticationService::login_by_phone(&mut persistence, "  ");
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_phone_login_offline_is_forbidden() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "081234567");
    set_crew_status(&mut persistence, crew.id, CrewStatus::Offline, None).unwrap();

    let result = CrewAuthenticationService::login_by_phone(&mut persistence, "081234567");
    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}
