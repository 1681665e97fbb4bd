// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use asira_domain::{ACCESS_CODE_LENGTH, AccessCode, CrewStatus, EMERGENCY_REASON};
use asira_persistence::Persistence;

use crate::{
    ApiError, BulkStatusRequest, CreateCrewRequest, CrewMemberInfo, MAX_ACCESS_CODE_ATTEMPTS,
    SosRequest, UpdateCrewRequest, acknowledge_sos, bulk_set_status, create_crew_member,
    create_crew_member_with, delete_crew_member, emergency_status, generate_unique_access_code,
    get_crew_member, list_crew_members, raise_sos, random_access_code, regenerate_access_code,
    regenerate_access_code_with, set_crew_status, stop_emergency, toggle_crew_emergency,
    toggle_global_emergency, update_crew_member,
};

use super::helpers::{create_request, create_test_crew, create_test_persistence};

fn statuses(persistence: &mut Persistence) -> Vec<(String, Option<String>)> {
    list_crew_members(persistence)
        .unwrap()
        .crew
        .into_iter()
        .map(|c| (c.status, c.note))
        .collect()
}

// ============================================================================
// Access Codes
// ============================================================================

/// Yields the given codes in order, then keeps repeating the last one.
fn scripted_codes(codes: &[&str]) -> impl FnMut() -> Result<AccessCode, ApiError> {
    let mut queue: Vec<AccessCode> = codes
        .iter()
        .rev()
        .map(|c| AccessCode::new(c).unwrap())
        .collect();
    move || {
        if queue.len() > 1 {
            Ok(queue.pop().unwrap())
        } else {
            Ok(queue[0].clone())
        }
    }
}

#[test]
fn test_random_access_code_is_well_formed() {
    for _ in 0..200 {
        let code: AccessCode = random_access_code().unwrap();
        assert_eq!(code.value().len(), ACCESS_CODE_LENGTH);
        assert!(AccessCode::new(code.value()).is_ok());
    }
}

#[test]
fn test_create_retries_when_code_is_already_held() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_crew_member("Budi", "Usher", "0811", "AAAAAA")
        .unwrap();

    let mut next_code = scripted_codes(&["AAAAAA", "BBBBBB"]);
    let crew: CrewMemberInfo =
        create_crew_member_with(&mut persistence, &create_request("Sari", "0812"), &mut next_code)
            .unwrap();

    assert_eq!(crew.access_code, "BBBBBB");
    assert_eq!(list_crew_members(&mut persistence).unwrap().total, 2);
}

#[test]
fn test_create_gives_up_when_every_code_is_held() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_crew_member("Budi", "Usher", "0811", "AAAAAA")
        .unwrap();

    let mut next_code = scripted_codes(&["AAAAAA"]);
    let err: ApiError =
        create_crew_member_with(&mut persistence, &create_request("Sari", "0812"), &mut next_code)
            .unwrap_err();

    assert!(matches!(err, ApiError::Internal { .. }));
    assert_eq!(list_crew_members(&mut persistence).unwrap().total, 1);
}

#[test]
fn test_generate_unique_access_code_stops_after_attempt_budget() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_crew_member("Budi", "Usher", "0811", "AAAAAA")
        .unwrap();

    let mut draws: usize = 0;
    let mut next_code = || -> Result<AccessCode, ApiError> {
        draws += 1;
        Ok(AccessCode::new("AAAAAA").unwrap())
    };
    let result = generate_unique_access_code(&mut persistence, &mut next_code, |p, code| {
        p.create_crew_member("Sari", "", "0812", code.value())
    });

    assert!(matches!(result, Err(ApiError::Internal { .. })));
    assert_eq!(draws, MAX_ACCESS_CODE_ATTEMPTS);
}

#[test]
fn test_many_creations_never_share_a_code() {
    let mut persistence: Persistence = create_test_persistence();
    let mut codes: HashSet<String> = HashSet::new();

    for i in 0..100 {
        let crew: CrewMemberInfo =
            create_test_crew(&mut persistence, &format!("Crew {i}"), &format!("0812{i:04}"));
        assert!(codes.insert(crew.access_code), "duplicate access code issued");
    }
}

#[test]
fn test_regenerate_access_code_replaces_code() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Budi", "0811");

    let updated: CrewMemberInfo = regenerate_access_code(&mut persistence, crew.id).unwrap();
    assert_ne!(updated.access_code, crew.access_code);
    assert!(
        persistence
            .get_crew_member_by_access_code(&crew.access_code)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_regenerate_retries_when_code_is_already_held() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_crew_member("Budi", "Usher", "0811", "AAAAAA")
        .unwrap();
    let sari: i64 = persistence
        .create_crew_member("Sari", "Usher", "0812", "CCCCCC")
        .unwrap();

    let mut next_code = scripted_codes(&["AAAAAA", "BBBBBB"]);
    let updated: CrewMemberInfo =
        regenerate_access_code_with(&mut persistence, sari, &mut next_code).unwrap();

    assert_eq!(updated.access_code, "BBBBBB");
}

#[test]
fn test_regenerate_gives_up_when_every_code_is_held() {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .create_crew_member("Budi", "Usher", "0811", "AAAAAA")
        .unwrap();
    let sari: i64 = persistence
        .create_crew_member("Sari", "Usher", "0812", "CCCCCC")
        .unwrap();

    let mut next_code = scripted_codes(&["AAAAAA"]);
    let err: ApiError =
        regenerate_access_code_with(&mut persistence, sari, &mut next_code).unwrap_err();

    assert!(matches!(err, ApiError::Internal { .. }));
    assert_eq!(
        get_crew_member(&mut persistence, sari).unwrap().access_code,
        "CCCCCC"
    );
}

#[test]
fn test_regenerate_access_code_unknown_crew() {
    let mut persistence: Persistence = create_test_persistence();
    let result = regenerate_access_code(&mut persistence, 404);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

// ============================================================================
// CRUD
// ============================================================================

#[test]
fn test_create_crew_member_defaults() {
    let mut persistence: Persistence = create_test_persistence();
    let request: CreateCrewRequest = CreateCrewRequest {
        name: Some(String::from("  Sari  ")),
        phone: Some(String::from("0813")),
        role: None,
    };

    let crew: CrewMemberInfo = create_crew_member(&mut persistence, &request).unwrap();
    assert_eq!(crew.name, "Sari");
    assert_eq!(crew.role, "");
    assert_eq!(crew.status, "Active");
    assert_eq!(crew.note, None);
    assert_eq!(crew.access_code.len(), ACCESS_CODE_LENGTH);
}

#[test]
fn test_create_crew_member_requires_name_and_phone() {
    let mut persistence: Persistence = create_test_persistence();

    let missing_name: CreateCrewRequest = CreateCrewRequest {
        name: Some(String::from("   ")),
        phone: Some(String::from("0813")),
        role: None,
    };
    let err: ApiError = create_crew_member(&mut persistence, &missing_name).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "name"));

    let missing_phone: CreateCrewRequest = CreateCrewRequest {
        name: Some(String::from("Sari")),
        phone: None,
        role: None,
    };
    let err: ApiError = create_crew_member(&mut persistence, &missing_phone).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "phone"));

    assert_eq!(list_crew_members(&mut persistence).unwrap().total, 0);
}

#[test]
fn test_list_crew_members_ordered_by_id() {
    let mut persistence: Persistence = create_test_persistence();
    let first: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    let second: CrewMemberInfo = create_test_crew(&mut persistence, "Bayu", "0812");

    let listed = list_crew_members(&mut persistence).unwrap();
    assert_eq!(listed.total, 2);
    assert_eq!(listed.crew[0].id, first.id);
    assert_eq!(listed.crew[1].id, second.id);
}

#[test]
fn test_update_crew_member_partial() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    let request: UpdateCrewRequest = UpdateCrewRequest {
        role: Some(String::from("Runner")),
        ..UpdateCrewRequest::default()
    };
    let updated: CrewMemberInfo = update_crew_member(&mut persistence, crew.id, &request).unwrap();

    assert_eq!(updated.name, "Andi");
    assert_eq!(updated.phone, "0811");
    assert_eq!(updated.role, "Runner");
    assert_eq!(updated.status, "Active");
    assert_eq!(updated.access_code, crew.access_code);
}

#[test]
fn test_update_crew_member_note_kept_only_in_warning() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    let warning: UpdateCrewRequest = UpdateCrewRequest {
        status: Some(String::from("Warning")),
        note: Some(String::from("Lost guest at gate")),
        ..UpdateCrewRequest::default()
    };
    let updated: CrewMemberInfo = update_crew_member(&mut persistence, crew.id, &warning).unwrap();
    assert_eq!(updated.note.as_deref(), Some("Lost guest at gate"));

    let active: UpdateCrewRequest = UpdateCrewRequest {
        status: Some(String::from("Active")),
        note: Some(String::from("ignored")),
        ..UpdateCrewRequest::default()
    };
    let updated: CrewMemberInfo = update_crew_member(&mut persistence, crew.id, &active).unwrap();
    assert_eq!(updated.status, "Active");
    assert_eq!(updated.note, None);
}

#[test]
fn test_update_crew_member_invalid_status() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    let request: UpdateCrewRequest = UpdateCrewRequest {
        status: Some(String::from("Sleeping")),
        ..UpdateCrewRequest::default()
    };
    let err: ApiError = update_crew_member(&mut persistence, crew.id, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "status"));
}

#[test]
fn test_update_crew_member_unknown_id() {
    let mut persistence: Persistence = create_test_persistence();
    let result = update_crew_member(&mut persistence, 99, &UpdateCrewRequest::default());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_delete_crew_member() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    delete_crew_member(&mut persistence, crew.id).unwrap();
    assert!(matches!(
        get_crew_member(&mut persistence, crew.id),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_delete_nonexistent_crew_member_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let result = delete_crew_member(&mut persistence, 12345);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

// ============================================================================
// Status Lifecycle
// ============================================================================

#[test]
fn test_set_status_active_always_clears_note() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    set_crew_status(
        &mut persistence,
        crew.id,
        CrewStatus::Warning,
        Some(String::from("Needs help")),
    )
    .unwrap();

    let updated: CrewMemberInfo = set_crew_status(
        &mut persistence,
        crew.id,
        CrewStatus::Active,
        Some(String::from("should not stick")),
    )
    .unwrap();
    assert_eq!(updated.status, "Active");
    assert_eq!(updated.note, None);
}

#[test]
fn test_set_status_unknown_crew() {
    let mut persistence: Persistence = create_test_persistence();
    let result = set_crew_status(&mut persistence, 7, CrewStatus::Offline, None);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_bulk_set_status_offline_and_back() {
    let mut persistence: Persistence = create_test_persistence();
    let a: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    create_test_crew(&mut persistence, "Bayu", "0812");
    set_crew_status(&mut persistence, a.id, CrewStatus::Warning, Some(String::from("x"))).unwrap();

    let request: BulkStatusRequest = BulkStatusRequest {
        status: Some(String::from("Offline")),
    };
    let response = bulk_set_status(&mut persistence, &request).unwrap();
    assert_eq!(response.updated, 2);
    assert_eq!(response.target_status, "Offline");
    assert!(
        statuses(&mut persistence)
            .iter()
            .all(|(s, n)| s == "Offline" && n.is_none())
    );

    let request: BulkStatusRequest = BulkStatusRequest {
        status: Some(String::from("Active")),
    };
    bulk_set_status(&mut persistence, &request).unwrap();
    assert!(statuses(&mut persistence).iter().all(|(s, _)| s == "Active"));
}

#[test]
fn test_bulk_set_status_rejects_other_targets() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_crew(&mut persistence, "Andi", "0811");

    for status in [Some("Warning"), Some("Responded"), Some("Bogus"), None] {
        let request: BulkStatusRequest = BulkStatusRequest {
            status: status.map(String::from),
        };
        let err: ApiError = bulk_set_status(&mut persistence, &request).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput { .. }), "{status:?}");
    }
    assert!(statuses(&mut persistence).iter().all(|(s, _)| s == "Active"));
}

#[test]
fn test_toggle_global_emergency_twice_restores_roster() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_crew(&mut persistence, "Andi", "0811");
    create_test_crew(&mut persistence, "Bayu", "0812");
    create_test_crew(&mut persistence, "Citra", "0813");
    let before = statuses(&mut persistence);

    let raised = toggle_global_emergency(&mut persistence).unwrap();
    assert!(raised.activated);
    assert_eq!(raised.affected, 3);
    assert!(
        statuses(&mut persistence)
            .iter()
            .all(|(s, n)| s == "Warning" && n.as_deref() == Some(EMERGENCY_REASON))
    );
    assert!(emergency_status(&mut persistence).unwrap().active);

    let cleared = toggle_global_emergency(&mut persistence).unwrap();
    assert!(!cleared.activated);
    assert_eq!(cleared.affected, 3);
    assert_eq!(statuses(&mut persistence), before);
    assert!(!emergency_status(&mut persistence).unwrap().active);
}

#[test]
fn test_toggle_global_emergency_clears_when_any_warning() {
    let mut persistence: Persistence = create_test_persistence();
    let a: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    let b: CrewMemberInfo = create_test_crew(&mut persistence, "Bayu", "0812");
    set_crew_status(&mut persistence, a.id, CrewStatus::Warning, Some(String::from("SOS"))).unwrap();
    set_crew_status(&mut persistence, b.id, CrewStatus::Offline, None).unwrap();

    let result = toggle_global_emergency(&mut persistence).unwrap();
    assert!(!result.activated);
    assert_eq!(result.affected, 1);

    let a: CrewMemberInfo = get_crew_member(&mut persistence, a.id).unwrap();
    let b: CrewMemberInfo = get_crew_member(&mut persistence, b.id).unwrap();
    assert_eq!(a.status, "Active");
    assert_eq!(a.note, None);
    assert_eq!(b.status, "Offline");
}

#[test]
fn test_stop_emergency_resets_only_warning() {
    let mut persistence: Persistence = create_test_persistence();
    let a: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    let b: CrewMemberInfo = create_test_crew(&mut persistence, "Bayu", "0812");
    set_crew_status(&mut persistence, a.id, CrewStatus::Warning, Some(String::from("SOS"))).unwrap();
    set_crew_status(&mut persistence, b.id, CrewStatus::Responded, None).unwrap();

    assert_eq!(stop_emergency(&mut persistence).unwrap(), 1);
    assert_eq!(get_crew_member(&mut persistence, a.id).unwrap().status, "Active");
    assert_eq!(get_crew_member(&mut persistence, b.id).unwrap().status, "Responded");

    assert_eq!(stop_emergency(&mut persistence).unwrap(), 0);
}

#[test]
fn test_toggle_crew_emergency_flips_one_member() {
    let mut persistence: Persistence = create_test_persistence();
    let a: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    let b: CrewMemberInfo = create_test_crew(&mut persistence, "Bayu", "0812");

    let raised: CrewMemberInfo = toggle_crew_emergency(&mut persistence, a.id).unwrap();
    assert_eq!(raised.status, "Warning");
    assert_eq!(raised.note.as_deref(), Some(EMERGENCY_REASON));
    assert_eq!(get_crew_member(&mut persistence, b.id).unwrap().status, "Active");

    let cleared: CrewMemberInfo = toggle_crew_emergency(&mut persistence, a.id).unwrap();
    assert_eq!(cleared.status, "Active");
    assert_eq!(cleared.note, None);
}

#[test]
fn test_toggle_crew_emergency_from_responded_resets() {
    let mut persistence: Persistence = create_test_persistence();
    let a: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    set_crew_status(&mut persistence, a.id, CrewStatus::Responded, None).unwrap();

    let result: CrewMemberInfo = toggle_crew_emergency(&mut persistence, a.id).unwrap();
    assert_eq!(result.status, "Active");
}

#[test]
fn test_raise_sos_then_acknowledge() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    let request: SosRequest = SosRequest {
        note: Some(String::from("Fainted guest near stage")),
    };
    let raised: CrewMemberInfo = raise_sos(&mut persistence, crew.id, &request).unwrap();
    assert_eq!(raised.status, "Warning");
    assert_eq!(raised.note.as_deref(), Some("Fainted guest near stage"));

    let acknowledged: CrewMemberInfo = acknowledge_sos(&mut persistence, crew.id).unwrap();
    assert_eq!(acknowledged.status, "Responded");
    assert_eq!(acknowledged.note, None);
}

#[test]
fn test_raise_sos_without_note_uses_fixed_reason() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    let raised: CrewMemberInfo =
        raise_sos(&mut persistence, crew.id, &SosRequest::default()).unwrap();
    assert_eq!(raised.note.as_deref(), Some(EMERGENCY_REASON));
}

#[test]
fn test_raise_sos_twice_is_rule_violation() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");
    raise_sos(&mut persistence, crew.id, &SosRequest::default()).unwrap();

    let err: ApiError = raise_sos(&mut persistence, crew.id, &SosRequest::default()).unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}

#[test]
fn test_acknowledge_requires_warning() {
    let mut persistence: Persistence = create_test_persistence();
    let crew: CrewMemberInfo = create_test_crew(&mut persistence, "Andi", "0811");

    let err: ApiError = acknowledge_sos(&mut persistence, crew.id).unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
    assert_eq!(get_crew_member(&mut persistence, crew.id).unwrap().status, "Active");
}
