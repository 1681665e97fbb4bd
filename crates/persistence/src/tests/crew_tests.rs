// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_crew_member, create_test_persistence};
use crate::{CrewMemberData, CrewMemberUpdate, PersistenceError};

#[test]
fn test_create_crew_member_starts_active_without_note() {
    let mut persistence = create_test_persistence();
    let crew_id = create_test_crew_member(&mut persistence, "Sari", "081234", "ABC123");

    let crew: CrewMemberData = persistence.get_crew_member(crew_id).unwrap().unwrap();
    assert_eq!(crew.name, "Sari");
    assert_eq!(crew.role, "Usher");
    assert_eq!(crew.status, "Active");
    assert_eq!(crew.access_code, "ABC123");
    assert!(crew.note.is_none());
    assert!(crew.last_login_at.is_none());
    assert!(!crew.created_at.is_empty());
}

#[test]
fn test_duplicate_access_code_is_rejected() {
    let mut persistence = create_test_persistence();
    create_test_crew_member(&mut persistence, "Sari", "0812", "DUP001");

    let result = persistence.create_crew_member("Budi", "Parking", "0813", "DUP001");
    assert_eq!(
        result,
        Err(PersistenceError::DuplicateAccessCode("DUP001".to_string()))
    );
    assert_eq!(persistence.list_crew_members().unwrap().len(), 1);
}

#[test]
fn test_get_crew_member_missing_returns_none() {
    let mut persistence = create_test_persistence();
    assert!(persistence.get_crew_member(999).unwrap().is_none());
    assert!(
        persistence
            .get_crew_member_by_access_code("NOPE00")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_lookup_by_access_code_is_exact() {
    let mut persistence = create_test_persistence();
    let crew_id = create_test_crew_member(&mut persistence, "Sari", "0812", "QWE789");

    let found = persistence
        .get_crew_member_by_access_code("QWE789")
        .unwrap()
        .unwrap();
    assert_eq!(found.crew_id, crew_id);
    assert!(
        persistence
            .get_crew_member_by_access_code("qwe789")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_phone_variants_follow_precedence() {
    let mut persistence = create_test_persistence();
    let intl = create_test_crew_member(&mut persistence, "Intl", "+62812555", "AAA001");
    let trunk = create_test_crew_member(&mut persistence, "Trunk", "0812555", "AAA002");

    let variants = vec![
        "62812555".to_string(),
        "0812555".to_string(),
        "+62812555".to_string(),
    ];
    let found = persistence
        .find_crew_member_by_phone_variants(&variants)
        .unwrap()
        .unwrap();
    assert_eq!(found.crew_id, trunk);

    let only_intl = vec!["+62812555".to_string()];
    let found = persistence
        .find_crew_member_by_phone_variants(&only_intl)
        .unwrap()
        .unwrap();
    assert_eq!(found.crew_id, intl);
}

#[test]
fn test_phone_lookup_picks_lowest_id_within_variant() {
    let mut persistence = create_test_persistence();
    let first = create_test_crew_member(&mut persistence, "First", "0812000", "AAA001");
    create_test_crew_member(&mut persistence, "Second", "0812000", "AAA002");

    let found = persistence
        .find_crew_member_by_phone_variants(&["0812000".to_string()])
        .unwrap()
        .unwrap();
    assert_eq!(found.crew_id, first);
}

#[test]
fn test_phone_lookup_without_match_returns_none() {
    let mut persistence = create_test_persistence();
    create_test_crew_member(&mut persistence, "Sari", "0812000", "AAA001");

    assert!(
        persistence
            .find_crew_member_by_phone_variants(&["0899".to_string()])
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .find_crew_member_by_phone_variants(&[])
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_update_crew_member_writes_all_fields() {
    let mut persistence = create_test_persistence();
    let crew_id = create_test_crew_member(&mut persistence, "Sari", "0812", "AAA001");

    let update = CrewMemberUpdate {
        name: "Sari W".to_string(),
        role: "Coordinator".to_string(),
        phone: "0899".to_string(),
        status: "Warning".to_string(),
        note: Some("Stage door".to_string()),
    };
    persistence.update_crew_member(crew_id, &update).unwrap();

    let crew = persistence.get_crew_member(crew_id).unwrap().unwrap();
    assert_eq!(crew.name, "Sari W");
    assert_eq!(crew.role, "Coordinator");
    assert_eq!(crew.phone, "0899");
    assert_eq!(crew.status, "Warning");
    assert_eq!(crew.note.as_deref(), Some("Stage door"));
    assert_eq!(crew.access_code, "AAA001");
}

#[test]
fn test_update_missing_crew_member_fails() {
    let mut persistence = create_test_persistence();
    let update = CrewMemberUpdate {
        name: "Ghost".to_string(),
        role: "None".to_string(),
        phone: "0".to_string(),
        status: "Active".to_string(),
        note: None,
    };
    assert_eq!(
        persistence.update_crew_member(42, &update),
        Err(PersistenceError::CrewNotFound(42))
    );
}

#[test]
fn test_set_status_and_counts() {
    let mut persistence = create_test_persistence();
    let a = create_test_crew_member(&mut persistence, "A", "01", "AAA001");
    create_test_crew_member(&mut persistence, "B", "02", "AAA002");

    persistence
        .set_crew_status(a, "Warning", Some("Help at gate"))
        .unwrap();

    assert_eq!(persistence.count_crew_members_with_status("Warning").unwrap(), 1);
    assert_eq!(persistence.count_crew_members_with_status("Active").unwrap(), 1);

    let crew = persistence.get_crew_member(a).unwrap().unwrap();
    assert_eq!(crew.note.as_deref(), Some("Help at gate"));
}

#[test]
fn test_set_all_and_reset_warning_rows() {
    let mut persistence = create_test_persistence();
    let a = create_test_crew_member(&mut persistence, "A", "01", "AAA001");
    let b = create_test_crew_member(&mut persistence, "B", "02", "AAA002");

    let updated = persistence
        .set_all_crew_status("Warning", Some("Emergency signal from admin"))
        .unwrap();
    assert_eq!(updated, 2);

    persistence.set_crew_status(b, "Offline", None).unwrap();

    let reset = persistence.reset_crew_status("Warning", "Active").unwrap();
    assert_eq!(reset, 1);

    let crew_a = persistence.get_crew_member(a).unwrap().unwrap();
    assert_eq!(crew_a.status, "Active");
    assert!(crew_a.note.is_none());

    let crew_b = persistence.get_crew_member(b).unwrap().unwrap();
    assert_eq!(crew_b.status, "Offline");
}

#[test]
fn test_status_check_constraint_rejects_unknown_status() {
    let mut persistence = create_test_persistence();
    let a = create_test_crew_member(&mut persistence, "A", "01", "AAA001");

    assert!(persistence.set_crew_status(a, "Sleeping", None).is_err());
}

#[test]
fn test_update_access_code_collision() {
    let mut persistence = create_test_persistence();
    create_test_crew_member(&mut persistence, "A", "01", "AAA001");
    let b = create_test_crew_member(&mut persistence, "B", "02", "AAA002");

    assert_eq!(
        persistence.update_crew_access_code(b, "AAA001"),
        Err(PersistenceError::DuplicateAccessCode("AAA001".to_string()))
    );

    persistence.update_crew_access_code(b, "ZZZ999").unwrap();
    let found = persistence
        .get_crew_member_by_access_code("ZZZ999")
        .unwrap()
        .unwrap();
    assert_eq!(found.crew_id, b);
    assert!(
        persistence
            .get_crew_member_by_access_code("AAA002")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_update_last_login_sets_timestamp() {
    let mut persistence = create_test_persistence();
    let a = create_test_crew_member(&mut persistence, "A", "01", "AAA001");

    persistence.update_crew_last_login(a).unwrap();

    let crew = persistence.get_crew_member(a).unwrap().unwrap();
    assert!(crew.last_login_at.is_some());
}

#[test]
fn test_delete_crew_member() {
    let mut persistence = create_test_persistence();
    let a = create_test_crew_member(&mut persistence, "A", "01", "AAA001");

    persistence.delete_crew_member(a).unwrap();
    assert!(persistence.get_crew_member(a).unwrap().is_none());
    assert_eq!(
        persistence.delete_crew_member(a),
        Err(PersistenceError::CrewNotFound(a))
    );
}
