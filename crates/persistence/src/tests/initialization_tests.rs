// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.

use crate::Persistence;
use crate::error::PersistenceError;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    db1.create_crew_member("Sari", "Usher", "0812", "AAAAAA")
        .unwrap();

    assert_eq!(db1.list_crew_members().unwrap().len(), 1);
    assert!(
        db2.list_crew_members().unwrap().is_empty(),
        "db2 should not see crew created in db1"
    );
}

#[test]
fn test_migrations_create_every_table() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert!(persistence.list_crew_members().is_ok());
    assert!(persistence.list_assets(asira_domain::AssetKind::Cover).is_ok());
    assert!(persistence.list_assets(asira_domain::AssetKind::Twibbon).is_ok());
    assert!(persistence.list_guests().is_ok());
    assert!(persistence.list_rundown_items().is_ok());
    assert!(persistence.list_gifts().is_ok());
    assert!(persistence.list_venues().is_ok());
    assert!(persistence.list_menu_items().is_ok());
    assert!(persistence.get_design_config().is_ok());
}

#[test]
fn test_access_code_unique_index_is_present() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_access_code_uniqueness().is_ok());
}

#[test]
fn test_file_database_persists_across_reopen() {
    let dir = std::env::temp_dir().join(format!("asira_persist_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("reopen.db");
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .create_crew_member("Budi", "Parking", "0813", "BBBBBB")
            .unwrap();
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    let crew = reopened.list_crew_members().unwrap();
    assert_eq!(crew.len(), 1);
    assert_eq!(crew[0].name, "Budi");

    drop(reopened);
    let _ = std::fs::remove_dir_all(&dir);
}
