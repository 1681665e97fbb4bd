// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for `MariaDB`.
//!
//! Compiled only with the `mysql` feature and marked `#[ignore]`. They run via
//! `cargo xtask test-mariadb`, which provisions a container and sets
//! `DATABASE_URL` and `ASIRA_TEST_BACKEND=mariadb`. Tests fail fast if that
//! infrastructure is missing.

use diesel::prelude::*;
use diesel::{MysqlConnection, QueryableByName};
use diesel::sql_types::BigInt;
use std::env;

use asira_domain::AssetKind;

use crate::Persistence;
use crate::backend::mysql;

#[derive(QueryableByName)]
struct CountResult {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

fn get_mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests must be run via `cargo xtask test-mariadb`")
}

fn verify_mariadb_test_environment() {
    let backend = env::var("ASIRA_TEST_BACKEND").expect(
        "ASIRA_TEST_BACKEND not set - MariaDB tests must be run via `cargo xtask test-mariadb`",
    );
    assert_eq!(backend, "mariadb", "ASIRA_TEST_BACKEND must be 'mariadb'");
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let result = mysql::initialize_database(&get_mariadb_url());
    assert!(result.is_ok(), "Failed to migrate MariaDB: {:?}", result.err());
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_access_code_is_unique() {
    verify_mariadb_test_environment();
    let mut conn: MysqlConnection = mysql::initialize_database(&get_mariadb_url()).unwrap();

    mysql::verify_access_code_uniqueness(&mut conn).unwrap();

    diesel::sql_query(
        "INSERT INTO crew_members (name, role, phone, access_code) \
         VALUES ('A', 'Usher', '01', 'MDB001')",
    )
    .execute(&mut conn)
    .unwrap();
    let duplicate = diesel::sql_query(
        "INSERT INTO crew_members (name, role, phone, access_code) \
         VALUES ('B', 'Usher', '02', 'MDB001')",
    )
    .execute(&mut conn);
    assert!(duplicate.is_err());

    let remaining: CountResult = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM crew_members WHERE access_code = 'MDB001'",
    )
    .get_result(&mut conn)
    .unwrap();
    assert_eq!(remaining.count, 1);

    diesel::sql_query("DELETE FROM crew_members WHERE access_code = 'MDB001'")
        .execute(&mut conn)
        .unwrap();
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_asset_bytes_round_trip() {
    verify_mariadb_test_environment();
    let mut persistence = Persistence::new_with_mysql(&get_mariadb_url()).unwrap();
    let bytes: Vec<u8> = (0..=255u8).collect();

    let asset_id = persistence
        .store_asset(AssetKind::Twibbon, "frame.png", &bytes, "image/png")
        .unwrap();
    let asset = persistence
        .get_asset(AssetKind::Twibbon, asset_id)
        .unwrap()
        .unwrap();
    assert_eq!(asset.content, bytes);

    persistence.delete_asset(AssetKind::Twibbon, asset_id).unwrap();
}
