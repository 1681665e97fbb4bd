// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! and helper functions that cannot be expressed in backend-agnostic
//! Diesel DSL.
//!
//! ## Backend Support
//!
//! - `sqlite`: `SQLite` backend (default, always compiled)
//! - `mysql`: MySQL/MariaDB backend (compiled with the `mysql` feature)
//!
//! All queries and mutations live in `queries/` and `mutations/` and must
//! work across every supported backend.

#[cfg(feature = "mysql")]
pub mod mysql;
pub mod sqlite;

use diesel::{Connection, SqliteConnection};

use crate::error::PersistenceError;

/// Trait for backend-specific operations.
///
/// Implemented for each supported connection type so that query and
/// mutation bodies can be shared between backends.
pub trait PersistenceBackend: Connection {
    /// Retrieves the last inserted row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Verifies that crew access codes are protected by a unique index.
    ///
    /// Access code generation relies on the database to reject a duplicate
    /// that slipped past the existence check. This is a startup-time check
    /// that the index is actually there.
    ///
    /// # Errors
    ///
    /// Returns an error if the unique index is missing.
    fn verify_access_code_uniqueness(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }

    fn verify_access_code_uniqueness(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_access_code_uniqueness(self)
    }
}

#[cfg(feature = "mysql")]
impl PersistenceBackend for diesel::MysqlConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        mysql::get_last_insert_rowid(self)
    }

    fn verify_access_code_uniqueness(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_access_code_uniqueness(self)
    }
}
