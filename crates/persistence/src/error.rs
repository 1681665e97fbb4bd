// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::DatabaseErrorKind;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// The unique index guarding crew access codes is missing.
    AccessCodeIndexMissing,
    /// An insert or update collided with an existing access code.
    DuplicateAccessCode(String),
    /// A uniqueness constraint other than the access code was violated.
    UniqueViolation(String),
    /// The requested crew member was not found.
    CrewNotFound(i64),
    /// The requested asset was not found.
    AssetNotFound { kind: String, asset_id: i64 },
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::AccessCodeIndexMissing => {
                write!(f, "Unique index on crew access codes is missing")
            }
            Self::DuplicateAccessCode(code) => {
                write!(f, "Access code '{code}' is already assigned")
            }
            Self::UniqueViolation(msg) => write!(f, "Uniqueness violated: {msg}"),
            Self::CrewNotFound(id) => write!(f, "Crew member {id} not found"),
            Self::AssetNotFound { kind, asset_id } => {
                write!(f, "Asset {kind}/{asset_id} not found")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_string())
            }
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl PersistenceError {
    /// Re-labels a uniqueness violation as an access code collision.
    ///
    /// `crew_members.access_code` is the only unique column on the table,
    /// so any violation raised by a crew insert or update is a collision.
    #[must_use]
    pub fn into_access_code_collision(self, code: &str) -> Self {
        match self {
            Self::UniqueViolation(_) => Self::DuplicateAccessCode(code.to_string()),
            other => other,
        }
    }
}
