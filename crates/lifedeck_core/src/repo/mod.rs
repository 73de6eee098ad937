//! Persistence layer: keyed storage and the record store on top of it.
//!
//! # Responsibility
//! - Define the injected key/value storage contract and its implementations.
//! - Provide seed-defaulting load and full-replace save for domain records.
//!
//! # Invariants
//! - Missing or malformed persisted data never surfaces as an error; the
//!   caller receives the domain seed default instead.
//! - Storage transport failures are surfaced as `RepoError`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv_store;
pub mod record_store;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer error for keyed storage operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode payload: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
