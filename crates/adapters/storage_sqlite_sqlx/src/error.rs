//! Failures of the `SQLite` adapter, surfaced to the core as
//! [`RosterError::Storage`].

use std::num::TryFromIntError;

use roster_domain::error::RosterError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("could not apply schema migrations")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An aggregate came back negative or too large for its domain type.
    #[error("aggregate out of range")]
    OutOfRange(#[from] TryFromIntError),
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
