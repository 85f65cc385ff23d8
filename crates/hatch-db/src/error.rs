//! Database error types for hatch-db.

use hatch_core::errors::CoreError;
use thiserror::Error;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The backing store failed to read or write.
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// Lookup of a record that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A backup payload is malformed or partially shaped.
    #[error("Import failed: {0}")]
    Import(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Invalid state encountered (bad stored data, disallowed transition).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Value could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Domain validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the failure came from the backing store rather than the data.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::LibSql(_) | Self::Migration(_))
    }
}
