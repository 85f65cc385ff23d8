//! Durable libSQL backend.

use async_trait::async_trait;
use chrono::Utc;
use hatch_core::enums::StorageBackendKind;
use libsql::Builder;
use tracing::debug;

use crate::error::DatabaseError;
use crate::store::KeyValueStore;

/// Key-value store over a single `kv_store` table.
///
/// A path of `":memory:"` opens an in-process database, which is reported
/// as volatile.
pub struct LibsqlStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    kind: StorageBackendKind,
}

impl LibsqlStore {
    /// Open a local database at the given path. Runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let kind = if path == ":memory:" {
            StorageBackendKind::Volatile
        } else {
            StorageBackendKind::Durable
        };
        let store = Self { db, conn, kind };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[async_trait]
impl KeyValueStore for LibsqlStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT value FROM kv_store WHERE key = ?1", [key])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        debug!(key, bytes = value.len(), "kv set");
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                libsql::params![key, value, Utc::now().to_rfc3339()],
            )
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DatabaseError> {
        debug!(key, "kv remove");
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .await?;
        Ok(())
    }

    fn kind(&self) -> StorageBackendKind {
        self.kind
    }
}
