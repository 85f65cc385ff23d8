//! Key-value backends.
//!
//! Every document is stored as a JSON string under a fixed key (see
//! [`crate::keys`]). Two backends implement [`KeyValueStore`]: the durable
//! [`LibsqlStore`](crate::libsql_store::LibsqlStore) and the volatile
//! [`MemoryStore`](crate::memory::MemoryStore). [`open_store`] picks one at
//! startup by probing the durable backend.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use hatch_config::StorageConfig;
use hatch_core::enums::StorageBackendKind;
use tracing::{debug, warn};

use crate::error::DatabaseError;
use crate::keys;
use crate::libsql_store::LibsqlStore;
use crate::memory::MemoryStore;

/// Trait for key-value storage backends.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, DatabaseError>;

    /// Insert or replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), DatabaseError>;

    /// Whether data written here survives a restart.
    fn kind(&self) -> StorageBackendKind;
}

/// Write, read back, and remove a throwaway key.
///
/// # Errors
///
/// Returns `DatabaseError::Persistence` if the value does not read back, or
/// the backend's own error if any call fails.
pub async fn probe(store: &dyn KeyValueStore) -> Result<(), DatabaseError> {
    let token = "probe";
    store.set(keys::PROBE, token).await?;
    let read = store.get(keys::PROBE).await?;
    store.remove(keys::PROBE).await?;
    if read.as_deref() != Some(token) {
        return Err(DatabaseError::Persistence(format!(
            "probe value did not read back (got {read:?})"
        )));
    }
    Ok(())
}

/// Open the durable backend and probe it.
///
/// # Errors
///
/// Returns `DatabaseError` if the directory cannot be created, the database
/// cannot be opened, or the probe fails.
pub async fn open_durable(path: &Path) -> Result<LibsqlStore, DatabaseError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            DatabaseError::Persistence(format!("cannot create {}: {e}", parent.display()))
        })?;
    }
    let path_str = path.to_str().ok_or_else(|| {
        DatabaseError::Persistence(format!("database path is not UTF-8: {}", path.display()))
    })?;
    let store = LibsqlStore::open_local(path_str).await?;
    probe(&store).await?;
    Ok(store)
}

/// Select the backend for a project.
///
/// Tries the durable store first. If it cannot be opened or fails the probe
/// and `allow_volatile_fallback` is set, the in-memory store is used instead
/// and the degradation is logged; callers can see it via
/// [`KeyValueStore::kind`].
///
/// # Errors
///
/// Returns the durable backend's error when fallback is disabled.
pub async fn open_store(
    config: &StorageConfig,
    project_root: &Path,
) -> Result<Arc<dyn KeyValueStore>, DatabaseError> {
    let path = config.resolved_db_path(project_root);
    match open_durable(&path).await {
        Ok(store) => {
            debug!(path = %path.display(), kind = %store.kind(), "opened storage backend");
            Ok(Arc::new(store))
        }
        Err(e) if config.allow_volatile_fallback => {
            warn!(
                path = %path.display(),
                error = %e,
                "durable storage unavailable, using in-memory storage; data will not survive a restart"
            );
            Ok(Arc::new(MemoryStore::new()))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that accepts writes but never returns them.
    struct BlackHole;

    #[async_trait]
    impl KeyValueStore for BlackHole {
        async fn get(&self, _key: &str) -> Result<Option<String>, DatabaseError> {
            Ok(None)
        }
        async fn set(&self, _key: &str, _value: &str) -> Result<(), DatabaseError> {
            Ok(())
        }
        async fn remove(&self, _key: &str) -> Result<(), DatabaseError> {
            Ok(())
        }
        fn kind(&self) -> StorageBackendKind {
            StorageBackendKind::Durable
        }
    }

    #[tokio::test]
    async fn probe_passes_on_memory_store() {
        let store = MemoryStore::new();
        probe(&store).await.unwrap();
        assert_eq!(store.get(keys::PROBE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn probe_fails_when_value_is_lost() {
        let err = probe(&BlackHole).await.unwrap_err();
        assert!(err.is_persistence());
    }

    #[tokio::test]
    async fn open_store_uses_durable_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = StorageConfig::default();
        let store = open_store(&config, dir.path()).await.unwrap();
        assert_eq!(store.kind(), StorageBackendKind::Durable);
        assert!(dir.path().join(".hatchery/hatchery.db").exists());
    }

    #[tokio::test]
    async fn open_store_falls_back_to_memory() {
        let dir = tempfile::TempDir::new().unwrap();
        // A regular file where the database directory should be.
        std::fs::write(dir.path().join("blocked"), b"x").unwrap();
        let config = StorageConfig {
            db_path: "blocked/hatchery.db".into(),
            ..StorageConfig::default()
        };
        let store = open_store(&config, dir.path()).await.unwrap();
        assert_eq!(store.kind(), StorageBackendKind::Volatile);

        let strict = StorageConfig {
            allow_volatile_fallback: false,
            ..config
        };
        assert!(open_store(&strict, dir.path()).await.is_err());
    }
}
