//! Service layer over the key-value backend.
//!
//! `AuditStore` wraps an injected [`KeyValueStore`] and the storage options.
//! All repository methods are implemented as `impl AuditStore` blocks in
//! [`crate::repos`].

use std::path::Path;
use std::sync::Arc;

use hatch_config::StorageConfig;
use hatch_core::enums::StorageBackendKind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::DatabaseError;
use crate::keys;
use crate::memory::MemoryStore;
use crate::store::{KeyValueStore, open_store};

/// Storage telemetry knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub quota_bytes: u64,
    pub near_limit_percent: u8,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::from(&StorageConfig::default())
    }
}

impl From<&StorageConfig> for StoreOptions {
    fn from(config: &StorageConfig) -> Self {
        Self {
            quota_bytes: config.quota_bytes,
            near_limit_percent: config.near_limit_percent,
        }
    }
}

/// Persistence manager for audits, the draft slot, settings, and reference data.
pub struct AuditStore {
    backend: Arc<dyn KeyValueStore>,
    options: StoreOptions,
    /// Serializes audit-number allocation within this process.
    pub(crate) id_lock: Mutex<()>,
}

impl AuditStore {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>, options: StoreOptions) -> Self {
        Self {
            backend,
            options,
            id_lock: Mutex::new(()),
        }
    }

    /// Open the configured backend for a project, falling back to memory
    /// when allowed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if no backend can be opened.
    pub async fn open(config: &StorageConfig, project_root: &Path) -> Result<Self, DatabaseError> {
        let backend = open_store(config, project_root).await?;
        Ok(Self::new(backend, StoreOptions::from(config)))
    }

    /// Volatile store with default options (for tests and dry runs).
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), StoreOptions::default())
    }

    #[must_use]
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> StoreOptions {
        self.options
    }

    #[must_use]
    pub fn kind(&self) -> StorageBackendKind {
        self.backend.kind()
    }

    /// True when writes will not survive a restart.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.kind() == StorageBackendKind::Volatile
    }

    /// Read and decode a JSON document.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, DatabaseError> {
        let Some(text) = self.backend.get(key).await? else {
            return Ok(None);
        };
        debug!(key, bytes = text.len(), "kv read");
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| DatabaseError::InvalidState(format!("corrupt value under {key}: {e}")))
    }

    /// Encode and write a JSON document, then stamp the last-updated key.
    pub(crate) async fn write_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), DatabaseError> {
        let text = serde_json::to_string(value)?;
        self.backend.set(key, &text).await?;
        self.touch_last_updated().await
    }

    pub(crate) async fn remove_key(&self, key: &str) -> Result<(), DatabaseError> {
        self.backend.remove(key).await
    }

    async fn touch_last_updated(&self) -> Result<(), DatabaseError> {
        let now = serde_json::to_string(&chrono::Utc::now())?;
        self.backend.set(keys::LAST_UPDATED, &now).await
    }
}
