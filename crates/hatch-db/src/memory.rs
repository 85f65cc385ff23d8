//! Volatile in-memory backend.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use hatch_core::enums::StorageBackendKind;

use crate::error::DatabaseError;
use crate::store::KeyValueStore;

/// In-memory key-value store. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(e: impl std::fmt::Display) -> DatabaseError {
    DatabaseError::Persistence(format!("memory store lock poisoned: {e}"))
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DatabaseError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn kind(&self) -> StorageBackendKind {
        StorageBackendKind::Volatile
    }
}
