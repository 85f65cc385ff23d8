//! Persistence backend configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Database file used when `db_path` is empty, relative to the project root.
pub const DEFAULT_DB_PATH: &str = ".hatchery/hatchery.db";

const fn default_quota_bytes() -> u64 {
    5 * 1024 * 1024
}

const fn default_near_limit_percent() -> u8 {
    80
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Durable database path. Empty means [`DEFAULT_DB_PATH`]; `:memory:`
    /// opens an in-process libSQL database.
    #[serde(default)]
    pub db_path: String,

    /// Assumed storage quota used for usage telemetry.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,

    /// Usage percentage above which storage is reported as near its limit.
    #[serde(default = "default_near_limit_percent")]
    pub near_limit_percent: u8,

    /// Fall back to the in-memory store when the durable one fails its probe.
    #[serde(default = "default_true")]
    pub allow_volatile_fallback: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: String::new(),
            quota_bytes: default_quota_bytes(),
            near_limit_percent: default_near_limit_percent(),
            allow_volatile_fallback: true,
        }
    }
}

impl StorageConfig {
    /// Database path resolved against `project_root`.
    #[must_use]
    pub fn resolved_db_path(&self, project_root: &Path) -> PathBuf {
        if self.db_path == ":memory:" {
            return PathBuf::from(":memory:");
        }
        let path = if self.db_path.is_empty() {
            Path::new(DEFAULT_DB_PATH)
        } else {
            Path::new(&self.db_path)
        };
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero quota or a threshold
    /// outside 1-100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quota_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.quota_bytes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.near_limit_percent == 0 || self.near_limit_percent > 100 {
            return Err(ConfigError::InvalidValue {
                field: "storage.near_limit_percent".into(),
                reason: format!("{} is outside 1-100", self.near_limit_percent),
            });
        }
        Ok(())
    }
}
