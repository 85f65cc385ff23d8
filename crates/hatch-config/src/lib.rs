//! # hatch-config
//!
//! Layered configuration loading for the hatchery audit tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HATCHERY_*` prefix, `__` as separator)
//! 2. Project-level `.hatchery/config.toml`
//! 3. User-level `~/.config/hatchery/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HATCHERY_STORAGE__DB_PATH` -> `storage.db_path`,
//! `HATCHERY_WORKFLOW__INCUBATION_DAYS` -> `workflow.incubation_days`, etc.
//!
//! Business settings (audit frequency, scoring thresholds) are persisted
//! data, not configuration; they live in the store.
//!
//! # Usage
//!
//! ```no_run
//! use hatch_config::HatchConfig;
//!
//! let config = HatchConfig::load_with_dotenv().expect("config");
//! println!("quota: {} bytes", config.storage.quota_bytes);
//! ```

mod error;
mod general;
mod storage;
mod workflow;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::{DEFAULT_DB_PATH, StorageConfig};
pub use workflow::WorkflowConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project directory holding config and the database.
pub const PROJECT_DIR: &str = ".hatchery";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HatchConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HatchConfig {
    /// Load configuration from all sources, with the project file looked up
    /// in the current directory.
    ///
    /// Does NOT call `dotenvy`; use [`HatchConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with the project file looked up under `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain for the current directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HATCHERY_").split("__"))
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hatchery").join("config.toml"))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        self.workflow.validate()?;
        if !matches!(self.general.default_format.as_str(), "json" | "table" | "raw") {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!("unknown format '{}'", self.general.default_format),
            });
        }
        Ok(())
    }
}
