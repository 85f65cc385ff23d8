//! Settings document.

use hatch_core::entities::Settings;
use tracing::{info, warn};

use crate::error::DatabaseError;
use crate::keys;
use crate::service::AuditStore;

impl AuditStore {
    /// Stored settings merged with defaults. A corrupt document is logged
    /// and replaced by defaults on read.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` only if the backend itself fails.
    pub async fn get_settings(&self) -> Result<Settings, DatabaseError> {
        match self.read_json::<Settings>(keys::SETTINGS).await {
            Ok(settings) => Ok(settings.unwrap_or_default()),
            Err(DatabaseError::InvalidState(reason)) => {
                warn!(%reason, "stored settings are unreadable, using defaults");
                Ok(Settings::default())
            }
            Err(e) => Err(e),
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Core` if the thresholds are unordered, or the
    /// backend error if the write fails.
    pub async fn save_settings(&self, settings: &Settings) -> Result<(), DatabaseError> {
        settings.validate()?;
        self.write_json(keys::SETTINGS, settings).await?;
        info!("settings saved");
        Ok(())
    }
}
