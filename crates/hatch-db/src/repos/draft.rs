//! Single-slot storage for the audit being edited.

use hatch_core::entities::AuditRecord;
use tracing::debug;

use crate::error::DatabaseError;
use crate::keys;
use crate::service::AuditStore;

impl AuditStore {
    /// Replace the draft slot.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails.
    pub async fn save_current_audit(&self, record: &AuditRecord) -> Result<(), DatabaseError> {
        self.write_json(keys::CURRENT_AUDIT, record).await?;
        debug!(id = %record.id, step = %record.current_step, "draft saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails or the slot is corrupt.
    pub async fn get_current_audit(&self) -> Result<Option<AuditRecord>, DatabaseError> {
        self.read_json(keys::CURRENT_AUDIT).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn clear_current_audit(&self) -> Result<(), DatabaseError> {
        self.remove_key(keys::CURRENT_AUDIT).await?;
        debug!("draft slot cleared");
        Ok(())
    }
}
