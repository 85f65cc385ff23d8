//! Audit repository: the list of persisted audit records.

use chrono::Utc;
use hatch_core::entities::AuditRecord;
use hatch_core::enums::AuditStatus;
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::keys;
use crate::service::AuditStore;

impl AuditStore {
    /// All persisted audits in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails or the stored list is corrupt.
    pub async fn get_all_audits(&self) -> Result<Vec<AuditRecord>, DatabaseError> {
        Ok(self
            .read_json::<Vec<AuditRecord>>(keys::AUDITS)
            .await?
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no audit has this id.
    pub async fn get_audit(&self, id: &str) -> Result<AuditRecord, DatabaseError> {
        self.get_all_audits()
            .await?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| DatabaseError::not_found("audit", id))
    }

    /// Upsert by id. Stamps `updated_at`. `created_at` is taken from the
    /// record on first insert and from the stored copy on update. Returns the
    /// record as stored.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the summary/issues presence
    /// does not match the status, or the backend error if the write fails.
    pub async fn save_audit(&self, record: &AuditRecord) -> Result<AuditRecord, DatabaseError> {
        if !record.has_consistent_summary() {
            return Err(DatabaseError::InvalidState(format!(
                "audit {} has status {} but its summary does not match",
                record.id, record.status
            )));
        }

        let mut audits = self.get_all_audits().await?;
        let now = Utc::now();
        let mut stored = record.clone();
        stored.updated_at = now;

        if let Some(slot) = audits.iter_mut().find(|a| a.id == record.id) {
            stored.created_at = slot.created_at;
            *slot = stored.clone();
            debug!(id = %stored.id, "audit updated");
        } else {
            audits.push(stored.clone());
            info!(id = %stored.id, number = %stored.audit_number, "audit saved");
        }

        self.write_json(keys::AUDITS, &audits).await?;
        Ok(stored)
    }

    /// Delete a persisted audit. If the draft slot holds the same id it is
    /// cleared as well.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no audit has this id.
    pub async fn delete_audit(&self, id: &str) -> Result<(), DatabaseError> {
        let mut audits = self.get_all_audits().await?;
        let before = audits.len();
        audits.retain(|a| a.id != id);
        if audits.len() == before {
            return Err(DatabaseError::not_found("audit", id));
        }
        self.write_json(keys::AUDITS, &audits).await?;

        if self
            .get_current_audit()
            .await?
            .is_some_and(|draft| draft.id == id)
        {
            self.clear_current_audit().await?;
        }
        info!(id, "audit deleted");
        Ok(())
    }

    /// Move a completed audit to approved.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown id and
    /// `DatabaseError::InvalidState` unless the audit is completed.
    pub async fn approve_audit(&self, id: &str) -> Result<AuditRecord, DatabaseError> {
        let mut record = self.get_audit(id).await?;
        if !record.status.can_transition_to(AuditStatus::Approved) {
            return Err(DatabaseError::InvalidState(format!(
                "audit {id} cannot be approved from {}",
                record.status
            )));
        }
        record.status = AuditStatus::Approved;
        let stored = self.save_audit(&record).await?;
        info!(id, "audit approved");
        Ok(stored)
    }
}
