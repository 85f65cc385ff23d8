//! Export, import, and full clear.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use hatch_core::bundle::{BUNDLE_VERSION, ExportBundle, ImportBundle};
use hatch_core::responses::ImportSummary;
use tracing::{info, warn};

use crate::error::DatabaseError;
use crate::keys;
use crate::service::AuditStore;

impl AuditStore {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn export_all_data(&self) -> Result<ExportBundle, DatabaseError> {
        self.export_all_data_at(Utc::now()).await
    }

    /// Export every section with a fixed export timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn export_all_data_at(
        &self,
        export_date: DateTime<Utc>,
    ) -> Result<ExportBundle, DatabaseError> {
        Ok(ExportBundle {
            audits: self.get_all_audits().await?,
            settings: self.get_settings().await?,
            locations: self.get_locations().await?,
            auditors: self.get_auditors().await?,
            export_date,
            version: BUNDLE_VERSION.to_string(),
        })
    }

    /// Parse, validate, and apply a backup payload.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Import` if the payload is malformed, in which
    /// case nothing is written.
    pub async fn import_data(&self, payload: &str) -> Result<ImportSummary, DatabaseError> {
        let bundle = ImportBundle::parse(payload).map_err(|e| DatabaseError::Import(e.to_string()))?;
        self.import_bundle(&bundle).await
    }

    /// Replace every section present in `bundle`; absent sections are left
    /// untouched. The whole bundle is validated before the first write.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Import` for an invalid bundle, or the backend
    /// error if a write fails.
    pub async fn import_bundle(&self, bundle: &ImportBundle) -> Result<ImportSummary, DatabaseError> {
        bundle
            .validate()
            .map_err(|e| DatabaseError::Import(e.to_string()))?;
        if let Some(audits) = &bundle.audits {
            let mut seen = HashSet::new();
            if let Some(dup) = audits.iter().find(|a| !seen.insert(a.id.as_str())) {
                return Err(DatabaseError::Import(format!(
                    "duplicate audit id {}",
                    dup.id
                )));
            }
        }
        if bundle.is_empty() {
            warn!("import payload contained no known sections");
        }

        let mut summary = ImportSummary::default();
        if let Some(audits) = &bundle.audits {
            self.write_json(keys::AUDITS, audits).await?;
            summary.audits = Some(count(audits.len()));
        }
        if let Some(settings) = &bundle.settings {
            self.write_json(keys::SETTINGS, settings).await?;
            summary.settings = true;
        }
        if let Some(locations) = &bundle.locations {
            self.save_locations(locations).await?;
            summary.locations = Some(count(locations.len()));
        }
        if let Some(auditors) = &bundle.auditors {
            self.save_auditors(auditors).await?;
            summary.auditors = Some(count(auditors.len()));
        }
        info!(?summary, "data imported");
        Ok(summary)
    }

    /// Remove every managed key, including the draft slot.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn clear_all_data(&self) -> Result<(), DatabaseError> {
        for key in keys::MANAGED {
            self.remove_key(key).await?;
        }
        info!("all data cleared");
        Ok(())
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
