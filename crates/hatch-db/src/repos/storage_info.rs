//! Storage usage telemetry.

use hatch_core::enums::StorageBackendKind;
use hatch_core::responses::{KeyUsage, StorageInfo};

use crate::error::DatabaseError;
use crate::keys;
use crate::service::AuditStore;

impl AuditStore {
    /// Bytes used by the managed keys against the configured quota.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn storage_info(&self) -> Result<StorageInfo, DatabaseError> {
        let mut usage = Vec::new();
        for key in keys::MANAGED {
            if let Some(value) = self.backend().get(key).await? {
                usage.push(KeyUsage {
                    key: key.to_string(),
                    bytes: (key.len() + value.len()) as u64,
                });
            }
        }
        let total_bytes: u64 = usage.iter().map(|k| k.bytes).sum();

        let options = self.options();
        #[allow(clippy::cast_precision_loss)]
        let raw = total_bytes as f64 / options.quota_bytes.max(1) as f64 * 100.0;
        let percent_used = (raw * 10.0).round() / 10.0;

        Ok(StorageInfo {
            backend: self.kind(),
            total_bytes,
            quota_bytes: options.quota_bytes,
            percent_used,
            is_near_limit: percent_used > f64::from(options.near_limit_percent),
            using_memory_storage: self.kind() == StorageBackendKind::Volatile,
            keys: usage,
        })
    }
}
