//! Response shapes returned by the persistence layer and rendered by `hatch`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StorageBackendKind;

/// Storage usage against the assumed quota.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    pub backend: StorageBackendKind,
    /// Bytes of keys plus serialized values across managed keys.
    pub total_bytes: u64,
    pub quota_bytes: u64,
    /// Rounded to one decimal.
    pub percent_used: f64,
    pub is_near_limit: bool,
    /// True when running on the volatile fallback; data will not survive a restart.
    pub using_memory_storage: bool,
    pub keys: Vec<KeyUsage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyUsage {
    pub key: String,
    pub bytes: u64,
}

/// Aggregates over finalized (completed or approved) audits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditStatistics {
    pub total_audits: u32,
    pub completed_audits: u32,
    /// Mean environmental score, 0 when nothing is finalized.
    pub average_score: f64,
    pub good_count: u32,
    pub fair_count: u32,
    pub poor_count: u32,
    pub last_audit_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub overdue: bool,
}

/// `{success, error?}` envelope for mutations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationResult {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

impl<T, E: std::fmt::Display> From<&Result<T, E>> for OperationResult {
    fn from(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::failed(e),
        }
    }
}

/// Sections replaced by an import.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Number of audits written, when the audit section was present.
    pub audits: Option<u32>,
    pub settings: bool,
    pub locations: Option<u32>,
    pub auditors: Option<u32>,
}
