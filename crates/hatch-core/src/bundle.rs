//! Backup bundle exchanged by export and import.
//!
//! ```json
//! { "audits": [...], "settings": {...}, "locations": [...], "auditors": [...],
//!   "exportDate": "2026-03-01T10:00:00Z", "version": "1.0" }
//! ```
//!
//! On import every top-level section is optional. A present section replaces
//! the stored one wholesale; an absent section is left untouched.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AuditRecord, Auditor, Location, Settings};
use crate::errors::CoreError;

pub const BUNDLE_VERSION: &str = "1.0";

/// A full export of the managed data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub audits: Vec<AuditRecord>,
    pub settings: Settings,
    pub locations: Vec<Location>,
    pub auditors: Vec<Auditor>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// An import payload. Any subset of sections may be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportBundle {
    #[serde(default)]
    pub audits: Option<Vec<AuditRecord>>,
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
    #[serde(default)]
    pub auditors: Option<Vec<Auditor>>,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ImportBundle {
    /// Parse and validate a payload as a whole.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the text is not a JSON object, a
    /// section has the wrong shape, the major version is unsupported, the
    /// settings thresholds are unordered, or an audit's summary does not
    /// match its status.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| CoreError::Validation(format!("backup is not valid JSON: {e}")))?;
        if !value.is_object() {
            return Err(CoreError::Validation(
                "backup must be a JSON object".to_string(),
            ));
        }
        let bundle: Self = serde_json::from_value(value)
            .map_err(|e| CoreError::Validation(format!("backup has an invalid shape: {e}")))?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// # Errors
    ///
    /// See [`ImportBundle::parse`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(version) = &self.version {
            let major = version.split('.').next().unwrap_or_default();
            if major != "1" {
                return Err(CoreError::Validation(format!(
                    "unsupported backup version {version}"
                )));
            }
        }
        if let Some(settings) = &self.settings {
            settings.validate()?;
        }
        if let Some(audits) = &self.audits {
            if let Some(bad) = audits.iter().find(|a| !a.has_consistent_summary()) {
                return Err(CoreError::Validation(format!(
                    "audit {} has status {} but {} summary",
                    bad.id,
                    bad.status,
                    if bad.summary.is_some() { "carries a" } else { "no" }
                )));
            }
        }
        Ok(())
    }

    /// Whether no section would be replaced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.audits.is_none()
            && self.settings.is_none()
            && self.locations.is_none()
            && self.auditors.is_none()
    }
}

impl From<ExportBundle> for ImportBundle {
    fn from(bundle: ExportBundle) -> Self {
        Self {
            audits: Some(bundle.audits),
            settings: Some(bundle.settings),
            locations: Some(bundle.locations),
            auditors: Some(bundle.auditors),
            export_date: Some(bundle.export_date),
            version: Some(bundle.version),
        }
    }
}
