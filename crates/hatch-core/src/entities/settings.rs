use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AuditFrequency;
use crate::errors::CoreError;

/// Business settings persisted alongside the audits.
///
/// Every field has a default, so partially-stored documents are merged with
/// defaults when deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub frequency: AuditFrequency,
    pub reminder_days_before: u32,
    pub scoring_thresholds: ScoringThresholds,
    pub default_auditor: String,
    pub auto_assign: bool,
    pub notifications: NotificationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frequency: AuditFrequency::Quarterly,
            reminder_days_before: 7,
            scoring_thresholds: ScoringThresholds::default(),
            default_auditor: String::new(),
            auto_assign: false,
            notifications: NotificationSettings::default(),
        }
    }
}

impl Settings {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the scoring thresholds are not ordered.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.scoring_thresholds.validate()
    }
}

/// Upper bounds of the environmental score buckets.
///
/// A total `<= good` is GOOD, `<= fair` is FAIR, anything higher is POOR.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringThresholds {
    pub good: u32,
    pub fair: u32,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self { good: 28, fair: 40 }
    }
}

impl ScoringThresholds {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` unless `good < fair`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.good >= self.fair {
            return Err(CoreError::Validation(format!(
                "scoring thresholds must satisfy good < fair (good = {}, fair = {})",
                self.good, self.fair
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub audit_due: bool,
    pub audit_completed: bool,
    pub critical_issues: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            audit_due: true,
            audit_completed: true,
            critical_issues: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_document_merges_with_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"reminderDaysBefore": 14, "scoringThresholds": {"good": 20}}"#)
                .unwrap();
        assert_eq!(settings.reminder_days_before, 14);
        assert_eq!(settings.scoring_thresholds, ScoringThresholds { good: 20, fair: 40 });
        assert_eq!(settings.frequency, AuditFrequency::Quarterly);
        assert!(settings.notifications.critical_issues);
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let settings = Settings {
            scoring_thresholds: ScoringThresholds { good: 40, fair: 40 },
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert!(Settings::default().validate().is_ok());
    }
}
