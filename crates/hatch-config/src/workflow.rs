//! Audit workflow configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_true() -> bool {
    true
}

const fn default_incubation_days() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Block forward navigation and completion on step validation issues.
    #[serde(default = "default_true")]
    pub enforce_step_validation: bool,

    /// Days between incubation start and the expected read-out.
    #[serde(default = "default_incubation_days")]
    pub incubation_days: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            enforce_step_validation: true,
            incubation_days: default_incubation_days(),
        }
    }
}

impl WorkflowConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero incubation period.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.incubation_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "workflow.incubation_days".into(),
                reason: "must be at least one day".into(),
            });
        }
        Ok(())
    }
}
