use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A hatchery site offered in the audit location picker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// A person who can conduct audits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Auditor {
    pub id: String,
    pub name: String,
    pub role: String,
}
