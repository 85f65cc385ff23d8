//! Entity structs for the hatchery audit domain.
//!
//! Every entity serializes with `camelCase` field names so that the storage
//! bundle keeps its external shape (`auditNumber`, `exportDate`, ...). All
//! structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod audit;
mod reference;
mod sample;
mod settings;
mod summary;

pub use audit::{AuditInfo, AuditRecord, EquipmentItem, Incubation, Techniques, VaccineStorage};
pub use reference::{Auditor, Location};
pub use sample::{Sample, SampleSet};
pub use settings::{NotificationSettings, ScoringThresholds, Settings};
pub use summary::{AuditSummary, CriticalIssue, EnvironmentalResult, GroupSums, SectionScore};
