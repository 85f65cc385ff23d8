use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::sample::SampleSet;
use super::summary::{AuditSummary, CriticalIssue};
use crate::enums::{AuditStatus, AuditStep, AuditType, DropletUniformity, EquipmentType};

/// One hatchery vaccination audit, from draft to finalized record.
///
/// `summary` and `issues` are attached when the audit is completed and must
/// be absent before that (see [`AuditRecord::has_consistent_summary`]).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: String,
    /// Human-readable number, `HA-YYYYMMDD-SEQ`.
    pub audit_number: String,
    pub status: AuditStatus,
    /// Only meaningful while the audit is still a draft.
    pub current_step: AuditStep,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub info: AuditInfo,
    pub vaccine_storage: VaccineStorage,
    pub equipment: Vec<EquipmentItem>,
    pub techniques: Techniques,
    #[serde(default)]
    pub incubation: Incubation,
    pub samples: SampleSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<AuditSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<CriticalIssue>>,
}

impl AuditRecord {
    /// A fresh draft positioned on the first step with empty sections.
    #[must_use]
    pub fn new_draft(
        id: impl Into<String>,
        audit_number: impl Into<String>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            audit_number: audit_number.into(),
            status: AuditStatus::Draft,
            current_step: AuditStep::Info,
            created_at: now,
            updated_at: now,
            completed_at: None,
            info: AuditInfo::on(date),
            vaccine_storage: VaccineStorage::default(),
            equipment: Vec::new(),
            techniques: Techniques::default(),
            incubation: Incubation::default(),
            samples: SampleSet::default(),
            summary: None,
            issues: None,
        }
    }

    /// `summary`/`issues` are present exactly when the record is finalized.
    #[must_use]
    pub const fn has_consistent_summary(&self) -> bool {
        let finalized = self.status.is_finalized();
        finalized == self.summary.is_some() && finalized == self.issues.is_some()
    }
}

/// General information captured on the first step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditInfo {
    pub date: NaiveDate,
    pub auditor: String,
    pub location: String,
    #[serde(rename = "type")]
    pub audit_type: AuditType,
    #[serde(default)]
    pub notes: String,
}

impl AuditInfo {
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            auditor: String::new(),
            location: String::new(),
            audit_type: AuditType::Scheduled,
            notes: String::new(),
        }
    }
}

/// Cold-chain checklist for the vaccine refrigerator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VaccineStorage {
    pub temperature_ok: bool,
    /// Reading in °C at the time of the audit.
    pub current_temperature: Option<f64>,
    pub temp_log_available: bool,
    pub vaccine_only: bool,
    pub fifo_followed: bool,
    pub proper_positioning: bool,
    pub clear_labeling: bool,
    pub notes: String,
    /// Opaque attachment references.
    pub photos: Vec<String>,
}

impl VaccineStorage {
    /// The six checklist items in report order.
    #[must_use]
    pub const fn checklist(&self) -> [bool; 6] {
        [
            self.temperature_ok,
            self.temp_log_available,
            self.vaccine_only,
            self.fifo_followed,
            self.proper_positioning,
            self.clear_labeling,
        ]
    }
}

/// A spray cabinet, vaccinator, or other device inspected during the audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentItem {
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub name: String,
    pub quantity: u32,
    pub last_service_date: Option<NaiveDate>,
    pub doses_available: Option<u32>,
    pub condition_good: bool,
    pub maintenance_current: bool,
    pub doses_sufficient: bool,
    pub cleaning_followed: bool,
    pub spare_parts_adequate: bool,
    pub notes: String,
}

impl EquipmentItem {
    /// The five condition items in report order.
    #[must_use]
    pub const fn checklist(&self) -> [bool; 5] {
        [
            self.condition_good,
            self.maintenance_current,
            self.doses_sufficient,
            self.cleaning_followed,
            self.spare_parts_adequate,
        ]
    }
}

/// Vaccine preparation checklist plus spray and injection quality metrics.
///
/// Percent fields are 0-100 and optional until measured.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Techniques {
    pub aseptic_technique: bool,
    pub hand_hygiene: bool,
    pub new_syringe: bool,
    pub correct_needle: bool,
    pub expiry_checked: bool,
    pub mixed_correctly: bool,
    pub records_maintained: bool,
    pub spray_sample_size: u32,
    pub droplet_uniformity: Option<DropletUniformity>,
    pub tray_coverage: Option<f64>,
    pub injection_sample_size: u32,
    pub accurate_injection_percent: Option<f64>,
    pub bleeding_percent: Option<f64>,
    pub wet_neck_percent: Option<f64>,
    pub no_vaccine_percent: Option<f64>,
    pub notes: String,
    pub videos: Vec<String>,
}

impl Techniques {
    /// The seven preparation items in report order.
    #[must_use]
    pub const fn preparation_checklist(&self) -> [bool; 7] {
        [
            self.aseptic_technique,
            self.hand_hygiene,
            self.new_syringe,
            self.correct_needle,
            self.expiry_checked,
            self.mixed_correctly,
            self.records_maintained,
        ]
    }
}

/// Incubation of the collected plates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Incubation {
    pub start: Option<DateTime<Utc>>,
    pub expected_end: Option<DateTime<Utc>>,
    pub temperature_c: f64,
    pub responsible_tech: String,
}

impl Default for Incubation {
    fn default() -> Self {
        Self {
            start: None,
            expected_end: None,
            temperature_c: 37.0,
            responsible_tech: String::new(),
        }
    }
}
