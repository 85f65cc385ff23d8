//! Status enums, workflow steps, location categories, and classification labels.
//!
//! Most enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Classification labels keep their upper-case report spelling and location
//! categories keep the short keys used in the storage bundle (`H`, `HV`, `M_CHICK`).
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AuditStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of an audit record.
///
/// ```text
/// draft → in_progress → samples_collected → incubating → results_pending → completed → approved
/// ```
///
/// Pre-completion statuses only move forward but may skip ahead, since the
/// workflow allows jumping between steps. Any pre-completion status may be
/// completed directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Draft,
    InProgress,
    SamplesCollected,
    Incubating,
    ResultsPending,
    Completed,
    Approved,
}

impl AuditStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[
                Self::InProgress,
                Self::SamplesCollected,
                Self::Incubating,
                Self::ResultsPending,
                Self::Completed,
            ],
            Self::InProgress => &[
                Self::SamplesCollected,
                Self::Incubating,
                Self::ResultsPending,
                Self::Completed,
            ],
            Self::SamplesCollected => &[Self::Incubating, Self::ResultsPending, Self::Completed],
            Self::Incubating => &[Self::ResultsPending, Self::Completed],
            Self::ResultsPending => &[Self::Completed],
            Self::Completed => &[Self::Approved],
            Self::Approved => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the record has been finalized (scored and frozen).
    #[must_use]
    pub const fn is_finalized(self) -> bool {
        matches!(self, Self::Completed | Self::Approved)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::SamplesCollected => "samples_collected",
            Self::Incubating => "incubating",
            Self::ResultsPending => "results_pending",
            Self::Completed => "completed",
            Self::Approved => "approved",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditStep
// ---------------------------------------------------------------------------

/// Ordered steps of the audit wizard.
///
/// ```text
/// info → vaccine_storage → equipment → techniques → sample_plan
///      → sample_collection → incubation → results → review
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AuditStep {
    Info,
    VaccineStorage,
    Equipment,
    Techniques,
    SamplePlan,
    SampleCollection,
    Incubation,
    Results,
    Review,
}

impl AuditStep {
    /// Every step in workflow order.
    pub const ALL: [Self; 9] = [
        Self::Info,
        Self::VaccineStorage,
        Self::Equipment,
        Self::Techniques,
        Self::SamplePlan,
        Self::SampleCollection,
        Self::Incubation,
        Self::Results,
        Self::Review,
    ];

    /// Zero-based position in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The following step, or `None` at the end of the workflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The preceding step, or `None` at the start of the workflow.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Lowest status a draft must have once it has reached this step.
    #[must_use]
    pub const fn status_floor(self) -> AuditStatus {
        match self {
            Self::Info => AuditStatus::Draft,
            Self::VaccineStorage
            | Self::Equipment
            | Self::Techniques
            | Self::SamplePlan
            | Self::SampleCollection => AuditStatus::InProgress,
            Self::Incubation => AuditStatus::SamplesCollected,
            Self::Results | Self::Review => AuditStatus::ResultsPending,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::VaccineStorage => "vaccine_storage",
            Self::Equipment => "equipment",
            Self::Techniques => "techniques",
            Self::SamplePlan => "sample_plan",
            Self::SampleCollection => "sample_collection",
            Self::Incubation => "incubation",
            Self::Results => "results",
            Self::Review => "review",
        }
    }
}

impl fmt::Display for AuditStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditSection
// ---------------------------------------------------------------------------

/// Sub-documents of an audit record that are replaced wholesale on edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditSection {
    Info,
    VaccineStorage,
    Equipment,
    Techniques,
    Samples,
    Incubation,
}

impl AuditSection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::VaccineStorage => "vaccine_storage",
            Self::Equipment => "equipment",
            Self::Techniques => "techniques",
            Self::Samples => "samples",
            Self::Incubation => "incubation",
        }
    }
}

impl fmt::Display for AuditSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditType
// ---------------------------------------------------------------------------

/// Whether an audit was part of the recurring calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditType {
    #[default]
    Scheduled,
    AdHoc,
}

impl AuditType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::AdHoc => "ad_hoc",
        }
    }
}

impl fmt::Display for AuditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SampleType
// ---------------------------------------------------------------------------

/// How an environmental sample is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SampleType {
    AirPlate,
    Swab,
}

impl SampleType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AirPlate => "air_plate",
            Self::Swab => "swab",
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ScoreGroup
// ---------------------------------------------------------------------------

/// Aggregation groups of the environmental score formula.
///
/// `total = 2 × (H + HV + HHV + GV) + S + M`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ScoreGroup {
    #[serde(rename = "H")]
    Hatchers,
    #[serde(rename = "HV")]
    HatcherVentilation,
    #[serde(rename = "HHV")]
    Hallways,
    #[serde(rename = "GV")]
    Fans,
    #[serde(rename = "S")]
    Setters,
    #[serde(rename = "M")]
    Miscellaneous,
}

impl ScoreGroup {
    /// Weight applied to the group sum. High-risk hatching zones count double.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Hatchers | Self::HatcherVentilation | Self::Hallways | Self::Fans => 2,
            Self::Setters | Self::Miscellaneous => 1,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hatchers => "H",
            Self::HatcherVentilation => "HV",
            Self::Hallways => "HHV",
            Self::Fans => "GV",
            Self::Setters => "S",
            Self::Miscellaneous => "M",
        }
    }
}

impl fmt::Display for ScoreGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// LocationCategory
// ---------------------------------------------------------------------------

/// Fixed hatchery zones sampled during an audit.
///
/// Declaration order is the sampling plan order; the derived `Ord` keeps
/// sample maps in that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum LocationCategory {
    #[serde(rename = "H")]
    Hatchers,
    #[serde(rename = "S")]
    Setters,
    #[serde(rename = "HV")]
    HatcherVentilation,
    #[serde(rename = "SV")]
    SetterTop,
    #[serde(rename = "HHV")]
    Hallways,
    #[serde(rename = "GV")]
    Fans,
    #[serde(rename = "M_CHICK")]
    ChickRoom,
    #[serde(rename = "M_COLD")]
    ColdRoom,
    #[serde(rename = "M_VACCINE")]
    VaccineRoom,
    #[serde(rename = "M_CANDLING")]
    CandlingMachine,
    #[serde(rename = "CONTROL")]
    Control,
}

impl LocationCategory {
    /// Every category in sampling plan order.
    pub const ALL: [Self; 11] = [
        Self::Hatchers,
        Self::Setters,
        Self::HatcherVentilation,
        Self::SetterTop,
        Self::Hallways,
        Self::Fans,
        Self::ChickRoom,
        Self::ColdRoom,
        Self::VaccineRoom,
        Self::CandlingMachine,
        Self::Control,
    ];

    /// Key used in the sample map and in sample ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hatchers => "H",
            Self::Setters => "S",
            Self::HatcherVentilation => "HV",
            Self::SetterTop => "SV",
            Self::Hallways => "HHV",
            Self::Fans => "GV",
            Self::ChickRoom => "M_CHICK",
            Self::ColdRoom => "M_COLD",
            Self::VaccineRoom => "M_VACCINE",
            Self::CandlingMachine => "M_CANDLING",
            Self::Control => "CONTROL",
        }
    }

    /// Location code printed on plates and swabs. Miscellaneous rooms share `M`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hatchers => "H",
            Self::Setters => "S",
            Self::HatcherVentilation => "HV",
            Self::SetterTop => "SV",
            Self::Hallways => "HHV",
            Self::Fans => "GV",
            Self::ChickRoom | Self::ColdRoom | Self::VaccineRoom | Self::CandlingMachine => "M",
            Self::Control => "#",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hatchers => "Hatchers",
            Self::Setters => "Setters",
            Self::HatcherVentilation => "Hatcher Ventilation",
            Self::SetterTop => "Setter Top",
            Self::Hallways => "Hallways",
            Self::Fans => "Fans",
            Self::ChickRoom => "Chick Room",
            Self::ColdRoom => "Cold Room",
            Self::VaccineRoom => "Vaccine Room",
            Self::CandlingMachine => "Candling Machine",
            Self::Control => "Control",
        }
    }

    /// Number of sampling points in the default plan.
    #[must_use]
    pub const fn default_count(self) -> usize {
        match self {
            Self::Hatchers | Self::Setters => 5,
            Self::SetterTop | Self::Hallways | Self::Fans => 4,
            Self::HatcherVentilation | Self::CandlingMachine => 2,
            Self::ChickRoom | Self::ColdRoom | Self::VaccineRoom | Self::Control => 1,
        }
    }

    #[must_use]
    pub const fn sample_type(self) -> SampleType {
        match self {
            Self::HatcherVentilation | Self::SetterTop | Self::Fans | Self::CandlingMachine => {
                SampleType::Swab
            }
            Self::Hatchers
            | Self::Setters
            | Self::Hallways
            | Self::ChickRoom
            | Self::ColdRoom
            | Self::VaccineRoom
            | Self::Control => SampleType::AirPlate,
        }
    }

    /// Environmental score group, or `None` for zones outside the formula
    /// (setter tops and the control plate).
    #[must_use]
    pub const fn score_group(self) -> Option<ScoreGroup> {
        match self {
            Self::Hatchers => Some(ScoreGroup::Hatchers),
            Self::Setters => Some(ScoreGroup::Setters),
            Self::HatcherVentilation => Some(ScoreGroup::HatcherVentilation),
            Self::Hallways => Some(ScoreGroup::Hallways),
            Self::Fans => Some(ScoreGroup::Fans),
            Self::ChickRoom | Self::ColdRoom | Self::VaccineRoom | Self::CandlingMachine => {
                Some(ScoreGroup::Miscellaneous)
            }
            Self::SetterTop | Self::Control => None,
        }
    }

    /// Look up a category by its map key (case-insensitive).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// EnvironmentalClass
// ---------------------------------------------------------------------------

/// Verdict on the weighted environmental score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnvironmentalClass {
    Good,
    Fair,
    Poor,
}

impl EnvironmentalClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }
}

impl fmt::Display for EnvironmentalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComplianceClass
// ---------------------------------------------------------------------------

/// Rating of a checklist compliance percentage, also used for the overall
/// audit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceClass {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ComplianceClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }
}

impl fmt::Display for ComplianceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall audit verdict shares the compliance labels.
pub type OverallStatus = ComplianceClass;

// ---------------------------------------------------------------------------
// IssuePriority / IssueCategory
// ---------------------------------------------------------------------------

/// Priority of a detected critical issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssuePriority {
    Critical,
    High,
    Medium,
    Low,
}

impl IssuePriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit area a critical issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    VaccineStorage,
    Environmental,
    VaccinationTechniques,
}

impl IssueCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VaccineStorage => "vaccine_storage",
            Self::Environmental => "environmental",
            Self::VaccinationTechniques => "vaccination_techniques",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::VaccineStorage => "Vaccine Storage",
            Self::Environmental => "Environmental",
            Self::VaccinationTechniques => "Vaccination Techniques",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EquipmentType
// ---------------------------------------------------------------------------

/// Kind of vaccination equipment inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    SprayCabinet,
    PneumaticVaccinator,
    #[default]
    Other,
}

impl EquipmentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SprayCabinet => "spray_cabinet",
            Self::PneumaticVaccinator => "pneumatic_vaccinator",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DropletUniformity
// ---------------------------------------------------------------------------

/// Observed spray droplet uniformity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DropletUniformity {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl DropletUniformity {
    /// Whether the spray quality gate passes.
    #[must_use]
    pub const fn is_acceptable(self) -> bool {
        matches!(self, Self::Excellent | Self::Good)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for DropletUniformity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditFrequency
// ---------------------------------------------------------------------------

/// How often the audit calendar recurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditFrequency {
    Monthly,
    #[default]
    Quarterly,
    SemiAnnual,
    Annual,
}

impl AuditFrequency {
    /// Approximate interval between audits.
    #[must_use]
    pub const fn interval_days(self) -> i64 {
        match self {
            Self::Monthly => 30,
            Self::Quarterly => 90,
            Self::SemiAnnual => 182,
            Self::Annual => 365,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::SemiAnnual => "semi_annual",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for AuditFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StorageBackendKind
// ---------------------------------------------------------------------------

/// Which key-value backend is serving persistence calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackendKind {
    /// Survives a restart.
    Durable,
    /// In-memory only; data is lost when the process exits.
    Volatile,
}

impl StorageBackendKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Durable => "durable",
            Self::Volatile => "volatile",
        }
    }
}

impl fmt::Display for StorageBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
