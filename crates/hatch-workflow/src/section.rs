//! Wholesale replacement of one audit sub-document.

use hatch_core::entities::{
    AuditInfo, AuditRecord, EquipmentItem, Incubation, SampleSet, Techniques, VaccineStorage,
};
use hatch_core::enums::AuditSection;
use hatch_core::errors::CoreError;

/// New content for one section of the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Info(AuditInfo),
    VaccineStorage(VaccineStorage),
    Equipment(Vec<EquipmentItem>),
    Techniques(Techniques),
    Samples(SampleSet),
    Incubation(Incubation),
}

impl SectionUpdate {
    /// Decode a section document as it appears inside an audit record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `value` does not have the shape of
    /// `section`.
    pub fn from_json(section: AuditSection, value: serde_json::Value) -> Result<Self, CoreError> {
        let invalid = |e: serde_json::Error| {
            CoreError::Validation(format!("invalid {section} section: {e}"))
        };
        Ok(match section {
            AuditSection::Info => Self::Info(serde_json::from_value(value).map_err(invalid)?),
            AuditSection::VaccineStorage => {
                Self::VaccineStorage(serde_json::from_value(value).map_err(invalid)?)
            }
            AuditSection::Equipment => {
                Self::Equipment(serde_json::from_value(value).map_err(invalid)?)
            }
            AuditSection::Techniques => {
                Self::Techniques(serde_json::from_value(value).map_err(invalid)?)
            }
            AuditSection::Samples => Self::Samples(serde_json::from_value(value).map_err(invalid)?),
            AuditSection::Incubation => {
                Self::Incubation(serde_json::from_value(value).map_err(invalid)?)
            }
        })
    }

    #[must_use]
    pub const fn section(&self) -> AuditSection {
        match self {
            Self::Info(_) => AuditSection::Info,
            Self::VaccineStorage(_) => AuditSection::VaccineStorage,
            Self::Equipment(_) => AuditSection::Equipment,
            Self::Techniques(_) => AuditSection::Techniques,
            Self::Samples(_) => AuditSection::Samples,
            Self::Incubation(_) => AuditSection::Incubation,
        }
    }

    pub(crate) fn apply(self, record: &mut AuditRecord) {
        match self {
            Self::Info(info) => record.info = info,
            Self::VaccineStorage(storage) => record.vaccine_storage = storage,
            Self::Equipment(items) => record.equipment = items,
            Self::Techniques(techniques) => record.techniques = techniques,
            Self::Samples(samples) => record.samples = samples,
            Self::Incubation(incubation) => record.incubation = incubation,
        }
    }
}
