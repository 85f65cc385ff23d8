//! Completion summary and overall status.

use hatch_core::entities::{AuditRecord, AuditSummary, EnvironmentalResult, ScoringThresholds, SectionScore};
use hatch_core::enums::{ComplianceClass, EnvironmentalClass, OverallStatus};

use crate::compliance::{EXCELLENT_MIN, equipment_score, techniques_score, vaccine_storage_score};
use crate::environmental::{classify_environmental_score, environmental_breakdown};

/// Combine section classifications with the environmental verdict.
///
/// POOR if anything is POOR, else FAIR if anything is FAIR, else EXCELLENT
/// when the mean section percentage reaches 95, otherwise GOOD.
#[must_use]
pub fn overall_status(sections: &[SectionScore; 3], environmental: EnvironmentalClass) -> OverallStatus {
    let any = |class: ComplianceClass| sections.iter().any(|s| s.classification == class);

    if environmental == EnvironmentalClass::Poor || any(ComplianceClass::Poor) {
        return ComplianceClass::Poor;
    }
    if environmental == EnvironmentalClass::Fair || any(ComplianceClass::Fair) {
        return ComplianceClass::Fair;
    }
    let sum: u32 = sections.iter().map(|s| u32::from(s.percentage)).sum();
    if sum >= u32::from(EXCELLENT_MIN) * 3 {
        ComplianceClass::Excellent
    } else {
        ComplianceClass::Good
    }
}

/// Score every section of a record.
#[must_use]
pub fn audit_summary(record: &AuditRecord, thresholds: &ScoringThresholds) -> AuditSummary {
    let vaccine_storage = vaccine_storage_score(&record.vaccine_storage);
    let equipment = equipment_score(&record.equipment);
    let techniques = techniques_score(&record.techniques);

    let groups = environmental_breakdown(&record.samples);
    let score = groups.weighted_total();
    let classification = classify_environmental_score(score, thresholds);

    AuditSummary {
        vaccine_storage,
        equipment,
        techniques,
        environmental: EnvironmentalResult {
            score,
            classification,
            groups,
        },
        overall_status: overall_status(&[vaccine_storage, equipment, techniques], classification),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::compliance_classification;
    use pretty_assertions::assert_eq;

    fn section(percentage: u8) -> SectionScore {
        SectionScore {
            passed_count: 0,
            total_count: 0,
            percentage,
            classification: compliance_classification(percentage),
        }
    }

    #[test]
    fn poor_environment_dominates() {
        let sections = [section(100), section(100), section(100)];
        assert_eq!(overall_status(&sections, EnvironmentalClass::Poor), ComplianceClass::Poor);
    }

    #[test]
    fn poor_section_dominates_fair() {
        let sections = [section(100), section(60), section(80)];
        assert_eq!(overall_status(&sections, EnvironmentalClass::Fair), ComplianceClass::Poor);
    }

    #[test]
    fn fair_anywhere_caps_at_fair() {
        let sections = [section(100), section(100), section(80)];
        assert_eq!(overall_status(&sections, EnvironmentalClass::Good), ComplianceClass::Fair);
        let sections = [section(100), section(100), section(100)];
        assert_eq!(overall_status(&sections, EnvironmentalClass::Fair), ComplianceClass::Fair);
    }

    #[test]
    fn average_decides_excellent_or_good() {
        let sections = [section(100), section(90), section(95)];
        assert_eq!(overall_status(&sections, EnvironmentalClass::Good), ComplianceClass::Excellent);
        let sections = [section(100), section(88), section(95)];
        assert_eq!(overall_status(&sections, EnvironmentalClass::Good), ComplianceClass::Good);
    }
}
