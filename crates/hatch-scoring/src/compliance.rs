//! Checklist compliance scores.

use hatch_core::entities::{EquipmentItem, SectionScore, Techniques, VaccineStorage};
use hatch_core::enums::ComplianceClass;

pub const EXCELLENT_MIN: u8 = 95;
pub const GOOD_MIN: u8 = 85;
pub const FAIR_MIN: u8 = 75;

/// Minimum tray coverage, percent.
pub const TRAY_COVERAGE_MIN: f64 = 90.0;
/// Minimum share of accurate injections, percent.
pub const INJECTION_ACCURACY_MIN: f64 = 95.0;
/// Maximum bleeding or wet-neck rate, percent.
pub const INJECTION_DEFECT_MAX: f64 = 5.0;

/// `round(100 × passed / total)`, half rounding up; 0 when `total` is 0.
#[must_use]
pub fn compliance_percentage(passed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let passed = u64::from(passed.min(total));
    let total = u64::from(total);
    u8::try_from((passed * 200 + total) / (total * 2)).unwrap_or(100)
}

#[must_use]
pub const fn compliance_classification(percentage: u8) -> ComplianceClass {
    if percentage >= EXCELLENT_MIN {
        ComplianceClass::Excellent
    } else if percentage >= GOOD_MIN {
        ComplianceClass::Good
    } else if percentage >= FAIR_MIN {
        ComplianceClass::Fair
    } else {
        ComplianceClass::Poor
    }
}

fn section_score(passed: u32, total: u32) -> SectionScore {
    let percentage = compliance_percentage(passed, total);
    SectionScore {
        passed_count: passed,
        total_count: total,
        percentage,
        classification: compliance_classification(percentage),
    }
}

fn count_passed(checks: &[bool]) -> u32 {
    u32::try_from(checks.iter().filter(|c| **c).count()).unwrap_or(u32::MAX)
}

#[must_use]
pub fn vaccine_storage_score(storage: &VaccineStorage) -> SectionScore {
    let checks = storage.checklist();
    section_score(count_passed(&checks), 6)
}

/// Five condition items per device, pooled across all devices.
/// No equipment scores 0 % and POOR.
#[must_use]
pub fn equipment_score(equipment: &[EquipmentItem]) -> SectionScore {
    let (passed, total) = equipment.iter().fold((0u32, 0u32), |(p, t), item| {
        (p + count_passed(&item.checklist()), t + 5)
    });
    section_score(passed, total)
}

/// Seven preparation items plus five quality gates. Missing defect rates
/// pass; missing coverage and accuracy fail.
#[must_use]
pub fn techniques_score(techniques: &Techniques) -> SectionScore {
    let gates = quality_gates(techniques);
    let passed = count_passed(&techniques.preparation_checklist()) + count_passed(&gates);
    section_score(passed, 7 + 5)
}

/// Spray uniformity, tray coverage, injection accuracy, bleeding, wet neck.
#[must_use]
pub fn quality_gates(techniques: &Techniques) -> [bool; 5] {
    [
        techniques
            .droplet_uniformity
            .is_some_and(|d| d.is_acceptable()),
        techniques.tray_coverage.unwrap_or(0.0) >= TRAY_COVERAGE_MIN,
        techniques.accurate_injection_percent.unwrap_or(0.0) >= INJECTION_ACCURACY_MIN,
        techniques.bleeding_percent.unwrap_or(0.0) <= INJECTION_DEFECT_MAX,
        techniques.wet_neck_percent.unwrap_or(0.0) <= INJECTION_DEFECT_MAX,
    ]
}
