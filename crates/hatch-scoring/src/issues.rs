//! Rule-based critical issue detection.
//!
//! Rules are independent; every rule that applies contributes an issue, in
//! the order storage, environmental, techniques.

use hatch_core::entities::{AuditRecord, CriticalIssue};
use hatch_core::enums::{IssueCategory, IssuePriority};

use crate::compliance::INJECTION_DEFECT_MAX;
use crate::plate::ASPERGILLUS_CRITICAL;

/// Acceptable refrigerator band, °C.
pub const STORAGE_TEMP_MIN: f64 = 2.0;
pub const STORAGE_TEMP_MAX: f64 = 8.0;

fn issue(
    category: IssueCategory,
    priority: IssuePriority,
    issue: impl Into<String>,
    recommendation: &str,
) -> CriticalIssue {
    CriticalIssue {
        category,
        priority,
        issue: issue.into(),
        recommendation: recommendation.to_string(),
    }
}

/// Whether the refrigerator is out of band. A recorded reading takes
/// precedence over the checklist item.
#[must_use]
pub fn temperature_out_of_range(record: &AuditRecord) -> bool {
    record.vaccine_storage.current_temperature.map_or(
        !record.vaccine_storage.temperature_ok,
        |t| !(STORAGE_TEMP_MIN..=STORAGE_TEMP_MAX).contains(&t),
    )
}

#[must_use]
pub fn critical_issues(record: &AuditRecord) -> Vec<CriticalIssue> {
    let mut issues = Vec::new();

    if temperature_out_of_range(record) {
        issues.push(issue(
            IssueCategory::VaccineStorage,
            IssuePriority::Critical,
            "Refrigerator temperature out of range (+2°C to +8°C)",
            "Immediately adjust refrigerator temperature and monitor closely",
        ));
    }
    if !record.vaccine_storage.temp_log_available {
        issues.push(issue(
            IssueCategory::VaccineStorage,
            IssuePriority::High,
            "Temperature monitoring log missing or not up-to-date",
            "Implement daily temperature logging system",
        ));
    }

    for sample in record.samples.samples() {
        if let Some(count) = sample.aspergillus_count.filter(|c| *c > ASPERGILLUS_CRITICAL) {
            issues.push(issue(
                IssueCategory::Environmental,
                IssuePriority::Critical,
                format!("High Aspergillus contamination ({count} colonies) in {}", sample.name),
                "Immediate deep cleaning and sanitation required",
            ));
        }
    }

    let techniques = &record.techniques;
    if let Some(rate) = techniques.bleeding_percent.filter(|r| *r > INJECTION_DEFECT_MAX) {
        issues.push(issue(
            IssueCategory::VaccinationTechniques,
            IssuePriority::High,
            format!("High bleeding rate during injection ({rate}%)"),
            "Retrain staff on proper injection technique",
        ));
    }
    if let Some(rate) = techniques.wet_neck_percent.filter(|r| *r > INJECTION_DEFECT_MAX) {
        issues.push(issue(
            IssueCategory::VaccinationTechniques,
            IssuePriority::High,
            format!("High wet neck rate ({rate}%)"),
            "Check injection equipment and technique",
        ));
    }

    issues
}
