//! Per-step completeness checks.
//!
//! Each check returns every problem it finds rather than stopping at the
//! first one. An empty list means the step is complete.

use hatch_core::entities::AuditRecord;
use hatch_core::enums::AuditStep;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub step: AuditStep,
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(step: AuditStep, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Problems that keep `step` from being complete for `record`.
#[must_use]
pub fn validate_step(record: &AuditRecord, step: AuditStep) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut push = |field: &str, message: &str| {
        issues.push(ValidationIssue::new(step, field, message));
    };

    match step {
        AuditStep::Info => {
            if record.info.auditor.trim().is_empty() {
                push("info.auditor", "auditor is required");
            }
            if record.info.location.trim().is_empty() {
                push("info.location", "location is required");
            }
        }
        AuditStep::VaccineStorage => {
            if record.vaccine_storage.current_temperature.is_none() {
                push(
                    "vaccineStorage.currentTemperature",
                    "refrigerator temperature reading is required",
                );
            }
        }
        AuditStep::Equipment => {
            if record.equipment.is_empty() {
                push("equipment", "at least one equipment item is required");
            }
            for (i, item) in record.equipment.iter().enumerate() {
                if item.name.trim().is_empty() {
                    push(&format!("equipment[{i}].name"), "equipment name is required");
                }
                if item.quantity == 0 {
                    push(
                        &format!("equipment[{i}].quantity"),
                        "quantity must be at least 1",
                    );
                }
            }
        }
        AuditStep::Techniques => {
            let t = &record.techniques;
            if t.droplet_uniformity.is_none() {
                push("techniques.dropletUniformity", "droplet uniformity is required");
            }
            if t.spray_sample_size == 0 {
                push("techniques.spraySampleSize", "spray sample size must be non-zero");
            }
            if t.injection_sample_size == 0 {
                push(
                    "techniques.injectionSampleSize",
                    "injection sample size must be non-zero",
                );
            }
        }
        AuditStep::SamplePlan => {
            if record.samples.is_empty() {
                push("samples", "sampling plan has not been generated");
            }
        }
        AuditStep::SampleCollection => {
            let total = record.samples.total();
            let missing = total - record.samples.collected();
            if missing > 0 {
                push(
                    "samples",
                    &format!("{missing} of {total} samples not collected"),
                );
            }
        }
        AuditStep::Incubation => {
            if record.incubation.start.is_none() {
                push("incubation.start", "incubation has not been started");
            }
        }
        AuditStep::Results => {
            let missing = record
                .samples
                .samples()
                .filter(|s| s.collected && s.score.is_none())
                .count();
            if missing > 0 {
                push(
                    "samples",
                    &format!("{missing} collected samples have no result"),
                );
            }
        }
        AuditStep::Review => {}
    }
    issues
}

/// Problems across every step, in workflow order.
#[must_use]
pub fn validate_all(record: &AuditRecord) -> Vec<ValidationIssue> {
    AuditStep::ALL
        .iter()
        .flat_map(|step| validate_step(record, *step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use hatch_core::entities::EquipmentItem;
    use hatch_core::enums::LocationCategory;
    use hatch_core::sampling::initialize_samples;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn draft() -> AuditRecord {
        AuditRecord::new_draft(
            "aud-00000001",
            "HA-20260302-001",
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            Utc::now(),
        )
    }

    #[rstest]
    #[case(AuditStep::Info, 2)]
    #[case(AuditStep::VaccineStorage, 1)]
    #[case(AuditStep::Equipment, 1)]
    #[case(AuditStep::Techniques, 3)]
    #[case(AuditStep::SamplePlan, 1)]
    #[case(AuditStep::SampleCollection, 0)]
    #[case(AuditStep::Incubation, 1)]
    #[case(AuditStep::Results, 0)]
    #[case(AuditStep::Review, 0)]
    fn fresh_draft_issue_counts(#[case] step: AuditStep, #[case] expected: usize) {
        assert_eq!(validate_step(&draft(), step).len(), expected);
    }

    #[test]
    fn equipment_items_are_checked_individually() {
        let mut record = draft();
        record.equipment = vec![
            EquipmentItem {
                name: "Spray cabinet".into(),
                quantity: 1,
                ..EquipmentItem::default()
            },
            EquipmentItem::default(),
        ];
        let fields: Vec<_> = validate_step(&record, AuditStep::Equipment)
            .into_iter()
            .map(|i| i.field)
            .collect();
        assert_eq!(fields, vec!["equipment[1].name", "equipment[1].quantity"]);
    }

    #[test]
    fn collection_and_results_count_missing_samples() {
        let mut record = draft();
        record.samples = initialize_samples();
        let issues = validate_step(&record, AuditStep::SampleCollection);
        assert_eq!(issues[0].message, "30 of 30 samples not collected");

        record.samples.collect_all(LocationCategory::Control, Utc::now());
        let issues = validate_step(&record, AuditStep::Results);
        assert_eq!(issues[0].message, "1 collected samples have no result");
    }

    #[test]
    fn validate_all_keeps_step_order() {
        let steps: Vec<_> = validate_all(&draft()).into_iter().map(|i| i.step).collect();
        let mut sorted = steps.clone();
        sorted.sort();
        assert_eq!(steps, sorted);
        assert_eq!(steps.first(), Some(&AuditStep::Info));
    }
}
