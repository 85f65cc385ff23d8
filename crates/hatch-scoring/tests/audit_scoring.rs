//! Whole-record scoring: summary aggregation and critical issue rules.

use chrono::{NaiveDate, Utc};
use hatch_core::entities::{
    AuditRecord, EquipmentItem, ScoringThresholds, Techniques, VaccineStorage,
};
use hatch_core::enums::{
    ComplianceClass, DropletUniformity, EnvironmentalClass, IssueCategory, IssuePriority,
    LocationCategory,
};
use hatch_core::sampling::initialize_samples;
use hatch_scoring::{audit_summary, critical_issues, plate_score};
use pretty_assertions::assert_eq;

fn compliant_record() -> AuditRecord {
    let mut record = AuditRecord::new_draft(
        "aud-00000001",
        "HA-20260302-001",
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        Utc::now(),
    );
    record.vaccine_storage = VaccineStorage {
        temperature_ok: true,
        current_temperature: Some(4.0),
        temp_log_available: true,
        vaccine_only: true,
        fifo_followed: true,
        proper_positioning: true,
        clear_labeling: true,
        ..VaccineStorage::default()
    };
    record.equipment = vec![EquipmentItem {
        name: "Spray cabinet".into(),
        quantity: 1,
        condition_good: true,
        maintenance_current: true,
        doses_sufficient: true,
        cleaning_followed: true,
        spare_parts_adequate: true,
        ..EquipmentItem::default()
    }];
    record.techniques = Techniques {
        aseptic_technique: true,
        hand_hygiene: true,
        new_syringe: true,
        correct_needle: true,
        expiry_checked: true,
        mixed_correctly: true,
        records_maintained: true,
        spray_sample_size: 10,
        droplet_uniformity: Some(DropletUniformity::Good),
        tray_coverage: Some(98.0),
        injection_sample_size: 100,
        accurate_injection_percent: Some(99.0),
        bleeding_percent: Some(0.5),
        wet_neck_percent: Some(1.0),
        ..Techniques::default()
    };
    record.samples = initialize_samples();
    let now = Utc::now();
    for category in LocationCategory::ALL {
        record.samples.collect_all(category, now);
        for i in 0..record.samples.category(category).len() {
            record
                .samples
                .record_result(category, i, 0, 5, plate_score)
                .unwrap();
        }
    }
    record
}

#[test]
fn clean_compliant_audit_is_excellent() {
    let record = compliant_record();
    let summary = audit_summary(&record, &ScoringThresholds::default());

    assert_eq!(summary.vaccine_storage.percentage, 100);
    assert_eq!(summary.equipment.percentage, 100);
    assert_eq!(summary.techniques.percentage, 100);
    assert_eq!(summary.environmental.score, 40);
    assert_eq!(summary.environmental.classification, EnvironmentalClass::Fair);
    // Every scored plate is 1, so the floor for a full plan is FAIR under defaults.
    assert_eq!(summary.overall_status, ComplianceClass::Fair);

    let relaxed = ScoringThresholds { good: 40, fair: 60 };
    let summary = audit_summary(&record, &relaxed);
    assert_eq!(summary.environmental.classification, EnvironmentalClass::Good);
    assert_eq!(summary.overall_status, ComplianceClass::Excellent);
    assert!(critical_issues(&record).is_empty());
}

#[test]
fn contaminated_hatchers_make_the_audit_poor() {
    let mut record = compliant_record();
    for i in 0..5 {
        record
            .samples
            .record_result(LocationCategory::Hatchers, i, 15, 0, plate_score)
            .unwrap();
    }
    let summary = audit_summary(&record, &ScoringThresholds::default());
    assert_eq!(summary.environmental.groups.hatchers, 25);
    assert_eq!(summary.environmental.score, 40 + 2 * 20);
    assert_eq!(summary.environmental.classification, EnvironmentalClass::Poor);
    assert_eq!(summary.overall_status, ComplianceClass::Poor);

    let issues = critical_issues(&record);
    assert_eq!(issues.len(), 5);
    assert!(issues.iter().all(|i| i.category == IssueCategory::Environmental));
    assert_eq!(
        issues[0].issue,
        "High Aspergillus contamination (15 colonies) in Hatchers #1"
    );
}

#[test]
fn all_rules_fire_independently_in_order() {
    let mut record = compliant_record();
    record.vaccine_storage.current_temperature = Some(9.5);
    record.vaccine_storage.temp_log_available = false;
    record.techniques.bleeding_percent = Some(7.5);
    record.techniques.wet_neck_percent = Some(6.0);
    record
        .samples
        .record_result(LocationCategory::Fans, 1, 11, 0, plate_score)
        .unwrap();

    let issues = critical_issues(&record);
    let shape: Vec<_> = issues.iter().map(|i| (i.category, i.priority)).collect();
    assert_eq!(
        shape,
        vec![
            (IssueCategory::VaccineStorage, IssuePriority::Critical),
            (IssueCategory::VaccineStorage, IssuePriority::High),
            (IssueCategory::Environmental, IssuePriority::Critical),
            (IssueCategory::VaccinationTechniques, IssuePriority::High),
            (IssueCategory::VaccinationTechniques, IssuePriority::High),
        ]
    );
    assert_eq!(issues[3].issue, "High bleeding rate during injection (7.5%)");
    assert_eq!(issues[4].issue, "High wet neck rate (6%)");
    assert_eq!(issues[4].recommendation, "Check injection equipment and technique");
}

#[test]
fn temperature_rule_uses_checklist_without_reading() {
    let mut record = compliant_record();
    record.vaccine_storage.current_temperature = None;
    record.vaccine_storage.temperature_ok = false;
    let issues = critical_issues(&record);
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].issue,
        "Refrigerator temperature out of range (+2°C to +8°C)"
    );

    record.vaccine_storage.temperature_ok = true;
    assert!(critical_issues(&record).is_empty());

    record.vaccine_storage.current_temperature = Some(1.9);
    assert_eq!(critical_issues(&record).len(), 1);
    record.vaccine_storage.current_temperature = Some(8.0);
    assert!(critical_issues(&record).is_empty());
}

#[test]
fn boundary_defect_rates_do_not_fire() {
    let mut record = compliant_record();
    record.techniques.bleeding_percent = Some(5.0);
    record.techniques.wet_neck_percent = Some(5.0);
    assert!(critical_issues(&record).is_empty());
}
