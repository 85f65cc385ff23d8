//! Serde roundtrip and JsonSchema validation tests for the entity types.

use chrono::{NaiveDate, Utc};
use hatch_core::bundle::{BUNDLE_VERSION, ExportBundle, ImportBundle};
use hatch_core::entities::*;
use hatch_core::enums::*;
use hatch_core::responses::*;
use hatch_core::sampling::initialize_samples;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn audit_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn sample_summary() -> AuditSummary {
    AuditSummary {
        vaccine_storage: SectionScore {
            passed_count: 5,
            total_count: 6,
            percentage: 83,
            classification: ComplianceClass::Fair,
        },
        equipment: SectionScore {
            passed_count: 10,
            total_count: 10,
            percentage: 100,
            classification: ComplianceClass::Excellent,
        },
        techniques: SectionScore {
            passed_count: 11,
            total_count: 12,
            percentage: 92,
            classification: ComplianceClass::Good,
        },
        environmental: EnvironmentalResult {
            score: 38,
            classification: EnvironmentalClass::Fair,
            groups: GroupSums {
                hatchers: 10,
                hatcher_ventilation: 2,
                hallways: 3,
                fans: 1,
                setters: 4,
                miscellaneous: 2,
            },
        },
        overall_status: ComplianceClass::Fair,
    }
}

fn completed_record() -> AuditRecord {
    let now = Utc::now();
    let mut record = AuditRecord::new_draft("aud-1f2e3d4c", "HA-20260302-001", audit_date(), now);
    record.status = AuditStatus::Completed;
    record.current_step = AuditStep::Review;
    record.completed_at = Some(now);
    record.info.auditor = "Dr. Amal".into();
    record.info.location = "North Hatchery".into();
    record.vaccine_storage = VaccineStorage {
        temperature_ok: true,
        current_temperature: Some(4.5),
        temp_log_available: true,
        vaccine_only: true,
        fifo_followed: true,
        proper_positioning: true,
        clear_labeling: false,
        notes: "Door seal worn".into(),
        photos: vec!["photo-0001".into()],
    };
    record.equipment = vec![EquipmentItem {
        equipment_type: EquipmentType::PneumaticVaccinator,
        name: "Vaccinator 2".into(),
        quantity: 2,
        last_service_date: Some(NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()),
        doses_available: Some(4000),
        condition_good: true,
        maintenance_current: true,
        doses_sufficient: true,
        cleaning_followed: true,
        spare_parts_adequate: true,
        notes: String::new(),
    }];
    record.techniques = Techniques {
        aseptic_technique: true,
        droplet_uniformity: Some(DropletUniformity::Good),
        tray_coverage: Some(95.0),
        spray_sample_size: 10,
        injection_sample_size: 100,
        accurate_injection_percent: Some(97.0),
        bleeding_percent: Some(1.0),
        wet_neck_percent: Some(2.0),
        ..Techniques::default()
    };
    record.samples = initialize_samples();
    record.summary = Some(sample_summary());
    record.issues = Some(vec![CriticalIssue {
        category: IssueCategory::VaccineStorage,
        priority: IssuePriority::High,
        issue: "Temperature monitoring log missing or not up-to-date".into(),
        recommendation: "Implement daily temperature logging system".into(),
    }]);
    record
}

roundtrip_and_validate!(
    draft_audit_roundtrip,
    AuditRecord,
    AuditRecord::new_draft("aud-0a1b2c3d", "HA-20260302-002", audit_date(), Utc::now())
);

roundtrip_and_validate!(completed_audit_roundtrip, AuditRecord, completed_record());

roundtrip_and_validate!(sample_set_roundtrip, SampleSet, initialize_samples());

roundtrip_and_validate!(summary_roundtrip, AuditSummary, sample_summary());

roundtrip_and_validate!(settings_roundtrip, Settings, Settings::default());

roundtrip_and_validate!(
    location_roundtrip,
    Location,
    Location {
        id: "loc-9a8b7c6d".into(),
        name: "North Hatchery".into(),
        code: "NH".into(),
    }
);

roundtrip_and_validate!(
    auditor_roundtrip,
    Auditor,
    Auditor {
        id: "adr-5e4f3a2b".into(),
        name: "Dr. Amal".into(),
        role: "Veterinarian".into(),
    }
);

roundtrip_and_validate!(
    export_bundle_roundtrip,
    ExportBundle,
    ExportBundle {
        audits: vec![completed_record()],
        settings: Settings::default(),
        locations: vec![],
        auditors: vec![],
        export_date: Utc::now(),
        version: BUNDLE_VERSION.into(),
    }
);

roundtrip_and_validate!(
    statistics_roundtrip,
    AuditStatistics,
    AuditStatistics {
        total_audits: 3,
        completed_audits: 2,
        average_score: 33.5,
        good_count: 1,
        fair_count: 1,
        poor_count: 0,
        last_audit_date: Some(audit_date()),
        next_due_date: NaiveDate::from_ymd_opt(2026, 5, 31),
        overdue: false,
    }
);

#[test]
fn export_bundle_uses_external_field_names() {
    let bundle = ExportBundle {
        audits: vec![completed_record()],
        settings: Settings::default(),
        locations: vec![],
        auditors: vec![],
        export_date: Utc::now(),
        version: BUNDLE_VERSION.into(),
    };
    let json = serde_json::to_value(&bundle).unwrap();
    assert!(json.get("exportDate").is_some());
    assert_eq!(json["version"], "1.0");

    let audit = &json["audits"][0];
    assert_eq!(audit["auditNumber"], "HA-20260302-001");
    assert_eq!(audit["status"], "completed");
    assert_eq!(audit["currentStep"], "review");
    assert_eq!(audit["info"]["type"], "scheduled");
    assert_eq!(audit["summary"]["environmental"]["classification"], "FAIR");
    assert_eq!(audit["summary"]["environmental"]["groups"]["HHV"], 3);
    assert_eq!(audit["samples"]["M_CANDLING"][1]["id"], "M_CANDLING-2");
    assert_eq!(audit["issues"][0]["priority"], "high");
}

#[test]
fn export_bundle_reimports_every_section() {
    let bundle = ExportBundle {
        audits: vec![completed_record()],
        settings: Settings::default(),
        locations: vec![],
        auditors: vec![],
        export_date: Utc::now(),
        version: BUNDLE_VERSION.into(),
    };
    let text = serde_json::to_string(&bundle).unwrap();
    let parsed = ImportBundle::parse(&text).unwrap();
    assert_eq!(parsed, ImportBundle::from(bundle));
}

#[test]
fn draft_does_not_serialize_summary_keys() {
    let draft = AuditRecord::new_draft("aud-0a1b2c3d", "HA-20260302-002", audit_date(), Utc::now());
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("summary").is_none());
    assert!(json.get("issues").is_none());
}
