//! Audit lifecycle tests: start, navigate, edit, complete, discard.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;

use hatch_core::entities::{AuditInfo, EquipmentItem, Techniques, VaccineStorage};
use hatch_core::enums::{
    AuditSection, AuditStatus, AuditStep, DropletUniformity, EnvironmentalClass, LocationCategory,
    StorageBackendKind,
};
use hatch_core::errors::CoreError;
use hatch_db::{AuditStore, DatabaseError, KeyValueStore, MemoryStore, StoreOptions, keys};
use hatch_workflow::{AuditSession, SectionUpdate, WorkflowError, WorkflowOptions};

fn audit_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn session_with(options: WorkflowOptions) -> AuditSession {
    AuditSession::new(Arc::new(AuditStore::in_memory()), options)
}

fn session() -> AuditSession {
    session_with(WorkflowOptions::default())
}

/// Memory backend whose audit-list writes can be switched off.
struct FlakyStore {
    inner: MemoryStore,
    fail_audits: AtomicBool,
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        self.inner.get(key).await
    }
    async fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        if key == keys::AUDITS && self.fail_audits.load(Ordering::SeqCst) {
            return Err(DatabaseError::Persistence("quota exceeded".into()));
        }
        self.inner.set(key, value).await
    }
    async fn remove(&self, key: &str) -> Result<(), DatabaseError> {
        self.inner.remove(key).await
    }
    fn kind(&self) -> StorageBackendKind {
        StorageBackendKind::Durable
    }
}

/// Fill every section so each step validates.
async fn fill_everything(session: &mut AuditSession) {
    session
        .update_section(SectionUpdate::Info(AuditInfo {
            auditor: "Dr. Amal".into(),
            location: "North Hatchery".into(),
            ..AuditInfo::on(audit_date())
        }))
        .await
        .unwrap();
    session
        .update_section(SectionUpdate::VaccineStorage(VaccineStorage {
            temperature_ok: true,
            current_temperature: Some(4.0),
            temp_log_available: true,
            ..VaccineStorage::default()
        }))
        .await
        .unwrap();
    session
        .update_section(SectionUpdate::Equipment(vec![EquipmentItem {
            name: "Spray cabinet".into(),
            quantity: 1,
            condition_good: true,
            ..EquipmentItem::default()
        }]))
        .await
        .unwrap();
    session
        .update_section(SectionUpdate::Techniques(Techniques {
            droplet_uniformity: Some(DropletUniformity::Good),
            spray_sample_size: 10,
            injection_sample_size: 100,
            ..Techniques::default()
        }))
        .await
        .unwrap();
    session.go_to_step(AuditStep::SamplePlan).await.unwrap();
    assert_eq!(session.next().await.unwrap(), AuditStep::SampleCollection);
    for category in LocationCategory::ALL {
        session.collect_all(category).await.unwrap();
    }
    session.start_incubation().await.unwrap();
    for category in LocationCategory::ALL {
        let count = session.draft().unwrap().samples.category(category).len();
        for i in 0..count {
            session.record_result(category, i, 0, 5).await.unwrap();
        }
    }
    session.go_to_step(AuditStep::Review).await.unwrap();
}

// ---------------------------------------------------------------------------
// Start and resume
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_creates_persisted_draft_on_info() {
    let mut session = session();
    let draft = session.start_new_audit_on(audit_date()).await.unwrap().clone();
    assert_eq!(draft.audit_number, "HA-20260302-001");
    assert_eq!(draft.current_step, AuditStep::Info);
    assert_eq!(draft.status, AuditStatus::Draft);
    assert!(draft.id.starts_with("aud-"));

    let slot = session.store().get_current_audit().await.unwrap();
    assert_eq!(slot, Some(draft));
}

#[tokio::test]
async fn starting_again_replaces_the_draft() {
    let mut session = session();
    let first = session.start_new_audit_on(audit_date()).await.unwrap().id.clone();
    let second = session.start_new_audit_on(audit_date()).await.unwrap().clone();

    assert_ne!(second.id, first);
    assert_eq!(second.audit_number, "HA-20260302-002");
    assert_eq!(
        session.store().get_current_audit().await.unwrap().unwrap().id,
        second.id
    );
    assert!(session.store().get_all_audits().await.unwrap().is_empty());
}

#[tokio::test]
async fn resume_picks_up_autosaved_edits() {
    let store = Arc::new(AuditStore::in_memory());
    let mut first = AuditSession::new(Arc::clone(&store), WorkflowOptions::default());
    first.start_new_audit_on(audit_date()).await.unwrap();
    first
        .update_section(SectionUpdate::VaccineStorage(VaccineStorage {
            current_temperature: Some(5.5),
            ..VaccineStorage::default()
        }))
        .await
        .unwrap();

    let mut second = AuditSession::new(store, WorkflowOptions::default());
    let resumed = second.resume().await.unwrap().unwrap();
    assert_eq!(resumed.vaccine_storage.current_temperature, Some(5.5));
}

#[tokio::test]
async fn operations_without_draft_fail() {
    let mut session = session();
    assert!(matches!(session.next().await, Err(WorkflowError::NoDraft)));
    assert!(matches!(session.validate_all(), Err(WorkflowError::NoDraft)));
    assert!(matches!(session.complete().await, Err(WorkflowError::NoDraft)));
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn next_is_gated_by_validation() {
    let mut session = session();
    session.start_new_audit_on(audit_date()).await.unwrap();

    let err = session.next().await.unwrap_err();
    let WorkflowError::Validation { step, issues } = err else {
        panic!("expected a validation error");
    };
    assert_eq!(step, AuditStep::Info);
    assert_eq!(issues.len(), 2);
    assert_eq!(session.current_step(), Some(AuditStep::Info));
}

#[tokio::test]
async fn navigation_is_free_without_enforcement() {
    let mut session = session_with(WorkflowOptions {
        enforce_step_validation: false,
        ..WorkflowOptions::default()
    });
    session.start_new_audit_on(audit_date()).await.unwrap();

    assert_eq!(session.next().await.unwrap(), AuditStep::VaccineStorage);
    assert_eq!(session.go_to_step(AuditStep::Results).await.unwrap(), AuditStep::Results);
    assert_eq!(session.draft().unwrap().status, AuditStatus::ResultsPending);
    assert_eq!(session.draft().unwrap().samples.total(), 0);
}

#[tokio::test]
async fn previous_stops_at_first_step_and_status_never_regresses() {
    let mut session = session_with(WorkflowOptions {
        enforce_step_validation: false,
        ..WorkflowOptions::default()
    });
    session.start_new_audit_on(audit_date()).await.unwrap();
    assert_eq!(session.previous().await.unwrap(), AuditStep::Info);

    session.go_to_step(AuditStep::Incubation).await.unwrap();
    assert_eq!(session.draft().unwrap().status, AuditStatus::SamplesCollected);
    session.go_to_step(AuditStep::Info).await.unwrap();
    assert_eq!(session.draft().unwrap().status, AuditStatus::SamplesCollected);
}

#[tokio::test]
async fn entering_sample_plan_generates_it_once() {
    let mut session = session_with(WorkflowOptions {
        enforce_step_validation: false,
        ..WorkflowOptions::default()
    });
    session.start_new_audit_on(audit_date()).await.unwrap();
    session.go_to_step(AuditStep::SamplePlan).await.unwrap();
    assert_eq!(session.draft().unwrap().samples.total(), 30);

    session.mark_collected(LocationCategory::Hatchers, 0).await.unwrap();
    session.previous().await.unwrap();
    session.next().await.unwrap();
    assert_eq!(session.draft().unwrap().samples.collected(), 1);
}

#[tokio::test]
async fn forward_jump_reports_first_incomplete_step() {
    let mut session = session();
    session.start_new_audit_on(audit_date()).await.unwrap();
    session
        .update_section(SectionUpdate::Info(AuditInfo {
            auditor: "Dr. Amal".into(),
            location: "North Hatchery".into(),
            ..AuditInfo::on(audit_date())
        }))
        .await
        .unwrap();

    let err = session.go_to_step(AuditStep::Review).await.unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::Validation {
            step: AuditStep::VaccineStorage,
            ..
        }
    ));
}

// ---------------------------------------------------------------------------
// Samples
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_needs_confirmation_once_data_exists() {
    let mut session = session_with(WorkflowOptions {
        enforce_step_validation: false,
        ..WorkflowOptions::default()
    });
    session.start_new_audit_on(audit_date()).await.unwrap();
    session.go_to_step(AuditStep::SamplePlan).await.unwrap();
    session.reset_sample_plan(false).await.unwrap();

    session.collect_all(LocationCategory::Fans).await.unwrap();
    assert!(matches!(
        session.reset_sample_plan(false).await,
        Err(WorkflowError::ResetNotConfirmed)
    ));
    assert_eq!(session.draft().unwrap().samples.collected(), 4);

    session.reset_sample_plan(true).await.unwrap();
    assert_eq!(session.draft().unwrap().samples.collected(), 0);
}

#[tokio::test]
async fn results_use_the_plate_table() {
    let mut session = session_with(WorkflowOptions {
        enforce_step_validation: false,
        ..WorkflowOptions::default()
    });
    session.start_new_audit_on(audit_date()).await.unwrap();
    session.go_to_step(AuditStep::SamplePlan).await.unwrap();

    let err = session
        .record_result(LocationCategory::Hatchers, 0, 5, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Core(_)));

    session.mark_collected(LocationCategory::Hatchers, 0).await.unwrap();
    assert_eq!(
        session
            .record_result(LocationCategory::Hatchers, 0, 5, 0)
            .await
            .unwrap(),
        4
    );
    assert_eq!(session.draft().unwrap().status, AuditStatus::ResultsPending);
}

#[tokio::test]
async fn incubation_sets_expected_end() {
    let mut session = session_with(WorkflowOptions {
        enforce_step_validation: false,
        incubation_days: 2,
    });
    session.start_new_audit_on(audit_date()).await.unwrap();
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    session.start_incubation_at(start).await.unwrap();

    let draft = session.draft().unwrap();
    assert_eq!(draft.status, AuditStatus::Incubating);
    assert_eq!(draft.incubation.start, Some(start));
    assert_eq!(
        draft.incubation.expected_end,
        Some(Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn incubation_waits_for_collection_when_enforced() {
    let mut session = session();
    session.start_new_audit_on(audit_date()).await.unwrap();
    let err = session.start_incubation().await.unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::Validation {
            step: AuditStep::SamplePlan,
            ..
        }
    ));
}

/// Draft with a fresh plan and Hatchers #1 rewritten by `edit`, as a
/// samples section update.
async fn edited_samples(
    session: &mut AuditSession,
    edit: impl FnOnce(&mut serde_json::Value),
) -> SectionUpdate {
    session.go_to_step(AuditStep::SamplePlan).await.unwrap();
    let mut samples = serde_json::to_value(&session.draft().unwrap().samples).unwrap();
    edit(&mut samples["H"][0]);
    SectionUpdate::from_json(AuditSection::Samples, samples).unwrap()
}

fn unenforced() -> AuditSession {
    session_with(WorkflowOptions {
        enforce_step_validation: false,
        ..WorkflowOptions::default()
    })
}

#[tokio::test]
async fn replaced_sample_score_needs_both_counts() {
    let mut session = unenforced();
    session.start_new_audit_on(audit_date()).await.unwrap();
    let update = edited_samples(&mut session, |sample| {
        sample["collected"] = true.into();
        sample["score"] = 3.into();
    })
    .await;

    let err = session.update_section(update).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Core(CoreError::Validation(_))));
    assert_eq!(session.draft().unwrap().samples.scored(), 0);
    let slot = session.store().get_current_audit().await.unwrap().unwrap();
    assert_eq!(slot.samples.scored(), 0);
}

#[tokio::test]
async fn replaced_sample_score_must_be_in_range() {
    let mut session = unenforced();
    session.start_new_audit_on(audit_date()).await.unwrap();
    let update = edited_samples(&mut session, |sample| {
        sample["collected"] = true.into();
        sample["aspergillusCount"] = 0.into();
        sample["colonyCount"] = 0.into();
        sample["score"] = 9.into();
    })
    .await;

    let err = session.update_section(update).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Core(CoreError::Validation(_))));
    assert_eq!(session.draft().unwrap().samples.scored(), 0);
}

#[tokio::test]
async fn replaced_samples_are_scored_from_their_counts() {
    let mut session = unenforced();
    session.start_new_audit_on(audit_date()).await.unwrap();
    let update = edited_samples(&mut session, |sample| {
        sample["collected"] = true.into();
        sample["aspergillusCount"] = 12.into();
        sample["colonyCount"] = 0.into();
        sample["score"] = 1.into();
    })
    .await;

    session.update_section(update).await.unwrap();
    let draft = session.draft().unwrap();
    assert_eq!(
        draft.samples.get(LocationCategory::Hatchers, 0).unwrap().score,
        Some(5)
    );
    assert_eq!(draft.samples.scored(), 1);
}

// ---------------------------------------------------------------------------
// Complete and discard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_appends_one_record_and_clears_slot() {
    let mut session = session();
    session.start_new_audit_on(audit_date()).await.unwrap();
    fill_everything(&mut session).await;

    let record = session.complete().await.unwrap();
    assert_eq!(record.status, AuditStatus::Completed);
    assert!(record.completed_at.is_some());
    let summary = record.summary.as_ref().unwrap();
    assert_eq!(summary.environmental.score, 40);
    assert_eq!(summary.environmental.classification, EnvironmentalClass::Fair);
    assert!(record.issues.is_some());

    let history = session.store().get_all_audits().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, record.id);
    assert!(session.store().get_current_audit().await.unwrap().is_none());
    assert!(session.draft().is_none());
}

#[tokio::test]
async fn complete_keeps_the_draft_creation_time() {
    let mut session = session();
    let created_at = session.start_new_audit_on(audit_date()).await.unwrap().created_at;
    fill_everything(&mut session).await;

    let finished = created_at + chrono::Duration::hours(2);
    let record = session.complete_at(finished).await.unwrap();
    assert_eq!(record.created_at, created_at);
    assert_eq!(record.completed_at, Some(finished));

    let history = session.store().get_all_audits().await.unwrap();
    assert_eq!(history[0].created_at, created_at);
}

#[tokio::test]
async fn complete_is_blocked_by_incomplete_steps() {
    let mut session = session();
    session.start_new_audit_on(audit_date()).await.unwrap();
    let err = session.complete().await.unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::Validation {
            step: AuditStep::Info,
            ..
        }
    ));
    assert!(session.store().get_all_audits().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_save_keeps_the_draft_for_retry() {
    let backend = Arc::new(FlakyStore {
        inner: MemoryStore::new(),
        fail_audits: AtomicBool::new(true),
    });
    let store = Arc::new(AuditStore::new(backend.clone(), StoreOptions::default()));
    let mut session = AuditSession::new(store, WorkflowOptions::default());
    session.start_new_audit_on(audit_date()).await.unwrap();
    fill_everything(&mut session).await;
    let before = session.draft().cloned();

    let err = session.complete().await.unwrap_err();
    assert!(matches!(err, WorkflowError::Persistence(_)));
    assert_eq!(session.draft().cloned(), before);
    assert!(session.store().get_current_audit().await.unwrap().is_some());

    backend.fail_audits.store(false, Ordering::SeqCst);
    session.complete().await.unwrap();
    assert_eq!(session.store().get_all_audits().await.unwrap().len(), 1);
}

#[tokio::test]
async fn discard_leaves_history_untouched() {
    let mut session = session();
    session.start_new_audit_on(audit_date()).await.unwrap();
    fill_everything(&mut session).await;
    let completed = session.complete().await.unwrap();

    session.start_new_audit_on(audit_date()).await.unwrap();
    session.discard().await.unwrap();

    let history = session.store().get_all_audits().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, completed.id);
    assert!(session.draft().is_none());
    assert!(session.store().get_current_audit().await.unwrap().is_none());
}
