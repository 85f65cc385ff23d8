//! The in-progress audit and its step machine.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use hatch_config::WorkflowConfig;
use hatch_core::entities::AuditRecord;
use hatch_core::enums::{AuditSection, AuditStatus, AuditStep, LocationCategory};
use hatch_core::ids::{PREFIX_AUDIT, random_id};
use hatch_core::sampling::initialize_samples;
use hatch_core::schedule::{DEFAULT_INCUBATION_DAYS, expected_incubation_end};
use hatch_db::AuditStore;
use hatch_scoring::{audit_summary, critical_issues, plate_score};
use tracing::{debug, info, warn};

use crate::error::WorkflowError;
use crate::section::SectionUpdate;
use crate::validation::{ValidationIssue, validate_all, validate_step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowOptions {
    pub enforce_step_validation: bool,
    pub incubation_days: u32,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            enforce_step_validation: true,
            incubation_days: DEFAULT_INCUBATION_DAYS,
        }
    }
}

impl From<&WorkflowConfig> for WorkflowOptions {
    fn from(config: &WorkflowConfig) -> Self {
        Self {
            enforce_step_validation: config.enforce_step_validation,
            incubation_days: config.incubation_days,
        }
    }
}

/// Owner of the single draft audit.
///
/// The session mirrors the store's draft slot: every successful mutation
/// is written through before the in-memory draft changes, so a failed
/// write leaves both untouched.
pub struct AuditSession {
    store: Arc<AuditStore>,
    options: WorkflowOptions,
    draft: Option<AuditRecord>,
}

impl AuditSession {
    #[must_use]
    pub const fn new(store: Arc<AuditStore>, options: WorkflowOptions) -> Self {
        Self {
            store,
            options,
            draft: None,
        }
    }

    #[must_use]
    pub fn store(&self) -> &AuditStore {
        &self.store
    }

    #[must_use]
    pub const fn options(&self) -> WorkflowOptions {
        self.options
    }

    #[must_use]
    pub const fn draft(&self) -> Option<&AuditRecord> {
        self.draft.as_ref()
    }

    #[must_use]
    pub fn current_step(&self) -> Option<AuditStep> {
        self.draft.as_ref().map(|d| d.current_step)
    }

    /// Load the persisted draft slot into the session.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Persistence` if the slot cannot be read.
    pub async fn resume(&mut self) -> Result<Option<&AuditRecord>, WorkflowError> {
        self.draft = self.store.get_current_audit().await?;
        if let Some(draft) = &self.draft {
            debug!(id = %draft.id, step = %draft.current_step, "draft resumed");
        }
        Ok(self.draft.as_ref())
    }

    /// Start a new audit dated today.
    ///
    /// # Errors
    ///
    /// See [`AuditSession::start_new_audit_on`].
    pub async fn start_new_audit(&mut self) -> Result<&AuditRecord, WorkflowError> {
        self.start_new_audit_on(Local::now().date_naive()).await
    }

    /// Start a new audit dated `date`. Any existing draft is replaced.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Persistence` if numbering or the draft write
    /// fails.
    pub async fn start_new_audit_on(&mut self, date: NaiveDate) -> Result<&AuditRecord, WorkflowError> {
        let previous = match &self.draft {
            Some(draft) => Some(draft.clone()),
            None => self.store.get_current_audit().await?,
        };
        if let Some(previous) = previous {
            warn!(
                id = %previous.id,
                number = %previous.audit_number,
                "replacing unfinished draft"
            );
        }

        let number = self.store.generate_audit_id_on(date).await?;
        let mut record = AuditRecord::new_draft(random_id(PREFIX_AUDIT)?, number, date, Utc::now());
        let settings = self.store.get_settings().await?;
        if settings.auto_assign {
            record.info.auditor = settings.default_auditor;
        }

        self.store.save_current_audit(&record).await?;
        info!(id = %record.id, number = %record.audit_number, "audit started");
        Ok(self.draft.insert(record))
    }

    /// Advance one step. A no-op on the last step.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Validation` when enforcement is on and the
    /// current step is incomplete.
    pub async fn next(&mut self) -> Result<AuditStep, WorkflowError> {
        let current = self.require_draft()?.current_step;
        match current.next() {
            Some(target) => self.go_to_step(target).await,
            None => Ok(current),
        }
    }

    /// Go back one step. Never validated; a no-op on the first step.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Persistence` if the draft write fails.
    pub async fn previous(&mut self) -> Result<AuditStep, WorkflowError> {
        let current = self.require_draft()?.current_step;
        match current.previous() {
            Some(target) => self.go_to_step(target).await,
            None => Ok(current),
        }
    }

    /// Jump to any step. Moving forward with enforcement on validates every
    /// step passed over.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Validation` for the first incomplete step
    /// passed over.
    pub async fn go_to_step(&mut self, target: AuditStep) -> Result<AuditStep, WorkflowError> {
        let enforce = self.options.enforce_step_validation;
        self.mutate(|draft| {
            if enforce {
                for step in AuditStep::ALL
                    .into_iter()
                    .filter(|s| *s >= draft.current_step && *s < target)
                {
                    check(draft, step)?;
                }
            }
            enter_step(draft, target);
            Ok(target)
        })
        .await
    }

    /// Replace one section of the draft and autosave. Replaced samples are
    /// rescored from their colony counts.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Core` if a replaced sample carries a score
    /// outside 1-5 or a score without both counts, and
    /// `WorkflowError::Persistence` if the draft write fails.
    pub async fn update_section(&mut self, update: SectionUpdate) -> Result<(), WorkflowError> {
        let section = update.section();
        self.mutate(|draft| {
            update.apply(draft);
            if section == AuditSection::Samples {
                draft.samples.rescore(plate_score)?;
            }
            Ok(())
        })
        .await?;
        debug!(%section, "section updated");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WorkflowError::NoDraft` when no audit is in progress.
    pub fn validate_step(&self, step: AuditStep) -> Result<Vec<ValidationIssue>, WorkflowError> {
        Ok(validate_step(self.require_draft()?, step))
    }

    /// # Errors
    ///
    /// Returns `WorkflowError::NoDraft` when no audit is in progress.
    pub fn validate_all(&self) -> Result<Vec<ValidationIssue>, WorkflowError> {
        Ok(validate_all(self.require_draft()?))
    }

    /// Regenerate the sampling plan. Discarding entered sample data needs
    /// `confirmed`.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::ResetNotConfirmed` if samples carry data and
    /// the reset was not confirmed.
    pub async fn reset_sample_plan(&mut self, confirmed: bool) -> Result<(), WorkflowError> {
        self.mutate(|draft| {
            if draft.samples.has_entered_data() && !confirmed {
                return Err(WorkflowError::ResetNotConfirmed);
            }
            draft.samples = initialize_samples();
            Ok(())
        })
        .await?;
        info!("sample plan reset");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WorkflowError::Core` if the sample does not exist.
    pub async fn mark_collected(
        &mut self,
        category: LocationCategory,
        index: usize,
    ) -> Result<(), WorkflowError> {
        let now = Utc::now();
        self.mutate(|draft| {
            draft
                .samples
                .mark_collected(category, index, now)
                .map_err(WorkflowError::from)
        })
        .await
    }

    /// Mark a whole category collected; returns how many samples changed.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Persistence` if the draft write fails.
    pub async fn collect_all(&mut self, category: LocationCategory) -> Result<usize, WorkflowError> {
        let now = Utc::now();
        self.mutate(|draft| Ok(draft.samples.collect_all(category, now)))
            .await
    }

    /// Record colony counts for a collected sample and return its plate score.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Core` if the sample does not exist or has not
    /// been collected.
    pub async fn record_result(
        &mut self,
        category: LocationCategory,
        index: usize,
        aspergillus_count: u32,
        colony_count: u32,
    ) -> Result<u8, WorkflowError> {
        self.mutate(|draft| {
            let score = draft.samples.record_result(
                category,
                index,
                aspergillus_count,
                colony_count,
                plate_score,
            )?;
            if draft.status < AuditStatus::ResultsPending {
                draft.status = AuditStatus::ResultsPending;
            }
            Ok(score)
        })
        .await
    }

    /// # Errors
    ///
    /// See [`AuditSession::start_incubation_at`].
    pub async fn start_incubation(&mut self) -> Result<(), WorkflowError> {
        self.start_incubation_at(Utc::now()).await
    }

    /// Stamp the incubation start and expected read-out, and move the audit
    /// to incubating. With enforcement on, every sample must be collected.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Validation` if collection is incomplete.
    pub async fn start_incubation_at(&mut self, start: DateTime<Utc>) -> Result<(), WorkflowError> {
        let enforce = self.options.enforce_step_validation;
        let days = self.options.incubation_days;
        self.mutate(|draft| {
            if enforce {
                check(draft, AuditStep::SamplePlan)?;
                check(draft, AuditStep::SampleCollection)?;
            }
            draft.incubation.start = Some(start);
            draft.incubation.expected_end = Some(expected_incubation_end(start, days));
            if draft.status < AuditStatus::Incubating {
                draft.status = AuditStatus::Incubating;
            }
            Ok(())
        })
        .await?;
        info!(%start, days, "incubation started");
        Ok(())
    }

    /// # Errors
    ///
    /// See [`AuditSession::complete_at`].
    pub async fn complete(&mut self) -> Result<AuditRecord, WorkflowError> {
        self.complete_at(Utc::now()).await
    }

    /// Score the draft, append it to the history, and clear the draft slot.
    ///
    /// On any error the draft is left as it was so the caller can retry.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Validation` when enforcement is on and a step
    /// is incomplete, or `WorkflowError::Persistence` if the save fails.
    pub async fn complete_at(&mut self, now: DateTime<Utc>) -> Result<AuditRecord, WorkflowError> {
        let draft = self.require_draft()?;
        if !draft.status.can_transition_to(AuditStatus::Completed) {
            return Err(WorkflowError::InvalidTransition {
                id: draft.id.clone(),
                from: draft.status,
                to: AuditStatus::Completed,
            });
        }
        if self.options.enforce_step_validation {
            let issues = validate_all(draft);
            if let Some(first) = issues.first() {
                return Err(WorkflowError::Validation {
                    step: first.step,
                    issues,
                });
            }
        }

        let thresholds = self.store.get_settings().await?.scoring_thresholds;
        let mut record = draft.clone();
        record.summary = Some(audit_summary(&record, &thresholds));
        record.issues = Some(critical_issues(&record));
        record.status = AuditStatus::Completed;
        record.current_step = AuditStep::Review;
        record.completed_at = Some(now);

        let stored = self.store.save_audit(&record).await?;
        if let Err(e) = self.store.clear_current_audit().await {
            warn!(id = %stored.id, error = %e, "audit saved but the draft slot was not cleared");
        }
        self.draft = None;
        info!(
            id = %stored.id,
            number = %stored.audit_number,
            issues = stored.issues.as_ref().map_or(0, Vec::len),
            "audit completed"
        );
        Ok(stored)
    }

    /// Abandon the draft. The audit history is not touched.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Persistence` if the slot cannot be cleared.
    pub async fn discard(&mut self) -> Result<(), WorkflowError> {
        self.store.clear_current_audit().await?;
        if let Some(draft) = self.draft.take() {
            info!(id = %draft.id, "draft discarded");
        }
        Ok(())
    }

    fn require_draft(&self) -> Result<&AuditRecord, WorkflowError> {
        self.draft.as_ref().ok_or(WorkflowError::NoDraft)
    }

    /// Apply `change` to a copy of the draft, autosave it, then keep it.
    async fn mutate<T, F>(&mut self, change: F) -> Result<T, WorkflowError>
    where
        F: FnOnce(&mut AuditRecord) -> Result<T, WorkflowError>,
    {
        let mut next = self.require_draft()?.clone();
        let out = change(&mut next)?;
        next.updated_at = Utc::now();
        self.store.save_current_audit(&next).await?;
        self.draft = Some(next);
        Ok(out)
    }
}

fn check(draft: &AuditRecord, step: AuditStep) -> Result<(), WorkflowError> {
    let issues = validate_step(draft, step);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(WorkflowError::Validation { step, issues })
    }
}

/// Move to `step`, raising the status to the step's floor and generating
/// the sampling plan on first entry.
fn enter_step(draft: &mut AuditRecord, step: AuditStep) {
    draft.current_step = step;
    let floor = step.status_floor();
    if draft.status < floor {
        draft.status = floor;
    }
    if step == AuditStep::SamplePlan && draft.samples.is_empty() {
        draft.samples = initialize_samples();
    }
}
