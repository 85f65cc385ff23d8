use anyhow::Context;
use serde::Serialize;

use hatch_core::enums::{AuditSection, AuditStep};
use hatch_workflow::{AuditSession, SectionUpdate, WorkflowError};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::commands::shared::parse::{parse_category, parse_date, parse_enum, sample_index};
use crate::context::AppContext;
use crate::output::{output, output_outcome};

/// Draft position and progress, printed after navigation and sample edits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftProgress<'a> {
    id: &'a str,
    audit_number: &'a str,
    status: String,
    current_step: AuditStep,
    samples_total: usize,
    samples_collected: usize,
    samples_scored: usize,
    collection_percent: u8,
}

impl<'a> DraftProgress<'a> {
    fn of(session: &'a AuditSession) -> anyhow::Result<Self> {
        let draft = session.draft().ok_or(WorkflowError::NoDraft)?;
        Ok(Self {
            id: &draft.id,
            audit_number: &draft.audit_number,
            status: draft.status.to_string(),
            current_step: draft.current_step,
            samples_total: draft.samples.total(),
            samples_collected: draft.samples.collected(),
            samples_scored: draft.samples.scored(),
            collection_percent: draft.samples.progress_percent(),
        })
    }
}

/// Handle `hatch audit`.
pub async fn handle(
    action: &AuditCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = ctx.session().await?;

    match action {
        AuditCommands::Start { date } => {
            let record = match date {
                Some(raw) => session.start_new_audit_on(parse_date(raw)?).await?,
                None => session.start_new_audit().await?,
            };
            output(record, flags.format)
        }
        AuditCommands::Show => {
            let draft = session.draft().ok_or(WorkflowError::NoDraft)?;
            output(draft, flags.format)
        }
        AuditCommands::Next => {
            session.next().await?;
            output(&DraftProgress::of(&session)?, flags.format)
        }
        AuditCommands::Prev => {
            session.previous().await?;
            output(&DraftProgress::of(&session)?, flags.format)
        }
        AuditCommands::Goto { step } => {
            session.go_to_step(parse_enum(step, "step")?).await?;
            output(&DraftProgress::of(&session)?, flags.format)
        }
        AuditCommands::Validate { step } => {
            let issues = match step {
                Some(step) => session.validate_step(parse_enum(step, "step")?)?,
                None => session.validate_all()?,
            };
            output(&issues, flags.format)
        }
        AuditCommands::Section {
            section,
            json,
            file,
        } => {
            let section: AuditSection = parse_enum(section, "section")?;
            let text = match (json, file) {
                (Some(json), _) => json.clone(),
                (None, Some(path)) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {path}"))?,
                (None, None) => anyhow::bail!("provide the section document with --json or --file"),
            };
            let value: serde_json::Value =
                serde_json::from_str(&text).context("section document is not valid JSON")?;
            let update = SectionUpdate::from_json(section, value)?;
            output_outcome(session.update_section(update).await, flags.format)
        }
        AuditCommands::PlanReset { yes } => {
            output_outcome(session.reset_sample_plan(*yes).await, flags.format)
        }
        AuditCommands::Collect { category, index } => {
            let category = parse_category(category)?;
            match index {
                Some(number) => {
                    session
                        .mark_collected(category, sample_index(*number)?)
                        .await?;
                }
                None => {
                    session.collect_all(category).await?;
                }
            }
            output(&DraftProgress::of(&session)?, flags.format)
        }
        AuditCommands::RecordResult {
            category,
            index,
            aspergillus,
            colony,
        } => {
            let category = parse_category(category)?;
            let score = session
                .record_result(category, sample_index(*index)?, *aspergillus, *colony)
                .await?;
            output(&serde_json::json!({ "score": score }), flags.format)
        }
        AuditCommands::Incubate => {
            session.start_incubation().await?;
            let draft = session.draft().ok_or(WorkflowError::NoDraft)?;
            output(&draft.incubation, flags.format)
        }
        AuditCommands::Complete => {
            let record = session.complete().await?;
            output(&record, flags.format)
        }
        AuditCommands::Discard => output_outcome(session.discard().await, flags.format),
    }
}
