use hatch_core::entities::AuditRecord;
use hatch_core::enums::AuditStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, output_outcome};

/// One row of `hatch history list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuditRow {
    id: String,
    audit_number: String,
    date: String,
    location: String,
    status: AuditStatus,
    environmental_score: Option<u32>,
    overall: Option<String>,
    issues: Option<usize>,
}

impl From<&AuditRecord> for AuditRow {
    fn from(record: &AuditRecord) -> Self {
        Self {
            id: record.id.clone(),
            audit_number: record.audit_number.clone(),
            date: record.info.date.to_string(),
            location: record.info.location.clone(),
            status: record.status,
            environmental_score: record.summary.as_ref().map(|s| s.environmental.score),
            overall: record
                .summary
                .as_ref()
                .map(|s| s.overall_status.to_string()),
            issues: record.issues.as_ref().map(Vec::len),
        }
    }
}

/// Handle `hatch history`.
pub async fn handle(
    action: &HistoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List { status, limit } => {
            let mut audits = ctx.store.get_all_audits().await?;
            if let Some(status) = status {
                let status: AuditStatus = parse_enum(status, "status")?;
                audits.retain(|a| a.status == status);
            }
            audits.sort_by(|a, b| {
                b.info
                    .date
                    .cmp(&a.info.date)
                    .then_with(|| b.audit_number.cmp(&a.audit_number))
            });
            if let Some(limit) = limit {
                audits.truncate(*limit);
            }
            let rows = audits.iter().map(AuditRow::from).collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        HistoryCommands::Get { id } => {
            let audits = ctx.store.get_all_audits().await?;
            match audits
                .into_iter()
                .find(|a| a.audit_number == *id)
            {
                Some(record) => output(&record, flags.format),
                None => output(&ctx.store.get_audit(id).await?, flags.format),
            }
        }
        HistoryCommands::Delete { id } => {
            output_outcome(ctx.store.delete_audit(id).await, flags.format)
        }
        HistoryCommands::Approve { id } => {
            let record = ctx.store.approve_audit(id).await?;
            output(&AuditRow::from(&record), flags.format)
        }
    }
}
