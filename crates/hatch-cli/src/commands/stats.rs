use serde::Serialize;

use hatch_core::responses::AuditStatistics;
use hatch_core::schedule::{days_until_due, quarter_label, reminder_active};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    #[serde(flatten)]
    statistics: AuditStatistics,
    quarter: String,
    days_until_due: Option<i64>,
    reminder_due: bool,
}

/// Handle `hatch stats`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let statistics = ctx.store.audit_statistics_on(today).await?;
    let settings = ctx.store.get_settings().await?;

    let days = statistics.next_due_date.map(|due| days_until_due(due, today));
    let reminder_due = settings.notifications.audit_due
        && statistics
            .next_due_date
            .is_some_and(|due| reminder_active(due, today, settings.reminder_days_before));

    let report = StatsReport {
        statistics,
        quarter: quarter_label(today),
        days_until_due: days,
        reminder_due,
    };
    output(&report, flags.format)
}
