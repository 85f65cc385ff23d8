use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hatch settings`.
pub async fn handle(
    action: &SettingsCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SettingsCommands::Get => output(&ctx.store.get_settings().await?, flags.format),
        SettingsCommands::Set {
            frequency,
            reminder_days,
            good,
            fair,
            default_auditor,
            auto_assign,
        } => {
            let mut settings = ctx.store.get_settings().await?;
            if let Some(frequency) = frequency {
                settings.frequency = parse_enum(frequency, "frequency")?;
            }
            if let Some(days) = reminder_days {
                settings.reminder_days_before = *days;
            }
            if let Some(good) = good {
                settings.scoring_thresholds.good = *good;
            }
            if let Some(fair) = fair {
                settings.scoring_thresholds.fair = *fair;
            }
            if let Some(auditor) = default_auditor {
                settings.default_auditor.clone_from(auditor);
            }
            if let Some(auto_assign) = auto_assign {
                settings.auto_assign = *auto_assign;
            }
            ctx.store.save_settings(&settings).await?;
            output(&settings, flags.format)
        }
    }
}
