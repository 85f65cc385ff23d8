use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AuditorCommands, LocationCommands};
use crate::context::AppContext;
use crate::output::{output, output_outcome};

/// Handle `hatch location`.
pub async fn handle_location(
    action: &LocationCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LocationCommands::List => output(&ctx.store.get_locations().await?, flags.format),
        LocationCommands::Add { name, code } => {
            output(&ctx.store.add_location(name, code).await?, flags.format)
        }
        LocationCommands::Remove { id } => {
            output_outcome(ctx.store.remove_location(id).await, flags.format)
        }
    }
}

/// Handle `hatch auditor`.
pub async fn handle_auditor(
    action: &AuditorCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuditorCommands::List => output(&ctx.store.get_auditors().await?, flags.format),
        AuditorCommands::Add { name, role } => {
            output(&ctx.store.add_auditor(name, role).await?, flags.format)
        }
        AuditorCommands::Remove { id } => {
            output_outcome(ctx.store.remove_auditor(id).await, flags.format)
        }
    }
}
