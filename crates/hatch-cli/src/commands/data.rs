use std::io::Read;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DataCommands;
use crate::context::AppContext;
use crate::output::{output, output_outcome};

/// Handle `hatch data`.
pub async fn handle(
    action: &DataCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DataCommands::Export { output: path } => {
            let bundle = ctx.store.export_all_data().await?;
            match path {
                Some(path) => {
                    let text = serde_json::to_string_pretty(&bundle)?;
                    std::fs::write(path, text)
                        .with_context(|| format!("failed to write backup to {path}"))?;
                    tracing::info!(path = %path, audits = bundle.audits.len(), "backup written");
                    let written = serde_json::json!({ "path": path, "audits": bundle.audits.len() });
                    output(&written, flags.format)
                }
                None => output(&bundle, flags.format),
            }
        }
        DataCommands::Import { path } => {
            let text = if path == "-" {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read backup from stdin")?;
                text
            } else {
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read backup {path}"))?
            };
            let summary = ctx.store.import_data(&text).await?;
            output(&summary, flags.format)
        }
        DataCommands::Clear { yes } => {
            if !*yes {
                anyhow::bail!("refusing to delete all data without --yes");
            }
            output_outcome(ctx.store.clear_all_data().await, flags.format)
        }
        DataCommands::Info => output(&ctx.store.storage_info().await?, flags.format),
    }
}
