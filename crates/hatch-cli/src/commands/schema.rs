use hatch_core::bundle::ExportBundle;
use hatch_core::entities::{AuditRecord, AuditSummary, Settings};
use hatch_core::responses::AuditStatistics;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `hatch schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "audit" => schema_for!(AuditRecord),
        "bundle" => schema_for!(ExportBundle),
        "settings" => schema_for!(Settings),
        "summary" => schema_for!(AuditSummary),
        "statistics" => schema_for!(AuditStatistics),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected audit, bundle, settings, summary, statistics)"
        ),
    };
    output(&schema, flags.format)
}
