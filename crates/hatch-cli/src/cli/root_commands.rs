use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuditCommands, AuditorCommands, DataCommands, HistoryCommands, LocationCommands,
    SettingsCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// The audit in progress.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Completed and approved audits.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Audit frequency, reminders, and scoring thresholds.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Hatchery locations.
    Location {
        #[command(subcommand)]
        action: LocationCommands,
    },
    /// Auditors.
    Auditor {
        #[command(subcommand)]
        action: AuditorCommands,
    },
    /// Backup, restore, and storage usage.
    Data {
        #[command(subcommand)]
        action: DataCommands,
    },
    /// Dashboard statistics and the next due date.
    Stats,
    /// Print the JSON schema of a data type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: audit, bundle, settings, summary, statistics
    pub type_name: String,
}
