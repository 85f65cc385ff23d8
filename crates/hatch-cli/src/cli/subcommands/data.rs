use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum DataCommands {
    /// Write a full backup (stdout when no path is given).
    Export {
        #[arg(long)]
        output: Option<String>,
    },
    /// Restore sections from a backup file (`-` reads stdin).
    Import { path: String },
    /// Delete all stored data.
    Clear {
        #[arg(long)]
        yes: bool,
    },
    /// Storage usage against the quota.
    Info,
}
