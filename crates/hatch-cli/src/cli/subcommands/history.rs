use clap::Subcommand;

/// Commands on persisted audits.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List audits, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Get an audit by id or audit number.
    Get { id: String },
    /// Delete an audit.
    Delete { id: String },
    /// Approve a completed audit.
    Approve { id: String },
}
