use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings.
    Get,
    /// Update individual settings; unspecified values are kept.
    Set {
        /// monthly, quarterly, semi_annual, annual
        #[arg(long)]
        frequency: Option<String>,
        #[arg(long)]
        reminder_days: Option<u32>,
        /// Highest environmental score still classified GOOD.
        #[arg(long)]
        good: Option<u32>,
        /// Highest environmental score still classified FAIR.
        #[arg(long)]
        fair: Option<u32>,
        #[arg(long)]
        default_auditor: Option<String>,
        #[arg(long)]
        auto_assign: Option<bool>,
    },
}
