use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hatch` binary.
#[derive(Debug, Parser)]
#[command(name = "hatch", version, about = "Hatchery vaccination audits")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Resolve global flags; an explicit `--format` beats the configured default.
    #[must_use]
    pub fn global_flags(&self, configured_format: Option<&str>) -> GlobalFlags {
        let format = self
            .format
            .or_else(|| configured_format.and_then(OutputFormat::from_config))
            .unwrap_or(OutputFormat::Json);
        GlobalFlags {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
