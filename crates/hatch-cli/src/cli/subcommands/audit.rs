use clap::Subcommand;

/// Commands on the audit in progress.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// Start a new audit, replacing any unfinished draft.
    Start {
        /// Audit date (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the draft.
    Show,
    /// Advance one step.
    Next,
    /// Go back one step.
    Prev,
    /// Jump to a step (e.g. sample_plan, results).
    Goto { step: String },
    /// List validation issues for one step or the whole draft.
    Validate {
        #[arg(long)]
        step: Option<String>,
    },
    /// Replace a section (info, vaccine_storage, equipment, techniques,
    /// samples, incubation) with a JSON document.
    Section {
        section: String,
        /// Inline JSON document.
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,
        /// Path to a JSON document.
        #[arg(long)]
        file: Option<String>,
    },
    /// Regenerate the sampling plan.
    PlanReset {
        /// Discard entered sample data.
        #[arg(long)]
        yes: bool,
    },
    /// Mark samples collected (one sample with --index, else the whole category).
    Collect {
        /// Category key (H, S, HV, SV, HHV, GV, M_CHICK, ...).
        category: String,
        /// 1-based sample number.
        #[arg(long)]
        index: Option<usize>,
    },
    /// Record colony counts for a collected sample.
    #[command(name = "result")]
    RecordResult {
        category: String,
        /// 1-based sample number.
        index: usize,
        #[arg(long)]
        aspergillus: u32,
        /// Other-mold colony count.
        #[arg(long)]
        colony: u32,
    },
    /// Start plate incubation.
    Incubate,
    /// Score and finalize the draft.
    Complete,
    /// Abandon the draft.
    Discard,
}
