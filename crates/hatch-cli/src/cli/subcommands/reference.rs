use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum LocationCommands {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
    },
    Remove { id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum AuditorCommands {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        role: String,
    },
    Remove { id: String },
}
