use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("hatch error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if let cli::Commands::Schema(args) = &cli.command {
        let flags = cli.global_flags(None);
        return commands::schema::handle(args, &flags);
    }

    let project_root = resolve_project_root(cli.project.as_deref())?;
    load_project_dotenv(&project_root)?;
    let config = hatch_config::HatchConfig::load_from(&project_root)
        .context("failed to load hatchery configuration")?;
    let flags = cli.global_flags(Some(config.general.default_format.as_str()));

    let mut ctx = context::AppContext::init(&project_root, config)
        .await
        .context("failed to open audit storage")?;
    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HATCHERY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// `--project` if given (a `.hatchery` directory resolves to its parent),
/// otherwise the current directory.
fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    let Some(path) = project_override else {
        return std::env::current_dir().context("failed to read current directory");
    };
    let explicit = PathBuf::from(path);

    if explicit
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == hatch_config::PROJECT_DIR)
    {
        return explicit
            .parent()
            .map(Path::to_path_buf)
            .context("invalid --project path: '.hatchery' directory has no parent");
    }

    if explicit.is_dir() {
        return Ok(explicit);
    }

    anyhow::bail!(
        "invalid --project '{}': directory does not exist",
        explicit.display()
    );
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::resolve_project_root;

    #[test]
    fn project_dir_resolves_to_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        let hatchery = dir.path().join(".hatchery");
        std::fs::create_dir(&hatchery).unwrap();

        let root = resolve_project_root(hatchery.to_str()).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn missing_project_dir_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(resolve_project_root(missing.to_str()).is_err());
    }
}
