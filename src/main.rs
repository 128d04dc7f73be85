//! repo-status: report uncommitted, unpushed and stashed work across many git repositories

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use goobits_repo_status::commands::{handle_status_command, StatusArgs};
use goobits_repo_status::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "repo-status",
    version,
    about = "Find git repositories and show uncommitted, unpushed and stashed work"
)]
struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show the last commit (author, date, subject) for each repository
    #[arg(short, long)]
    verbose: bool,

    /// Directory names to skip; `*` matches any characters. Repeatable or comma-separated
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Do not skip the built-in directories (node_modules, vendor, target, ...)
    #[arg(long)]
    no_default_ignore: bool,

    /// Maximum directory depth below PATH
    #[arg(short = 'd', long, value_name = "N", conflicts_with = "no_depth_limit")]
    max_depth: Option<usize>,

    /// Walk the whole tree regardless of depth
    #[arg(long)]
    no_depth_limit: bool,

    /// Number of repositories checked at once (1-16)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Check one repository at a time
    #[arg(long, conflicts_with = "jobs")]
    sequential: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Only list repositories with changes, unpushed commits or stashes
    #[arg(long)]
    only_changes: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long)]
    debug: bool,

    /// Configuration file (defaults to ~/.config/repo-status/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl From<Cli> for StatusArgs {
    fn from(cli: Cli) -> Self {
        StatusArgs {
            path: cli.path,
            verbose: cli.verbose,
            ignore: cli.ignore,
            no_default_ignore: cli.no_default_ignore,
            max_depth: cli.max_depth,
            no_depth_limit: cli.no_depth_limit,
            jobs: cli.jobs,
            sequential: cli.sequential,
            json: cli.json,
            only_changes: cli.only_changes,
            config: cli.config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;
    handle_status_command(cli.into()).await
}
