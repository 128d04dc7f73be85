//! Logging setup for the `repo-status` binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";
const DEBUG_LOG_FILTER: &str = "warn,goobits_repo_status=debug";

/// Picks the filter directives: `RUST_LOG` wins, then `--debug`, then warnings only
fn filter_directives(debug: bool, env_filter: Option<&str>) -> String {
    match env_filter {
        Some(directives) if !directives.trim().is_empty() => directives.to_string(),
        _ if debug => DEBUG_LOG_FILTER.to_string(),
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Initialize tracing with stderr output so logs never mix with the report on stdout.
pub fn init_logging(debug: bool) -> Result<()> {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(filter_directives(debug, env_filter.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
