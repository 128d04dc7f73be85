//! Repository status command implementation
//!
//! Merges command-line flags with the configuration file, runs the scan and renders
//! the result either as an aligned table or as JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::core::{
    default_ignore_patterns, resolve_concurrency, scan_with_system_git, set_terminal_title,
    set_terminal_title_and_flush, FileConfig, ScanConfiguration, ScanProgress, ScanReport,
    ScanStatistics, MAX_SCAN_DEPTH, NO_REPOS_MESSAGE,
};
use crate::git::RepositoryStatus;

const RUNNING_TITLE: &str = "🔍 repo-status";
const DONE_TITLE: &str = "✅ repo-status";

/// Options for the status command, as parsed from the command line
#[derive(Debug, Clone, Default)]
pub struct StatusArgs {
    pub path: PathBuf,
    pub verbose: bool,
    pub ignore: Vec<String>,
    pub no_default_ignore: bool,
    pub max_depth: Option<usize>,
    pub no_depth_limit: bool,
    pub jobs: Option<usize>,
    pub sequential: bool,
    pub json: bool,
    pub only_changes: bool,
    pub config: Option<PathBuf>,
}

/// Builds the scan configuration: command line first, then config file, then defaults
pub fn build_configuration(args: &StatusArgs, file: &FileConfig) -> ScanConfiguration {
    let use_defaults = !args.no_default_ignore && file.default_ignore.unwrap_or(true);

    let mut patterns = if use_defaults {
        default_ignore_patterns()
    } else {
        Vec::new()
    };
    patterns.extend(file.ignore.iter().cloned());
    // --ignore accepts repeated flags and comma-separated lists
    patterns.extend(
        args.ignore
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
            .map(str::to_string),
    );

    let max_depth = if args.no_depth_limit {
        None
    } else {
        Some(args.max_depth.or(file.max_depth).unwrap_or(MAX_SCAN_DEPTH))
    };

    let concurrency = resolve_concurrency(args.jobs.or(file.jobs), args.sequential);

    // `.` has no file name; resolve it so a repository at the root shows its real name
    let root = std::fs::canonicalize(&args.path).unwrap_or_else(|_| args.path.clone());

    ScanConfiguration::new(root)
        .with_verbose(args.verbose || file.verbose.unwrap_or(false))
        .with_ignore_patterns(patterns)
        .with_max_depth(max_depth)
        .with_concurrency(concurrency)
}

/// Handles the repository status command
pub async fn handle_status_command(args: StatusArgs) -> Result<()> {
    let file_config = FileConfig::load(args.config.as_deref())?;
    let config = build_configuration(&args, &file_config);

    set_terminal_title(RUNNING_TITLE);

    let show_progress = !args.json && std::io::stderr().is_terminal();
    let progress = ScanProgress::new(show_progress)?;

    let result = scan_with_system_git(&config, |processed, total| {
        progress.update(processed, total);
    })
    .await;
    progress.finish();

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            set_terminal_title_and_flush(DONE_TITLE);
            return Err(e);
        }
    };

    if args.json {
        println!("{}", render_json(&config, &report)?);
    } else if report.is_empty() {
        println!("{NO_REPOS_MESSAGE}");
    } else {
        print!("{}", render_table(&report, config.verbose(), args.only_changes));

        let stats = ScanStatistics::from_statuses(&report.repositories);
        let detailed_summary = stats.generate_detailed_summary();
        if !detailed_summary.is_empty() {
            println!("\n{}", "━".repeat(70));
            println!("{detailed_summary}");
            println!("{}", "━".repeat(70));
        }
        println!();
        println!("{}", stats.generate_summary(report.total_elapsed));
    }

    set_terminal_title_and_flush(DONE_TITLE);
    Ok(())
}

/// Status symbol for a repository row
fn status_symbol(status: &RepositoryStatus) -> &'static str {
    if status.is_dirty() {
        "🔴"
    } else if status.needs_attention() {
        "🟡"
    } else {
        "🟢"
    }
}

/// Human-readable markers for everything that needs attention
fn status_markers(status: &RepositoryStatus) -> String {
    let mut markers = Vec::new();
    if status.is_dirty() {
        markers.push(format!("{} changed", status.changed_files()));
    }
    if status.has_unpushed() {
        markers.push(format!("↑{}", status.ahead));
    }
    if status.has_stashes() {
        markers.push(format!("{} stashed", status.stashes));
    }
    if markers.is_empty() {
        "clean".to_string()
    } else {
        markers.join(" • ")
    }
}

/// Renders one aligned row per repository, in scan order
pub fn render_table(report: &ScanReport, verbose: bool, only_changes: bool) -> String {
    let rows: Vec<&RepositoryStatus> = report
        .repositories
        .iter()
        .filter(|status| !only_changes || status.needs_attention())
        .collect();

    // Padding counts chars, so widths must too
    let name_width = rows.iter().map(|s| s.name().chars().count()).max().unwrap_or(0);
    let branch_width = rows.iter().map(|s| s.branch.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for status in rows {
        output.push_str(&format!(
            "{} {:name_width$}  {:branch_width$}  {}\n",
            status_symbol(status),
            status.name(),
            status.branch,
            status_markers(status),
        ));

        if verbose {
            if let Some(commit) = &status.last_commit {
                output.push_str(&format!(
                    "   └─ {}, {}: {}\n",
                    commit.author, commit.relative_date, commit.subject
                ));
            }
        }
    }
    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    repositories: &'a [RepositoryStatus],
    traversal_ms: u64,
    total_ms: u64,
}

/// Renders the full report as pretty-printed JSON
pub fn render_json(config: &ScanConfiguration, report: &ScanReport) -> Result<String> {
    let json = JsonReport {
        root: config.root().to_string_lossy().into_owned(),
        repositories: &report.repositories,
        traversal_ms: report.traversal_elapsed.as_millis() as u64,
        total_ms: report.total_elapsed.as_millis() as u64,
    };
    serde_json::to_string_pretty(&json).context("Failed to serialize scan report")
}
