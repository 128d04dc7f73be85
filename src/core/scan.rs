//! Scan orchestration: one synchronous walk, then batched status collection
//!
//! Batches never exceed the configured concurrency, and a batch must finish completely
//! before the next one starts, so the number of git processes in flight is bounded by
//! the limit at all times. Results keep discovery order regardless of completion order.

use anyhow::{Context, Result};
use futures::future::join_all;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

use super::config::ScanConfiguration;
use super::discovery::{ensure_scan_root, walk_repositories};
use super::ignore::IgnoreMatcher;
use crate::git::{collect_status, CollectOptions, GitRunner, RepositoryStatus, SystemGit};

/// Outcome of a complete scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// One record per discovered repository, in discovery order
    pub repositories: Vec<RepositoryStatus>,
    /// Time spent walking the tree
    pub traversal_elapsed: Duration,
    /// Time from the start of the walk until the last batch finished
    pub total_elapsed: Duration,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

/// Walks the scan root on a blocking thread
async fn discover(config: &ScanConfiguration) -> Result<Vec<PathBuf>> {
    let matcher = IgnoreMatcher::new(config.ignore_patterns())?;
    let root = config.root().to_path_buf();
    let max_depth = config.max_depth();

    tokio::task::spawn_blocking(move || walk_repositories(&root, &matcher, max_depth))
        .await
        .context("Repository discovery task failed")
}

/// Runs a full scan
///
/// `on_progress(processed, total)` is called once after every batch; the last call is
/// always `(total, total)`, and an empty scan reports `(0, 0)` once. Only a missing or
/// non-directory root makes the scan fail.
pub async fn run_scan<R, F>(
    config: &ScanConfiguration,
    runner: &R,
    mut on_progress: F,
) -> Result<ScanReport>
where
    R: GitRunner + ?Sized,
    F: FnMut(usize, usize),
{
    ensure_scan_root(config.root())?;

    let start_time = Instant::now();
    let repositories = discover(config).await?;
    let traversal_elapsed = start_time.elapsed();

    let total = repositories.len();
    debug!(
        root = %config.root().display(),
        total,
        elapsed_ms = traversal_elapsed.as_millis() as u64,
        "repository discovery finished"
    );

    if repositories.is_empty() {
        on_progress(0, 0);
        return Ok(ScanReport {
            repositories: Vec::new(),
            traversal_elapsed,
            total_elapsed: start_time.elapsed(),
        });
    }

    let options = CollectOptions::with_last_commit(config.verbose());
    let root = config.root();
    let mut statuses = Vec::with_capacity(total);
    let mut processed = 0;

    for batch in repositories.chunks(config.concurrency()) {
        // join_all yields results in input order, one slot per repository
        let results = join_all(
            batch
                .iter()
                .map(|repo_path| collect_status(runner, repo_path, root, &options)),
        )
        .await;

        statuses.extend(results);
        processed += batch.len();
        debug!(processed, total, "status batch finished");
        on_progress(processed, total);
    }

    Ok(ScanReport {
        repositories: statuses,
        traversal_elapsed,
        total_elapsed: start_time.elapsed(),
    })
}

/// Runs a scan against the `git` binary on `PATH`
pub async fn scan_with_system_git<F>(
    config: &ScanConfiguration,
    on_progress: F,
) -> Result<ScanReport>
where
    F: FnMut(usize, usize),
{
    run_scan(config, &SystemGit, on_progress).await
}
