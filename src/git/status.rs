//! Per-repository status collection
//!
//! Each field comes from its own git query. A failed, non-zero or timed-out query
//! degrades only that field to its neutral value; the record itself is always produced.

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::trace;

use super::operations::GitRunner;
use crate::core::config::{LAST_COMMIT_QUERY_TIMEOUT, STATUS_QUERY_TIMEOUT, UNKNOWN_BRANCH};
use crate::utils::relative_display;

// Git command arguments
const GIT_STATUS_PORCELAIN_ARGS: &[&str] = &["status", "--porcelain"];
const GIT_REV_PARSE_HEAD_ARGS: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];
const GIT_AHEAD_COUNT_ARGS: &[&str] = &["rev-list", "--count", "@{upstream}..HEAD"];
const GIT_STASH_LIST_ARGS: &[&str] = &["stash", "list"];
const GIT_LAST_COMMIT_ARGS: &[&str] = &["log", "-1", "--format=%an%x1f%cr%x1f%s"];

const FIELD_SEPARATOR: char = '\x1f';

/// Author, relative date and subject of the most recent commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastCommit {
    pub author: String,
    pub relative_date: String,
    pub subject: String,
}

impl LastCommit {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.splitn(3, FIELD_SEPARATOR);
        let author = parts.next()?.to_string();
        let relative_date = parts.next()?.to_string();
        let subject = parts.next()?.to_string();
        Some(Self {
            author,
            relative_date,
            subject,
        })
    }
}

/// Non-UTF-8 bytes become U+FFFD instead of failing the whole report
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Status snapshot for one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    /// Repository root as discovered
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Raw `git status --porcelain` output; empty means clean
    pub status: String,
    /// Current branch, `HEAD` when detached, `unknown` when it could not be read
    pub branch: String,
    /// Commits on the current branch missing from its upstream; zero without upstream
    pub ahead: u32,
    /// Number of stash entries
    pub stashes: u32,
    /// Most recent commit, only collected in verbose mode
    pub last_commit: Option<LastCommit>,
    /// `path` relative to the scan root (`.` for the root itself)
    pub relative_path: String,
}

impl RepositoryStatus {
    /// All-defaults record: clean, unknown branch, nothing ahead or stashed
    pub fn unknown(path: &Path, scan_root: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            status: String::new(),
            branch: UNKNOWN_BRANCH.to_string(),
            ahead: 0,
            stashes: 0,
            last_commit: None,
            relative_path: relative_display(path, scan_root),
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.status.trim().is_empty()
    }

    pub fn has_unpushed(&self) -> bool {
        self.ahead > 0
    }

    pub fn has_stashes(&self) -> bool {
        self.stashes > 0
    }

    /// True when anything would be lost by deleting the working tree
    pub fn needs_attention(&self) -> bool {
        self.is_dirty() || self.has_unpushed() || self.has_stashes()
    }

    /// Number of entries in the porcelain output
    pub fn changed_files(&self) -> usize {
        self.status.lines().filter(|line| !line.trim().is_empty()).count()
    }

    /// Short display name: the directory name, or the relative path for the scan root
    pub fn name(&self) -> &str {
        if self.relative_path == "." {
            self.path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(crate::core::config::DEFAULT_REPO_NAME)
        } else {
            &self.relative_path
        }
    }
}

/// Knobs for a single collection
#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    pub want_last_commit: bool,
    pub status_timeout: Duration,
    pub last_commit_timeout: Duration,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            want_last_commit: false,
            status_timeout: STATUS_QUERY_TIMEOUT,
            last_commit_timeout: LAST_COMMIT_QUERY_TIMEOUT,
        }
    }
}

impl CollectOptions {
    pub fn with_last_commit(want_last_commit: bool) -> Self {
        Self {
            want_last_commit,
            ..Self::default()
        }
    }
}

/// Runs one query and returns its stdout, or `None` if it failed in any way
async fn query<R: GitRunner + ?Sized>(
    runner: &R,
    path: &Path,
    args: &[&str],
    timeout: Duration,
) -> Option<String> {
    match runner.run(path, args, timeout).await {
        Ok(output) if output.success => Some(output.stdout),
        Ok(_) => {
            trace!(path = %path.display(), command = %args.join(" "), "git query exited non-zero");
            None
        }
        Err(e) => {
            trace!(path = %path.display(), command = %args.join(" "), error = %e, "git query failed");
            None
        }
    }
}

/// Collects the status of one repository
///
/// Queries run one after another, so a collection never has more than one git process
/// in flight. Never fails: every field falls back to its neutral value.
pub async fn collect_status<R: GitRunner + ?Sized>(
    runner: &R,
    repo_path: &Path,
    scan_root: &Path,
    options: &CollectOptions,
) -> RepositoryStatus {
    let mut status = RepositoryStatus::unknown(repo_path, scan_root);
    let timeout = options.status_timeout;

    if let Some(porcelain) = query(runner, repo_path, GIT_STATUS_PORCELAIN_ARGS, timeout).await {
        status.status = porcelain;
    }

    if let Some(branch) = query(runner, repo_path, GIT_REV_PARSE_HEAD_ARGS, timeout).await {
        let branch = branch.trim();
        if !branch.is_empty() {
            status.branch = branch.to_string();
        }
    }

    // Fails when no upstream is configured; zero is the intended answer then
    if let Some(count) = query(runner, repo_path, GIT_AHEAD_COUNT_ARGS, timeout).await {
        status.ahead = count.trim().parse().unwrap_or(0);
    }

    if let Some(stashes) = query(runner, repo_path, GIT_STASH_LIST_ARGS, timeout).await {
        status.stashes = stashes.lines().filter(|line| !line.trim().is_empty()).count() as u32;
    }

    if options.want_last_commit {
        status.last_commit = query(
            runner,
            repo_path,
            GIT_LAST_COMMIT_ARGS,
            options.last_commit_timeout,
        )
        .await
        .and_then(|line| LastCommit::parse(line.trim()));
    }

    status
}
