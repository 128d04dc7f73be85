//! Configuration constants and settings

use std::path::{Path, PathBuf};
use std::time::Duration;

// Concurrency Configuration
//
// Status collection is I/O-bound (short-lived git subprocesses). The cap protects the
// process and file-descriptor budget on large scans, whatever the host reports.

/// Hard ceiling for simultaneous repository collections
pub const MAX_CONCURRENCY: usize = 16;

/// Clamps a requested concurrency into `[1, MAX_CONCURRENCY]`
pub fn clamp_concurrency(requested: usize) -> usize {
    requested.clamp(1, MAX_CONCURRENCY)
}

/// Determines the concurrency limit for status collection based on CLI args and system resources
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag (or config file) → N, clamped
/// 3. Smart default → min(CPU_CORES + 2, 16)
pub fn resolve_concurrency(jobs: Option<usize>, sequential: bool) -> usize {
    if sequential {
        return 1;
    }

    if let Some(n) = jobs {
        return clamp_concurrency(n);
    }

    clamp_concurrency(num_cpus::get() + 2)
}

// Git query timeouts
pub const STATUS_QUERY_TIMEOUT: Duration = Duration::from_secs(5);
pub const LAST_COMMIT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

// Display constants
pub const DEFAULT_REPO_NAME: &str = "current";
pub const UNKNOWN_BRANCH: &str = "unknown";
pub const NO_REPOS_MESSAGE: &str = "No git repositories found.";
pub const PROGRESS_CHARS: &str = "##-";
pub const PROGRESS_TEMPLATE: &str = "{prefix:.bold} [{bar:30}] {pos}/{len} {wide_msg}";
pub const PATH_DISPLAY_WIDTH: usize = 40;

/// Name of the metadata directory that marks a repository root
pub const GIT_METADATA_DIR: &str = ".git";

// Directories to skip during repository search
pub const SKIP_DIRECTORIES: &[&str] = &[
    "node_modules",
    "vendor",
    "target",
    "build",
    ".next",
    "dist",
    "__pycache__",
    ".venv",
    "venv",
];

/// Returns the built-in ignore set as owned patterns
pub fn default_ignore_patterns() -> Vec<String> {
    SKIP_DIRECTORIES.iter().map(|s| (*s).to_string()).collect()
}

// Repository discovery configuration
pub const MAX_SCAN_DEPTH: usize = 10; // Default maximum directory depth to scan
pub const ESTIMATED_REPO_COUNT: usize = 50; // Pre-allocation hint for collections

/// Immutable settings for one scan run
///
/// Built once by the command layer and then only read. `max_depth == None` means
/// traversal is unbounded.
#[derive(Debug, Clone)]
pub struct ScanConfiguration {
    root: PathBuf,
    verbose: bool,
    ignore_patterns: Vec<String>,
    max_depth: Option<usize>,
    concurrency: usize,
}

impl ScanConfiguration {
    /// Creates a configuration with the default ignore set, depth and concurrency
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            verbose: false,
            ignore_patterns: default_ignore_patterns(),
            max_depth: Some(MAX_SCAN_DEPTH),
            concurrency: resolve_concurrency(None, false),
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_ignore_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the concurrency limit, clamped into `[1, MAX_CONCURRENCY]`
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = clamp_concurrency(concurrency);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore_patterns
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}
