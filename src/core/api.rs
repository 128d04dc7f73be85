//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository discovery and ignore matching
//! - Scan orchestration and reporting
//! - Statistics and progress display
//! - Configuration utilities
//!
//! Internal implementation details are not exposed through this API.

// Configuration
pub use super::config::{
    clamp_concurrency, default_ignore_patterns, resolve_concurrency, ScanConfiguration,
    MAX_CONCURRENCY, MAX_SCAN_DEPTH, SKIP_DIRECTORIES, UNKNOWN_BRANCH,
};
pub use super::user_config::{default_config_path, FileConfig, CONFIG_ENV_VAR};

// Discovery
pub use super::discovery::{ensure_scan_root, is_repository_root, walk_repositories};
pub use super::ignore::IgnoreMatcher;

// Scanning
pub use super::scan::{run_scan, scan_with_system_git, ScanReport};

// Reporting
pub use super::progress::ScanProgress;
pub use super::stats::ScanStatistics;

// User-facing messages
pub use super::config::NO_REPOS_MESSAGE;

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};
