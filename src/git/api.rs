//! Public API for git operations.
//!
//! This module provides the stable public API for git-related functionality:
//! - Command execution behind the [`GitRunner`] capability
//! - Per-repository status collection
//!
//! ## Example: Collecting one repository
//!
//! ```rust,no_run
//! use goobits_repo_status::git::{collect_status, CollectOptions, SystemGit};
//! use std::path::Path;
//!
//! async fn check(path: &Path) {
//!     let status = collect_status(&SystemGit, path, path, &CollectOptions::default()).await;
//!     if status.is_dirty() {
//!         println!("{} has uncommitted changes", status.name());
//!     }
//! }
//! ```

// Command execution
pub use super::operations::{run_git, GitOutput, GitRunner, SystemGit};

// Status collection
pub use super::status::{collect_status, CollectOptions, LastCommit, RepositoryStatus};
