//! # goobits-repo-status
//!
//! `goobits-repo-status` finds every Git repository below a directory and reports,
//! for each one, uncommitted changes, commits not yet on the upstream branch and
//! stashed work. It powers the `repo-status` CLI tool.
//!
//! ## Core Features
//!
//! - **Bounded Discovery**: Iterative, depth-limited walk that stops at repository roots
//!   and skips ignored directories (`node_modules`, `target`, wildcards like `*.egg-info`).
//! - **Bounded Concurrency**: Status queries run in batches that never exceed the
//!   configured limit, with a per-command timeout.
//! - **Graceful Degradation**: A failing git query only blanks its own field; every
//!   discovered repository is reported.
//!
//! ## Example
//!
//! ```rust,no_run
//! use goobits_repo_status::core::{scan_with_system_git, ScanConfiguration};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ScanConfiguration::new(".").with_verbose(true);
//!     let report = scan_with_system_git(&config, |done, total| {
//!         eprintln!("{done}/{total}");
//!     })
//!     .await?;
//!     for repo in &report.repositories {
//!         println!("{}: {} ({} ahead)", repo.name(), repo.branch, repo.ahead);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod logging;
pub mod utils;
