//! Git command execution
//!
//! Every query goes through [`GitRunner`] so the collector can be driven by the real
//! `git` binary or by a scripted runner in tests.

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Captured result of one git invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GitOutput {
    /// True when the process exited with status zero
    pub success: bool,
    /// Standard output with trailing whitespace removed
    pub stdout: String,
}

impl GitOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
        }
    }

    pub fn failed() -> Self {
        Self::default()
    }
}

/// Capability to run a git command in a working directory with a bounded wait
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Runs `git <args>` in `path`
    ///
    /// A non-zero exit is `Ok` with `success == false`; spawn failures and timeouts are `Err`.
    async fn run(&self, path: &Path, args: &[&str], timeout: Duration) -> Result<GitOutput>;
}

/// Runs the `git` executable found on `PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

#[async_trait]
impl GitRunner for SystemGit {
    async fn run(&self, path: &Path, args: &[&str], timeout: Duration) -> Result<GitOutput> {
        run_git(path, args, timeout).await
    }
}

/// Runs a git command in the specified directory with a timeout
///
/// stderr is discarded and the child is killed if the timeout elapses.
pub async fn run_git(path: &Path, args: &[&str], timeout: Duration) -> Result<GitOutput> {
    let result = tokio::time::timeout(
        timeout,
        Command::new("git")
            .args(args)
            .current_dir(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output(),
    )
    .await;

    match result {
        Ok(Ok(output)) => Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim_end().to_string(),
        }),
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Err(anyhow::anyhow!(
            "git {} timed out after {:.1} seconds",
            args.join(" "),
            timeout.as_secs_f64()
        )),
    }
}
