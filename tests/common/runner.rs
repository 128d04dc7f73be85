//! Scripted git runner for orchestration tests

use anyhow::Result;
use async_trait::async_trait;
use goobits_repo_status::git::{GitOutput, GitRunner};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Answers git queries from a script and records how many run at once
///
/// Unscripted repositories look clean on `main` with no upstream.
#[derive(Default)]
pub struct ScriptedGit {
    delays: HashMap<PathBuf, Duration>,
    default_delay: Duration,
    answers: HashMap<(PathBuf, &'static str), GitOutput>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: Mutex<Vec<PathBuf>>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every query sleeps this long unless the repository has its own delay
    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn with_delay(mut self, repo: &Path, delay: Duration) -> Self {
        self.delays.insert(repo.to_path_buf(), delay);
        self
    }

    /// Scripts the answer for the query whose first argument is `command`
    pub fn with_answer(mut self, repo: &Path, command: &'static str, output: GitOutput) -> Self {
        self.answers.insert((repo.to_path_buf(), command), output);
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Repositories in the order their first query started
    pub fn first_calls(&self) -> Vec<PathBuf> {
        let calls = self.calls.lock().unwrap();
        let mut seen = Vec::new();
        for path in calls.iter() {
            if !seen.contains(path) {
                seen.push(path.clone());
            }
        }
        seen
    }
}

#[async_trait]
impl GitRunner for ScriptedGit {
    async fn run(&self, path: &Path, args: &[&str], _timeout: Duration) -> Result<GitOutput> {
        self.calls.lock().unwrap().push(path.to_path_buf());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self
            .delays
            .get(path)
            .copied()
            .unwrap_or(self.default_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let scripted = self.answers.get(&(path.to_path_buf(), args[0])).cloned();
        Ok(scripted.unwrap_or_else(|| match args[0] {
            "rev-parse" => GitOutput::ok("main"),
            "rev-list" => GitOutput::failed(),
            _ => GitOutput::ok(""),
        }))
    }
}
