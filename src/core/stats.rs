//! Statistics over a finished scan

use crate::core::config::PATH_DISPLAY_WIDTH;
use crate::git::RepositoryStatus;
use std::time::Duration;

/// Aggregate counts for a list of repository statuses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    pub total_repos: usize,
    pub clean_repos: usize,
    pub dirty_repos: usize,
    pub unpushed_repos: usize,
    pub total_unpushed_commits: u64,
    pub stashed_repos: usize,
    pub total_stash_entries: u64,
    // Attention groups: (repo_name, repo_path[, count])
    pub dirty: Vec<(String, String)>,
    pub unpushed: Vec<(String, String, u32)>,
    pub stashed: Vec<(String, String, u32)>,
}

impl ScanStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds statistics from scan results
    pub fn from_statuses(statuses: &[RepositoryStatus]) -> Self {
        let mut stats = Self::new();
        for status in statuses {
            stats.update(status);
        }
        stats
    }

    /// Folds one repository into the counters
    pub fn update(&mut self, status: &RepositoryStatus) {
        let name = status.name().to_string();
        let path = status.path.to_string_lossy().into_owned();

        self.total_repos += 1;
        if !status.needs_attention() {
            self.clean_repos += 1;
        }

        if status.is_dirty() {
            self.dirty_repos += 1;
            self.dirty.push((name.clone(), path.clone()));
        }

        if status.has_unpushed() {
            self.unpushed_repos += 1;
            self.total_unpushed_commits += u64::from(status.ahead);
            self.unpushed.push((name.clone(), path.clone(), status.ahead));
        }

        if status.has_stashes() {
            self.stashed_repos += 1;
            self.total_stash_entries += u64::from(status.stashes);
            self.stashed.push((name, path, status.stashes));
        }
    }

    /// Generates a one-line summary of the scan
    pub fn generate_summary(&self, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();
        let repo_word = if self.total_repos == 1 {
            "repository"
        } else {
            "repositories"
        };

        format!(
            "✅ Scanned {} {} in {:.1}s • {} clean • {} dirty • {} unpushed • {} stashed",
            self.total_repos,
            repo_word,
            duration_secs,
            self.clean_repos,
            self.dirty_repos,
            self.unpushed_repos,
            self.stashed_repos
        )
    }

    /// Generates grouped listings for repositories needing attention
    pub fn generate_detailed_summary(&self) -> String {
        let mut lines = Vec::new();

        if !self.dirty.is_empty() {
            lines.push(format!("⚠️  UNCOMMITTED CHANGES ({})", self.dirty.len()));
            for (i, (repo_name, repo_path)) in self.dirty.iter().enumerate() {
                let tree_char = tree_char(i, self.dirty.len());
                let short_path = crate::utils::shorten_path(repo_path, PATH_DISPLAY_WIDTH);
                lines.push(format!("   {} {:20} {}", tree_char, repo_name, short_path));
            }
            lines.push(String::new()); // Add blank line
        }

        if !self.unpushed.is_empty() {
            lines.push(format!(
                "🟡 UNPUSHED COMMITS ({} in {})",
                self.total_unpushed_commits,
                self.unpushed.len()
            ));
            for (i, (repo_name, repo_path, ahead)) in self.unpushed.iter().enumerate() {
                let tree_char = tree_char(i, self.unpushed.len());
                let short_path = crate::utils::shorten_path(repo_path, PATH_DISPLAY_WIDTH);
                lines.push(format!(
                    "   {} {:20} {:40} # {} ahead",
                    tree_char, repo_name, short_path, ahead
                ));
            }
            lines.push(String::new()); // Add blank line
        }

        if !self.stashed.is_empty() {
            lines.push(format!("📦 STASHED WORK ({})", self.stashed.len()));
            for (i, (repo_name, repo_path, count)) in self.stashed.iter().enumerate() {
                let tree_char = tree_char(i, self.stashed.len());
                let short_path = crate::utils::shorten_path(repo_path, PATH_DISPLAY_WIDTH);
                let entry_word = if *count == 1 { "entry" } else { "entries" };
                lines.push(format!(
                    "   {} {:20} {:40} # {} {}",
                    tree_char, repo_name, short_path, count, entry_word
                ));
            }
        }

        // Remove trailing blank line if it exists
        if lines.last() == Some(&String::new()) {
            lines.pop();
        }

        lines.join("\n")
    }
}

fn tree_char(index: usize, len: usize) -> &'static str {
    if index == len - 1 {
        "└─"
    } else {
        "├─"
    }
}
