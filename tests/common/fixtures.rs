//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::git::{
    create_bare_remote, create_test_commit, git, push_with_upstream, setup_git_repo_on_branch,
};

/// Builder for a real repository inside a scan root
pub struct TestRepoBuilder {
    path: PathBuf,
    branch: String,
    upstream: Option<PathBuf>,
    unpushed_commits: usize,
    modified_file: bool,
    stashes: usize,
}

impl TestRepoBuilder {
    /// Repository at `path` (created if missing)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            branch: "main".to_string(),
            upstream: None,
            unpushed_commits: 0,
            modified_file: false,
            stashes: 0,
        }
    }

    pub fn on_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Pushes the initial commit to a bare remote at `remote` and tracks it
    pub fn with_upstream(mut self, remote: impl Into<PathBuf>) -> Self {
        self.upstream = Some(remote.into());
        self
    }

    pub fn with_unpushed_commits(mut self, count: usize) -> Self {
        self.unpushed_commits = count;
        self
    }

    pub fn with_modified_file(mut self) -> Self {
        self.modified_file = true;
        self
    }

    pub fn with_stashes(mut self, count: usize) -> Self {
        self.stashes = count;
        self
    }

    pub fn build(self) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.path)?;
        setup_git_repo_on_branch(&self.path, &self.branch)?;

        create_test_commit(&self.path, "README.md", "# Test Repo\n", "Initial commit")?;

        if let Some(remote) = &self.upstream {
            create_bare_remote(remote)?;
            push_with_upstream(&self.path, remote, &self.branch)?;
        }

        for i in 1..=self.unpushed_commits {
            create_test_commit(
                &self.path,
                &format!("file{}.txt", i),
                &format!("Content {}", i),
                &format!("Commit {}", i),
            )?;
        }

        for i in 1..=self.stashes {
            std::fs::write(self.path.join("README.md"), format!("# Stashed {i}\n"))?;
            git(&self.path, &["stash", "push", "-q", "-m", &format!("wip {i}")])?;
        }

        if self.modified_file {
            std::fs::write(self.path.join("README.md"), "# Modified\n")?;
        }

        Ok(self.path)
    }
}

/// Creates a directory that looks like a repository root to the walker (no git needed)
pub fn fake_repo(path: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(path.join(".git"))?;
    Ok(path.to_path_buf())
}
