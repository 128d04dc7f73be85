//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Runs a git command and fails with its stderr if it does not succeed
pub fn git(path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(path).output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets up a git repository with user config on the given branch
/// Returns Ok(()) on success, or skips test if git is not available
pub fn setup_git_repo_on_branch(path: &Path, branch: &str) -> Result<()> {
    // Initialize git repo
    let init_result = Command::new("git")
        .args(["init", "-q"])
        .current_dir(path)
        .output()?;

    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    // Name the unborn branch without relying on init.defaultBranch
    git(path, &["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")])?;

    // Configure git user
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;

    // Disable commit signing for tests
    git(path, &["config", "commit.gpgsign", "false"])?;

    Ok(())
}

/// Sets up a git repository on `main`
pub fn setup_git_repo(path: &Path) -> Result<()> {
    setup_git_repo_on_branch(path, "main")
}

/// Creates a test commit in the repository
pub fn create_test_commit(
    path: &Path,
    file_name: &str,
    content: &str,
    message: &str,
) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;
    git(path, &["add", file_name])?;
    git(path, &["commit", "-q", "-m", message])?;
    Ok(())
}

/// Creates a bare repository to act as `origin`
pub fn create_bare_remote(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    git(path, &["init", "-q", "--bare"])?;
    Ok(())
}

/// Adds `remote_path` as `origin` and pushes the current branch with upstream tracking
pub fn push_with_upstream(path: &Path, remote_path: &Path, branch: &str) -> Result<()> {
    let remote = remote_path.to_string_lossy();
    git(path, &["remote", "add", "origin", &remote])?;
    git(path, &["push", "-q", "-u", "origin", branch])?;
    Ok(())
}

/// Creates multiple test repositories in a parent directory
#[allow(dead_code)]
pub fn create_multiple_repos(parent_dir: &Path, count: usize) -> Result<Vec<String>> {
    let mut repo_names = Vec::new();

    for i in 0..count {
        let repo_name = format!("test-repo-{}", i + 1);
        let repo_path = parent_dir.join(&repo_name);
        std::fs::create_dir(&repo_path)?;

        setup_git_repo(&repo_path)?;
        create_test_commit(
            &repo_path,
            "README.md",
            &format!("# Repo {}", i + 1),
            "Initial commit",
        )?;

        repo_names.push(repo_name);
    }

    Ok(repo_names)
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
