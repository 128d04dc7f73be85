//! Repository discovery
//!
//! The walk keeps its own work list instead of recursing, so very deep trees cannot
//! exhaust the call stack. A repository root is recorded and never descended into.

use anyhow::{bail, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::config::{ESTIMATED_REPO_COUNT, GIT_METADATA_DIR};
use super::ignore::IgnoreMatcher;

/// A pending directory and its depth below the scan root
#[derive(Debug)]
struct TraversalFrame {
    path: PathBuf,
    depth: usize,
}

/// Fails fast when the scan root is missing or is not a directory
pub fn ensure_scan_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => bail!("Scan path is not a directory: {}", root.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("Scan path does not exist: {}", root.display())
        }
        Err(e) => bail!("Scan path cannot be read: {} ({e})", root.display()),
    }
}

/// Returns true if `path` directly contains a `.git` directory
///
/// A `.git` *file* (worktrees, submodules) does not count. Probe failures count as "no".
pub fn is_repository_root(path: &Path) -> bool {
    let metadata_path = path.join(GIT_METADATA_DIR);
    if !metadata_path.exists() {
        return false;
    }
    fs::metadata(&metadata_path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// Walks `root` and returns every repository root in discovery order
///
/// Depth is counted from the root at zero. A frame at `max_depth` is still checked for
/// being a repository, but its children are never queued. Unreadable directories are
/// skipped silently. Siblings are visited in name order, so the result is
/// deterministic for an unchanged tree.
pub fn walk_repositories(
    root: &Path,
    ignore: &IgnoreMatcher,
    max_depth: Option<usize>,
) -> Vec<PathBuf> {
    let mut repositories = Vec::with_capacity(ESTIMATED_REPO_COUNT);
    let mut pending = vec![TraversalFrame {
        path: root.to_path_buf(),
        depth: 0,
    }];

    while let Some(frame) = pending.pop() {
        if is_repository_root(&frame.path) {
            repositories.push(frame.path);
            continue;
        }

        if max_depth.is_some_and(|max| frame.depth >= max) {
            continue;
        }

        let Some(children) = list_subdirectories(&frame.path, ignore) else {
            continue;
        };

        // Reverse so the alphabetically first child is popped first
        pending.extend(children.into_iter().rev().map(|path| TraversalFrame {
            path,
            depth: frame.depth + 1,
        }));
    }

    repositories
}

/// Immediate subdirectories that are neither `.git` nor ignored, sorted by name
///
/// Returns `None` when the directory cannot be listed.
fn list_subdirectories(dir: &Path, ignore: &IgnoreMatcher) -> Option<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).ok()?;

    let mut children: Vec<(String, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_dir()))
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == GIT_METADATA_DIR || ignore.is_ignored(&name) {
                None
            } else {
                Some((name, entry.path()))
            }
        })
        .collect();

    children.sort_by(|a, b| a.0.cmp(&b.0));
    Some(children.into_iter().map(|(_, path)| path).collect())
}
