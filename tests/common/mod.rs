//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;
pub mod runner;

pub use self::fixtures::{fake_repo, TestRepoBuilder};
pub use self::git::{create_multiple_repos, is_git_available, setup_git_repo};
pub use self::runner::ScriptedGit;
