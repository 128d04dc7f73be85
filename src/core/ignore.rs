//! Directory-name ignore matching
//!
//! Patterns are either exact names (`node_modules`) or wildcards where `*` stands for
//! any run of characters (`*.egg-info`, `tmp*`). Wildcards match the whole name.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

const WILDCARD: char = '*';

/// Compiled ignore set, shared read-only by the walker
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    exact: HashSet<String>,
    wildcards: Vec<Regex>,
}

impl IgnoreMatcher {
    /// Compiles the given patterns. Empty patterns are dropped.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact = HashSet::new();
        let mut wildcards = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            if pattern.contains(WILDCARD) {
                wildcards.push(wildcard_to_regex(pattern)?);
            } else {
                exact.insert(pattern.to_string());
            }
        }

        Ok(Self { exact, wildcards })
    }

    /// Returns true if a directory with this name must not be descended into
    pub fn is_ignored(&self, name: &str) -> bool {
        if self.exact.contains(name) {
            return true;
        }
        self.wildcards.iter().any(|re| re.is_match(name))
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.wildcards.is_empty()
    }
}

/// Anchors the pattern and turns each `*` into `.*`; everything else is literal
fn wildcard_to_regex(pattern: &str) -> Result<Regex> {
    let body = pattern
        .split(WILDCARD)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{body}$"))
        .with_context(|| format!("Invalid ignore pattern: {pattern}"))
}
