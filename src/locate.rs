//! History locator: find the nearest release-tagged commit reachable from HEAD.

use std::collections::HashMap;

use git2::Oid;
use regex::Regex;

use crate::error::{DescribeError, Result};
use crate::git::Repository;

/// Anchored pattern a tag name must match to count as a release tag.
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Compile a tag pattern from its regex source.
    ///
    /// # Returns
    /// * `Ok(TagPattern)` - Compiled pattern
    /// * `Err(DescribeError::Pattern)` - If the regex is invalid
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| DescribeError::pattern(format!("{}: {}", pattern, e)))?;
        Ok(TagPattern { regex })
    }

    /// Check whether a tag name is a release tag under this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }
}

/// Result of the history locator: a commit and the release tag found on it,
/// if any. A `None` tag means the located commit is the root of history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub oid: Oid,
    pub tag: Option<String>,
}

impl Located {
    /// The release tag, or the configured fallback when history has none.
    pub fn tag_or_default(&self, default_tag: &str) -> String {
        self.tag
            .clone()
            .unwrap_or_else(|| default_tag.to_string())
    }
}

/// Find the most recent commit reachable from HEAD that carries a tag
/// matching `pattern`.
///
/// Walks history newest-first and returns the first commit with a matching
/// tag. When no commit in the whole history is tagged, returns the root of
/// history with no tag, so the caller can substitute its default.
///
/// Only names from the tag namespace are considered; branches and
/// remote-tracking refs never match.
///
/// # Returns
/// * `Ok(Located)` - Nearest tagged commit, or the root commit with no tag
/// * `Err(DescribeError::MissingCommit)` - If the repository has no commits
pub fn locate_release(repo: &dyn Repository, pattern: &TagPattern) -> Result<Located> {
    let head = repo.head_oid()?;
    let walk = repo.walk_from(head)?;

    // Should not happen once HEAD resolved, but a corrupted store could
    // produce an empty traversal.
    if walk.is_empty() {
        return Err(DescribeError::missing_commit(
            "history traversal returned no commits",
        ));
    }

    let mut matching_tags: HashMap<Oid, Vec<String>> = HashMap::new();
    for (name, oid) in repo.tag_targets()? {
        if pattern.matches(&name) {
            matching_tags.entry(oid).or_default().push(name);
        }
    }

    for oid in &walk {
        if let Some(tags) = matching_tags.get(oid) {
            return Ok(Located {
                oid: *oid,
                tag: Some(select_tag(tags).to_string()),
            });
        }
    }

    // No release tag anywhere in history: fall back to the first commit
    // ever made.
    Ok(Located {
        oid: *walk.last().unwrap(),
        tag: None,
    })
}

/// Pick one tag when several release tags sit on the same commit.
///
/// The highest semantic version wins, comparing the version part after the
/// `v` prefix; names that do not parse as versions sort lowest, and exact
/// version ties fall back to lexicographic order. Deterministic regardless
/// of ref enumeration order.
fn select_tag(tags: &[String]) -> &str {
    tags.iter()
        .max_by(|a, b| {
            (parse_release_version(a), a.as_str()).cmp(&(parse_release_version(b), b.as_str()))
        })
        .map(|name| name.as_str())
        .unwrap_or_default()
}

fn parse_release_version(tag: &str) -> Option<semver::Version> {
    let version_part = tag.trim_start_matches('v').trim_start_matches('V');
    semver::Version::parse(version_part).ok()
}
