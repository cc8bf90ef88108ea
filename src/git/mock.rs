use crate::error::{DescribeError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations.
///
/// Models a single linear line of history. Commits are added oldest first;
/// the most recently added commit is HEAD.
pub struct MockRepository {
    /// Commits in chronological order (oldest first)
    history: Vec<Oid>,
    tags: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            history: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Append a commit on top of the current history, making it the new HEAD
    pub fn add_commit(&mut self, oid: Oid) {
        self.history.push(oid);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    fn position(&self, oid: Oid) -> Option<usize> {
        self.history.iter().position(|&c| c == oid)
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.history
            .last()
            .copied()
            .ok_or_else(|| DescribeError::missing_commit("HEAD has no commit"))
    }

    fn walk_from(&self, start: Oid) -> Result<Vec<Oid>> {
        let pos = self
            .position(start)
            .ok_or_else(|| DescribeError::missing_commit(format!("Unknown commit: {}", start)))?;

        Ok(self.history[..=pos].iter().rev().copied().collect())
    }

    fn tag_targets(&self) -> Result<Vec<(String, Oid)>> {
        let mut targets: Vec<_> = self
            .tags
            .iter()
            .map(|(name, &oid)| (name.clone(), oid))
            .collect();
        targets.sort();
        Ok(targets)
    }

    fn count_commits_between(&self, from: Oid, to: Oid) -> Result<usize> {
        let to_pos = self
            .position(to)
            .ok_or_else(|| DescribeError::missing_commit(format!("Unknown commit: {}", to)))?;

        match self.position(from) {
            Some(from_pos) if from_pos <= to_pos => Ok(to_pos - from_pos),
            // `from` is not an ancestor: everything up to `to` counts
            _ => Ok(to_pos + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(byte: u8) -> Oid {
        Oid::from_bytes(&[byte; 20]).unwrap()
    }

    #[test]
    fn test_mock_repository_head() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_commit(oid(2));

        assert_eq!(repo.head_oid().unwrap(), oid(2));
    }

    #[test]
    fn test_mock_repository_empty_head_is_missing() {
        let repo = MockRepository::new();
        assert!(matches!(
            repo.head_oid(),
            Err(DescribeError::MissingCommit(_))
        ));
    }

    #[test]
    fn test_mock_repository_walk_is_newest_first() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_commit(oid(2));
        repo.add_commit(oid(3));

        let walk = repo.walk_from(oid(3)).unwrap();
        assert_eq!(walk, vec![oid(3), oid(2), oid(1)]);
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_tag("v1.0.0", oid(1));

        let targets = repo.tag_targets().unwrap();
        assert_eq!(targets, vec![("v1.0.0".to_string(), oid(1))]);
    }

    #[test]
    fn test_mock_repository_count_between() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_commit(oid(2));
        repo.add_commit(oid(3));

        assert_eq!(repo.count_commits_between(oid(1), oid(3)).unwrap(), 2);
        assert_eq!(repo.count_commits_between(oid(3), oid(3)).unwrap(), 0);
    }
}
