use crate::error::{DescribeError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at or above the given path.
    ///
    /// Failure here means the history store is unavailable, which is fatal
    /// for the whole invocation.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head().map_err(|e| {
            if e.code() == git2::ErrorCode::UnbornBranch || e.code() == git2::ErrorCode::NotFound {
                DescribeError::missing_commit(format!("HEAD has no commit: {}", e))
            } else {
                DescribeError::Git(e)
            }
        })?;

        head.target()
            .ok_or_else(|| DescribeError::missing_commit("HEAD does not point at a commit"))
    }

    fn walk_from(&self, start: Oid) -> Result<Vec<Oid>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(start)?;

        let mut oids = Vec::new();
        for oid in revwalk {
            oids.push(oid?);
        }

        Ok(oids)
    }

    fn tag_targets(&self) -> Result<Vec<(String, Oid)>> {
        let mut targets = Vec::new();
        let tags = self.repo.tag_names(None)?;

        for tag_name in tags.iter().flatten() {
            let reference_name = format!("refs/tags/{}", tag_name);
            if let Ok(reference) = self.repo.find_reference(&reference_name) {
                // Peels annotated tags through to the commit they point at;
                // tags on non-commit objects are skipped.
                if let Ok(commit) = reference.peel_to_commit() {
                    targets.push((tag_name.to_string(), commit.id()));
                }
            }
        }

        Ok(targets)
    }

    fn count_commits_between(&self, from: Oid, to: Oid) -> Result<usize> {
        if from == to {
            return Ok(0);
        }

        let (ahead, _behind) = self.repo.graph_ahead_behind(to, from)?;
        Ok(ahead)
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
