//! Git history-query abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only history
//! queries the descriptor derivation needs, allowing for multiple
//! implementations including real Git repositories and mock implementations
//! for testing.
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility. Every operation is
//! a read; nothing here ever mutates the repository.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Read-only history queries used to derive a version descriptor.
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result<T>]; implementations map underlying errors (like
/// `git2::Error`) to the appropriate [crate::error::DescribeError] variants.
pub trait Repository: Send + Sync {
    /// Get the OID of the commit HEAD currently points at.
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the HEAD commit
    /// * `Err(DescribeError::MissingCommit)` - If HEAD is unborn (a repository
    ///   with no commits) or cannot be resolved to a commit
    fn head_oid(&self) -> Result<Oid>;

    /// Walk history from a starting commit, most recent first.
    ///
    /// Returns every commit reachable from `start`, with `start` itself first
    /// and the root of history last.
    ///
    /// # Arguments
    /// * `start` - Commit to begin the traversal at (normally HEAD)
    fn walk_from(&self, start: Oid) -> Result<Vec<Oid>>;

    /// Enumerate all tags with their peeled target commits.
    ///
    /// Only names from the tag namespace are returned; branches and
    /// remote-tracking refs are never included. Annotated tags are peeled
    /// through to the commit they ultimately point at.
    ///
    /// # Returns
    /// * `Ok(Vec<(String, Oid)>)` - Each tag name paired with its target commit
    fn tag_targets(&self) -> Result<Vec<(String, Oid)>>;

    /// Count commits reachable from `to` but not from `from`.
    ///
    /// This is a pure cardinality: commits strictly after `from` up to and
    /// including `to`. Returns 0 when the two are equal.
    fn count_commits_between(&self, from: Oid, to: Oid) -> Result<usize>;
}
