pub mod config;
pub mod descriptor;
pub mod error;
pub mod git;
pub mod locate;
pub mod ui;

pub use error::{DescribeError, Result};

use config::DescribeConfig;
use descriptor::VersionDescriptor;
use git::Repository;
use locate::TagPattern;

/// Derive the rendered version descriptor for the repository's HEAD.
///
/// Runs the whole pipeline: locate the nearest release-tagged commit (or the
/// root of history), count the commits separating it from HEAD, and render
/// the descriptor string. Read-only and idempotent for an unchanged
/// repository.
pub fn describe(repo: &dyn Repository, config: &DescribeConfig) -> Result<String> {
    let pattern = TagPattern::new(&config.tag_pattern)?;
    let located = locate::locate_release(repo, &pattern)?;

    let head = repo.head_oid()?;
    let distance = repo.count_commits_between(located.oid, head)?;

    let descriptor = VersionDescriptor::new(
        located.tag_or_default(&config.default_tag),
        distance,
        head.to_string(),
    );

    Ok(descriptor.render(config.abbrev_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use git2::Oid;

    fn oid(byte: u8) -> Oid {
        Oid::from_bytes(&[byte; 20]).unwrap()
    }

    #[test]
    fn test_describe_tagged_head() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_tag("v2.3.4", oid(1));

        let output = describe(&repo, &DescribeConfig::default()).unwrap();
        assert_eq!(output, "v2.3.4");
    }

    #[test]
    fn test_describe_ahead_of_tag() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_tag("v1.0.0", oid(1));
        repo.add_commit(oid(2));
        repo.add_commit(oid(3));
        repo.add_commit(oid(4));

        let output = describe(&repo, &DescribeConfig::default()).unwrap();
        let head_hex = oid(4).to_string();
        assert_eq!(output, format!("v1.0.0-3-g{}", &head_hex[..7]));
    }

    #[test]
    fn test_describe_no_tags_measures_from_root() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_commit(oid(2));

        let output = describe(&repo, &DescribeConfig::default()).unwrap();
        let head_hex = oid(2).to_string();
        assert_eq!(output, format!("v0.1.0-1-g{}", &head_hex[..7]));
    }

    #[test]
    fn test_describe_empty_repository_fails() {
        let repo = MockRepository::new();
        assert!(matches!(
            describe(&repo, &DescribeConfig::default()),
            Err(DescribeError::MissingCommit(_))
        ));
    }

    #[test]
    fn test_describe_is_idempotent() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_tag("v1.0.0", oid(1));
        repo.add_commit(oid(2));

        let config = DescribeConfig::default();
        let first = describe(&repo, &config).unwrap();
        let second = describe(&repo, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_describe_monotonic_distance() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_tag("v1.0.0", oid(1));
        repo.add_commit(oid(2));

        let config = DescribeConfig::default();
        let before = describe(&repo, &config).unwrap();
        assert!(before.starts_with("v1.0.0-1-g"));

        repo.add_commit(oid(3));
        let after = describe(&repo, &config).unwrap();
        assert!(after.starts_with("v1.0.0-2-g"));
    }

    #[test]
    fn test_describe_custom_config() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1));
        repo.add_commit(oid(2));

        let config = DescribeConfig {
            default_tag: "v9.9.9".to_string(),
            abbrev_length: 4,
            ..DescribeConfig::default()
        };

        let output = describe(&repo, &config).unwrap();
        let head_hex = oid(2).to_string();
        assert_eq!(output, format!("v9.9.9-1-g{}", &head_hex[..4]));
    }
}
