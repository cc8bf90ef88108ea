use thiserror::Error;

/// Unified error type for semver-describe operations
#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("No commit identifier available: {0}")]
    MissingCommit(String),

    #[error("Invalid tag pattern: {0}")]
    Pattern(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-describe
pub type Result<T> = std::result::Result<T, DescribeError>;

impl DescribeError {
    /// Create a missing-commit error with context
    pub fn missing_commit(msg: impl Into<String>) -> Self {
        DescribeError::MissingCommit(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        DescribeError::Pattern(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DescribeError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DescribeError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DescribeError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(DescribeError::missing_commit("test")
            .to_string()
            .contains("commit identifier"));
        assert!(DescribeError::pattern("test")
            .to_string()
            .contains("tag pattern"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (DescribeError::config("x"), "Configuration error"),
            (
                DescribeError::missing_commit("x"),
                "No commit identifier available",
            ),
            (DescribeError::pattern("x"), "Invalid tag pattern"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            DescribeError::config(""),
            DescribeError::missing_commit(""),
            DescribeError::pattern(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("broken repository");
        let err: DescribeError = git_err.into();
        assert!(err.to_string().contains("Git operation failed"));
        assert!(err.to_string().contains("broken repository"));
    }
}
