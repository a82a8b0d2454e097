//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] gleaner_git::GitError),

    /// A repository-list line is not a valid `{"url": ...}` object.
    #[error("malformed repository list at line {line}: {source}")]
    RepoList {
        /// 1-based line number of the offending entry.
        line: usize,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// The output path has no file name to stage under.
    #[error("output path has no file name: {0}")]
    NoFileName(std::path::PathBuf),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
