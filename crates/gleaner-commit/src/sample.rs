//! Dataset record types produced by classification.

use serde::{Deserialize, Serialize};

/// An eligible file change within a parsed commit.
///
/// Unlike [`RawModification`](crate::RawModification), every field is
/// a plain string: absent paths and contents have been defaulted to
/// the empty string. The serialized field names are the dataset wire
/// format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    /// Path before the change, empty if the file was added.
    pub old_filepath: String,

    /// Path after the change, empty if the file was deleted.
    pub new_filepath: String,

    /// File content before the change, empty if added.
    pub old_content: String,

    /// File content after the change, empty if deleted.
    pub new_content: String,
}

/// A commit that passed classification.
///
/// Invariant: `modifications` is never empty; commits whose eligible
/// set filters down to nothing are rejected outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The raw commit message.
    pub message: String,

    /// Eligible modifications, in diff order.
    pub modifications: Vec<Modification>,
}

/// One dataset record: a parsed commit tied to its source repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSample {
    /// The classified commit.
    pub commit: ParsedCommit,

    /// Source repository URL.
    pub repository: String,

    /// Downstream labels; always empty when produced by this crate.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl DataSample {
    /// Wraps a parsed commit into a dataset record with empty labels.
    #[must_use]
    pub fn new(commit: ParsedCommit, repository: impl Into<String>) -> Self {
        Self {
            commit,
            repository: repository.into(),
            labels: Vec::new(),
        }
    }
}
