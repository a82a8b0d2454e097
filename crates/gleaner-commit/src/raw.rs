//! Raw commit types as retrieved from Git, before classification.

/// A single file change as reported by the mining provider.
///
/// All fields are optional at this stage: an added file has no old
/// path or content, a deleted file has no new path or content, and a
/// binary file yields no content at all. The change-size metric is
/// the line count of the new file version when it is known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawModification {
    /// Path before the change, absent if the file was added.
    pub old_path: Option<String>,

    /// Path after the change, absent if the file was deleted.
    pub new_path: Option<String>,

    /// File content before the change.
    pub old_content: Option<String>,

    /// File content after the change.
    pub new_content: Option<String>,

    /// Line count of the new file version, absent when unknown.
    pub change_size: Option<u64>,
}

impl RawModification {
    /// Creates a raw modification with the given paths and contents.
    #[must_use]
    pub fn new(
        old_path: Option<String>,
        new_path: Option<String>,
        old_content: Option<String>,
        new_content: Option<String>,
        change_size: Option<u64>,
    ) -> Self {
        Self {
            old_path,
            new_path,
            old_content,
            new_content,
            change_size,
        }
    }
}

/// A commit as retrieved from Git, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The full commit message (subject + body).
    pub message: String,

    /// File changes in this commit, in diff order.
    pub modifications: Vec<RawModification>,
}

impl RawCommit {
    /// Creates a new raw commit.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        modifications: Vec<RawModification>,
    ) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            modifications,
        }
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let commit = RawCommit::new("abc1234567890", "feat: add feature", vec![]);

        assert_eq!(commit.hash, "abc1234567890");
        assert_eq!(commit.message, "feat: add feature");
        assert!(commit.modifications.is_empty());
    }

    #[test]
    fn test_new_with_into() {
        let commit = RawCommit::new(String::from("hash"), String::from("message"), vec![]);

        assert_eq!(commit.hash, "hash");
        assert_eq!(commit.message, "message");
    }

    #[test]
    fn test_short_hash() {
        let commit = RawCommit::new("abc1234567890", "feat: x", vec![]);
        assert_eq!(commit.short_hash(), "abc1234");
    }

    #[test]
    fn test_short_hash_less_than_7() {
        let commit = RawCommit::new("abc", "message", vec![]);
        assert_eq!(commit.short_hash(), "abc");
    }

    #[test]
    fn test_modification_default_is_empty() {
        let raw = RawModification::default();
        assert!(raw.old_path.is_none());
        assert!(raw.new_path.is_none());
        assert!(raw.old_content.is_none());
        assert!(raw.new_content.is_none());
        assert!(raw.change_size.is_none());
    }
}
