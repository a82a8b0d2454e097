//! Per-commit eligibility rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::{ParsedCommit, RawCommit, filter_modification};

/// Largest raw modification count an eligible commit may have.
///
/// Counted before per-file filtering: a commit touching six files is
/// rejected even if only one of them is eligible.
pub const MAX_MODIFICATIONS: usize = 5;

static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(feat|feature|fix|refactor|ref|chore|ci|build|style|test|revert)(?:\(.*\))?:")
        .expect("invalid regex")
});

/// Decides whether a whole commit is eligible for the dataset.
///
/// Rejection is a single `None`; the rules carry no diagnostics.
pub trait CommitClassifier {
    /// Classifies a raw commit into a parsed commit.
    ///
    /// Returns `None` if the commit is not eligible.
    fn classify(&self, raw: &RawCommit) -> Option<ParsedCommit>;

    /// Returns whether this classifier would accept the given commit.
    fn can_classify(&self, raw: &RawCommit) -> bool {
        self.classify(raw).is_some()
    }
}

/// Conventional-commit classifier.
///
/// Accepts commits whose message starts with a conventional-commit
/// prefix (`feat`, `fix`, `refactor`, ... with an optional
/// parenthesized scope, then a colon), touching at most
/// [`MAX_MODIFICATIONS`] files, with at least one eligible
/// modification left after filtering.
///
/// Merge and revert noise is excluded by two literal substring
/// checks, `"merged"` and `"reverted"`, which are deliberately
/// case-sensitive and unanchored. `Merged branch 'dev'` is therefore
/// NOT caught, while `fix: reverted the cache change` is. Downstream
/// consumers depend on this exact filtering strength, so the checks
/// must not be tightened or loosened.
pub struct ConventionalClassifier;

impl ConventionalClassifier {
    /// Creates a new conventional classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConventionalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitClassifier for ConventionalClassifier {
    fn classify(&self, raw: &RawCommit) -> Option<ParsedCommit> {
        if raw.modifications.len() > MAX_MODIFICATIONS {
            return None;
        }
        if raw.message.contains("merged") {
            return None;
        }
        if raw.message.contains("reverted") {
            return None;
        }
        if !CONVENTIONAL_RE.is_match(&raw.message) {
            return None;
        }

        let modifications: Vec<_> = raw
            .modifications
            .iter()
            .filter_map(filter_modification)
            .collect();
        if modifications.is_empty() {
            return None;
        }

        Some(ParsedCommit {
            hash: raw.hash.clone(),
            message: raw.message.clone(),
            modifications,
        })
    }
}
