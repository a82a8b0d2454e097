//! Per-repository extraction.

use std::path::Path;

use gleaner_commit::{CommitClassifier, DataSample};
use gleaner_git::{Cloner, Miner};
use tempfile::TempDir;
use tracing::{debug, info};

use crate::{CoreError, CoreResult, StagedFile};

/// Drives the clone → mine → classify → stage cycle for one
/// repository.
///
/// Strictly sequential and blocking: a clone or mine may take
/// arbitrarily long, and there is no timeout or cancellation.
pub struct RepositoryExtractor {
    cloner: Box<dyn Cloner>,
    miner: Box<dyn Miner>,
    classifier: Box<dyn CommitClassifier>,
}

impl RepositoryExtractor {
    /// Creates an extractor from its three capabilities.
    #[must_use]
    pub fn new(
        cloner: Box<dyn Cloner>,
        miner: Box<dyn Miner>,
        classifier: Box<dyn CommitClassifier>,
    ) -> Self {
        Self {
            cloner,
            miner,
            classifier,
        }
    }

    /// Extracts one repository into a staged dataset file.
    ///
    /// Clones `repository_url` into a private temporary directory,
    /// mines its history in chronological order, classifies each
    /// commit, and stages the accepted records as newline-joined JSON
    /// in a file named after the basename of `output_hint`.
    ///
    /// The clone directory is deleted on every exit path. The staged
    /// file's directory is NOT deleted here: ownership passes to the
    /// caller via the returned [`StagedFile`].
    ///
    /// # Errors
    ///
    /// Returns an error if cloning or mining fails, or if the staged
    /// file cannot be written. Failures are fatal for the run; there
    /// is no retry.
    pub fn extract(&self, repository_url: &str, output_hint: &Path) -> CoreResult<StagedFile> {
        let file_name = output_hint
            .file_name()
            .ok_or_else(|| CoreError::NoFileName(output_hint.to_path_buf()))?;

        let clone_dir = TempDir::new()?;
        let clone_dest = clone_dir.path().join(repo_dir_name(repository_url));
        let repo_path = self.cloner.clone_repository(repository_url, &clone_dest)?;

        let raw_commits = self.miner.mine(&repo_path)?;
        let total = raw_commits.len();

        let samples: Vec<DataSample> = raw_commits
            .iter()
            .filter_map(|raw| {
                let parsed = self.classifier.classify(raw);
                if parsed.is_none() {
                    debug!(hash = %raw.short_hash(), "skipping non-qualifying commit");
                }
                parsed
            })
            .map(|commit| DataSample::new(commit, repository_url))
            .collect();

        info!(
            repository = repository_url,
            kept = samples.len(),
            total,
            "classified commits"
        );

        let mut lines = Vec::with_capacity(samples.len());
        for sample in &samples {
            lines.push(serde_json::to_string(sample)?);
        }

        // No trailing newline here; the merger appends separators.
        let staged = StagedFile::write(file_name, &lines.join("\n"))?;
        Ok(staged)
    }
}

/// Derives the clone subdirectory name from the last path segment of
/// the URL. A trailing `.git` is kept verbatim.
fn repo_dir_name(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use gleaner_commit::{ConventionalClassifier, ParsedCommit, RawCommit, RawModification};
    use gleaner_git::GitResult;

    /// "Clones" by creating the destination directory.
    struct FakeCloner;

    impl Cloner for FakeCloner {
        fn clone_repository(&self, _url: &str, dest: &Path) -> GitResult<PathBuf> {
            fs::create_dir_all(dest)?;
            Ok(dest.to_path_buf())
        }
    }

    /// Replays a canned commit sequence.
    struct FakeMiner {
        commits: Vec<RawCommit>,
    }

    impl Miner for FakeMiner {
        fn mine(&self, _repo_path: &Path) -> GitResult<Vec<RawCommit>> {
            Ok(self.commits.clone())
        }
    }

    /// Accepts everything, projecting modifications verbatim.
    struct AcceptAll;

    impl CommitClassifier for AcceptAll {
        fn classify(&self, raw: &RawCommit) -> Option<ParsedCommit> {
            Some(ParsedCommit {
                hash: raw.hash.clone(),
                message: raw.message.clone(),
                modifications: raw
                    .modifications
                    .iter()
                    .filter_map(gleaner_commit::filter_modification)
                    .collect(),
            })
        }
    }

    fn make_mod(path: &str) -> RawModification {
        RawModification {
            old_path: Some(path.to_string()),
            new_path: Some(path.to_string()),
            old_content: Some("a".to_string()),
            new_content: Some("b".to_string()),
            change_size: Some(3),
        }
    }

    fn make_extractor(commits: Vec<RawCommit>) -> RepositoryExtractor {
        RepositoryExtractor::new(
            Box::new(FakeCloner),
            Box::new(FakeMiner { commits }),
            Box::new(ConventionalClassifier::new()),
        )
    }

    #[test]
    fn test_extract_stages_qualifying_commits() {
        let extractor = make_extractor(vec![
            RawCommit::new("aaa", "feat: one", vec![make_mod("one.py")]),
            RawCommit::new("bbb", "not conventional", vec![make_mod("two.py")]),
            RawCommit::new("ccc", "fix(core): two", vec![make_mod("three.py")]),
        ]);

        let staged = extractor
            .extract("https://example.com/user/repo", Path::new("out/dataset.jsonl"))
            .unwrap();

        let content = fs::read_to_string(staged.path()).unwrap();
        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(lines.len(), 2);

        let first: DataSample = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.commit.hash, "aaa");
        assert_eq!(first.repository, "https://example.com/user/repo");
        assert!(first.labels.is_empty());

        let second: DataSample = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.commit.hash, "ccc");
    }

    #[test]
    fn test_extract_preserves_mining_order() {
        let extractor = make_extractor(vec![
            RawCommit::new("c1", "fix: a", vec![make_mod("a.py")]),
            RawCommit::new("c2", "fix: b", vec![make_mod("b.py")]),
            RawCommit::new("c3", "fix: c", vec![make_mod("c.py")]),
        ]);

        let staged = extractor
            .extract("repo", Path::new("dataset.jsonl"))
            .unwrap();

        let content = fs::read_to_string(staged.path()).unwrap();
        let hashes: Vec<String> = content
            .split('\n')
            .map(|l| serde_json::from_str::<DataSample>(l).unwrap().commit.hash)
            .collect();
        assert_eq!(hashes, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_extract_no_qualifying_commits_stages_empty_file() {
        let extractor = make_extractor(vec![RawCommit::new(
            "aaa",
            "unrelated message",
            vec![make_mod("a.py")],
        )]);

        let staged = extractor
            .extract("repo", Path::new("dataset.jsonl"))
            .unwrap();

        assert_eq!(fs::read_to_string(staged.path()).unwrap(), "");
    }

    #[test]
    fn test_extract_no_trailing_newline() {
        let extractor = RepositoryExtractor::new(
            Box::new(FakeCloner),
            Box::new(FakeMiner {
                commits: vec![RawCommit::new("aaa", "any", vec![make_mod("a.py")])],
            }),
            Box::new(AcceptAll),
        );

        let staged = extractor
            .extract("repo", Path::new("dataset.jsonl"))
            .unwrap();

        let content = fs::read_to_string(staged.path()).unwrap();
        assert!(!content.ends_with('\n'));
    }

    #[test]
    fn test_staged_file_named_after_output_hint() {
        let extractor = make_extractor(vec![]);
        let staged = extractor
            .extract("repo", Path::new("deep/nested/result.jsonl"))
            .unwrap();

        assert_eq!(
            staged.path().file_name().and_then(|n| n.to_str()),
            Some("result.jsonl")
        );
    }

    #[test]
    fn test_output_hint_without_file_name_fails() {
        let extractor = make_extractor(vec![]);
        let result = extractor.extract("repo", Path::new("/"));
        assert!(matches!(result, Err(CoreError::NoFileName(_))));
    }

    #[test]
    fn test_repo_dir_name() {
        assert_eq!(repo_dir_name("https://example.com/user/repo"), "repo");
        assert_eq!(repo_dir_name("https://example.com/user/repo.git"), "repo.git");
        assert_eq!(repo_dir_name("https://example.com/user/repo/"), "repo");
        assert_eq!(repo_dir_name("local-checkout"), "local-checkout");
    }
}
