//! Commit history mining.

use std::path::Path;

use git2::{Delta, DiffDelta, DiffFindOptions, DiffFile, DiffOptions, Repository, Sort};
use gleaner_commit::{RawCommit, RawModification};
use tracing::debug;

use crate::{GitError, GitResult};

/// Walks a local repository's history into raw commits.
pub trait Miner {
    /// Mines the full history of the repository at `repo_path`.
    ///
    /// Commits are returned in chronological order (oldest first),
    /// each carrying its per-file modifications against the first
    /// parent. The walk is forward-only and restartable only by
    /// mining from scratch.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a git repository or its
    /// history cannot be walked.
    fn mine(&self, repo_path: &Path) -> GitResult<Vec<RawCommit>>;
}

/// [`Miner`] backed by libgit2.
pub struct GitMiner;

impl Miner for GitMiner {
    fn mine(&self, repo_path: &Path) -> GitResult<Vec<RawCommit>> {
        let repo =
            Repository::open(repo_path).map_err(|_| GitError::NotARepo(repo_path.to_path_buf()))?;

        let mut revwalk = repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = repo.find_commit(oid)?;
            let modifications = extract_modifications(&repo, &commit)?;

            commits.push(RawCommit::new(
                oid.to_string(),
                commit.message().unwrap_or(""),
                modifications,
            ));
        }

        debug!(path = %repo_path.display(), commits = commits.len(), "mined history");
        Ok(commits)
    }
}

/// Diffs the commit against its first parent (the empty tree for a
/// root commit), with rename detection enabled.
fn extract_modifications(
    repo: &Repository,
    commit: &git2::Commit<'_>,
) -> GitResult<Vec<RawModification>> {
    let commit_tree = commit.tree()?;
    let parent_tree = if commit.parent_count() > 0 {
        Some(commit.parent(0)?.tree()?)
    } else {
        None
    };

    let mut diff_opts = DiffOptions::new();
    let mut diff = repo.diff_tree_to_tree(
        parent_tree.as_ref(),
        Some(&commit_tree),
        Some(&mut diff_opts),
    )?;

    let mut find_opts = DiffFindOptions::new();
    find_opts.renames(true);
    diff.find_similar(Some(&mut find_opts))?;

    Ok(diff
        .deltas()
        .map(|delta| modification_from_delta(repo, &delta))
        .collect())
}

fn modification_from_delta(repo: &Repository, delta: &DiffDelta<'_>) -> RawModification {
    let (old_path, old_content) = file_side(repo, delta.old_file(), delta.status() == Delta::Added);
    let (new_path, new_content) =
        file_side(repo, delta.new_file(), delta.status() == Delta::Deleted);

    // The provider's change-size metric is the line count of the new
    // file version; unknown for deletions and binary files.
    let change_size = new_content.as_ref().map(|c| c.lines().count() as u64);

    RawModification::new(old_path, new_path, old_content, new_content, change_size)
}

/// Resolves one side of a delta to its path and UTF-8 content.
///
/// A side is absent when it does not exist for this delta (the old
/// side of an addition, the new side of a deletion). Content is
/// absent for binary blobs.
fn file_side(
    repo: &Repository,
    file: DiffFile<'_>,
    absent: bool,
) -> (Option<String>, Option<String>) {
    if absent || file.id().is_zero() {
        return (None, None);
    }

    let path = file.path().map(|p| p.to_string_lossy().into_owned());
    let content = repo
        .find_blob(file.id())
        .ok()
        .and_then(|blob| std::str::from_utf8(blob.content()).ok().map(str::to_owned));

    (path, content)
}
