//! Repository cloning.

use std::path::{Path, PathBuf};

use git2::build::RepoBuilder;
use tracing::debug;

use crate::{GitError, GitResult};

/// Clones a remote repository to a local path.
pub trait Cloner {
    /// Clones `url` into `dest` and returns the working directory of
    /// the resulting repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone fails (network, auth, or an
    /// invalid URL). Cloning is fatal-on-failure: there is no retry.
    fn clone_repository(&self, url: &str, dest: &Path) -> GitResult<PathBuf>;
}

/// [`Cloner`] backed by libgit2.
///
/// Blocking; a clone may take arbitrarily long on large repositories.
pub struct GitCloner;

impl Cloner for GitCloner {
    fn clone_repository(&self, url: &str, dest: &Path) -> GitResult<PathBuf> {
        debug!(url, dest = %dest.display(), "cloning repository");
        let repo = RepoBuilder::new()
            .clone(url, dest)
            .map_err(|source| GitError::CloneFailed {
                url: url.to_string(),
                source,
            })?;
        Ok(repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf())
    }
}
