//! Staged-file resource ownership.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// An owning handle over a staged per-repository output file.
///
/// The file lives inside a private temporary directory held by this
/// handle. Dropping the handle deletes the directory recursively, so
/// cleanup happens on every exit path; whoever holds the handle owns
/// the staging directory.
#[derive(Debug)]
pub struct StagedFile {
    // Held for its Drop; the directory outlives `path` exactly as
    // long as this struct does.
    _dir: TempDir,
    path: PathBuf,
}

impl StagedFile {
    /// Stages `content` under `file_name` in a fresh private
    /// temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn write(file_name: &OsStr, content: &str) -> io::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join(file_name);
        fs::write(&path, content)?;
        Ok(Self { _dir: dir, path })
    }

    /// Returns the path of the staged file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
