//! Repository-list input.
//!
//! The list is newline-delimited JSON: one object per line with at
//! least a `url` field. Line order defines processing order.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{CoreError, CoreResult};

#[derive(Debug, Deserialize)]
struct RepoEntry {
    url: String,
}

/// Reads repository URLs from a newline-delimited JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line is not a
/// valid JSON object with a `url` string. A malformed line is fatal
/// before any repository is processed.
pub fn parse_repo_list(path: &Path) -> CoreResult<Vec<String>> {
    let text = fs::read_to_string(path)?;

    let mut urls = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let entry: RepoEntry =
            serde_json::from_str(line).map_err(|source| CoreError::RepoList {
                line: idx + 1,
                source,
            })?;
        urls.push(entry.url);
    }
    Ok(urls)
}
