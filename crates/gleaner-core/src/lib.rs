//! Extraction and merge pipeline for Gleaner.
//!
//! This crate drives the per-repository dataset build:
//! - [`parse_repo_list`]: repository-list input
//! - [`RepositoryExtractor`]: clone, mine, classify, stage one repository
//! - [`StagedFile`]: owning handle over a staged per-repository file
//! - [`merge_staged`]: concatenate staged files into the final dataset

mod error;
mod extractor;
mod merger;
mod repolist;
mod staging;

pub use error::{CoreError, CoreResult};
pub use extractor::RepositoryExtractor;
pub use merger::{RECORD_SEPARATOR, merge_staged};
pub use repolist::parse_repo_list;
pub use staging::StagedFile;
