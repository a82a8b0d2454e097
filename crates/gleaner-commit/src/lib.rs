//! Commit types and classification rules for Gleaner.
//!
//! This crate provides the commit-level data model and the pure
//! decision logic of the pipeline:
//! - [`RawCommit`] / [`RawModification`]: a commit as retrieved from Git
//! - [`Modification`] / [`ParsedCommit`] / [`DataSample`]: the dataset types
//! - [`filter_modification`]: per-file eligibility rules
//! - [`CommitClassifier`] / [`ConventionalClassifier`]: per-commit eligibility

mod classifier;
mod filter;
mod raw;
mod sample;

pub use classifier::{CommitClassifier, ConventionalClassifier, MAX_MODIFICATIONS};
pub use filter::{MAX_CHANGE_LINES, PYTHON_EXTENSION, filter_modification};
pub use raw::{RawCommit, RawModification};
pub use sample::{DataSample, Modification, ParsedCommit};
