//! CLI definition.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use gleaner_commit::ConventionalClassifier;
use gleaner_core::{RepositoryExtractor, merge_staged, parse_repo_list};
use gleaner_git::{GitCloner, GitMiner};

/// Mine conventional commits from Git repositories into an NDJSON
/// dataset.
#[derive(Debug, Parser)]
#[command(name = "gleaner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Newline-delimited JSON file of {"url": ...} repository entries
    #[arg(long)]
    pub repo_list: PathBuf,

    /// Final dataset file; parent directories are created if missing
    #[arg(long)]
    pub output_path: PathBuf,
}

impl Cli {
    /// Runs the dataset build.
    pub fn run(self) -> Result<()> {
        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let urls = parse_repo_list(&self.repo_list)?;
        info!(repositories = urls.len(), "parsed repository list");

        let extractor = RepositoryExtractor::new(
            Box::new(GitCloner),
            Box::new(GitMiner),
            Box::new(ConventionalClassifier::new()),
        );

        // Repositories are processed strictly one at a time; each
        // clone-mine-stage cycle completes before the next starts.
        let bar = repo_progress(urls.len() as u64);
        let mut staged = Vec::with_capacity(urls.len());
        for url in &urls {
            bar.set_message(url.clone());
            staged.push(extractor.extract(url, &self.output_path)?);
            bar.inc(1);
        }
        bar.finish_and_clear();

        merge_staged(staged, &self.output_path)?;
        info!(output = %self.output_path.display(), "dataset written");
        Ok(())
    }
}

fn repo_progress(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
         elapsed: {elapsed_precise}  eta: {eta_precise}",
    )
    .unwrap()
    .progress_chars("█▉▊▋▌▍▎▏  ");
    bar.set_style(style);
    bar
}
