//! Final dataset merge.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::{CoreResult, StagedFile};

/// Separator appended after each staged file's content.
///
/// It follows EVERY staged file, the last one included, so the merged
/// output always ends with a trailing newline. Consumers tolerate the
/// trailing blank record boundary; keep the shape stable.
pub const RECORD_SEPARATOR: &str = "\n";

/// Concatenates staged files into the final output, in order.
///
/// The output file is created (or truncated) first. Each staged
/// file's content is appended followed by [`RECORD_SEPARATOR`], and
/// its staging directory is deleted once copied. An empty input list
/// produces an empty output file.
///
/// # Errors
///
/// Returns an error if the output cannot be written or a staged file
/// cannot be read.
pub fn merge_staged(staged: Vec<StagedFile>, output_path: &Path) -> CoreResult<()> {
    let mut output = BufWriter::new(File::create(output_path)?);

    for staged_file in staged {
        let content = fs::read_to_string(staged_file.path())?;
        output.write_all(content.as_bytes())?;
        output.write_all(RECORD_SEPARATOR.as_bytes())?;

        debug!(staged = %staged_file.path().display(), "merged staged file");
        drop(staged_file);
    }

    output.flush()?;
    Ok(())
}
