//! Per-modification eligibility rules.

use std::path::Path;

use crate::{Modification, RawModification};

/// File extension a modification must carry to be eligible.
///
/// Matched case-sensitively: `foo.PY` is not eligible.
pub const PYTHON_EXTENSION: &str = "py";

/// Largest new-file line count an eligible modification may have.
pub const MAX_CHANGE_LINES: u64 = 5_000;

/// Decides whether a single file change is eligible for the dataset.
///
/// The representative path is the old path, falling back to the new
/// path when the file was added. A modification is rejected when the
/// representative path does not end in `.py` or when its change size
/// exceeds [`MAX_CHANGE_LINES`]. An unknown change size counts as 0
/// and never rejects.
///
/// Returns the projected [`Modification`] with absent paths and
/// contents defaulted to the empty string, or `None` if rejected.
#[must_use]
pub fn filter_modification(raw: &RawModification) -> Option<Modification> {
    let old_filepath = raw.old_path.clone().unwrap_or_default();
    let new_filepath = raw.new_path.clone().unwrap_or_default();

    let representative = if old_filepath.is_empty() {
        new_filepath.as_str()
    } else {
        old_filepath.as_str()
    };
    let extension = Path::new(representative).extension()?;
    if extension != PYTHON_EXTENSION {
        return None;
    }

    if raw.change_size.unwrap_or(0) > MAX_CHANGE_LINES {
        return None;
    }

    Some(Modification {
        old_filepath,
        new_filepath,
        old_content: raw.old_content.clone().unwrap_or_default(),
        new_content: raw.new_content.clone().unwrap_or_default(),
    })
}
