use std::fs;
use std::path::Path;
use tracing::debug;

use super::scanner::count_occurrences;
use crate::core::FileResult;

/// Replace every non-overlapping occurrence of `term` in an already-loaded
/// file and rewrite it in place.
///
/// Returns `None` when the file contains no occurrences: nothing is written
/// and the file does not count as modified. The count is taken from the
/// original content, so it matches what a search-only run reports. The write
/// is a plain truncate-and-rewrite; a failed write becomes a file-level
/// error with nothing to roll back, since only the read had happened.
pub fn replace_file(
    path: &Path,
    content: &str,
    term: &str,
    replacement: &str,
) -> Option<FileResult> {
    let count = count_occurrences(content, term);
    if count == 0 {
        return None;
    }

    let new_content = content.replace(term, replacement);

    match fs::write(path, new_content) {
        Ok(()) => {
            debug!("rewrote {} ({} replacements)", path.display(), count);
            Some(FileResult {
                path: path.to_path_buf(),
                occurrences: Vec::new(),
                replacements: count,
                modified: true,
                error: None,
            })
        }
        Err(err) => Some(FileResult {
            path: path.to_path_buf(),
            occurrences: Vec::new(),
            // The count was taken before the write; a failed write does
            // not undo it, only the modified flag and the report line.
            replacements: count,
            modified: false,
            error: Some(format!(
                "Error al escribir en {}: {}",
                path.display(),
                err
            )),
        }),
    }
}
