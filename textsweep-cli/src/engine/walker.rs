use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::SweepError;

/// Collect every regular file under `root`, depth-unbounded, with no
/// extension or size filtering.
///
/// Entries are sorted by file name at each level, so repeated runs over an
/// unchanged tree visit files in the same order. A walk error on the root
/// itself fails the run; errors deeper in the tree (an unreadable
/// subdirectory) skip that subtree and keep walking.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, SweepError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(err) => {
                if err.depth() == 0 {
                    return Err(SweepError::RootAccess {
                        path: root.to_path_buf(),
                        source: err,
                    });
                }
                debug!("skipping unreadable entry under {}: {}", root.display(), err);
            }
        }
    }

    Ok(files)
}
