use thiserror::Error;
use std::path::PathBuf;

/// Errors that abort a run before any file is touched.
///
/// Per-file read/write failures and decode-skips are not errors at this
/// level: they become report lines and the run continues.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("No folder selected")]
    FolderNotSelected,

    #[error("Search term must not be empty")]
    EmptySearchTerm,

    #[error("Cannot walk root folder {path}: {source}")]
    RootAccess {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl SweepError {
    /// Validation errors are user mistakes caught before any I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SweepError::FolderNotSelected | SweepError::EmptySearchTerm
        )
    }
}
