use serde::Serialize;
use std::path::PathBuf;

/// One non-overlapping match of the search term.
///
/// Line and column are 1-indexed positions in the file's original text.
/// Column counts characters, not bytes.
#[derive(Debug, Clone, Serialize)]
pub struct Occurrence {
    pub file_path: PathBuf,
    pub line: usize,
    pub column: usize,
}

/// Per-file outcome of a run. One entry per file that contributes to the
/// report: a match, a rewrite, or a read/write error. Files visited without
/// any of those only bump the counters on [`RunSummary`].
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub path: PathBuf,

    /// Match positions (search mode; empty in replace mode).
    pub occurrences: Vec<Occurrence>,

    /// Occurrences replaced (replace mode; 0 in search mode).
    pub replacements: usize,

    /// Whether the file was rewritten on disk.
    pub modified: bool,

    /// Read or write failure for this file, if any.
    pub error: Option<String>,
}

impl FileResult {
    pub fn with_occurrences(path: PathBuf, occurrences: Vec<Occurrence>) -> Self {
        Self {
            path,
            occurrences,
            replacements: 0,
            modified: false,
            error: None,
        }
    }

    pub fn with_error(path: PathBuf, error: String) -> Self {
        Self {
            path,
            occurrences: Vec::new(),
            replacements: 0,
            modified: false,
            error: Some(error),
        }
    }

    /// Total occurrences this result contributes, whichever mode produced it.
    pub fn occurrence_count(&self) -> usize {
        if self.replacements > 0 {
            self.replacements
        } else {
            self.occurrences.len()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    Search,
    Replace,
}

/// Aggregate outcome of one run over a directory tree.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub mode: RunMode,

    /// Every regular file the walk reached, decode-skips included.
    pub total_files_visited: usize,

    pub total_occurrences: usize,

    /// Files rewritten on disk (always 0 in search mode).
    pub total_files_modified: usize,

    /// Report entries in walk order.
    pub files: Vec<FileResult>,
}
