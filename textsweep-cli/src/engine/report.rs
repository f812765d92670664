use std::fmt::Write as _;

use crate::core::{FileResult, RunMode, RunSummary};

/// Accumulates per-file results and running totals during the walk and
/// produces the final [`RunSummary`] once the walk completes.
pub struct ReportBuilder {
    mode: RunMode,
    total_files_visited: usize,
    total_occurrences: usize,
    total_files_modified: usize,
    files: Vec<FileResult>,
}

impl ReportBuilder {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            total_files_visited: 0,
            total_occurrences: 0,
            total_files_modified: 0,
            files: Vec::new(),
        }
    }

    /// A file whose bytes were not valid text. Counted as visited, nothing
    /// else: no report entry, no error.
    pub fn record_decode_skip(&mut self) {
        self.total_files_visited += 1;
    }

    /// A file that decoded but produced no matches and no error.
    pub fn record_no_match(&mut self) {
        self.total_files_visited += 1;
    }

    /// A file with matches, a rewrite, or a read/write error.
    pub fn record(&mut self, result: FileResult) {
        self.total_files_visited += 1;
        self.total_occurrences += result.occurrence_count();
        if result.modified {
            self.total_files_modified += 1;
        }
        self.files.push(result);
    }

    pub fn finish(self) -> RunSummary {
        RunSummary {
            mode: self.mode,
            total_files_visited: self.total_files_visited,
            total_occurrences: self.total_occurrences,
            total_files_modified: self.total_files_modified,
            files: self.files,
        }
    }
}

impl RunSummary {
    /// Render the human-readable report: one block or line per file in walk
    /// order, then the trailing totals. Built once, never streamed.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for file in &self.files {
            if let Some(error) = &file.error {
                let _ = writeln!(out, "{}", error);
                continue;
            }
            match self.mode {
                RunMode::Search => {
                    let _ = writeln!(out, "\nArchivo: {}", file.path.display());
                    for occ in &file.occurrences {
                        let _ = writeln!(out, "  Línea {}, Columna {}", occ.line, occ.column);
                    }
                }
                RunMode::Replace => {
                    let _ = writeln!(
                        out,
                        "{}: {} ocurrencia(s) reemplazada(s)",
                        file.path.display(),
                        file.replacements
                    );
                }
            }
        }

        let _ = writeln!(
            out,
            "\nTotal de archivos analizados: {}",
            self.total_files_visited
        );
        match self.mode {
            RunMode::Search => {
                let _ = writeln!(
                    out,
                    "Total de ocurrencias encontradas: {}",
                    self.total_occurrences
                );
            }
            RunMode::Replace => {
                let _ = writeln!(
                    out,
                    "Total de ocurrencias encontradas y reemplazadas: {}",
                    self.total_occurrences
                );
                let _ = writeln!(
                    out,
                    "Total de archivos modificados: {}",
                    self.total_files_modified
                );
            }
        }

        out
    }
}
