mod loader;
mod replacer;
mod report;
mod scanner;
mod walker;

use std::path::Path;
use tracing::info;

use crate::core::{FileResult, RunMode, RunSummary, SweepError};
use loader::LoadOutcome;
use report::ReportBuilder;

/// Walk every file under `folder` and report each occurrence of `term`.
/// Never writes to disk.
pub fn run_search(folder: &Path, term: &str) -> Result<RunSummary, SweepError> {
    validate(folder, term)?;

    let files = walker::collect_files(folder)?;
    info!("searching {} files under {}", files.len(), folder.display());

    let mut builder = ReportBuilder::new(RunMode::Search);
    for path in files {
        match loader::load(&path) {
            LoadOutcome::Text(content) => {
                let occurrences = scanner::scan(&path, &content, term);
                if occurrences.is_empty() {
                    builder.record_no_match();
                } else {
                    builder.record(FileResult::with_occurrences(path, occurrences));
                }
            }
            LoadOutcome::Binary => builder.record_decode_skip(),
            LoadOutcome::Failed(message) => builder.record(read_error(&path, &message)),
        }
    }

    Ok(builder.finish())
}

/// Walk every file under `folder` and replace each occurrence of `term`
/// with `replacement`, rewriting files in place. `replacement` may be empty.
pub fn run_replace(
    folder: &Path,
    term: &str,
    replacement: &str,
) -> Result<RunSummary, SweepError> {
    validate(folder, term)?;

    let files = walker::collect_files(folder)?;
    info!(
        "replacing in {} files under {}",
        files.len(),
        folder.display()
    );

    let mut builder = ReportBuilder::new(RunMode::Replace);
    for path in files {
        match loader::load(&path) {
            LoadOutcome::Text(content) => {
                match replacer::replace_file(&path, &content, term, replacement) {
                    Some(result) => builder.record(result),
                    None => builder.record_no_match(),
                }
            }
            LoadOutcome::Binary => builder.record_decode_skip(),
            LoadOutcome::Failed(message) => builder.record(read_error(&path, &message)),
        }
    }

    Ok(builder.finish())
}

/// Both runs validate their inputs before touching the filesystem.
fn validate(folder: &Path, term: &str) -> Result<(), SweepError> {
    if folder.as_os_str().is_empty() {
        return Err(SweepError::FolderNotSelected);
    }
    if term.is_empty() {
        return Err(SweepError::EmptySearchTerm);
    }
    Ok(())
}

fn read_error(path: &Path, message: &str) -> FileResult {
    FileResult::with_error(
        path.to_path_buf(),
        format!("Error al leer {}: {}", path.display(), message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture(files: &[(&str, &[u8])]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, bytes) in files {
            fs::write(temp.path().join(name), bytes).unwrap();
        }
        temp
    }

    #[test]
    fn search_reports_line_and_column() {
        let temp = fixture(&[("a.txt", b"cat\ncategory\n")]);

        let summary = run_search(temp.path(), "cat").unwrap();
        assert_eq!(summary.total_files_visited, 1);
        assert_eq!(summary.total_occurrences, 2);
        assert_eq!(summary.files.len(), 1);

        let positions: Vec<(usize, usize)> = summary.files[0]
            .occurrences
            .iter()
            .map(|o| (o.line, o.column))
            .collect();
        assert_eq!(positions, vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn search_never_writes() {
        let temp = fixture(&[("a.txt", b"cat\ncategory\n")]);
        run_search(temp.path(), "cat").unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "cat\ncategory\n"
        );
    }

    #[test]
    fn replace_rewrites_and_counts() {
        let temp = fixture(&[("a.txt", b"cat\ncategory\n")]);

        let summary = run_replace(temp.path(), "cat", "dog").unwrap();
        assert_eq!(summary.total_occurrences, 2);
        assert_eq!(summary.total_files_modified, 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "dog\ndogegory\n"
        );
    }

    #[test]
    fn replace_skips_files_without_matches() {
        let temp = fixture(&[("a.txt", b"nothing here")]);

        let summary = run_replace(temp.path(), "cat", "dog").unwrap();
        assert_eq!(summary.total_files_visited, 1);
        assert_eq!(summary.total_files_modified, 0);
        assert!(summary.files.is_empty());
        assert_eq!(
            fs::read_to_string(temp.path().join("a.txt")).unwrap(),
            "nothing here"
        );
    }

    #[test]
    fn binary_files_are_skipped_silently() {
        let temp = fixture(&[
            ("blob.bin", &[0xffu8, 0xfe, 0x00][..]),
            ("text.txt", b"a cat"),
        ]);

        let summary = run_search(temp.path(), "cat").unwrap();
        assert_eq!(summary.total_files_visited, 2);
        assert_eq!(summary.total_occurrences, 1);
        // No error entry for the binary file.
        assert_eq!(summary.files.len(), 1);
        assert!(summary.files[0].path.ends_with("text.txt"));
        assert!(!summary.render().contains("Error"));
    }

    #[test]
    fn search_and_replace_counts_agree() {
        let content: &[u8] = b"aa aaaa\ncat category aa\n";
        let search_dir = fixture(&[("f.txt", content)]);
        let replace_dir = fixture(&[("f.txt", content)]);

        let searched = run_search(search_dir.path(), "aa").unwrap();
        let replaced = run_replace(replace_dir.path(), "aa", "XY").unwrap();
        assert_eq!(searched.total_occurrences, replaced.total_occurrences);
    }

    #[test]
    fn newline_terminated_term_counts_agree_across_modes() {
        let content: &[u8] = b"cat\ndog\n";
        let search_dir = fixture(&[("f.txt", content)]);
        let replace_dir = fixture(&[("f.txt", content)]);

        let searched = run_search(search_dir.path(), "cat\n").unwrap();
        assert_eq!(searched.total_occurrences, 1);

        let replaced = run_replace(replace_dir.path(), "cat\n", "bird\n").unwrap();
        assert_eq!(replaced.total_occurrences, 1);
        assert_eq!(
            fs::read_to_string(replace_dir.path().join("f.txt")).unwrap(),
            "bird\ndog\n"
        );
    }

    #[test]
    fn replace_with_same_term_is_idempotent_but_modified() {
        let temp = fixture(&[("f.txt", b"foofoo")]);

        let summary = run_replace(temp.path(), "foo", "foo").unwrap();
        assert_eq!(summary.total_occurrences, 2);
        assert_eq!(summary.total_files_modified, 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("f.txt")).unwrap(),
            "foofoo"
        );
    }

    #[test]
    fn empty_search_term_is_rejected_before_io() {
        let temp = fixture(&[("f.txt", b"anything")]);

        let err = run_search(temp.path(), "").unwrap_err();
        assert!(matches!(err, SweepError::EmptySearchTerm));
        assert!(err.is_validation());

        let err = run_replace(temp.path(), "", "x").unwrap_err();
        assert!(matches!(err, SweepError::EmptySearchTerm));
        assert_eq!(
            fs::read_to_string(temp.path().join("f.txt")).unwrap(),
            "anything"
        );
    }

    #[test]
    fn empty_folder_is_rejected() {
        let err = run_search(&PathBuf::new(), "term").unwrap_err();
        assert!(matches!(err, SweepError::FolderNotSelected));
    }

    #[test]
    fn missing_root_is_not_a_validation_error() {
        let temp = TempDir::new().unwrap();
        let err = run_search(&temp.path().join("nope"), "term").unwrap_err();
        assert!(matches!(err, SweepError::RootAccess { .. }));
        assert!(!err.is_validation());
    }

    #[test]
    fn walks_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sub/deeper")).unwrap();
        fs::write(temp.path().join("sub/deeper/x.txt"), "cat").unwrap();

        let summary = run_search(temp.path(), "cat").unwrap();
        assert_eq!(summary.total_occurrences, 1);
    }
}
