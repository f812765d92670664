use std::path::Path;

use crate::core::Occurrence;

/// Find every non-overlapping occurrence of `term` in `content`, line by
/// line, left to right. After each match the cursor advances past the whole
/// term, so "aa" in "aaa" matches once, not twice.
///
/// Lines keep their terminators, so a term ending in '\n' matches and the
/// per-line totals stay in step with [`count_occurrences`]. Columns are
/// 1-indexed character positions in the original line; byte offsets from
/// the search are converted so multibyte text reports the column a user
/// would count.
pub fn scan(path: &Path, content: &str, term: &str) -> Vec<Occurrence> {
    debug_assert!(!term.is_empty());

    let mut occurrences = Vec::new();

    for (line_idx, line) in content.split_inclusive('\n').enumerate() {
        let mut cursor = 0;
        while let Some(found) = line[cursor..].find(term) {
            let byte_idx = cursor + found;
            occurrences.push(Occurrence {
                file_path: path.to_path_buf(),
                line: line_idx + 1,
                column: line[..byte_idx].chars().count() + 1,
            });
            cursor = byte_idx + term.len();
        }
    }

    occurrences
}

/// Non-overlapping occurrence count over the whole content. The replacer
/// uses this so its totals agree with [`scan`] on the same input.
pub fn count_occurrences(content: &str, term: &str) -> usize {
    content.matches(term).count()
}
