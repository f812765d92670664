use std::fs;
use std::path::Path;
use tracing::debug;

/// Outcome of reading one file for a run.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Bytes read and decoded as UTF-8.
    Text(String),

    /// Bytes read but not valid UTF-8. The file is treated as binary and
    /// silently skipped; it still counts toward the visited total.
    Binary,

    /// Read failed (permissions, I/O). Becomes an error line in the report.
    Failed(String),
}

/// Read a file's bytes and decode them as UTF-8.
///
/// Decode failure is deliberately distinct from read failure: only read
/// failures produce an error line in the report.
pub fn load(path: &Path) -> LoadOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => return LoadOutcome::Failed(err.to_string()),
    };

    match String::from_utf8(bytes) {
        Ok(content) => LoadOutcome::Text(content),
        Err(_) => {
            debug!("skipping binary file {}", path.display());
            LoadOutcome::Binary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_utf8_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ok.txt");
        fs::write(&path, "héllo\nwörld\n").unwrap();

        match load(&path) {
            LoadOutcome::Text(content) => assert_eq!(content, "héllo\nwörld\n"),
            other => panic!("expected Text, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_binary_not_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        assert!(matches!(load(&path), LoadOutcome::Binary));
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone.txt");

        assert!(matches!(load(&path), LoadOutcome::Failed(_)));
    }
}
