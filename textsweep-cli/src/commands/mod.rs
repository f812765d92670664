pub mod replace;
pub mod search;

use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE};

/// Use the explicit --path when given, otherwise fall back to the folder
/// persisted by a previous run.
pub(crate) fn resolve_folder(path: Option<PathBuf>, config: &Config) -> PathBuf {
    path.or_else(|| config.last_folder.clone()).unwrap_or_default()
}

/// Persist the folder for the next invocation when the selection changed.
pub(crate) fn remember_folder(folder: &Path, config: &Config) {
    if config.last_folder.as_deref() != Some(folder) {
        let updated = Config {
            last_folder: Some(folder.to_path_buf()),
        };
        updated.save(CONFIG_FILE);
    }
}
