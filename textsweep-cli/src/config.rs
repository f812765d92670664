use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed config file path, relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Persisted user preferences. A single flat JSON object; the only
/// recognized key is `last_folder`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_folder: Option<PathBuf>,
}

impl Config {
    /// Load the config, falling back to defaults on any failure. A missing
    /// or malformed file must never prevent startup.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => config,
                Err(err) => {
                    warn!("ignoring malformed config {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                debug!("no config at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write the config back. Best-effort: failures are logged, never
    /// surfaced to the user.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(err) => {
                warn!("could not serialize config: {}", err);
                return;
            }
        };
        if let Err(err) = fs::write(path, json) {
            warn!("could not save config {}: {}", path.display(), err);
        }
    }
}
