use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::output::OutputWriter;
use crate::engine;

pub fn run(
    term: String,
    replacement: String,
    path: Option<PathBuf>,
    config: &Config,
    format: &crate::OutputFormat,
) -> Result<()> {
    let output = OutputWriter::new(format);
    let folder = super::resolve_folder(path, config);

    match engine::run_replace(&folder, &term, &replacement) {
        Ok(summary) => {
            super::remember_folder(&folder, config);
            output.write_summary(&summary)?;
        }
        Err(err) if err.is_validation() => {
            output.write_error(&err.to_string())?;
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
