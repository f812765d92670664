use crate::core::types::{RunMode, RunSummary};
use anyhow::Result;
use serde::Serialize;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: &crate::OutputFormat) -> Self {
        let format = match format {
            crate::OutputFormat::Text => OutputFormat::Text,
            crate::OutputFormat::Json => OutputFormat::Json,
            crate::OutputFormat::Markdown => OutputFormat::Markdown,
        };
        Self { format }
    }

    pub fn write_summary(&self, summary: &RunSummary) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(summary)?);
            }
            OutputFormat::Text => {
                print!("{}", summary.render());
            }
            OutputFormat::Markdown => {
                println!("# Run Report\n");
                println!("```text");
                print!("{}", summary.render());
                println!("```");
                println!("\n## Totals\n");
                println!("| Metric | Value |");
                println!("|--------|-------|");
                println!("| Files visited | {} |", summary.total_files_visited);
                println!("| Occurrences | {} |", summary.total_occurrences);
                if summary.mode == RunMode::Replace {
                    println!("| Files modified | {} |", summary.total_files_modified);
                }
            }
        }
        Ok(())
    }

    pub fn write_error(&self, error: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct ErrorResponse {
                    error: String,
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorResponse {
                        error: error.to_string()
                    })?
                );
            }
            OutputFormat::Text | OutputFormat::Markdown => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}
