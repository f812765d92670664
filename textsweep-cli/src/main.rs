use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod core;
mod engine;

use config::Config;

#[derive(Parser)]
#[command(name = "textsweep")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Recursive literal search and replace across a directory tree",
    long_about = "Walks every file under a folder and either reports the line/column \
                  of each occurrence of a literal string, or replaces every occurrence \
                  in place. Literal matching only - no regex, no case folding."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, markdown)
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every occurrence of a literal string, with line and column
    Search {
        /// Literal string to look for
        term: String,

        /// Folder to scan (defaults to the last folder used)
        #[arg(short = 'p', long)]
        path: Option<PathBuf>,
    },

    /// Replace every occurrence of a literal string, rewriting files in place
    Replace {
        /// Literal string to look for
        term: String,

        /// Replacement string (empty deletes the term)
        replacement: String,

        /// Folder to scan (defaults to the last folder used)
        #[arg(short = 'p', long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("textsweep=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("textsweep=info")
            .init();
    }

    let config = Config::load(config::CONFIG_FILE);

    match cli.command {
        Commands::Search { term, path } => {
            commands::search::run(term, path, &config, &cli.format)?
        }
        Commands::Replace {
            term,
            replacement,
            path,
        } => commands::replace::run(term, replacement, path, &config, &cli.format)?,
    }

    Ok(())
}
