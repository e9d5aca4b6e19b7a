//! CLI for the mscrape profile scraper.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_extract, run_normalize, run_scrape, RunArgs};

/// Top-level CLI for mscrape.
#[derive(Debug, Parser)]
#[command(name = "mscrape")]
#[command(about = "mscrape: Medium profile scraper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scrape the profiles listed in an input file and export the results.
    Run {
        /// Input JSON (profiles, filters, max_items, output).
        #[arg(short, long, default_value = "inputs.json", value_name = "PATH")]
        input: PathBuf,

        /// Settings TOML. Defaults to ~/.config/mscrape/config.toml.
        #[arg(short, long, value_name = "PATH")]
        settings: Option<PathBuf>,

        /// Output file; overrides the path from the input file.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Export format (json, csv, excel, xml); overrides extension and input file.
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Print the canonical form of each profile URL.
    Normalize {
        /// Profile URLs or handles (e.g. @alice).
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Extract a record from a saved profile page and print it as JSON.
    Extract {
        /// Path to the saved HTML page.
        path: PathBuf,

        /// URL the page was fetched from.
        #[arg(long, default_value = "https://medium.com")]
        url: String,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run {
                input,
                settings,
                output,
                format,
            } => run_scrape(RunArgs {
                input,
                settings,
                output,
                format,
            })?,
            CliCommand::Normalize { urls } => run_normalize(&urls)?,
            CliCommand::Extract { path, url } => run_extract(&path, &url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
