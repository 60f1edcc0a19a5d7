//! Command-line argument definitions for the migration tool
//!
//! Defines the CLI interface using the clap derive API. The three
//! positional arguments select the file variant and the input/output
//! paths; everything else tunes diagnostics.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::app::services::tsv_reader::FileVariant;
use crate::{Error, Result};

/// CLI arguments for the Wikidata dump migrator
///
/// Streams a claims or qualifiers tab-separated export, prints per-variant
/// statistics, and writes a normalized tab-separated file suitable for
/// bulk loading into a relational database.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wd_migrate",
    version,
    about = "Migrate Wikidata claim/qualifier TSV dumps into normalized load files"
)]
pub struct Args {
    /// Which dump file variant the input is
    #[arg(value_enum)]
    pub variant: VariantArg,

    /// Input path of the tab-separated dump
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output path for the normalized load file
    #[arg(value_name = "OUTPUT")]
    pub output_path: PathBuf,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Print every time payload that fails ISO-8601 parsing
    #[arg(long = "print-illegal-values")]
    pub print_illegal_values: bool,

    /// Write the final statistics as JSON to this path
    #[arg(long = "stats-json", value_name = "FILE")]
    pub stats_json: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// File variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Entity-level statements
    Claims,
    /// Claim refinements
    Qualifiers,
}

impl From<VariantArg> for FileVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Claims => FileVariant::Claims,
            VariantArg::Qualifiers => FileVariant::Qualifiers,
        }
    }
}

impl Args {
    /// Validate the command line arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "input path does not exist: {}",
                self.input_path.display()
            )));
        }
        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "input path is not a file: {}",
                self.input_path.display()
            )));
        }
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "output directory does not exist: {}",
                    parent.display()
                )));
            }
        }
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
