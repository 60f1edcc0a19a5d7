//! Command execution for the migration CLI
//!
//! Wires the configured handler stack to the streaming driver for the
//! selected file variant, and takes care of logging setup and the
//! optional machine-readable stats output.

use std::time::{Duration, Instant};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::app::services::handlers::{
    CsvEmitHandler, EntityCountHandler, QuantityScaleHandler, StatsHandler,
};
use crate::app::services::migration::MigrationDriver;
use crate::app::services::tsv_reader::{ClaimsRow, FileVariant, QualifiersRow};
use crate::cli::args::{Args, VariantArg};
use crate::config::MigrateConfig;
use crate::{Error, Result};

/// Final run report for the caller to present
#[derive(Debug, Clone)]
pub struct MigrationReport {
    /// Rows read from the input
    pub rows: u64,
    /// Lines written to the load file
    pub rows_emitted: u64,
    /// Wall-clock processing time
    pub elapsed: Duration,
}

/// Initialise tracing according to the verbosity flags
///
/// Diagnostics go to stderr; stdout stays reserved for the handler
/// summaries.
pub fn setup_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.get_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a full migration for the selected file variant
pub fn run(args: &Args) -> Result<MigrationReport> {
    args.validate()?;
    let config = load_configuration(args)?;
    debug!("Effective configuration: {:?}", config);
    info!(
        "Starting {} migration: {} -> {}",
        FileVariant::from(args.variant),
        args.input_path.display(),
        args.output_path.display()
    );

    match args.variant {
        VariantArg::Claims => run_claims(args, &config),
        VariantArg::Qualifiers => run_qualifiers(args, &config),
    }
}

/// Merge the optional config file with the CLI overrides
fn load_configuration(args: &Args) -> Result<MigrateConfig> {
    let mut config = match &args.config_file {
        Some(path) => MigrateConfig::from_file(path)?,
        None => MigrateConfig::default(),
    };
    if args.print_illegal_values {
        config.print_illegal_values = true;
    }
    Ok(config)
}

fn run_claims(args: &Args, config: &MigrateConfig) -> Result<MigrationReport> {
    let start = Instant::now();
    let emit = CsvEmitHandler::create(&args.output_path, config)?;
    let mut handler = (
        StatsHandler::new(config.print_illegal_values),
        QuantityScaleHandler::new(),
        EntityCountHandler::new(),
        emit,
    );

    let mut driver = MigrationDriver::<ClaimsRow>::new(args.show_progress());
    let rows = driver.run(&args.input_path, &mut handler, config)?;

    write_stats_json(args, &handler.0)?;
    finish_report(start, rows, handler.3.rows_written())
}

fn run_qualifiers(args: &Args, config: &MigrateConfig) -> Result<MigrationReport> {
    let start = Instant::now();
    let emit = CsvEmitHandler::create(&args.output_path, config)?;
    let mut handler = (
        StatsHandler::new(config.print_illegal_values),
        QuantityScaleHandler::new(),
        emit,
    );

    let mut driver = MigrationDriver::<QualifiersRow>::new(args.show_progress());
    let rows = driver.run(&args.input_path, &mut handler, config)?;

    write_stats_json(args, &handler.0)?;
    finish_report(start, rows, handler.2.rows_written())
}

fn write_stats_json(args: &Args, stats: &StatsHandler) -> Result<()> {
    let Some(path) = &args.stats_json else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(&stats.report())
        .map_err(|e| Error::configuration(format!("failed to serialise stats: {}", e)))?;
    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("failed to write stats to {}", path.display()), e))?;
    info!("Wrote stats report to {}", path.display());
    Ok(())
}

fn finish_report(start: Instant, rows: u64, rows_emitted: u64) -> Result<MigrationReport> {
    let report = MigrationReport {
        rows,
        rows_emitted,
        elapsed: start.elapsed(),
    };
    info!(
        "Migration finished: {} rows in, {} rows out",
        report.rows, report.rows_emitted
    );
    Ok(report)
}
