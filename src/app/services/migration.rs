//! Streaming parse driver
//!
//! Owns the single row buffer for a run and moves the stream through two
//! states: streaming (read, decode, dispatch) and draining (summaries on
//! clean EOF). Any error aborts from either state; nothing row-level is
//! retained between iterations.

use std::path::Path;

use tracing::{debug, info};

use crate::app::services::datavalue_parser;
use crate::app::services::handlers::ValueHandler;
use crate::app::services::progress::ProgressReporter;
use crate::app::services::tsv_reader::{self, WikidataRow};
use crate::config::MigrateConfig;
use crate::{Error, Result};

/// Drives one dump file through the dispatcher into a handler pipeline
#[derive(Debug, Default)]
pub struct MigrationDriver<R: WikidataRow> {
    row: R,
    show_progress: bool,
}

impl<R: WikidataRow> MigrationDriver<R> {
    pub fn new(show_progress: bool) -> Self {
        Self {
            row: R::default(),
            show_progress,
        }
    }

    /// Stream `input` to EOF, then trigger the pipeline summaries
    ///
    /// Returns the number of rows processed.
    pub fn run<H: ValueHandler<R>>(
        &mut self,
        input: &Path,
        handler: &mut H,
        config: &MigrateConfig,
    ) -> Result<u64> {
        info!(
            "Migrating {} rows from {}",
            R::VARIANT,
            input.display()
        );
        let mut reader = tsv_reader::open_reader(input)?;
        let mut record = csv::StringRecord::new();
        let mut progress = ProgressReporter::new(
            input.display().to_string(),
            config.progress_interval,
            self.show_progress,
        );

        loop {
            let more = self
                .row
                .read_next(&mut reader, &mut record)
                .map_err(|e| annotate_file(e, input))?;
            if !more {
                break;
            }
            datavalue_parser::parse_row(&self.row, handler)?;
            progress.tick();
        }

        // Draining: the stream ended cleanly, let every observer report
        handler.summary()?;
        progress.finish();
        debug!("Finished {} after {} rows", input.display(), progress.rows());
        Ok(progress.rows())
    }
}

fn annotate_file(error: Error, input: &Path) -> Error {
    match error {
        Error::TsvParsing {
            message, source, ..
        } => Error::TsvParsing {
            file: input.display().to_string(),
            message,
            source,
        },
        other => other,
    }
}
