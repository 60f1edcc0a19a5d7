//! Normalized tab-separated output emitter
//!
//! Writes one output line per parsed value, shaped for bulk loading into
//! the claims or qualifiers target table. The row type selects the output
//! shape through [`WikidataRow::key_fields`]: claims rows lead with
//! `entity_id, claim_id, property`, qualifier rows with
//! `claim_id, qualifier_property`; both continue with
//! `datatype, datavalue_string, datavalue_entity_id, datavalue_time,
//! datavalue_numeric`, unpopulated columns left empty.
//!
//! Dropping rules: non-`language_filter` text, timestamps outside the SQL
//! range, coordinates, and the no-value/invalid meta variants produce no
//! output line. The destination file is created on construction and
//! flushed in `summary`, so an aborted job may leave a truncated file
//! behind.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::ValueHandler;
use crate::app::models::{
    EntityIdValue, QuantityValue, StringValue, TextValue, TimeValue, ValueKind,
};
use crate::app::services::calendar;
use crate::app::services::tsv_reader::WikidataRow;
use crate::config::MigrateConfig;
use crate::constants::{SQL_TIMESTAMP_MAX_YEAR, SQL_TIMESTAMP_MIN_YEAR};
use crate::{Error, Result};

/// Emits parsed values as tab-separated load-file lines
#[derive(Debug)]
pub struct CsvEmitHandler {
    writer: csv::Writer<File>,
    path: PathBuf,
    language_filter: String,
    rows_written: u64,
}

impl CsvEmitHandler {
    /// Create the destination file and the handler writing to it
    pub fn create(path: &Path, config: &MigrateConfig) -> Result<Self> {
        let writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_path(path)
            .map_err(|e| {
                Error::tsv_parsing(
                    path.display().to_string(),
                    "failed to create output file",
                    Some(e),
                )
            })?;
        debug!("Emitting normalized rows to {}", path.display());
        Ok(Self {
            writer,
            path: path.to_path_buf(),
            language_filter: config.language_filter.clone(),
            rows_written: 0,
        })
    }

    /// Number of lines written so far
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    fn emit<R: WikidataRow>(
        &mut self,
        row: &R,
        string_col: &str,
        entity_col: &str,
        time_col: &str,
        numeric_col: &str,
    ) -> Result<()> {
        let mut fields: Vec<&str> = Vec::with_capacity(8);
        row.key_fields(&mut fields);
        fields.push(row.datatype());
        fields.push(string_col);
        fields.push(entity_col);
        fields.push(time_col);
        fields.push(numeric_col);
        self.writer.write_record(&fields)?;
        self.rows_written += 1;
        Ok(())
    }
}

impl<R: WikidataRow> ValueHandler<R> for CsvEmitHandler {
    fn on_string(&mut self, row: &R, value: &StringValue) -> Result<()> {
        self.emit(row, &value.value, "", "", "")
    }

    fn on_entity_id(&mut self, row: &R, value: &EntityIdValue) -> Result<()> {
        self.emit(row, "", &value.value, "", "")
    }

    fn on_text(&mut self, row: &R, value: &TextValue) -> Result<()> {
        if value.language != self.language_filter {
            return Ok(());
        }
        self.emit(row, &value.text, "", "", "")
    }

    fn on_time(&mut self, row: &R, value: &TimeValue) -> Result<()> {
        let year = calendar::year_of_instant(value.instant_ms);
        if year <= SQL_TIMESTAMP_MIN_YEAR || year >= SQL_TIMESTAMP_MAX_YEAR {
            // Outside the target column's representable range
            return Ok(());
        }
        let timestamp = calendar::format_sql_timestamp(value.instant_ms);
        self.emit(row, "", &value.calendar_model, &timestamp, "")
    }

    fn on_quantity(&mut self, row: &R, value: &QuantityValue) -> Result<()> {
        let unit = value.unit.as_deref().unwrap_or("");
        self.emit(row, "", unit, "", &value.amount)
    }

    fn on_coordinate(
        &mut self,
        _row: &R,
        _value: &crate::app::models::CoordinateValue,
    ) -> Result<()> {
        Ok(())
    }

    fn on_no_value(&mut self, _row: &R, _kind: ValueKind) -> Result<()> {
        Ok(())
    }

    fn on_invalid(&mut self, _row: &R, _kind: ValueKind) -> Result<()> {
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        self.writer.flush()?;
        info!(
            "Wrote {} normalized rows to {}",
            self.rows_written,
            self.path.display()
        );
        Ok(())
    }
}
