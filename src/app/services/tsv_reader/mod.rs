//! Tab-separated row reader for claims and qualifiers dumps
//!
//! Binds the fixed column layout of each file variant to the streaming
//! `csv` tokenizer and exposes typed, name-addressable field access.
//!
//! ## Architecture
//!
//! - [`schema`] - Static column declarations per file variant
//! - [`row`] - Reusable row buffers and the [`WikidataRow`] binding trait

pub mod row;
pub mod schema;

pub use row::{ClaimsRow, HasEntityId, QualifiersRow, WikidataRow};
pub use schema::{Column, ColumnKind, FileVariant, CLAIMS_COLUMNS, QUALIFIER_COLUMNS};

use std::fs::File;
use std::path::Path;

use crate::{Error, Result};

/// Open a dump file with the tokenizer settings the exports are written
/// with: tab separation, no quoting, space-trimmed fields, no header row.
///
/// Record length is left flexible here; [`WikidataRow::load`] checks the
/// arity against the schema so mismatches carry exact diagnostics.
pub fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .trim(csv::Trim::Fields)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                Error::tsv_parsing(
                    path.display().to_string(),
                    "failed to open input file",
                    Some(e),
                )
            } else {
                e.into()
            }
        })
}
