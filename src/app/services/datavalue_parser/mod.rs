//! Datavalue dispatch chain
//!
//! Selects the sub-parser for a row's `datavalue_type` discriminator and
//! runs it. The chain order is fixed so that diagnostics are
//! deterministic; discriminators are disjoint, so order never affects
//! which parser fires. A row whose discriminator no parser recognises is
//! schema drift and aborts the job.
//!
//! ## Architecture
//!
//! - [`patterns`] - Anchored payload shape patterns (input contract)
//! - [`parsers`] - One [`parsers::SubParser`] per payload kind

pub mod parsers;
pub mod patterns;

#[cfg(test)]
pub mod tests;

pub use parsers::{
    CoordinateParser, EntityParser, QuantityParser, StringParser, SubParser, TextParser,
    TimeParser,
};

use tracing::error;

use crate::app::services::handlers::ValueHandler;
use crate::app::services::tsv_reader::WikidataRow;
use crate::{Error, Result};

/// Dispatch one row to the first sub-parser that recognises it
///
/// Exactly one handler delivery happens per call; the fallback for an
/// unrecognised discriminator returns a fatal error instead.
pub fn parse_row<R: WikidataRow, H: ValueHandler<R>>(row: &R, handler: &mut H) -> Result<()> {
    if StringParser::can_parse(row) {
        StringParser::parse(row, handler)
    } else if EntityParser::can_parse(row) {
        EntityParser::parse(row, handler)
    } else if TimeParser::can_parse(row) {
        TimeParser::parse(row, handler)
    } else if CoordinateParser::can_parse(row) {
        CoordinateParser::parse(row, handler)
    } else if QuantityParser::can_parse(row) {
        QuantityParser::parse(row, handler)
    } else if TextParser::can_parse(row) {
        TextParser::parse(row, handler)
    } else {
        error!(
            "Unexpected datavalue_type encountered: {}",
            row.datavalue_type()
        );
        Err(Error::unknown_datavalue_type(row.datavalue_type()))
    }
}
