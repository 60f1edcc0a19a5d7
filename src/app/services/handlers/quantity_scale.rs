//! Decimal precision/scale tracker for quantity amounts
//!
//! Works on the textual amount so arbitrary-precision decimals are
//! measured without loss. The sign character is excluded from the digit
//! counts; amounts reach this handler only after the sign check, so the
//! first byte is always `+` or `-`. The reported maxima size the
//! `NUMERIC(precision, scale)` column of the target table.

use super::ValueHandler;
use crate::app::models::QuantityValue;
use crate::app::services::tsv_reader::WikidataRow;
use crate::Result;

/// Tracks the widest integer and fractional digit runs seen in a stream
#[derive(Debug, Clone, Default)]
pub struct QuantityScaleHandler {
    integer: u64,
    fractional: u64,
}

impl QuantityScaleHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum total digits observed
    pub fn precision(&self) -> u64 {
        self.integer + self.fractional
    }

    /// Maximum fractional digits observed
    pub fn scale(&self) -> u64 {
        self.fractional
    }
}

impl<R: WikidataRow> ValueHandler<R> for QuantityScaleHandler {
    fn on_quantity(&mut self, _row: &R, value: &QuantityValue) -> Result<()> {
        let amount = &value.amount;
        match amount.find('.') {
            Some(dot_index) => {
                self.integer = self.integer.max(dot_index as u64 - 1);
                let decimals = (amount.len() - 1 - dot_index) as u64;
                self.fractional = self.fractional.max(decimals);
            }
            None => {
                self.integer = self.integer.max(amount.len() as u64 - 1);
            }
        }
        Ok(())
    }

    // Every other variant is irrelevant to column sizing
    fn on_unhandled(&mut self, _descriptor: &str) -> Result<()> {
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        println!("precision: {}, scale: {}", self.precision(), self.scale());
        Ok(())
    }
}
