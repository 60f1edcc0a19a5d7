//! Per-variant counting handler
//!
//! Counts every delivery: parsed values, declared-missing values, and
//! values that failed semantic validation, per base kind. The row count
//! includes the meta variants, so it can exceed the sum of the parsed
//! counters; that is the number the drivers of curated dumps reconcile
//! against the source row count.

use serde::Serialize;
use tracing::warn;

use super::ValueHandler;
use crate::app::models::{
    CoordinateValue, EntityIdValue, QuantityValue, StringValue, TextValue, TimeValue, ValueKind,
};
use crate::app::services::tsv_reader::WikidataRow;
use crate::Result;

/// One counter per base value kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariantCounts {
    pub string: u64,
    pub entity: u64,
    pub text: u64,
    pub time: u64,
    pub quantity: u64,
    pub coordinate: u64,
}

impl VariantCounts {
    fn bump(&mut self, kind: ValueKind) {
        match kind {
            ValueKind::String => self.string += 1,
            ValueKind::EntityId => self.entity += 1,
            ValueKind::Text => self.text += 1,
            ValueKind::Time => self.time += 1,
            ValueKind::Quantity => self.quantity += 1,
            ValueKind::Coordinate => self.coordinate += 1,
        }
    }

    /// Counter for one kind
    pub fn get(&self, kind: ValueKind) -> u64 {
        match kind {
            ValueKind::String => self.string,
            ValueKind::EntityId => self.entity,
            ValueKind::Text => self.text,
            ValueKind::Time => self.time,
            ValueKind::Quantity => self.quantity,
            ValueKind::Coordinate => self.coordinate,
        }
    }

    /// Sum over all kinds
    pub fn total(&self) -> u64 {
        ValueKind::all().iter().map(|kind| self.get(*kind)).sum()
    }

    fn print(&self, heading: &str) {
        println!("{} ({}):", heading, self.total());
        for kind in ValueKind::all() {
            println!("  {}: {}", kind, self.get(*kind));
        }
    }
}

/// Serializable snapshot of the final counters
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub row_count: u64,
    pub parsed: VariantCounts,
    pub missing: VariantCounts,
    pub invalid: VariantCounts,
}

/// Counting handler; any variant outside the fixed value set is fatal
#[derive(Debug, Default)]
pub struct StatsHandler {
    print_illegal_values: bool,
    row_count: u64,
    parsed: VariantCounts,
    missing: VariantCounts,
    invalid: VariantCounts,
}

impl StatsHandler {
    pub fn new(print_illegal_values: bool) -> Self {
        Self {
            print_illegal_values,
            ..Self::default()
        }
    }

    /// Total number of deliveries, meta variants included
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Parsed-value counter for one kind
    pub fn parsed(&self, kind: ValueKind) -> u64 {
        self.parsed.get(kind)
    }

    /// Declared-missing counter for one kind
    pub fn missing(&self, kind: ValueKind) -> u64 {
        self.missing.get(kind)
    }

    /// Failed-validation counter for one kind
    pub fn invalid(&self, kind: ValueKind) -> u64 {
        self.invalid.get(kind)
    }

    /// Snapshot of the counters for machine-readable output
    pub fn report(&self) -> StatsReport {
        StatsReport {
            row_count: self.row_count,
            parsed: self.parsed.clone(),
            missing: self.missing.clone(),
            invalid: self.invalid.clone(),
        }
    }
}

impl<R: WikidataRow> ValueHandler<R> for StatsHandler {
    fn on_string(&mut self, _row: &R, _value: &StringValue) -> Result<()> {
        self.row_count += 1;
        self.parsed.bump(ValueKind::String);
        Ok(())
    }

    fn on_entity_id(&mut self, _row: &R, _value: &EntityIdValue) -> Result<()> {
        self.row_count += 1;
        self.parsed.bump(ValueKind::EntityId);
        Ok(())
    }

    fn on_text(&mut self, _row: &R, _value: &TextValue) -> Result<()> {
        self.row_count += 1;
        self.parsed.bump(ValueKind::Text);
        Ok(())
    }

    fn on_time(&mut self, _row: &R, _value: &TimeValue) -> Result<()> {
        self.row_count += 1;
        self.parsed.bump(ValueKind::Time);
        Ok(())
    }

    fn on_quantity(&mut self, _row: &R, _value: &QuantityValue) -> Result<()> {
        self.row_count += 1;
        self.parsed.bump(ValueKind::Quantity);
        Ok(())
    }

    fn on_coordinate(&mut self, _row: &R, _value: &CoordinateValue) -> Result<()> {
        self.row_count += 1;
        self.parsed.bump(ValueKind::Coordinate);
        Ok(())
    }

    fn on_no_value(&mut self, _row: &R, kind: ValueKind) -> Result<()> {
        self.row_count += 1;
        self.missing.bump(kind);
        Ok(())
    }

    fn on_invalid(&mut self, row: &R, kind: ValueKind) -> Result<()> {
        if self.print_illegal_values && kind == ValueKind::Time {
            warn!("illegal time value: {}", row.datavalue_string());
        }
        self.row_count += 1;
        self.invalid.bump(kind);
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        println!("row count: {}", self.row_count);
        self.parsed.print("parsed values");
        self.missing.print("missing values");
        self.invalid.print("invalid values");
        Ok(())
    }
}
