//! Per-entity degree histogram
//!
//! Counts how many parsed values each subject entity carries, plus one
//! occurrence for the target of every entity reference, and reports how
//! many entities stay under each of a fixed set of degree thresholds.
//! Only meaningful on the claims variant, which is the one whose rows name
//! a subject entity; the `HasEntityId` bound enforces that at compile
//! time.

use std::collections::HashMap;

use super::ValueHandler;
use crate::app::models::{
    CoordinateValue, EntityIdValue, QuantityValue, StringValue, TextValue, TimeValue, ValueKind,
};
use crate::app::services::tsv_reader::{HasEntityId, WikidataRow};
use crate::constants::ENTITY_COUNT_THRESHOLDS;
use crate::Result;

/// Occurrence counter over all entities seen in a stream
#[derive(Debug, Clone, Default)]
pub struct EntityCountHandler {
    values_counted: u64,
    entity_counts: HashMap<String, u64>,
}

impl EntityCountHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn record<R: HasEntityId>(&mut self, row: &R) {
        self.values_counted += 1;
        self.bump(row.entity_id());
    }

    /// Number of parsed values that contributed to the histogram
    pub fn values_counted(&self) -> u64 {
        self.values_counted
    }

    fn bump(&mut self, entity_id: &str) {
        *self.entity_counts.entry(entity_id.to_string()).or_insert(0) += 1;
    }

    /// Number of distinct entities observed
    pub fn distinct_entities(&self) -> usize {
        self.entity_counts.len()
    }

    /// Number of entities whose occurrence count is at most `limit`
    pub fn entities_within(&self, limit: u64) -> usize {
        self.entity_counts.values().filter(|&&c| c <= limit).count()
    }
}

impl<R: WikidataRow + HasEntityId> ValueHandler<R> for EntityCountHandler {
    fn on_string(&mut self, row: &R, _value: &StringValue) -> Result<()> {
        self.record(row);
        Ok(())
    }

    fn on_entity_id(&mut self, row: &R, value: &EntityIdValue) -> Result<()> {
        self.record(row);
        // The referenced entity gains an edge too
        self.bump(&value.value);
        Ok(())
    }

    fn on_text(&mut self, row: &R, _value: &TextValue) -> Result<()> {
        self.record(row);
        Ok(())
    }

    fn on_time(&mut self, row: &R, _value: &TimeValue) -> Result<()> {
        self.record(row);
        Ok(())
    }

    fn on_quantity(&mut self, row: &R, _value: &QuantityValue) -> Result<()> {
        self.record(row);
        Ok(())
    }

    fn on_coordinate(&mut self, row: &R, _value: &CoordinateValue) -> Result<()> {
        self.record(row);
        Ok(())
    }

    fn on_no_value(&mut self, _row: &R, _kind: ValueKind) -> Result<()> {
        Ok(())
    }

    fn on_invalid(&mut self, _row: &R, _kind: ValueKind) -> Result<()> {
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        println!("# entities: {}", self.distinct_entities());
        for &limit in ENTITY_COUNT_THRESHOLDS {
            println!("  edge_count({}): {}", limit, self.entities_within(limit));
        }
        Ok(())
    }
}
