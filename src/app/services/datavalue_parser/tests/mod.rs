//! Test utilities for the datavalue dispatch chain
//!
//! Provides a recording handler that captures every delivered value and
//! builders for synthetic rows with a given payload.

use crate::app::models::DataValue;
use crate::app::services::handlers::ValueHandler;
use crate::app::services::tsv_reader::{ClaimsRow, QualifiersRow, WikidataRow};
use crate::Result;

mod quantity_tests;

/// Captures every delivered value for later assertions
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub values: Vec<DataValue>,
    pub summaries: u32,
}

impl<R: WikidataRow> ValueHandler<R> for RecordingHandler {
    fn handle(&mut self, _row: &R, value: &DataValue) -> Result<()> {
        self.values.push(value.clone());
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        self.summaries += 1;
        Ok(())
    }
}

/// Qualifier row with the given discriminator and payload columns
pub fn qualifier_row(
    datavalue_type: &str,
    datavalue_string: &str,
    datavalue_entity: &str,
) -> QualifiersRow {
    QualifiersRow {
        claim_id: "C1".to_string(),
        property: "P1".to_string(),
        hash: "cafe".to_string(),
        snaktype: "value".to_string(),
        qualifier_property: "P580".to_string(),
        datavalue_string: datavalue_string.to_string(),
        datavalue_entity: datavalue_entity.to_string(),
        datavalue_type: datavalue_type.to_string(),
        datatype: "wikibase-item".to_string(),
        counter: 1,
        order_hash: 1,
        ..QualifiersRow::default()
    }
}

/// Claims row with the given discriminator and payload columns
pub fn claims_row(
    entity_id: &str,
    datavalue_type: &str,
    datavalue_string: &str,
    datavalue_entity: &str,
) -> ClaimsRow {
    ClaimsRow {
        entity_id: entity_id.to_string(),
        claim_id: format!("{}$0", entity_id),
        claim_type: "statement".to_string(),
        rank: "normal".to_string(),
        snaktype: "value".to_string(),
        property: "P31".to_string(),
        datavalue_string: datavalue_string.to_string(),
        datavalue_entity: datavalue_entity.to_string(),
        datavalue_type: datavalue_type.to_string(),
        datatype: "wikibase-item".to_string(),
        ..ClaimsRow::default()
    }
}
