//! Reusable row buffers bound to the static column schemas
//!
//! One buffer instance is reused for the entire stream; after each record
//! is decoded its fields are valid until the next read. Handlers address
//! columns by name through the struct fields, never by index, so a schema
//! reordering cannot silently ripple through the pipeline.

use csv::StringRecord;

use super::schema::{Column, FileVariant};
use crate::{Error, Result};

/// Binding between a row buffer and its declared column schema
///
/// Implemented once per file variant; the accessors cover the columns the
/// datavalue dispatcher and the generic handlers need on both variants.
pub trait WikidataRow: Default {
    /// The file variant this buffer decodes
    const VARIANT: FileVariant;

    /// The declared column layout
    fn schema() -> &'static [Column] {
        Self::VARIANT.columns()
    }

    /// Refill the buffer from one decoded record
    ///
    /// An arity mismatch or an integer column that fails to decode is
    /// fatal: the input does not have the declared layout.
    fn load(&mut self, record: &StringRecord) -> Result<()>;

    /// Read and decode the next record; `Ok(false)` at clean EOF
    fn read_next<S: std::io::Read>(
        &mut self,
        reader: &mut csv::Reader<S>,
        record: &mut StringRecord,
    ) -> Result<bool> {
        if reader.read_record(record)? {
            self.load(record)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn claim_id(&self) -> &str;
    fn datatype(&self) -> &str;
    fn datavalue_string(&self) -> &str;
    fn datavalue_entity(&self) -> &str;
    fn datavalue_type(&self) -> &str;

    /// Append the key columns that lead an emitted output row, in the
    /// output order of this variant
    fn key_fields<'a>(&'a self, out: &mut Vec<&'a str>);
}

/// Rows of a claims dump carry the subject entity directly
pub trait HasEntityId {
    fn entity_id(&self) -> &str;
}

/// Row buffer for the claims file variant
#[derive(Debug, Clone, Default)]
pub struct ClaimsRow {
    pub entity_id: String,
    pub claim_id: String,
    pub claim_type: String,
    pub rank: String,
    pub snaktype: String,
    pub property: String,
    pub datavalue_string: String,
    pub datavalue_entity: String,
    pub datavalue_date: String,
    pub datavalue_type: String,
    pub datatype: String,
}

/// Row buffer for the qualifiers file variant
#[derive(Debug, Clone, Default)]
pub struct QualifiersRow {
    pub claim_id: String,
    pub property: String,
    pub hash: String,
    pub snaktype: String,
    pub qualifier_property: String,
    pub datavalue_string: String,
    pub datavalue_entity: String,
    pub datavalue_date: String,
    pub nil: String,
    pub datavalue_type: String,
    pub datatype: String,
    pub counter: u64,
    pub order_hash: u64,
}

fn check_arity(variant: FileVariant, record: &StringRecord) -> Result<()> {
    let expected = variant.columns().len();
    if record.len() != expected {
        return Err(Error::schema_mismatch(variant.name(), expected, record.len()));
    }
    Ok(())
}

fn parse_u64(column: &'static str, value: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|e| Error::IntegerColumn {
        column,
        value: value.to_string(),
        source: e,
    })
}

fn assign(field: &mut String, value: &str) {
    field.clear();
    field.push_str(value);
}

impl WikidataRow for ClaimsRow {
    const VARIANT: FileVariant = FileVariant::Claims;

    fn load(&mut self, record: &StringRecord) -> Result<()> {
        check_arity(Self::VARIANT, record)?;
        assign(&mut self.entity_id, &record[0]);
        assign(&mut self.claim_id, &record[1]);
        assign(&mut self.claim_type, &record[2]);
        assign(&mut self.rank, &record[3]);
        assign(&mut self.snaktype, &record[4]);
        assign(&mut self.property, &record[5]);
        assign(&mut self.datavalue_string, &record[6]);
        assign(&mut self.datavalue_entity, &record[7]);
        assign(&mut self.datavalue_date, &record[8]);
        assign(&mut self.datavalue_type, &record[9]);
        assign(&mut self.datatype, &record[10]);
        Ok(())
    }

    fn claim_id(&self) -> &str {
        &self.claim_id
    }

    fn datatype(&self) -> &str {
        &self.datatype
    }

    fn datavalue_string(&self) -> &str {
        &self.datavalue_string
    }

    fn datavalue_entity(&self) -> &str {
        &self.datavalue_entity
    }

    fn datavalue_type(&self) -> &str {
        &self.datavalue_type
    }

    fn key_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.entity_id);
        out.push(&self.claim_id);
        out.push(&self.property);
    }
}

impl HasEntityId for ClaimsRow {
    fn entity_id(&self) -> &str {
        &self.entity_id
    }
}

impl WikidataRow for QualifiersRow {
    const VARIANT: FileVariant = FileVariant::Qualifiers;

    fn load(&mut self, record: &StringRecord) -> Result<()> {
        check_arity(Self::VARIANT, record)?;
        assign(&mut self.claim_id, &record[0]);
        assign(&mut self.property, &record[1]);
        assign(&mut self.hash, &record[2]);
        assign(&mut self.snaktype, &record[3]);
        assign(&mut self.qualifier_property, &record[4]);
        assign(&mut self.datavalue_string, &record[5]);
        assign(&mut self.datavalue_entity, &record[6]);
        assign(&mut self.datavalue_date, &record[7]);
        assign(&mut self.nil, &record[8]);
        assign(&mut self.datavalue_type, &record[9]);
        assign(&mut self.datatype, &record[10]);
        self.counter = parse_u64("counter", &record[11])?;
        self.order_hash = parse_u64("order_hash", &record[12])?;
        Ok(())
    }

    fn claim_id(&self) -> &str {
        &self.claim_id
    }

    fn datatype(&self) -> &str {
        &self.datatype
    }

    fn datavalue_string(&self) -> &str {
        &self.datavalue_string
    }

    fn datavalue_entity(&self) -> &str {
        &self.datavalue_entity
    }

    fn datavalue_type(&self) -> &str {
        &self.datavalue_type
    }

    fn key_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.claim_id);
        out.push(&self.qualifier_property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_record() -> StringRecord {
        StringRecord::from(vec![
            "Q42",
            "Q42$abc-def",
            "statement",
            "normal",
            "value",
            "P31",
            "payload",
            "Q5",
            "",
            "wikibase-entityid",
            "wikibase-item",
        ])
    }

    fn qualifiers_record() -> StringRecord {
        StringRecord::from(vec![
            "C1",
            "P1",
            "deadbeef",
            "value",
            "P580",
            "payload",
            "",
            "",
            "",
            "string",
            "string",
            "7",
            "12345",
        ])
    }

    #[test]
    fn test_claims_load_and_accessors() {
        let mut row = ClaimsRow::default();
        row.load(&claims_record()).unwrap();

        assert_eq!(row.entity_id, "Q42");
        assert_eq!(row.claim_id(), "Q42$abc-def");
        assert_eq!(row.property, "P31");
        assert_eq!(row.datavalue_type(), "wikibase-entityid");
        assert_eq!(row.datavalue_entity(), "Q5");
        assert_eq!(row.datatype(), "wikibase-item");

        let mut keys = Vec::new();
        row.key_fields(&mut keys);
        assert_eq!(keys, vec!["Q42", "Q42$abc-def", "P31"]);
    }

    #[test]
    fn test_qualifiers_load_and_accessors() {
        let mut row = QualifiersRow::default();
        row.load(&qualifiers_record()).unwrap();

        assert_eq!(row.claim_id(), "C1");
        assert_eq!(row.qualifier_property, "P580");
        assert_eq!(row.counter, 7);
        assert_eq!(row.order_hash, 12345);

        let mut keys = Vec::new();
        row.key_fields(&mut keys);
        assert_eq!(keys, vec!["C1", "P580"]);
    }

    #[test]
    fn test_arity_mismatch_is_fatal() {
        let mut row = ClaimsRow::default();
        let short = StringRecord::from(vec!["Q42", "c", "statement"]);
        let err = row.load(&short).unwrap_err();
        assert!(matches!(
            err,
            Error::SchemaMismatch {
                expected: 11,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_integer_column_decode_failure() {
        let mut record = qualifiers_record();
        let mut fields: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        fields[11] = "seven".to_string();
        record = StringRecord::from(fields);

        let mut row = QualifiersRow::default();
        let err = row.load(&record).unwrap_err();
        assert!(matches!(err, Error::IntegerColumn { column: "counter", .. }));
    }

    #[test]
    fn test_buffer_reuse_replaces_fields() {
        let mut row = QualifiersRow::default();
        row.load(&qualifiers_record()).unwrap();

        let mut fields: Vec<String> = qualifiers_record().iter().map(|s| s.to_string()).collect();
        fields[0] = "C2".to_string();
        fields[5] = "other".to_string();
        row.load(&StringRecord::from(fields)).unwrap();

        assert_eq!(row.claim_id(), "C2");
        assert_eq!(row.datavalue_string(), "other");
    }
}
