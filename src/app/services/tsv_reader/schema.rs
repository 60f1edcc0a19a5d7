//! Static column schemas for the two dump file variants
//!
//! Each variant declares an ordered, immutable list of `(name, type)`
//! pairs fixed at build time. Arity and order must match the input file
//! exactly; the row buffers in [`super::row`] are generated from these
//! layouts field for field.

use std::fmt;

/// The two dump file variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileVariant {
    Claims,
    Qualifiers,
}

impl FileVariant {
    /// Column layout for this variant
    pub fn columns(&self) -> &'static [Column] {
        match self {
            FileVariant::Claims => CLAIMS_COLUMNS,
            FileVariant::Qualifiers => QUALIFIER_COLUMNS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileVariant::Claims => "claims",
            FileVariant::Qualifiers => "qualifiers",
        }
    }
}

impl fmt::Display for FileVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar type of a dump column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Arbitrary text, stored as-is
    Text,
    /// Unsigned 64-bit decimal integer
    U64,
}

/// One declared dump column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn text(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Text,
    }
}

const fn u64_col(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::U64,
    }
}

/// Column layout of a claims export
pub const CLAIMS_COLUMNS: &[Column] = &[
    text("entity_id"),
    text("claim_id"),
    text("type"),
    text("rank"),
    text("snaktype"),
    text("property"),
    text("datavalue_string"),
    text("datavalue_entity"),
    text("datavalue_date"),
    text("datavalue_type"),
    text("datatype"),
];

/// Column layout of a qualifiers export
pub const QUALIFIER_COLUMNS: &[Column] = &[
    text("claim_id"),
    text("property"),
    text("hash"),
    text("snaktype"),
    text("qualifier_property"),
    text("datavalue_string"),
    text("datavalue_entity"),
    text("datavalue_date"),
    text("nil"),
    text("datavalue_type"),
    text("datatype"),
    u64_col("counter"),
    u64_col("order_hash"),
];
