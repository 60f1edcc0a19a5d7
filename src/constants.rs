//! Application constants for the Wikidata migration tool
//!
//! This module contains the payload discriminators, value ranges, and
//! default settings used throughout the migration pipeline.

// =============================================================================
// Datavalue discriminators
// =============================================================================

/// `datavalue_type` discriminator for plain string payloads
pub const DATAVALUE_TYPE_STRING: &str = "string";

/// `datavalue_type` discriminator for entity references
pub const DATAVALUE_TYPE_ENTITY_ID: &str = "wikibase-entityid";

/// `datavalue_type` discriminator for monolingual text payloads
pub const DATAVALUE_TYPE_TEXT: &str = "monolingualtext";

/// `datavalue_type` discriminator for timestamp payloads
pub const DATAVALUE_TYPE_TIME: &str = "time";

/// `datavalue_type` discriminator for decimal quantity payloads
pub const DATAVALUE_TYPE_QUANTITY: &str = "quantity";

/// `datavalue_type` discriminator for globe coordinate payloads
pub const DATAVALUE_TYPE_COORDINATE: &str = "globecoordinate";

/// Literal a dump row uses to declare a semantically missing value
pub const NOVALUE_LITERAL: &str = "novalue";

/// Prefix of the entity URI embedded in time/quantity/coordinate payloads
pub const ENTITY_URI_PREFIX: &str = "http://www.wikidata.org/entity/";

// =============================================================================
// Calendar models
// =============================================================================

/// Gregorian calendar model entity (>99% of dump timestamps)
pub const CALENDAR_GREGORIAN: &str = "Q1985727";

/// Julian calendar model entity
pub const CALENDAR_JULIAN: &str = "Q1985786";

// =============================================================================
// Sink limits
// =============================================================================

/// Minimum year the SQL timestamp sink can represent (exclusive bound)
pub const SQL_TIMESTAMP_MIN_YEAR: i64 = -4713;

/// Maximum year the SQL timestamp sink can represent (exclusive bound)
pub const SQL_TIMESTAMP_MAX_YEAR: i64 = 294276;

// =============================================================================
// Defaults
// =============================================================================

/// Rows between progress updates on the diagnostic channel
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Language kept by the emitter for monolingual text values
pub const DEFAULT_LANGUAGE_FILTER: &str = "en";

/// Occurrence thresholds reported by the entity degree histogram
pub const ENTITY_COUNT_THRESHOLDS: &[u64] = &[1, 2, 3, 4, 5, 10, 100, 1000];
