//! Wikidata TSV migration library
//!
//! A Rust library for streaming large Wikidata claim and qualifier
//! tab-separated exports into normalized load files for a relational
//! database.
//!
//! This library provides tools for:
//! - Binding the fixed claims/qualifiers column layouts to a streaming
//!   tab-separated record reader with typed, name-addressable fields
//! - Decoding the per-row `datavalue` payload into a strongly typed value
//!   (string, entity id, monolingual text, time, quantity, coordinate)
//! - Fanning each typed value out through a stack of observers that count,
//!   measure, or emit normalized output rows
//! - Comprehensive error handling with a fatal/recoverable split that
//!   matches the dump's quality profile

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod calendar;
        pub mod datavalue_parser;
        pub mod handlers;
        pub mod migration;
        pub mod progress;
        pub mod tsv_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DataValue, ValueKind};
pub use app::services::tsv_reader::FileVariant;
pub use config::MigrateConfig;

/// Result type alias for the migration tool
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Wikidata TSV migration
///
/// Structural failures (schema drift, unknown discriminators, payloads
/// that do not match their declared shape) are fatal; per-row semantic
/// problems never surface here — they become `DataValue::Invalid` and are
/// counted downstream.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Tokenizer-level record error
    #[error("TSV parsing error in file '{file}': {message}")]
    TsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Record arity does not match the declared column schema
    #[error("schema mismatch in {variant} row: expected {expected} columns, found {found}")]
    SchemaMismatch {
        variant: &'static str,
        expected: usize,
        found: usize,
    },

    /// An integer-typed column failed to decode
    #[error("column '{column}' is not an unsigned integer: '{value}'")]
    IntegerColumn {
        column: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A payload did not match the structural shape its discriminator declares
    #[error("unexpected {datavalue_type} payload encountered: '{payload}'")]
    StructuralParse {
        datavalue_type: &'static str,
        payload: String,
    },

    /// No sub-parser recognised the row's discriminator
    #[error("unexpected datavalue_type encountered: '{datavalue_type}'")]
    UnknownDatavalueType { datavalue_type: String },

    /// A handler received a value variant it does not implement
    #[error("handler {handler} failed to handle value: {value}")]
    UnhandledValue {
        handler: &'static str,
        value: String,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a tokenizer error with context
    pub fn tsv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::TsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a schema arity mismatch error
    pub fn schema_mismatch(variant: &'static str, expected: usize, found: usize) -> Self {
        Self::SchemaMismatch {
            variant,
            expected,
            found,
        }
    }

    /// Create a structural payload error for a declared discriminator
    pub fn structural_parse(datavalue_type: &'static str, payload: impl Into<String>) -> Self {
        Self::StructuralParse {
            datavalue_type,
            payload: payload.into(),
        }
    }

    /// Create an unknown discriminator error
    pub fn unknown_datavalue_type(datavalue_type: impl Into<String>) -> Self {
        Self::UnknownDatavalueType {
            datavalue_type: datavalue_type.into(),
        }
    }

    /// Create an unhandled value error
    pub fn unhandled_value(handler: &'static str, value: impl Into<String>) -> Self {
        Self::UnhandledValue {
            handler,
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::TsvParsing {
            file: "unknown".to_string(),
            message: "TSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
