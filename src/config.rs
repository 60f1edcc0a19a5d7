//! Configuration management and validation.
//!
//! Provides the runtime options for a migration run: diagnostic verbosity
//! of the stats handler, the language kept by the emitter, and the
//! progress reporting cadence. Options can be loaded from a TOML file and
//! overridden by CLI flags.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::constants::{DEFAULT_LANGUAGE_FILTER, DEFAULT_PROGRESS_INTERVAL};
use crate::{Error, Result};

/// Runtime configuration for a migration run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    /// Print the raw payload of every time value that fails ISO-8601 parsing
    pub print_illegal_values: bool,

    /// Language kept by the emitter for monolingual text values
    pub language_filter: String,

    /// Rows between progress updates
    pub progress_interval: u64,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            print_illegal_values: false,
            language_filter: DEFAULT_LANGUAGE_FILTER.to_string(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl MigrateConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read config {}", path.display()), e))?;
        let config: MigrateConfig = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("invalid config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Check option values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(Error::configuration(
                "progress_interval must be greater than 0",
            ));
        }
        if self.language_filter.is_empty() {
            return Err(Error::configuration("language_filter cannot be empty"));
        }
        Ok(())
    }
}
