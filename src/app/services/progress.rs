//! Row progress reporting for long-running dump streams
//!
//! Wraps an `indicatif` spinner labelled with the input filename. The
//! driver ticks once per row; the display only refreshes every
//! `interval` rows so the reporter stays out of the hot loop. All output
//! goes to stderr, keeping stdout clean for the handler summaries.

use std::time::Instant;

use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::debug;

/// Spinner-style row counter for one input file
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    label: String,
    interval: u64,
    rows: u64,
    started: Instant,
}

impl ProgressReporter {
    /// Create a reporter; `enabled == false` silences all output
    pub fn new(label: impl Into<String>, interval: u64, enabled: bool) -> Self {
        let label = label.into();
        let bar = if enabled {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message(format!("parsing {}: 0 rows", label));
            Some(pb)
        } else {
            None
        };
        Self {
            bar,
            label,
            interval: interval.max(1),
            rows: 0,
            started: Instant::now(),
        }
    }

    /// Count one row; refreshes the display every `interval` rows
    pub fn tick(&mut self) {
        self.rows += 1;
        if self.rows % self.interval == 0 {
            if let Some(ref pb) = self.bar {
                let per_second =
                    (self.rows as f64 / self.started.elapsed().as_secs_f64().max(1e-9)) as u64;
                pb.set_message(format!(
                    "parsing {}: {} rows ({} rows/s)",
                    self.label, self.rows, per_second
                ));
                pb.tick();
            }
        }
    }

    /// Total rows counted so far
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Stop reporting and print the final tally
    pub fn finish(&self) {
        if let Some(ref pb) = self.bar {
            pb.finish_with_message(format!(
                "parsing {} took {} ({} rows)",
                self.label,
                HumanDuration(self.started.elapsed()),
                self.rows
            ));
        }
        debug!("Parsed {} rows from {}", self.rows, self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reporter_counts_rows() {
        let mut reporter = ProgressReporter::new("claims.tsv", 1000, false);
        for _ in 0..2500 {
            reporter.tick();
        }
        assert_eq!(reporter.rows(), 2500);
        reporter.finish();
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut reporter = ProgressReporter::new("claims.tsv", 0, false);
        reporter.tick();
        assert_eq!(reporter.rows(), 1);
    }

    #[test]
    fn test_enabled_reporter_does_not_panic() {
        let mut reporter = ProgressReporter::new("claims.tsv", 1, true);
        for _ in 0..3 {
            reporter.tick();
        }
        reporter.finish();
    }
}
