// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diagnostic sinks.
//!
//! A sink receives each completed result. The calculation itself never
//! performs I/O; anything written to logs or disk goes through a sink the
//! caller chose to install.

use staycheck_domain::ComplianceResult;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Receives completed calculation results.
pub trait DiagnosticSink: Send + Sync {
    /// Called once after each successful calculation.
    fn on_result(&self, result: &ComplianceResult);

    /// Returns the name of the sink.
    fn name(&self) -> &str;
}

/// A sink that ignores every result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl DiagnosticSink for NoOpSink {
    fn on_result(&self, _result: &ComplianceResult) {}

    fn name(&self) -> &str {
        "NoOpSink"
    }
}

/// A sink that logs each result at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn on_result(&self, result: &ComplianceResult) {
        debug!(
            breach = result.breach,
            days_away = result.longest_days_away,
            window_size = result.config.window_size,
            max_stay = result.config.max_stay,
            holidays = result.holidays.len(),
            windows_scanned = result.windows_scanned,
            window = %result.best_window,
            "Calculation complete"
        );
    }

    fn name(&self) -> &str {
        "TracingSink"
    }
}

/// A sink that writes each result to a file as pretty-printed JSON.
///
/// The file is overwritten on every result. Write failures are logged and
/// otherwise ignored.
#[derive(Debug, Clone)]
pub struct FileDumpSink {
    path: PathBuf,
}

impl FileDumpSink {
    /// Creates a sink writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this sink writes to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DiagnosticSink for FileDumpSink {
    fn on_result(&self, result: &ComplianceResult) {
        let dump: String = match serde_json::to_string_pretty(result) {
            Ok(dump) => dump,
            Err(err) => {
                warn!(error = %err, "Failed to serialize calculation dump");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, dump) {
            warn!(
                error = %err,
                path = %self.path.display(),
                "Failed to write calculation dump"
            );
        }
    }

    fn name(&self) -> &str {
        "FileDumpSink"
    }
}
