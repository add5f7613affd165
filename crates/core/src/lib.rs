// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rolling-window stay compliance.
//!
//! Determines whether a list of holidays keeps within a rule such as "no
//! more than 90 days away in any 180 days", and reports the window that
//! comes closest to (or furthest past) the limit.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calculate;
mod error;
mod report;
mod sink;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use calculate::{
    Calculator, calculate, calculate_pairs, calculate_with_defaults, calculate_with_sink,
};
pub use error::CoreError;
pub use report::{ComplianceReport, HolidaySummary, TripSummary};
pub use sink::{DiagnosticSink, FileDumpSink, NoOpSink, TracingSink};

pub use staycheck_domain::{
    CalculationConfig, ComplianceResult, DEFAULT_MAX_STAY, DEFAULT_WINDOW_SIZE, DomainError,
    HolidaySet, Interval, PartialInterval, Window,
};
