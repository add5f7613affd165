// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rules for rolling-window stay calculations.
//!
//! A set of holidays complies when no window of `window_size` consecutive
//! days contains more than `max_stay` days away. Both the date of entry
//! and the date of exit count as days away.

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

mod config;
mod dates;
mod error;
mod evaluator;
mod holidays;
mod interval;
mod window;

#[cfg(test)]
mod tests;

pub use config::{CalculationConfig, DEFAULT_MAX_STAY, DEFAULT_WINDOW_SIZE};
pub use dates::{ISO_DATE_FORMAT, LONG_DATE_FORMAT, SHORT_DATE_FORMAT, long_date, short_date};
pub use error::DomainError;
pub use evaluator::{ComplianceEvaluator, ComplianceResult};
pub use holidays::HolidaySet;
pub use interval::{Interval, PartialInterval};
pub use window::{Window, WindowScanner};
