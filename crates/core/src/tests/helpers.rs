// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalculationConfig, ComplianceResult, DiagnosticSink, Interval};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

pub fn interval(start: &str, end: &str) -> Interval {
    Interval::parse(start, end).expect("valid test interval")
}

pub fn intervals(pairs: &[(&str, &str)]) -> Vec<Interval> {
    pairs.iter().map(|(start, end)| interval(start, end)).collect()
}

pub fn config(window_size: u32, max_stay: u32) -> CalculationConfig {
    CalculationConfig::new(window_size, max_stay).expect("valid test config")
}

/// Six holidays across January 2023.
///
/// ```text
/// x....xx...xx..x.....xx.xx
/// ```
pub fn create_january_holidays() -> Vec<Interval> {
    intervals(&[
        ("2023-01-01", "2023-01-01"),
        ("2023-01-06", "2023-01-07"),
        ("2023-01-11", "2023-01-12"),
        ("2023-01-15", "2023-01-15"),
        ("2023-01-21", "2023-01-22"),
        ("2023-01-24", "2023-01-25"),
    ])
}

/// A sink that keeps every result it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub results: Arc<Mutex<Vec<ComplianceResult>>>,
}

impl RecordingSink {
    pub fn recorded(&self) -> Vec<ComplianceResult> {
        self.results.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn on_result(&self, result: &ComplianceResult) {
        self.results.lock().unwrap().push(result.clone());
    }

    fn name(&self) -> &str {
        "RecordingSink"
    }
}
