// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::NaiveDate;
use staycheck_domain::{CalculationConfig, Interval};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

pub fn interval(start: &str, end: &str) -> Interval {
    Interval::parse(start, end).expect("valid test interval")
}

pub fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(key, value)| (String::from(*key), String::from(*value)))
        .collect()
}

pub fn january_config() -> CalculationConfig {
    CalculationConfig::new(5, 4).expect("valid test config")
}

pub const JANUARY_JSON: &str = r#"[
    {"start": "2023-01-01", "end": "2023-01-01"},
    {"start": "2023-01-06", "end": "2023-01-07"},
    {"start": "2023-01-11", "end": "2023-01-12"},
    {"start": "2023-01-15", "end": "2023-01-15"},
    {"start": "2023-01-21", "end": "2023-01-22"},
    {"start": "2023-01-24", "end": "2023-01-25"}
]"#;
