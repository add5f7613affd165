// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{JANUARY_JSON, date, interval, january_config, pairs};
use crate::{ApiError, calculate_from_json, calculate_from_query, calculate_report};
use staycheck::ComplianceReport;
use staycheck_domain::{CalculationConfig, Interval};

#[test]
fn test_calculate_report_from_json() {
    let report: ComplianceReport =
        calculate_from_json(JANUARY_JSON.as_bytes(), january_config()).unwrap();

    assert!(!report.breach);
    assert_eq!(report.window_days_away, 4);
    assert_eq!(report.window_start, date("2023-01-21"));
    assert_eq!(report.partial_trips.len(), 2);
    assert_eq!(report.holidays.len(), 6);
}

#[test]
fn test_calculate_report_from_query() {
    let query: Vec<(String, String)> = pairs(&[
        ("Start", "2023-02-01"),
        ("End", "2023-02-28"),
        ("Start", "2023-04-02"),
        ("End", "2023-05-10"),
    ]);
    let config: CalculationConfig = CalculationConfig::new(40, 35).unwrap();
    let (holidays, report): (Vec<Interval>, ComplianceReport) =
        calculate_from_query(&query, config).unwrap();

    assert_eq!(holidays.len(), 2);
    assert!(report.breach);
    assert_eq!(report.window_days_away, 39);
    assert_eq!(report.window_start, date("2023-04-01"));
}

#[test]
fn test_empty_input_is_rejected() {
    let err: ApiError = calculate_report(&[], january_config()).unwrap_err();
    assert_eq!(err.message(), "no trips were provided to calculate");
}

#[test]
fn test_invalid_config_is_rejected_before_input() {
    let config: CalculationConfig = CalculationConfig {
        window_size: 180,
        max_stay: 1,
    };
    let err: ApiError = calculate_report(&[], config).unwrap_err();
    assert_eq!(err.message(), "maximum stay cannot be less than 2 days");
}

#[test]
fn test_overlap_is_reported() {
    let holidays: Vec<Interval> = vec![
        interval("2023-01-02", "2023-03-30"),
        interval("2023-03-29", "2023-04-02"),
    ];
    let err: ApiError = calculate_report(&holidays, CalculationConfig::default()).unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}
