// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CalculationConfig, ComplianceEvaluator, ComplianceResult, HolidaySet, Interval, WindowScanner,
};
use chrono::NaiveDate;

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

pub fn interval(start: &str, end: &str) -> Interval {
    Interval::parse(start, end).expect("valid test interval")
}

pub fn create_holiday_set(holidays: &[(&str, &str)]) -> HolidaySet {
    let mut set: HolidaySet = HolidaySet::new();
    for (start, end) in holidays {
        set.add(interval(start, end)).expect("non-overlapping test holidays");
    }
    set
}

/// Five-day window over January 2023.
///
/// ```text
/// x....xx...xx..x.....xx.xx
/// ```
pub fn create_january_holidays() -> HolidaySet {
    create_holiday_set(&[
        ("2023-01-01", "2023-01-01"),
        ("2023-01-06", "2023-01-07"),
        ("2023-01-11", "2023-01-12"),
        ("2023-01-15", "2023-01-15"),
        ("2023-01-21", "2023-01-22"),
        ("2023-01-24", "2023-01-25"),
    ])
}

pub fn scan_and_evaluate(holidays: HolidaySet, config: CalculationConfig) -> ComplianceResult {
    let mut evaluator: ComplianceEvaluator = ComplianceEvaluator::new(config.max_stay);
    let scanner: WindowScanner<'_> =
        WindowScanner::new(&holidays, config.window_size).expect("scannable holidays");
    evaluator.observe_all(scanner);
    evaluator.finish(holidays, config).expect("a binding window")
}
