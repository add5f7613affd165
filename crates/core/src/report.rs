// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable summary of a calculation.
//!
//! This is the shape handed to collaborators: the HTTP layer returns it as
//! the response body and calendar renderers draw from it. Field names are
//! part of the wire contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use staycheck_domain::{ComplianceResult, Interval, PartialInterval};

/// A date range with its inclusive length in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSummary {
    /// First day.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
    /// Days covered, counting both ends.
    pub duration: u32,
}

impl From<&Interval> for TripSummary {
    fn from(interval: &Interval) -> Self {
        Self {
            start: interval.start(),
            end: interval.end(),
            duration: interval.duration_days(),
        }
    }
}

impl From<&PartialInterval> for TripSummary {
    fn from(part: &PartialInterval) -> Self {
        Self::from(&part.interval())
    }
}

/// One holiday as entered, with the part of it inside the binding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySummary {
    /// First day.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
    /// Days covered, counting both ends.
    pub duration: u32,
    /// The days of this holiday inside the binding window, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<TripSummary>,
}

/// The binding window, its holiday parts, and every holiday entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Whether any window exceeded the maximum stay.
    pub breach: bool,
    /// Window length in days.
    pub window_size: u32,
    /// Maximum days away allowed within a window.
    pub max_stay: u32,
    /// First day of the binding window.
    pub window_start: NaiveDate,
    /// Last day of the binding window.
    pub window_end: NaiveDate,
    /// Days away within the binding window.
    pub window_days_away: u32,
    /// Number of holidays touching the binding window.
    pub overlaps: usize,
    /// The holiday parts inside the binding window.
    pub partial_trips: Vec<TripSummary>,
    /// Every holiday, in the order given.
    pub holidays: Vec<HolidaySummary>,
}

impl From<&ComplianceResult> for ComplianceReport {
    fn from(result: &ComplianceResult) -> Self {
        let window = &result.best_window;

        let partial_trips: Vec<TripSummary> =
            window.parts().iter().map(TripSummary::from).collect();

        let holidays: Vec<HolidaySummary> = result
            .holidays
            .iter()
            .map(|holiday| HolidaySummary {
                start: holiday.start(),
                end: holiday.end(),
                duration: holiday.duration_days(),
                overlap: window.part_for(holiday).map(TripSummary::from),
            })
            .collect();

        Self {
            breach: result.breach,
            window_size: result.config.window_size,
            max_stay: result.config.max_stay,
            window_start: window.start(),
            window_end: window.end(),
            window_days_away: result.longest_days_away,
            overlaps: window.overlaps(),
            partial_trips,
            holidays,
        }
    }
}

impl From<ComplianceResult> for ComplianceReport {
    fn from(result: ComplianceResult) -> Self {
        Self::from(&result)
    }
}
