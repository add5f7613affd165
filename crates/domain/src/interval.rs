// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inclusive date intervals.
//!
//! ## Invariants
//!
//! - `end >= start`; a single-day holiday has `start == end`
//! - Durations count both the first and the last day
//! - Two intervals sharing a boundary date overlap by one day

use crate::dates::{ISO_DATE_FORMAT, short_date};
use crate::error::DomainError;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::{max, min};

/// An inclusive range of calendar dates.
///
/// Ordering is by start date, then end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    start: NaiveDate,
    end: NaiveDate,
}

impl Interval {
    /// Creates an interval from two dates.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from dates that may be unset.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingDate`] if either date is `None`,
    /// otherwise as [`Interval::new`].
    pub fn from_optional(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        let start: NaiveDate = start.ok_or(DomainError::MissingDate { field: "start" })?;
        let end: NaiveDate = end.ok_or(DomainError::MissingDate { field: "end" })?;
        Self::new(start, end)
    }

    /// Creates an interval from two `YYYY-MM-DD` strings.
    ///
    /// Surrounding whitespace is ignored. An empty string is treated as an
    /// unset date.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingDate`] for an empty string,
    /// [`DomainError::DateParse`] for a malformed date, otherwise as
    /// [`Interval::new`].
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        Self::from_optional(parse_date(start)?, parse_date(end)?)
    }

    /// First day of the interval.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the interval.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both ends.
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        let days: i64 = self.end.signed_duration_since(self.start).num_days() + 1;
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Returns the part of this interval that falls within
    /// `[other_start, other_end]`, or `None` if they are disjoint.
    ///
    /// Boundaries are inclusive: an interval ending on `other_start`
    /// overlaps by exactly one day.
    #[must_use]
    pub fn overlap(
        &self,
        other_start: NaiveDate,
        other_end: NaiveDate,
    ) -> Option<PartialInterval> {
        if self.start > other_end || self.end < other_start {
            return None;
        }
        Some(PartialInterval {
            interval: Self {
                start: max(self.start, other_start),
                end: min(self.end, other_end),
            },
            holiday: *self,
        })
    }

    /// Whether this interval shares at least one day with `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlap(other.start, other.end).is_some()
    }

    /// Whether `date` falls within this interval.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {} ({} days)",
            short_date(self.start),
            short_date(self.end),
            self.duration_days()
        )
    }
}

/// The portion of a holiday that falls inside some window.
///
/// Only produced by [`Interval::overlap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PartialInterval {
    interval: Interval,
    holiday: Interval,
}

impl PartialInterval {
    /// The overlapping days.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// The holiday this part was cut from.
    #[must_use]
    pub const fn holiday(&self) -> Interval {
        self.holiday
    }

    /// First overlapping day.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.interval.start
    }

    /// Last overlapping day.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.interval.end
    }

    /// Number of overlapping days.
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        self.interval.duration_days()
    }
}

impl std::fmt::Display for PartialInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [overlap {} days]",
            self.holiday,
            self.interval.duration_days()
        )
    }
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map(Some)
        .map_err(|e| DomainError::DateParse {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
