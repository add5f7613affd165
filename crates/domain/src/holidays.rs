// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The set of holidays under consideration.
//!
//! Holidays are kept in the order they were added, which is the order the
//! traveller entered them. No two accepted holidays overlap.

use crate::error::DomainError;
use crate::interval::Interval;
use chrono::NaiveDate;
use serde::Serialize;

/// An ordered collection of non-overlapping holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaySet {
    holidays: Vec<Interval>,
    earliest_start: Option<NaiveDate>,
    latest_end: Option<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            holidays: Vec::new(),
            earliest_start: None,
            latest_end: None,
        }
    }

    /// Adds a holiday.
    ///
    /// Every accepted holiday is checked, regardless of date order. On
    /// failure the set is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overlap`] naming the first accepted holiday
    /// that shares a day with `holiday`.
    pub fn add(&mut self, holiday: Interval) -> Result<(), DomainError> {
        if let Some(existing) = self.holidays.iter().find(|h| h.overlaps(&holiday)) {
            return Err(DomainError::Overlap {
                holiday,
                existing: *existing,
            });
        }

        self.earliest_start = Some(
            self.earliest_start
                .map_or(holiday.start(), |d| d.min(holiday.start())),
        );
        self.latest_end = Some(
            self.latest_end
                .map_or(holiday.end(), |d| d.max(holiday.end())),
        );
        self.holidays.push(holiday);
        Ok(())
    }

    /// Validates a pair of dates and adds the resulting holiday.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] if `end` is before `start`, or
    /// [`DomainError::Overlap`] as for [`HolidaySet::add`].
    pub fn add_dates(&mut self, start: NaiveDate, end: NaiveDate) -> Result<(), DomainError> {
        let holiday: Interval = Interval::new(start, end)?;
        self.add(holiday)
    }

    /// Whether no holiday has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Number of accepted holidays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Iterates over holidays in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.holidays.iter()
    }

    /// The holidays in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.holidays
    }

    /// The first day of the earliest holiday.
    #[must_use]
    pub const fn earliest_start(&self) -> Option<NaiveDate> {
        self.earliest_start
    }

    /// The last day of the latest holiday.
    #[must_use]
    pub const fn latest_end(&self) -> Option<NaiveDate> {
        self.latest_end
    }

    /// The range from the earliest start to the latest end.
    #[must_use]
    pub fn span(&self) -> Option<Interval> {
        match (self.earliest_start, self.latest_end) {
            (Some(start), Some(end)) => Interval::new(start, end).ok(),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}
