// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rolling window enumeration.
//!
//! The scanner produces one [`Window`] per calendar day between the start
//! of the earliest holiday and the last day on which a window still ends
//! on or before the end of the latest holiday. Every possible origin is
//! visited, not only origins aligned to holiday boundaries.
//!
//! ## Example
//!
//! ```text
//! window_size = 5
//! holidays    = 2023-01-01..=2023-01-01, 2023-01-06..=2023-01-07
//!
//! frame       = 2023-01-01 ..= 2023-01-03   (2023-01-07 minus 4 days)
//! windows     = 01-01..01-05 (1 day away)
//!               01-02..01-06 (1 day away)
//!               01-03..01-07 (2 days away)
//! ```

use crate::dates::long_date;
use crate::error::DomainError;
use crate::holidays::HolidaySet;
use crate::interval::{Interval, PartialInterval};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::iter::FusedIterator;

/// One candidate window and the holiday days falling inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
    days_away: u32,
    overlaps: usize,
    overlap_start: Option<NaiveDate>,
    overlap_end: Option<NaiveDate>,
    parts: Vec<PartialInterval>,
}

impl Window {
    /// Builds the window `[start, end]` from the holiday portions inside it.
    fn from_parts(start: NaiveDate, end: NaiveDate, parts: Vec<PartialInterval>) -> Self {
        let days_away: u32 = parts
            .iter()
            .fold(0_u32, |acc, part| acc.saturating_add(part.duration_days()));
        let overlap_start: Option<NaiveDate> = parts.iter().map(PartialInterval::start).min();
        let overlap_end: Option<NaiveDate> = parts.iter().map(PartialInterval::end).max();

        Self {
            start,
            end,
            days_away,
            overlaps: parts.len(),
            overlap_start,
            overlap_end,
            parts,
        }
    }

    /// First day of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Total holiday days inside the window.
    #[must_use]
    pub const fn days_away(&self) -> u32 {
        self.days_away
    }

    /// Number of holidays touching the window.
    #[must_use]
    pub const fn overlaps(&self) -> usize {
        self.overlaps
    }

    /// Earliest holiday day inside the window.
    #[must_use]
    pub const fn overlap_start(&self) -> Option<NaiveDate> {
        self.overlap_start
    }

    /// Latest holiday day inside the window.
    #[must_use]
    pub const fn overlap_end(&self) -> Option<NaiveDate> {
        self.overlap_end
    }

    /// The holiday portions inside the window, in holiday insertion order.
    #[must_use]
    pub fn parts(&self) -> &[PartialInterval] {
        &self.parts
    }

    /// The portion of `holiday` inside this window, if any.
    #[must_use]
    pub fn part_for(&self, holiday: &Interval) -> Option<&PartialInterval> {
        self.parts.iter().find(|part| part.holiday() == *holiday)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "window {}:{}",
            long_date(self.start),
            long_date(self.end)
        )?;
        if let (Some(start), Some(end)) = (self.overlap_start, self.overlap_end) {
            write!(f, " overlap {}:{}", long_date(start), long_date(end))?;
        }
        write!(f, " ({} days, {} overlaps)", self.days_away, self.overlaps)
    }
}

/// Lazily enumerates every window over a holiday set.
///
/// The sequence is finite and cannot be restarted; build a new scanner to
/// scan again. Each window only examines the holidays that can reach it, so
/// a long frame with many holidays costs one pass over the days plus one
/// over the holidays.
#[derive(Debug, Clone)]
pub struct WindowScanner<'a> {
    /// Holidays by start date, tagged with their insertion position.
    ordered: Vec<(usize, &'a Interval)>,
    /// First entry of `ordered` that ends on or after the next window start.
    first_live: usize,
    window_span: Days,
    frame_start: NaiveDate,
    frame_end: NaiveDate,
    next_start: Option<NaiveDate>,
}

impl<'a> WindowScanner<'a> {
    /// Prepares a scan of `holidays` with windows of `window_size` days.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Calculation`] if the set is empty or the
    /// window size is zero. Neither happens for a validated configuration
    /// and a set built from at least one holiday.
    ///
    /// Returns [`DomainError::WindowOutOfRange`] if the last window would
    /// end after [`NaiveDate::MAX`].
    pub fn new(holidays: &'a HolidaySet, window_size: u32) -> Result<Self, DomainError> {
        let (Some(frame_start), Some(latest_end)) =
            (holidays.earliest_start(), holidays.latest_end())
        else {
            return Err(DomainError::Calculation {
                reason: String::from("no holidays to scan"),
            });
        };
        if window_size == 0 {
            return Err(DomainError::Calculation {
                reason: String::from("window size must be positive"),
            });
        }

        let window_span: Days = Days::new(u64::from(window_size - 1));

        // The last origin whose window still ends within the holidays;
        // a span shorter than one window leaves a single origin.
        let frame_end: NaiveDate = latest_end
            .checked_sub_days(window_span)
            .map_or(frame_start, |d| d.max(frame_start));
        if frame_end.checked_add_days(window_span).is_none() {
            return Err(DomainError::WindowOutOfRange { start: frame_end });
        }

        // Accepted holidays never overlap, so ordering by start also orders
        // by end.
        let mut ordered: Vec<(usize, &'a Interval)> = holidays.iter().enumerate().collect();
        ordered.sort_unstable_by_key(|(_, holiday)| holiday.start());

        Ok(Self {
            ordered,
            first_live: 0,
            window_span,
            frame_start,
            frame_end,
            next_start: Some(frame_start),
        })
    }

    /// The first and last window origins.
    #[must_use]
    pub const fn frame(&self) -> (NaiveDate, NaiveDate) {
        (self.frame_start, self.frame_end)
    }

    /// Total number of windows this scanner yields from the start.
    #[must_use]
    pub fn window_count(&self) -> usize {
        days_between_inclusive(self.frame_start, self.frame_end)
    }
}

impl Iterator for WindowScanner<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Self::Item> {
        let start: NaiveDate = self.next_start?;
        if start > self.frame_end {
            self.next_start = None;
            return None;
        }
        // In range for every origin up to `frame_end`, checked in `new`.
        let end: NaiveDate = start.checked_add_days(self.window_span)?;
        self.next_start = start.succ_opt().filter(|d| *d <= self.frame_end);

        while self
            .ordered
            .get(self.first_live)
            .is_some_and(|(_, holiday)| holiday.end() < start)
        {
            self.first_live += 1;
        }

        let mut touching: Vec<(usize, PartialInterval)> = self
            .ordered
            .iter()
            .skip(self.first_live)
            .take_while(|(_, holiday)| holiday.start() <= end)
            .filter_map(|(position, holiday)| {
                holiday.overlap(start, end).map(|part| (*position, part))
            })
            .collect();
        touching.sort_unstable_by_key(|(position, _)| *position);

        let parts: Vec<PartialInterval> = touching.into_iter().map(|(_, part)| part).collect();
        Some(Window::from_parts(start, end, parts))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining: usize = self
            .next_start
            .map_or(0, |start| days_between_inclusive(start, self.frame_end));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowScanner<'_> {}

impl FusedIterator for WindowScanner<'_> {}

fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> usize {
    let days: i64 = end.signed_duration_since(start).num_days() + 1;
    usize::try_from(days).unwrap_or(0)
}
