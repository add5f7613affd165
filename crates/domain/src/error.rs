// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::SHORT_DATE_FORMAT;
use crate::interval::Interval;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while validating holidays or running a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Window size or maximum stay is out of range.
    #[error("{reason}")]
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },
    /// A holiday ends before it starts.
    #[error(
        "start date {} after {}",
        .start.format(SHORT_DATE_FORMAT),
        .end.format(SHORT_DATE_FORMAT)
    )]
    InvalidRange {
        /// The holiday start date.
        start: NaiveDate,
        /// The holiday end date.
        end: NaiveDate,
    },
    /// A holiday date was not provided.
    #[error("{field} date not set")]
    MissingDate {
        /// Which date was missing (`start` or `end`).
        field: &'static str,
    },
    /// A holiday date could not be parsed as `YYYY-MM-DD`.
    #[error("could not parse date '{value}': {reason}")]
    DateParse {
        /// The offending input.
        value: String,
        /// The parser's message.
        reason: String,
    },
    /// A holiday overlaps one that was already accepted.
    #[error(
        "trip {} to {} overlaps with {} to {}",
        .holiday.start().format(SHORT_DATE_FORMAT),
        .holiday.end().format(SHORT_DATE_FORMAT),
        .existing.start().format(SHORT_DATE_FORMAT),
        .existing.end().format(SHORT_DATE_FORMAT)
    )]
    Overlap {
        /// The holiday being added.
        holiday: Interval,
        /// The accepted holiday it conflicts with.
        existing: Interval,
    },
    /// A window would run past the last date the calendar can represent.
    #[error(
        "window starting {} runs past the last supported date",
        .start.format(SHORT_DATE_FORMAT)
    )]
    WindowOutOfRange {
        /// The first day of the offending window.
        start: NaiveDate,
    },
    /// No holidays were supplied.
    #[error("no trips were provided to calculate")]
    NoHolidays,
    /// An internal invariant did not hold.
    #[error("calculation error: {reason}")]
    Calculation {
        /// Description of the broken invariant.
        reason: String,
    },
}
