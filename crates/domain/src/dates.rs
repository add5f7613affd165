// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date formats shared by messages and wire types.

use chrono::NaiveDate;

/// Wire format for all dates (`2023-01-31`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short human format used in error messages (`31/01/2023`).
pub const SHORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Long human format used in window summaries (`Tuesday 31 January 2023`).
pub const LONG_DATE_FORMAT: &str = "%A %-d %B %Y";

/// Formats a date as `DD/MM/YYYY`.
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

/// Formats a date as `Weekday D Month YYYY`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}
