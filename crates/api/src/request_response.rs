// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Holidays arrive either as a JSON array of `{start, end}` objects or as
//! repeated `Start`/`End` query pairs. Both are decoded here into validated
//! intervals before anything reaches the calculation.

use serde::{Deserialize, Serialize};
use staycheck_domain::{ISO_DATE_FORMAT, Interval};

use crate::error::{ApiError, ApiResult, translate_domain_error};

/// One holiday as submitted by a client.
///
/// Dates are `YYYY-MM-DD` strings. Either may be absent or empty, which is
/// reported as a missing date rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInput {
    /// The first day away.
    #[serde(default, alias = "Start")]
    pub start: Option<String>,
    /// The last day away.
    #[serde(default, alias = "End")]
    pub end: Option<String>,
}

impl HolidayInput {
    /// Validates this input into an interval.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a date is missing, malformed, or the range
    /// is reversed.
    pub fn to_interval(&self) -> ApiResult<Interval> {
        Interval::parse(
            self.start.as_deref().unwrap_or_default(),
            self.end.as_deref().unwrap_or_default(),
        )
        .map_err(translate_domain_error)
    }
}

/// Response body for the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"up"` while the service is serving.
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: String::from("up"),
        }
    }
}

/// Decodes a JSON array of holidays.
///
/// # Errors
///
/// Returns `InvalidInput` on field `body` if the bytes are not a JSON array
/// of holiday objects, or the first holiday that fails validation.
pub fn decode_holidays_json(body: &[u8]) -> ApiResult<Vec<Interval>> {
    let inputs: Vec<HolidayInput> =
        serde_json::from_slice(body).map_err(|err| ApiError::InvalidInput {
            field: String::from("body"),
            message: format!("invalid JSON: {err}"),
        })?;

    inputs.iter().map(HolidayInput::to_interval).collect()
}

/// Decodes holidays from repeated `Start`/`End` query pairs.
///
/// Keys are matched case-insensitively and paired in order of appearance.
/// Other keys are ignored. No `Start` keys at all yields an empty list.
///
/// # Errors
///
/// Returns `InvalidInput` on field `End` if the number of `Start` and `End`
/// values differ, or the first holiday that fails validation.
pub fn decode_holidays_query(pairs: &[(String, String)]) -> ApiResult<Vec<Interval>> {
    let starts: Vec<&str> = values_for(pairs, "start");
    if starts.is_empty() {
        return Ok(Vec::new());
    }

    let ends: Vec<&str> = values_for(pairs, "end");
    if starts.len() != ends.len() {
        return Err(ApiError::InvalidInput {
            field: String::from("End"),
            message: String::from("incorrect number of url arguments"),
        });
    }

    starts
        .iter()
        .zip(ends.iter())
        .map(|(start, end)| Interval::parse(start, end).map_err(translate_domain_error))
        .collect()
}

/// Encodes holidays as `Start=..&End=..` pairs, ordered by start date.
///
/// The result is suitable as a shareable query string; decoding it with
/// [`decode_holidays_query`] gives back the same holidays in start order.
#[must_use]
pub fn encode_holidays_query(holidays: &[Interval]) -> String {
    let mut sorted: Vec<&Interval> = holidays.iter().collect();
    sorted.sort_by_key(|holiday| holiday.start());

    sorted
        .iter()
        .map(|holiday| {
            format!(
                "Start={}&End={}",
                holiday.start().format(ISO_DATE_FORMAT),
                holiday.end().format(ISO_DATE_FORMAT)
            )
        })
        .collect::<Vec<String>>()
        .join("&")
}

fn values_for<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value.as_str())
        .collect()
}
