// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.

use staycheck::{ComplianceReport, ComplianceResult, TracingSink, calculate_with_sink};
use staycheck_domain::{CalculationConfig, Interval};
use tracing::{debug, info};

use crate::error::{ApiResult, translate_core_error, translate_domain_error};
use crate::request_response::{decode_holidays_json, decode_holidays_query};

/// Runs a calculation and projects it into a report.
///
/// # Arguments
///
/// * `holidays` - The validated holidays, in submission order
/// * `config` - The stay rule to apply
///
/// # Returns
///
/// * `Ok(ComplianceReport)` on success
/// * `Err(ApiError)` if the rule or holidays are rejected
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is out of range
/// - No holidays were supplied
/// - Two holidays overlap
pub fn calculate_report(
    holidays: &[Interval],
    config: CalculationConfig,
) -> ApiResult<ComplianceReport> {
    config.validate().map_err(translate_domain_error)?;

    info!(
        holidays = holidays.len(),
        window_size = config.window_size,
        max_stay = config.max_stay,
        "Calculating stay compliance"
    );

    let result: ComplianceResult =
        calculate_with_sink(holidays, config, &TracingSink).map_err(translate_core_error)?;

    debug!(
        breach = result.breach,
        days_away = result.longest_days_away,
        "Calculation finished"
    );

    Ok(ComplianceReport::from(&result))
}

/// Decodes a JSON body and calculates.
///
/// # Errors
///
/// Returns an error if decoding fails or as [`calculate_report`].
pub fn calculate_from_json(body: &[u8], config: CalculationConfig) -> ApiResult<ComplianceReport> {
    let holidays: Vec<Interval> = decode_holidays_json(body)?;
    calculate_report(&holidays, config)
}

/// Decodes query pairs and calculates.
///
/// Returns the decoded holidays alongside the report so callers can echo
/// them back.
///
/// # Errors
///
/// Returns an error if decoding fails or as [`calculate_report`].
pub fn calculate_from_query(
    pairs: &[(String, String)],
    config: CalculationConfig,
) -> ApiResult<(Vec<Interval>, ComplianceReport)> {
    let holidays: Vec<Interval> = decode_holidays_query(pairs)?;
    let report: ComplianceReport = calculate_report(&holidays, config)?;
    Ok((holidays, report))
}
