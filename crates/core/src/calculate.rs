// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::sink::{DiagnosticSink, NoOpSink};
use chrono::NaiveDate;
use staycheck_domain::{
    CalculationConfig, ComplianceEvaluator, ComplianceResult, DomainError, HolidaySet, Interval,
    WindowScanner,
};

/// Checks a list of holidays against a stay rule.
///
/// Holidays are added in the order given; the first invalid or
/// overlapping holiday aborts the calculation and no result is produced.
///
/// # Arguments
///
/// * `holidays` - The holidays to check, in the traveller's order
/// * `config` - The stay rule to apply
///
/// # Returns
///
/// * `Ok(ComplianceResult)` describing the earliest window with the longest stay
/// * `Err(CoreError)` if the input or configuration is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid (`InvalidConfig`)
/// - No holidays were supplied (`NoHolidays`)
/// - A holiday overlaps an earlier one (`Overlap`)
pub fn calculate(
    holidays: &[Interval],
    config: CalculationConfig,
) -> Result<ComplianceResult, CoreError> {
    run(holidays.iter().copied().map(Ok), config, &NoOpSink)
}

/// Like [`calculate`], using the 90-in-180 default rule.
///
/// # Errors
///
/// See [`calculate`].
pub fn calculate_with_defaults(holidays: &[Interval]) -> Result<ComplianceResult, CoreError> {
    calculate(holidays, CalculationConfig::default())
}

/// Like [`calculate`], for holidays given as raw `(start, end)` pairs.
///
/// # Errors
///
/// See [`calculate`]. Additionally returns `InvalidRange` for the first
/// pair whose end precedes its start.
pub fn calculate_pairs(
    holidays: &[(NaiveDate, NaiveDate)],
    config: CalculationConfig,
) -> Result<ComplianceResult, CoreError> {
    run(
        holidays
            .iter()
            .map(|(start, end)| Interval::new(*start, *end)),
        config,
        &NoOpSink,
    )
}

/// Like [`calculate`], handing the result to `sink` on success.
///
/// # Errors
///
/// See [`calculate`].
pub fn calculate_with_sink(
    holidays: &[Interval],
    config: CalculationConfig,
    sink: &dyn DiagnosticSink,
) -> Result<ComplianceResult, CoreError> {
    run(holidays.iter().copied().map(Ok), config, sink)
}

/// A reusable calculator bound to one stay rule and sink.
///
/// The rule is captured when the calculator is built, so later changes to
/// whatever the caller seeded it from cannot affect a calculation in
/// progress.
pub struct Calculator {
    config: CalculationConfig,
    sink: Box<dyn DiagnosticSink>,
}

impl Calculator {
    /// Creates a calculator for `config` with no sink.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the rule is out of range.
    pub fn new(config: CalculationConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            config,
            sink: Box::new(NoOpSink),
        })
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The stay rule this calculator applies.
    #[must_use]
    pub const fn config(&self) -> CalculationConfig {
        self.config
    }

    /// The name of the installed sink.
    #[must_use]
    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    /// Runs a calculation.
    ///
    /// # Errors
    ///
    /// See [`calculate`].
    pub fn calculate(&self, holidays: &[Interval]) -> Result<ComplianceResult, CoreError> {
        calculate_with_sink(holidays, self.config, self.sink.as_ref())
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("config", &self.config)
            .field("sink", &self.sink.name())
            .finish()
    }
}

fn run<I>(
    holidays: I,
    config: CalculationConfig,
    sink: &dyn DiagnosticSink,
) -> Result<ComplianceResult, CoreError>
where
    I: Iterator<Item = Result<Interval, DomainError>>,
{
    config.validate()?;

    let mut holidays = holidays.peekable();
    if holidays.peek().is_none() {
        return Err(DomainError::NoHolidays.into());
    }

    let mut set: HolidaySet = HolidaySet::new();
    for holiday in holidays {
        set.add(holiday?)?;
    }

    let mut evaluator: ComplianceEvaluator = ComplianceEvaluator::new(config.max_stay);
    let scanner: WindowScanner<'_> = WindowScanner::new(&set, config.window_size)?;
    evaluator.observe_all(scanner);

    let result: ComplianceResult = evaluator.finish(set, config)?;
    sink.on_result(&result);
    Ok(result)
}
