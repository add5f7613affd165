// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Selection of the binding window.
//!
//! The binding window is the one with the most days away. Where several
//! windows share that total, the earliest one wins. The breach flag is
//! raised as soon as any window exceeds the maximum stay and never lowered.

use crate::config::CalculationConfig;
use crate::error::DomainError;
use crate::holidays::HolidaySet;
use crate::window::Window;
use serde::Serialize;
use std::cmp::Ordering;

/// Folds a sequence of windows into the longest compound stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceEvaluator {
    max_stay: u32,
    best_window: Option<Window>,
    longest_days_away: u32,
    breach: bool,
    windows_seen: usize,
}

impl ComplianceEvaluator {
    /// Creates an evaluator for the given maximum stay.
    #[must_use]
    pub const fn new(max_stay: u32) -> Self {
        Self {
            max_stay,
            best_window: None,
            longest_days_away: 0,
            breach: false,
            windows_seen: 0,
        }
    }

    /// Considers one window.
    ///
    /// Windows must arrive in chronological order for the earliest-window
    /// tie-break to hold: only a strictly longer stay displaces the
    /// current best.
    pub fn observe(&mut self, window: Window) {
        self.windows_seen += 1;
        if window.days_away() > self.max_stay {
            self.breach = true;
        }
        if window.days_away() > self.longest_days_away {
            self.longest_days_away = window.days_away();
            self.best_window = Some(window);
        }
    }

    /// Considers every window from `windows`, in order.
    pub fn observe_all<I>(&mut self, windows: I)
    where
        I: IntoIterator<Item = Window>,
    {
        for window in windows {
            self.observe(window);
        }
    }

    /// Combines two evaluators that covered disjoint sets of windows.
    ///
    /// The result does not depend on merge order: equal stays resolve to
    /// the window with the earlier start date. Both evaluators must have
    /// been created with the same maximum stay.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        debug_assert_eq!(
            self.max_stay, other.max_stay,
            "merged evaluators must share a maximum stay"
        );

        let best_window: Option<Window> = match (self.best_window, other.best_window) {
            (Some(a), Some(b)) => match a.days_away().cmp(&b.days_away()) {
                Ordering::Greater => Some(a),
                Ordering::Less => Some(b),
                Ordering::Equal => {
                    if a.start() <= b.start() {
                        Some(a)
                    } else {
                        Some(b)
                    }
                }
            },
            (a, b) => a.or(b),
        };

        Self {
            max_stay: self.max_stay,
            longest_days_away: self.longest_days_away.max(other.longest_days_away),
            breach: self.breach || other.breach,
            windows_seen: self.windows_seen + other.windows_seen,
            best_window,
        }
    }

    /// Whether any window observed so far exceeded the maximum stay.
    #[must_use]
    pub const fn breach(&self) -> bool {
        self.breach
    }

    /// The longest stay observed so far.
    #[must_use]
    pub const fn longest_days_away(&self) -> u32 {
        self.longest_days_away
    }

    /// The current binding window.
    #[must_use]
    pub const fn best_window(&self) -> Option<&Window> {
        self.best_window.as_ref()
    }

    /// Completes the evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Calculation`] if no window with at least one
    /// day away was observed. A scan over a non-empty holiday set always
    /// produces one.
    pub fn finish(
        self,
        holidays: HolidaySet,
        config: CalculationConfig,
    ) -> Result<ComplianceResult, DomainError> {
        let Some(best_window) = self.best_window else {
            return Err(DomainError::Calculation {
                reason: format!(
                    "no window with days away among {} windows scanned",
                    self.windows_seen
                ),
            });
        };

        Ok(ComplianceResult {
            breach: self.breach,
            longest_days_away: self.longest_days_away,
            best_window,
            holidays,
            config,
            windows_scanned: self.windows_seen,
        })
    }
}

/// Outcome of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    /// Whether any window exceeded `config.max_stay`.
    pub breach: bool,
    /// Days away in the binding window.
    pub longest_days_away: u32,
    /// The earliest window with the longest stay.
    pub best_window: Window,
    /// All holidays, in the order they were given.
    pub holidays: HolidaySet,
    /// The rule the holidays were checked against.
    pub config: CalculationConfig,
    /// How many windows were evaluated.
    pub windows_scanned: usize,
}

impl std::fmt::Display for ComplianceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "breach         : {}", self.breach)?;
        writeln!(f, "days away      : {}", self.longest_days_away)?;
        write!(f, "largest window : {}", self.best_window)
    }
}
