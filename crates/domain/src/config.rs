// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default rolling window length in days.
pub const DEFAULT_WINDOW_SIZE: u32 = 180;

/// Default maximum number of days away within one window.
pub const DEFAULT_MAX_STAY: u32 = 90;

const MIN_WINDOW_SIZE: u32 = 3;
const MIN_MAX_STAY: u32 = 2;

/// Parameters of a stay rule: at most `max_stay` days away in any
/// `window_size` consecutive days.
///
/// Instances built through [`CalculationConfig::new`] are always valid.
/// Values arriving from elsewhere (deserialized, or built with struct
/// syntax by tests) should be checked with [`CalculationConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationConfig {
    /// Window length in days.
    pub window_size: u32,
    /// Maximum days away allowed within a window.
    pub max_stay: u32,
}

impl CalculationConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] if:
    /// - `window_size` is less than 3
    /// - `max_stay` is less than 2
    /// - `max_stay` is greater than `window_size`
    pub fn new(window_size: u32, max_stay: u32) -> Result<Self, DomainError> {
        let config: Self = Self {
            window_size,
            max_stay,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the window and stay constraints.
    ///
    /// # Errors
    ///
    /// See [`CalculationConfig::new`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.window_size < MIN_WINDOW_SIZE {
            return Err(DomainError::InvalidConfig {
                reason: format!("window size cannot be less than {MIN_WINDOW_SIZE} days"),
            });
        }
        if self.max_stay < MIN_MAX_STAY {
            return Err(DomainError::InvalidConfig {
                reason: format!("maximum stay cannot be less than {MIN_MAX_STAY} days"),
            });
        }
        if self.max_stay > self.window_size {
            return Err(DomainError::InvalidConfig {
                reason: String::from("maximum stay cannot be greater than the window size"),
            });
        }
        Ok(())
    }
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_stay: DEFAULT_MAX_STAY,
        }
    }
}
