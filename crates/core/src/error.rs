// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staycheck_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("{0}")]
    DomainViolation(#[from] DomainError),
}

impl CoreError {
    /// The underlying domain error.
    #[must_use]
    pub const fn domain_error(&self) -> &DomainError {
        match self {
            Self::DomainViolation(err) => err,
        }
    }
}
