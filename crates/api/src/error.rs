// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staycheck::CoreError;
use staycheck_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// The message shown to the caller, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DomainRuleViolation { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidConfig { reason } => ApiError::InvalidInput {
            field: String::from("config"),
            message: reason,
        },
        DomainError::InvalidRange { .. } => ApiError::InvalidInput {
            field: String::from("End"),
            message,
        },
        DomainError::MissingDate { field } => ApiError::InvalidInput {
            field: capitalize(field),
            message,
        },
        DomainError::WindowOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("End"),
            message,
        },
        DomainError::DateParse { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message,
        },
        DomainError::NoHolidays => ApiError::InvalidInput {
            field: String::from("trips"),
            message,
        },
        DomainError::Overlap { .. } => ApiError::DomainRuleViolation {
            rule: String::from("non_overlapping_holidays"),
            message,
        },
        DomainError::Calculation { .. } => ApiError::Internal { message },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
