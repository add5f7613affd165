// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary between transports and the staycheck calculation.
//!
//! Turns untrusted holiday input into validated intervals, runs the
//! calculation, and maps failures onto a small, stable error contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiResult, translate_core_error, translate_domain_error};
pub use handlers::{calculate_from_json, calculate_from_query, calculate_report};
pub use request_response::{
    HealthResponse, HolidayInput, decode_holidays_json, decode_holidays_query,
    encode_holidays_query,
};
