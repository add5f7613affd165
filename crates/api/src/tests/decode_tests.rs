// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{JANUARY_JSON, interval, pairs};
use crate::{
    ApiError, HolidayInput, decode_holidays_json, decode_holidays_query, encode_holidays_query,
};
use staycheck_domain::Interval;

#[test]
fn test_decode_json_array() {
    let holidays: Vec<Interval> = decode_holidays_json(JANUARY_JSON.as_bytes()).unwrap();

    assert_eq!(holidays.len(), 6);
    assert_eq!(holidays[0], interval("2023-01-01", "2023-01-01"));
    assert_eq!(holidays[5], interval("2023-01-24", "2023-01-25"));
}

#[test]
fn test_decode_json_accepts_capitalised_keys() {
    let body: &str = r#"[{"Start": "2023-03-01", "End": "2023-03-04"}]"#;
    let holidays: Vec<Interval> = decode_holidays_json(body.as_bytes()).unwrap();
    assert_eq!(holidays, vec![interval("2023-03-01", "2023-03-04")]);
}

#[test]
fn test_decode_json_rejects_malformed_body() {
    let err: ApiError = decode_holidays_json(b"{not json").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "body"));
}

#[test]
fn test_decode_json_rejects_object_body() {
    let err: ApiError =
        decode_holidays_json(br#"{"start": "2023-01-01", "end": "2023-01-02"}"#).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "body"));
}

#[test]
fn test_decode_json_reports_missing_end() {
    let err: ApiError = decode_holidays_json(br#"[{"start": "2023-01-01"}]"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("End"),
            message: String::from("end date not set"),
        }
    );
}

#[test]
fn test_decode_json_reports_reversed_range() {
    let err: ApiError =
        decode_holidays_json(br#"[{"start": "2023-01-07", "end": "2023-01-01"}]"#).unwrap_err();
    assert_eq!(err.message(), "start date 07/01/2023 after 01/01/2023");
}

#[test]
fn test_decode_json_reports_unparseable_date() {
    let err: ApiError =
        decode_holidays_json(br#"[{"start": "01/01/2023", "end": "2023-01-02"}]"#).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "date"));
}

#[test]
fn test_holiday_input_treats_blank_as_missing() {
    let input: HolidayInput = HolidayInput {
        start: Some(String::from("  ")),
        end: Some(String::from("2023-01-02")),
    };
    assert_eq!(input.to_interval().unwrap_err().message(), "start date not set");
}

#[test]
fn test_decode_query_pairs_in_order() {
    let query: Vec<(String, String)> = pairs(&[
        ("Start", "2023-02-01"),
        ("End", "2023-02-05"),
        ("start", "2023-01-01"),
        ("end", "2023-01-03"),
        ("ignored", "value"),
    ]);
    let holidays: Vec<Interval> = decode_holidays_query(&query).unwrap();

    assert_eq!(
        holidays,
        vec![
            interval("2023-02-01", "2023-02-05"),
            interval("2023-01-01", "2023-01-03"),
        ]
    );
}

#[test]
fn test_decode_query_without_start_is_empty() {
    let query: Vec<(String, String)> = pairs(&[("End", "2023-01-01")]);
    assert!(decode_holidays_query(&query).unwrap().is_empty());
    assert!(decode_holidays_query(&[]).unwrap().is_empty());
}

#[test]
fn test_decode_query_rejects_unbalanced_pairs() {
    let query: Vec<(String, String)> = pairs(&[
        ("Start", "2023-01-01"),
        ("End", "2023-01-02"),
        ("Start", "2023-01-05"),
    ]);
    let err: ApiError = decode_holidays_query(&query).unwrap_err();

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("End"),
            message: String::from("incorrect number of url arguments"),
        }
    );
}

#[test]
fn test_encode_query_sorts_by_start() {
    let holidays: Vec<Interval> = vec![
        interval("2023-03-01", "2023-03-02"),
        interval("2023-01-01", "2023-01-05"),
    ];
    assert_eq!(
        encode_holidays_query(&holidays),
        "Start=2023-01-01&End=2023-01-05&Start=2023-03-01&End=2023-03-02"
    );
}

#[test]
fn test_encode_query_empty() {
    assert_eq!(encode_holidays_query(&[]), "");
}

#[test]
fn test_encoded_query_decodes_to_sorted_holidays() {
    let holidays: Vec<Interval> = vec![
        interval("2023-05-10", "2023-05-12"),
        interval("2023-04-01", "2023-04-01"),
    ];
    let encoded: String = encode_holidays_query(&holidays);
    let query: Vec<(String, String)> = encoded
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (String::from(key), String::from(value)))
        .collect();

    let decoded: Vec<Interval> = decode_holidays_query(&query).unwrap();
    assert_eq!(decoded, vec![holidays[1], holidays[0]]);
}
