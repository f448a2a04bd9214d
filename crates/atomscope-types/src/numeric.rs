//! Lenient numeric coercion.
//!
//! The backend serializes decimals either as JSON numbers or as strings
//! (`"1234.5"`). Every comparison in the filter/sort layer goes through
//! [`to_number`] so that a string field never compares lexically
//! (`"9" > "10"`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric field as received on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    pub fn value(&self) -> f64 {
        match self {
            RawNumber::Number(n) => finite_or_zero(*n),
            RawNumber::Text(s) => parse_number(s),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(n: f64) -> Self {
        RawNumber::Number(n)
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        RawNumber::Text(s.to_string())
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{}", n),
            RawNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Coerce a possibly-missing wire number. Never returns NaN.
pub fn to_number(value: Option<&RawNumber>) -> f64 {
    value.map(RawNumber::value).unwrap_or(0.0)
}

/// Parse the longest leading decimal literal of `input`, the way a browser's
/// `parseFloat` does. Input without a numeric prefix yields 0.
pub fn parse_number(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() { n } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("-3.5"), -3.5);
        assert_eq!(parse_number("+.25"), 0.25);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("  7.0"), 7.0);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number("2.5.1"), 2.5);
        assert_eq!(parse_number("5e"), 5.0);
        assert_eq!(parse_number("5e+"), 5.0);
        assert_eq!(parse_number("1."), 1.0);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("Infinity"), 0.0);
        assert_eq!(parse_number("1e999"), 0.0);
    }

    #[test]
    fn test_to_number_missing() {
        assert_eq!(to_number(None), 0.0);
        assert_eq!(to_number(Some(&RawNumber::Number(f64::NAN))), 0.0);
        assert_eq!(to_number(Some(&RawNumber::from("10"))), 10.0);
    }

    #[test]
    fn test_string_comparison_is_numeric() {
        let nine = RawNumber::from("9");
        let ten = RawNumber::from("10");
        assert!(to_number(Some(&nine)) < to_number(Some(&ten)));
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let n: RawNumber = serde_json::from_str("12").unwrap();
        let s: RawNumber = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(n.value(), 12.0);
        assert_eq!(s.value(), 12.5);
    }
}
