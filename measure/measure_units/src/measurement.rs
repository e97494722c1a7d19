//! Parsing of human-entered measurements.
//!
//! Accepted forms, tried in this order:
//!
//! | Form         | Examples                   |
//! |--------------|----------------------------|
//! | Mixed number | `30 1/2`, `-30 1/2`        |
//! | Fraction     | `3/4`, `-1/4`              |
//! | Number       | `24`, `2.5`, `.5`, `1e2`   |
//!
//! Trailing unit markers (`"`, `'`, `”`, `″`, `in`, ...) and comma thousands separators are ignored.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static MIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([+-]?)(\d+)\s+(\d+)/(\d+)$").unwrap());
static FRACTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([+-]?)(\d+)/(\d+)$").unwrap());
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());

const UNIT_MARKERS: &[char] = &['"', '\'', '‘', '’', '“', '”', '′', '″', 'i', 'I', 'n', 'N'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeasurementError {
    #[error("No measurement was entered")]
    Empty,
    #[error("Fraction has a zero denominator. input: '{0}'")]
    ZeroDenominator(String),
    #[error("Unrecognized measurement. input: '{0}'")]
    Unrecognized(String),
    #[error("Measurement is not a finite number. input: '{0}'")]
    NotFinite(String),
}

/// Parse a measurement, e.g. `30 1/2"`, into a number.
///
/// No unit is attached to the result, the caller interprets it in the currently selected unit system.
pub fn parse_measurement(raw: &str) -> Result<f64, MeasurementError> {
    let cleaned = clean_measurement(raw);
    if cleaned.is_empty() {
        return Err(MeasurementError::Empty);
    }

    let matchers: [fn(&str) -> Option<Result<f64, MeasurementError>>; 3] =
        [parse_mixed_number, parse_fraction, parse_number];

    let value = matchers
        .iter()
        .find_map(|matcher| matcher(&cleaned))
        .unwrap_or_else(|| Err(MeasurementError::Unrecognized(raw.to_string())))?;

    if !value.is_finite() {
        return Err(MeasurementError::NotFinite(raw.to_string()));
    }

    Ok(value)
}

/// Returns true if the input has nothing to parse once surrounding whitespace is removed.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

fn clean_measurement(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(UNIT_MARKERS)
        .replace(',', "")
        .trim()
        .to_string()
}

fn sign_of(sign: &str) -> f64 {
    match sign {
        "-" => -1.0,
        _ => 1.0,
    }
}

fn fraction_value(numerator: &str, denominator: &str, cleaned: &str) -> Result<f64, MeasurementError> {
    let numerator: f64 = numerator
        .parse()
        .map_err(|_| MeasurementError::Unrecognized(cleaned.to_string()))?;
    let denominator: f64 = denominator
        .parse()
        .map_err(|_| MeasurementError::Unrecognized(cleaned.to_string()))?;

    if denominator == 0.0 {
        return Err(MeasurementError::ZeroDenominator(cleaned.to_string()));
    }

    Ok(numerator / denominator)
}

/// `<sign><whole> <numerator>/<denominator>`
///
/// The sign of the whole part applies to the fraction too, so `-0 1/2` is `-0.5`.
fn parse_mixed_number(cleaned: &str) -> Option<Result<f64, MeasurementError>> {
    let captures = MIXED_NUMBER.captures(cleaned)?;

    let result = captures[2]
        .parse::<f64>()
        .map_err(|_| MeasurementError::Unrecognized(cleaned.to_string()))
        .and_then(|whole| {
            fraction_value(&captures[3], &captures[4], cleaned).map(|fraction| sign_of(&captures[1]) * (whole + fraction))
        });

    Some(result)
}

/// `<sign><numerator>/<denominator>`
fn parse_fraction(cleaned: &str) -> Option<Result<f64, MeasurementError>> {
    let captures = FRACTION.captures(cleaned)?;

    Some(fraction_value(&captures[2], &captures[3], cleaned).map(|fraction| sign_of(&captures[1]) * fraction))
}

fn parse_number(cleaned: &str) -> Option<Result<f64, MeasurementError>> {
    if !NUMBER.is_match(cleaned) {
        return None;
    }

    Some(
        cleaned
            .parse::<f64>()
            .map_err(|_| MeasurementError::Unrecognized(cleaned.to_string())),
    )
}
