use num_rational::Ratio;

use crate::measurement::{MeasurementError, is_blank, parse_measurement};
use crate::unit_system::UnitSystem;

/// Fractional inches are quantized to sixteenths.
pub const INCH_FRACTION_DENOMINATOR: u32 = 16;

/// Format inches as a whole number and a reduced fraction of sixteenths, e.g. `30 1/2`.
///
/// * The sign is written once, before the whole number or the fraction, e.g. `-1/4`.
/// * The whole number is omitted when it is zero and there is a fraction.
/// * Values that round to zero are written as `0`, without a sign.
pub fn format_fractional_inches(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let inches = value.abs();
    let mut whole = inches.floor();
    let remainder = inches - whole;
    let mut numerator = (remainder * INCH_FRACTION_DENOMINATOR as f64).round() as u32;

    if numerator == INCH_FRACTION_DENOMINATOR {
        whole += 1.0;
        numerator = 0;
    }

    let fraction = reduce_fraction(numerator, INCH_FRACTION_DENOMINATOR);

    let mut output = String::new();
    if value < 0.0 && (whole > 0.0 || fraction.is_some()) {
        output.push('-');
    }

    let show_whole = whole > 0.0 || fraction.is_none();
    if show_whole {
        output.push_str(&whole.to_string());
    }

    if let Some(fraction) = fraction {
        if show_whole {
            output.push(' ');
        }
        output.push_str(&format!("{}/{}", fraction.numer(), fraction.denom()));
    }

    output
}

/// Format inches with an inches marker, e.g. `69 1/2"`.
pub fn format_inches(value: f64) -> String {
    format!("{}\"", format_fractional_inches(value))
}

/// Format centimeters rounded to the nearest tenth, e.g. `145.2`, or `145` when the rounded value is whole.
///
/// Halves are rounded up, towards positive infinity.
pub fn format_centimeters(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut rounded = (value * 10.0 + 0.5).floor() / 10.0;
    if rounded == 0.0 {
        // avoid '-0'
        rounded = 0.0;
    }

    if rounded.fract() == 0.0 {
        rounded.to_string()
    } else {
        format!("{:.1}", rounded)
    }
}

/// Format a length, given in inches, for display in a unit system, e.g. `69 1/2"` or `176.5 cm`.
pub fn format_length(inches: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Inches => format_inches(inches),
        UnitSystem::Centimeters => format!(
            "{} {}",
            format_centimeters(unit.from_inches(inches)),
            unit.display_name()
        ),
    }
}

/// Format a value, already in `unit`, the way it would be typed into an input field.
///
/// The result parses back to the value, within the precision of the unit's formatter.
pub fn format_input_value(value: f64, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Inches => format_fractional_inches(value),
        UnitSystem::Centimeters => format_centimeters(value),
    }
}

/// Convert raw input text from one unit system to another.
///
/// The text is parsed in the source unit system, converted, and formatted again in the target unit system.
/// Blank input stays blank.
pub fn convert_input(raw: &str, from: UnitSystem, to: UnitSystem) -> Result<String, MeasurementError> {
    if is_blank(raw) {
        return Ok(String::new());
    }

    let value = parse_measurement(raw)?;

    Ok(format_input_value(from.convert(value, to), to))
}

/// Reduce a fraction to lowest terms, `None` for a zero numerator.
fn reduce_fraction(numerator: u32, denominator: u32) -> Option<Ratio<u32>> {
    if numerator == 0 {
        return None;
    }

    // `Ratio::new` reduces
    Some(Ratio::new(numerator, denominator))
}
