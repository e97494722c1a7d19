//! Lengths as people type them, in inches or centimeters.
//!
//! * [`measurement`] parses text such as `30 1/2"` into a number.
//! * [`format`] renders numbers as reduced fractional inches or decimal centimeters.
//! * [`unit_system`] converts between inches, the canonical unit, and the display unit.

pub mod format;
pub mod measurement;
pub mod unit_system;


pub use format::{
    INCH_FRACTION_DENOMINATOR, convert_input, format_centimeters, format_fractional_inches, format_inches,
    format_input_value, format_length,
};
pub use measurement::{MeasurementError, is_blank, parse_measurement};
pub use unit_system::{CENTIMETERS_PER_INCH, UnitSystem, from_inches, to_inches};
