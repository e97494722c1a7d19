#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, VariantArray};

/// Centimeters in one inch, exact by definition.
pub const CENTIMETERS_PER_INCH: f64 = 2.54;

/// The unit systems a measurement can be entered and displayed in.
///
/// All geometry is calculated in inches, the canonical unit, regardless of the unit system used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Display, EnumString, AsRefStr, VariantArray)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    /// Inches (1 inch = 2.54 cm)
    #[default]
    Inches,
    /// Centimeters
    Centimeters,
}

impl UnitSystem {
    /// Returns the number of inches in one unit of this unit system
    fn inches_per_unit(&self) -> f64 {
        match self {
            UnitSystem::Inches => 1.0,
            UnitSystem::Centimeters => 1.0 / CENTIMETERS_PER_INCH,
        }
    }

    /// Convert a value in this unit system to inches
    pub fn to_inches(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Inches => value,
            UnitSystem::Centimeters => value / CENTIMETERS_PER_INCH,
        }
    }

    /// Convert a value in inches to this unit system
    pub fn from_inches(&self, inches: f64) -> f64 {
        match self {
            UnitSystem::Inches => inches,
            UnitSystem::Centimeters => inches * CENTIMETERS_PER_INCH,
        }
    }

    /// Convert a value from this unit system to another unit system
    pub fn convert(&self, value: f64, to: UnitSystem) -> f64 {
        if *self == to {
            return value;
        }
        to.from_inches(self.to_inches(value))
    }

    /// Calculate the scale factor to convert from this unit system to another unit system
    pub fn scale_for(&self, to: UnitSystem) -> f64 {
        self.inches_per_unit() / to.inches_per_unit()
    }

    /// Get a display string for this unit system
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Inches => "in",
            UnitSystem::Centimeters => "cm",
        }
    }

    /// The center height used when none is given, 60 inches or 150 centimeters.
    ///
    /// Note that the two are not the same physical height, 150 cm is ~59.06 inches.
    pub fn default_center_height(&self) -> f64 {
        match self {
            UnitSystem::Inches => 60.0,
            UnitSystem::Centimeters => 150.0,
        }
    }
}

/// Convert a value in `unit` to inches.
pub fn to_inches(value: f64, unit: UnitSystem) -> f64 {
    unit.to_inches(value)
}

/// Convert a value in inches to `unit`.
pub fn from_inches(inches: f64, unit: UnitSystem) -> f64 {
    unit.from_inches(inches)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::VariantArray;

    use super::*;
    use crate::test::approx_eq;

    #[test]
    fn ordering() {
        // given
        let mut unit_systems = vec![UnitSystem::Centimeters, UnitSystem::Inches];

        // when
        unit_systems.sort();

        // then
        assert_eq!(unit_systems, vec![UnitSystem::Inches, UnitSystem::Centimeters]);
    }

    #[rstest]
    #[case(1.0, UnitSystem::Inches, 1.0)]
    #[case(2.54, UnitSystem::Centimeters, 1.0)]
    #[case(150.0, UnitSystem::Centimeters, 59.055118110236)]
    #[case(-5.08, UnitSystem::Centimeters, -2.0)]
    fn test_to_inches(#[case] value: f64, #[case] unit: UnitSystem, #[case] expected: f64) {
        let result = to_inches(value, unit);
        assert!(approx_eq(result, expected, 1e-9), "result: {result}, expected: {expected}");
    }

    #[rstest]
    #[case(1.0, UnitSystem::Inches, 1.0)]
    #[case(1.0, UnitSystem::Centimeters, 2.54)]
    #[case(69.5, UnitSystem::Centimeters, 176.53)]
    fn test_from_inches(#[case] inches: f64, #[case] unit: UnitSystem, #[case] expected: f64) {
        let result = from_inches(inches, unit);
        assert!(approx_eq(result, expected, 1e-9), "result: {result}, expected: {expected}");
    }

    #[rstest]
    #[case(UnitSystem::Inches, UnitSystem::Centimeters, 2.54)]
    #[case(UnitSystem::Centimeters, UnitSystem::Inches, 1.0 / 2.54)]
    #[case(UnitSystem::Inches, UnitSystem::Inches, 1.0)]
    fn test_scale_for(#[case] from: UnitSystem, #[case] to: UnitSystem, #[case] expected: f64) {
        let result = from.scale_for(to);
        assert!(
            approx_eq(result, expected, 1e-12),
            "Expected {:.10} but got {:.10}",
            expected,
            result
        );
    }

    #[test]
    fn test_roundtrip_conversions() {
        for &from in UnitSystem::VARIANTS {
            for &to in UnitSystem::VARIANTS {
                for value in [0.0, 1.0, 23.622, -7.5, 1234.5] {
                    let there = from.convert(value, to);
                    let back = to.convert(there, from);
                    assert!(
                        approx_eq(back, value, 1e-9),
                        "Failed roundtrip from {:?} to {:?}, value: {}, back: {}",
                        from,
                        to,
                        value,
                        back
                    );
                }
            }
        }
    }

    #[rstest]
    #[case("inches", UnitSystem::Inches)]
    #[case("centimeters", UnitSystem::Centimeters)]
    #[case("Centimeters", UnitSystem::Centimeters)]
    fn test_from_str(#[case] tag: &str, #[case] expected: UnitSystem) {
        assert_eq!(UnitSystem::from_str(tag), Ok(expected));
    }

    #[test]
    fn test_from_str_rejects_unknown_units() {
        assert!(UnitSystem::from_str("mm").is_err());
    }

    #[rstest]
    #[case(UnitSystem::Inches, "inches", "in")]
    #[case(UnitSystem::Centimeters, "centimeters", "cm")]
    fn test_names(#[case] unit: UnitSystem, #[case] tag: &str, #[case] display_name: &str) {
        assert_eq!(unit.to_string(), tag);
        assert_eq!(unit.as_ref(), tag);
        assert_eq!(unit.display_name(), display_name);
    }

    #[test]
    fn test_serde_tag() {
        // when
        let json = serde_json::to_string(&UnitSystem::Centimeters).unwrap();

        // then
        assert_eq!(json, "\"centimeters\"");
        assert_eq!(
            serde_json::from_str::<UnitSystem>("\"inches\"").unwrap(),
            UnitSystem::Inches
        );
    }

    #[test]
    fn test_default_center_height() {
        assert_eq!(UnitSystem::Inches.default_center_height(), 60.0);
        assert_eq!(UnitSystem::Centimeters.default_center_height(), 150.0);
    }
}
