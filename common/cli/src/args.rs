use clap::ValueEnum;
use hanging::{Theme, UnitSystem};

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum UnitSystemArg {
    #[value(alias = "in")]
    Inches,
    #[value(alias = "cm")]
    Centimeters,
}

impl From<UnitSystemArg> for UnitSystem {
    fn from(value: UnitSystemArg) -> Self {
        match value {
            UnitSystemArg::Inches => Self::Inches,
            UnitSystemArg::Centimeters => Self::Centimeters,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::System => Self::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("inches", UnitSystem::Inches)]
    #[case("in", UnitSystem::Inches)]
    #[case("CM", UnitSystem::Centimeters)]
    fn test_unit_system_arg(#[case] value: &str, #[case] expected: UnitSystem) {
        // when
        let arg = UnitSystemArg::from_str(value, true).unwrap();

        // then
        assert_eq!(UnitSystem::from(arg), expected);
    }

    #[test]
    fn test_theme_arg() {
        assert_eq!(Theme::from(ThemeArg::from_str("dark", false).unwrap()), Theme::Dark);
        assert!(ThemeArg::from_str("sepia", false).is_err());
    }
}
