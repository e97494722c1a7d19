use measure_units::UnitSystem;
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

/// The user's last choices, which govern subsequent calculations.
///
/// Each preference is stored under its own key as a string tag, see `stores::preferences`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub unit: UnitSystem,
    pub theme: Theme,
}
