use std::str::FromStr;

use hanging::{Preferences, Theme, UnitSystem};
use tracing::warn;

use crate::storage::Storage;

pub const UNIT_KEY: &str = "unit";
pub const THEME_KEY: &str = "theme";

/// Missing or unrecognized values fall back to the defaults.
pub fn load_preferences(storage: &mut Storage) -> Preferences {
    let defaults = Preferences::default();

    Preferences {
        unit: load_tag(storage, UNIT_KEY).unwrap_or(defaults.unit),
        theme: load_tag(storage, THEME_KEY).unwrap_or(defaults.theme),
    }
}

pub fn save_unit(storage: &mut Storage, unit: UnitSystem) {
    storage.set(UNIT_KEY, unit.as_ref());
}

pub fn save_theme(storage: &mut Storage, theme: Theme) {
    storage.set(THEME_KEY, theme.as_ref());
}

fn load_tag<T: FromStr>(storage: &mut Storage, key: &str) -> Option<T> {
    let value = storage.get(key)?;
    match T::from_str(value.trim()) {
        Ok(tag) => Some(tag),
        Err(_) => {
            warn!("Ignoring unrecognized preference. key: {}, value: '{}'", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_defaults() {
        // given
        let mut storage = Storage::in_memory();

        // expect
        assert_eq!(load_preferences(&mut storage), Preferences::default());
    }

    #[test]
    fn test_save_and_load() {
        // given
        let mut storage = Storage::in_memory();

        // when
        save_unit(&mut storage, UnitSystem::Centimeters);
        save_theme(&mut storage, Theme::Dark);

        // then
        assert_eq!(storage.get(UNIT_KEY), Some("centimeters".to_string()));
        assert_eq!(load_preferences(&mut storage), Preferences {
            unit: UnitSystem::Centimeters,
            theme: Theme::Dark,
        });
    }

    #[rstest]
    #[case("metres", "dark", Preferences { unit: UnitSystem::Inches, theme: Theme::Dark })]
    #[case("Centimeters", "sepia", Preferences { unit: UnitSystem::Centimeters, theme: Theme::System })]
    #[case("", "", Preferences::default())]
    fn test_unrecognized_values_use_defaults(#[case] unit: &str, #[case] theme: &str, #[case] expected: Preferences) {
        // given
        let mut storage = Storage::in_memory();
        storage.set(UNIT_KEY, unit);
        storage.set(THEME_KEY, theme);

        // expect
        assert_eq!(load_preferences(&mut storage), expected);
    }
}
