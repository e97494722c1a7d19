use hanging::{Preset, PresetList, RemovalToken};
use serde_json::Value;
use tracing::{Level, debug, warn};

use crate::storage::Storage;

pub const PRESETS_KEY: &str = "presets";
pub const LAST_REMOVED_KEY: &str = "presets.lastRemoved";

/// Loads the presets, skipping any entry that can't be used.
///
/// A stored value that isn't a JSON array is treated as if there were no presets.
#[tracing::instrument(level = Level::DEBUG, skip(storage))]
pub fn load_presets(storage: &mut Storage) -> PresetList {
    let Some(content) = storage.get(PRESETS_KEY) else {
        return PresetList::default();
    };

    let entries: Vec<Value> = match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(cause) => {
            warn!("Ignoring malformed presets. cause: {}", cause);
            return PresetList::default();
        }
    };

    let presets = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Preset>(entry) {
            Ok(preset) => match preset.check() {
                Ok(()) => Some(preset),
                Err(cause) => {
                    warn!("Skipping invalid preset. index: {}, cause: {}", index, cause);
                    None
                }
            },
            Err(cause) => {
                warn!("Skipping malformed preset. index: {}, cause: {}", index, cause);
                None
            }
        })
        .collect::<Vec<_>>();

    debug!("Loaded presets. count: {}", presets.len());

    PresetList::new(presets)
}

#[tracing::instrument(level = Level::DEBUG, skip(storage, presets))]
pub fn save_presets(storage: &mut Storage, presets: &PresetList) {
    match serde_json::to_string(presets.presets()) {
        Ok(content) => storage.set(PRESETS_KEY, &content),
        Err(cause) => warn!("Unable to serialize presets. cause: {}", cause),
    }
}

/// Remembers the last removal, replacing any earlier one.
pub fn save_removal(storage: &mut Storage, token: &RemovalToken) {
    match serde_json::to_string(token) {
        Ok(content) => storage.set(LAST_REMOVED_KEY, &content),
        Err(cause) => warn!("Unable to serialize removal. cause: {}", cause),
    }
}

/// Takes the last removal, it can only be undone once.
pub fn take_removal(storage: &mut Storage) -> Option<RemovalToken> {
    let content = storage.get(LAST_REMOVED_KEY)?;
    storage.remove(LAST_REMOVED_KEY);

    match serde_json::from_str::<RemovalToken>(&content) {
        Ok(token) => match token.preset.check() {
            Ok(()) => Some(token),
            Err(cause) => {
                warn!("Ignoring invalid removal. cause: {}", cause);
                None
            }
        },
        Err(cause) => {
            warn!("Ignoring malformed removal. cause: {}", cause);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use hanging::UnitSystem;
    use indoc::indoc;

    use super::*;
    use crate::storage::tests::UnavailableStore;

    fn preset(name: &str) -> Preset {
        Preset::new(name, "24", "2 1/2", "", UnitSystem::Inches).unwrap()
    }

    fn names(list: &PresetList) -> Vec<String> {
        list.presets()
            .iter()
            .map(|preset| preset.name.clone())
            .collect()
    }

    #[test]
    fn test_save_and_load() {
        // given
        let mut storage = Storage::in_memory();
        let presets = PresetList::new(vec![preset("Hallway"), preset("Stairs")]);

        // when
        save_presets(&mut storage, &presets);

        // then
        assert_eq!(load_presets(&mut storage), presets);
    }

    #[test]
    fn test_load_nothing_stored() {
        // given
        let mut storage = Storage::in_memory();

        // expect
        assert!(load_presets(&mut storage).is_empty());
    }

    #[test]
    fn test_load_skips_bad_entries() {
        // given
        let mut storage = Storage::in_memory();
        let content = indoc! {r#"
            [
                {"id": "1", "name": "Hallway", "frameRaw": "24", "anchorRaw": "2", "centerRaw": "",
                 "frameHeight": 24.0, "anchor": 2.0, "centerHeight": 60.0, "unit": "inches"},
                {"id": "2", "name": "Missing fields"},
                {"id": "3", "name": "Anchor too low", "frameRaw": "24", "anchorRaw": "30", "centerRaw": "",
                 "frameHeight": 24.0, "anchor": 30.0, "centerHeight": 60.0, "unit": "inches"},
                {"id": "", "name": "No id", "frameRaw": "24", "anchorRaw": "2", "centerRaw": "",
                 "frameHeight": 24.0, "anchor": 2.0, "centerHeight": 60.0, "unit": "inches"},
                "not a preset",
                {"id": "5", "name": "Garbage text", "frameRaw": "banana", "anchorRaw": "99", "centerRaw": "-4",
                 "frameHeight": 24.0, "anchor": 2.0, "centerHeight": 60.0, "unit": "inches"},
                {"id": "6", "name": "Stale text", "frameRaw": "30", "anchorRaw": "2", "centerRaw": "",
                 "frameHeight": 24.0, "anchor": 2.0, "centerHeight": 60.0, "unit": "inches"},
                {"id": "4", "name": "Metric", "frameRaw": "60", "anchorRaw": "5", "centerRaw": "150",
                 "frameHeight": 60.0, "anchor": 5.0, "centerHeight": 150.0, "unit": "centimeters"}
            ]
        "#};
        storage.set(PRESETS_KEY, content);

        // when
        let presets = load_presets(&mut storage);

        // then
        assert_eq!(names(&presets), vec!["Hallway", "Metric"]);
        assert_eq!(presets.presets()[1].unit, UnitSystem::Centimeters);
    }

    #[test]
    fn test_load_malformed_content() {
        // given
        let mut storage = Storage::in_memory();
        storage.set(PRESETS_KEY, "{\"presets\": []}");

        // expect
        assert!(load_presets(&mut storage).is_empty());
    }

    #[test]
    fn test_remove_and_undo_across_loads() {
        // given
        let mut storage = Storage::in_memory();
        let mut presets = PresetList::new(vec![preset("A"), preset("B"), preset("C")]);
        save_presets(&mut storage, &presets);
        let id = presets.presets()[1].id.clone();

        // when
        let token = presets.remove(&id).unwrap();
        save_removal(&mut storage, &token);
        save_presets(&mut storage, &presets);

        // and
        let mut reloaded = load_presets(&mut storage);
        let token = take_removal(&mut storage).unwrap();
        reloaded.undo(token).unwrap();

        // then
        assert_eq!(names(&reloaded), vec!["A", "B", "C"]);

        // and the removal can only be undone once
        assert_eq!(take_removal(&mut storage), None);
    }

    #[test]
    fn test_only_the_last_removal_is_kept() {
        // given
        let mut storage = Storage::in_memory();
        let mut presets = PresetList::new(vec![preset("A"), preset("B")]);
        let a_id = presets.presets()[0].id.clone();
        let b_id = presets.presets()[1].id.clone();

        // when
        let first = presets.remove(&a_id).unwrap();
        save_removal(&mut storage, &first);
        let second = presets.remove(&b_id).unwrap();
        save_removal(&mut storage, &second);

        // then
        assert_eq!(take_removal(&mut storage), Some(second));
    }

    #[test]
    fn test_unavailable_storage_keeps_working() {
        // given
        let mut storage = Storage::new(UnavailableStore);
        let presets = PresetList::new(vec![preset("Hallway")]);

        // when
        save_presets(&mut storage, &presets);

        // then
        assert!(!storage.is_available());
        assert_eq!(load_presets(&mut storage), presets);
    }
}
