use measure_units::{UnitSystem, format_input_value};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::frame::FrameSpec;
use crate::validation::{FrameInputs, ValidationError, check_ranges, validate_inputs};

/// A named set of inputs.
///
/// The raw text is kept alongside the parsed values so that input such as `30 1/2` is restored exactly as it
/// was typed. The parsed values are in the preset's `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub frame_raw: String,
    pub anchor_raw: String,
    pub center_raw: String,
    pub frame_height: f64,
    pub anchor: f64,
    pub center_height: f64,
    pub unit: UnitSystem,
}

/// Input text, as it would appear in the input fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetInputs {
    pub frame: String,
    pub anchor: String,
    pub center: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PresetError {
    #[error("Preset name is required")]
    MissingName,
    #[error("Preset id is required")]
    MissingId,
    #[error("Invalid preset. cause: {0}")]
    Invalid(#[from] ValidationError),
    #[error("Invalid preset, values are not finite")]
    NotFinite,
    #[error("Invalid preset, the stored text doesn't match the stored values")]
    MismatchedText,
    #[error("A preset with the same id already exists. id: {0}")]
    DuplicateId(String),
    #[error("A preset with the same name already exists. name: '{0}'")]
    DuplicateName(String),
}

impl Preset {
    /// Create a preset from raw input, validated the same way as a calculation.
    pub fn new(
        name: &str,
        frame_raw: &str,
        anchor_raw: &str,
        center_raw: &str,
        unit: UnitSystem,
    ) -> Result<Self, PresetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::MissingName);
        }

        let FrameInputs {
            frame_height,
            anchor_drop,
            center_height,
            ..
        } = validate_inputs(frame_raw, anchor_raw, center_raw, unit)?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            frame_raw: frame_raw.trim().to_string(),
            anchor_raw: anchor_raw.trim().to_string(),
            center_raw: center_raw.trim().to_string(),
            frame_height,
            anchor: anchor_drop,
            center_height,
            unit,
        })
    }

    /// Checks a preset that did not come from [`Preset::new`], e.g. one loaded from storage.
    pub fn check(&self) -> Result<(), PresetError> {
        if self.id.trim().is_empty() {
            return Err(PresetError::MissingId);
        }
        if self.name.trim().is_empty() {
            return Err(PresetError::MissingName);
        }
        if ![self.frame_height, self.anchor, self.center_height]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(PresetError::NotFinite);
        }
        check_ranges(self.frame_height, self.anchor, self.center_height)?;

        let parsed = validate_inputs(&self.frame_raw, &self.anchor_raw, &self.center_raw, self.unit)?;
        if !(same_value(parsed.frame_height, self.frame_height)
            && same_value(parsed.anchor_drop, self.anchor)
            && same_value(parsed.center_height, self.center_height))
        {
            return Err(PresetError::MismatchedText);
        }
        Ok(())
    }

    pub fn spec(&self) -> FrameSpec {
        FrameInputs {
            unit: self.unit,
            frame_height: self.frame_height,
            anchor_drop: self.anchor,
            center_height: self.center_height,
        }
        .to_spec()
    }

    /// The inputs to restore when the preset is selected while `unit` is the current unit system.
    ///
    /// In the preset's own unit system the raw text is returned as typed, otherwise the values are converted.
    pub fn inputs_in(&self, unit: UnitSystem) -> PresetInputs {
        if unit == self.unit {
            return PresetInputs {
                frame: self.frame_raw.clone(),
                anchor: self.anchor_raw.clone(),
                center: self.center_raw.clone(),
            };
        }

        let convert = |value: f64| format_input_value(self.unit.convert(value, unit), unit);

        PresetInputs {
            frame: convert(self.frame_height),
            anchor: convert(self.anchor),
            center: convert(self.center_height),
        }
    }

    fn has_name(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Allows for the last digit lost when a value is written to and read back from storage.
fn same_value(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() <= 1e-9 * lhs.abs().max(1.0)
}

/// Returned when a preset is removed, and used to put it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalToken {
    pub preset: Preset,
    /// Position of the preset before it was removed.
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Replaced,
}

/// Presets, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetList {
    presets: Vec<Preset>,
}

impl PresetList {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self {
            presets,
        }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Names are matched ignoring case and surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|preset| preset.has_name(name))
    }

    /// Adds the preset, or replaces an existing preset with the same name in place, keeping its id.
    pub fn upsert(&mut self, mut preset: Preset) -> UpsertOutcome {
        match self
            .presets
            .iter_mut()
            .find(|existing| existing.has_name(&preset.name))
        {
            Some(existing) => {
                info!("Replacing preset. name: '{}'", preset.name);
                preset.id = existing.id.clone();
                *existing = preset;
                UpsertOutcome::Replaced
            }
            None => {
                info!("Adding preset. name: '{}'", preset.name);
                self.presets.push(preset);
                UpsertOutcome::Added
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<RemovalToken> {
        let index = self
            .presets
            .iter()
            .position(|preset| preset.id == id)?;

        let preset = self.presets.remove(index);
        info!("Removed preset. name: '{}', index: {}", preset.name, index);

        Some(RemovalToken {
            preset,
            index,
        })
    }

    /// Puts a removed preset back where it was, or at the end if the list has since become shorter.
    ///
    /// Refused when the list already has a preset with the same id or name.
    pub fn undo(&mut self, token: RemovalToken) -> Result<&Preset, PresetError> {
        let RemovalToken {
            preset,
            index,
        } = token;

        if self
            .presets
            .iter()
            .any(|existing| existing.id == preset.id)
        {
            return Err(PresetError::DuplicateId(preset.id));
        }
        if self
            .presets
            .iter()
            .any(|existing| existing.has_name(&preset.name))
        {
            return Err(PresetError::DuplicateName(preset.name));
        }

        let index = index.min(self.presets.len());
        info!("Restoring preset. name: '{}', index: {}", preset.name, index);
        self.presets.insert(index, preset);

        Ok(&self.presets[index])
    }

    pub fn into_vec(self) -> Vec<Preset> {
        self.presets
    }
}
