use anyhow::{anyhow, bail};
use hanging::{FrameReport, Preset, Theme, UnitSystem, UpsertOutcome};
use measure_units::{convert_input, format_length};
use stores::Storage;
use stores::preferences::{load_preferences, save_theme, save_unit};
use stores::presets::{load_presets, save_presets, save_removal, take_removal};
use tracing::info;

use crate::opts::PresetCommand;

pub(crate) fn calculate(
    storage: &mut Storage,
    frame: &str,
    anchor: &str,
    center: Option<&str>,
    unit: Option<UnitSystem>,
    json: bool,
) -> anyhow::Result<()> {
    let unit = unit.unwrap_or_else(|| load_preferences(storage).unit);

    let report = hanging::calculate(frame, anchor, center.unwrap_or_default(), unit)?;
    info!("Calculated nail height. nail: {}, unit: {}", report.nail, unit);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

pub(crate) fn convert(raw: &str, from: UnitSystem, to: UnitSystem) -> anyhow::Result<()> {
    let converted = convert_input(raw, from, to)?;
    println!("{}", converted);

    Ok(())
}

pub(crate) fn unit(storage: &mut Storage, unit: Option<UnitSystem>) {
    match unit {
        Some(unit) => {
            save_unit(storage, unit);
            info!("Unit preference set. unit: {}", unit);
            println!("{}", unit);
        }
        None => println!("{}", load_preferences(storage).unit),
    }
}

pub(crate) fn theme(storage: &mut Storage, theme: Option<Theme>) {
    match theme {
        Some(theme) => {
            save_theme(storage, theme);
            info!("Theme preference set. theme: {}", theme);
            println!("{}", theme);
        }
        None => println!("{}", load_preferences(storage).theme),
    }
}

pub(crate) fn preset(storage: &mut Storage, command: PresetCommand) -> anyhow::Result<()> {
    match command {
        PresetCommand::Save {
            name,
            frame,
            anchor,
            center,
            unit,
        } => {
            let unit = unit.map_or_else(|| load_preferences(storage).unit, Into::into);
            let preset = Preset::new(&name, &frame, &anchor, center.as_deref().unwrap_or_default(), unit)?;

            let mut presets = load_presets(storage);
            let outcome = presets.upsert(preset);
            save_presets(storage, &presets);

            match outcome {
                UpsertOutcome::Added => println!("Saved preset '{}'.", name.trim()),
                UpsertOutcome::Replaced => println!("Replaced preset '{}'.", name.trim()),
            }
        }
        PresetCommand::List => {
            let presets = load_presets(storage);
            if presets.is_empty() {
                println!("No presets.");
            }
            for preset in presets.presets() {
                println!("{}", describe(preset));
            }
        }
        PresetCommand::Show {
            name,
            unit,
        } => {
            let unit = unit.map_or_else(|| load_preferences(storage).unit, Into::into);
            let presets = load_presets(storage);
            let preset = presets
                .find_by_name(&name)
                .ok_or_else(|| anyhow!("No preset named '{}'.", name.trim()))?;

            let inputs = preset.inputs_in(unit);
            println!("Frame height: {}", inputs.frame);
            println!("Anchor distance: {}", inputs.anchor);
            if inputs.center.is_empty() {
                println!("Center height: (default)");
            } else {
                println!("Center height: {}", inputs.center);
            }

            print_summary(&FrameReport::new(preset.spec(), unit));
        }
        PresetCommand::Delete {
            name,
        } => {
            let mut presets = load_presets(storage);
            let Some(id) = presets
                .find_by_name(&name)
                .map(|preset| preset.id.clone())
            else {
                bail!("No preset named '{}'.", name.trim());
            };

            if let Some(token) = presets.remove(&id) {
                save_removal(storage, &token);
                save_presets(storage, &presets);
                println!("Deleted preset '{}', use 'preset undo' to restore it.", token.preset.name);
            }
        }
        PresetCommand::Undo => {
            let Some(token) = take_removal(storage) else {
                bail!("Nothing to undo.");
            };

            let mut presets = load_presets(storage);
            let restored = match presets.undo(token.clone()) {
                Ok(preset) => preset.name.clone(),
                Err(cause) => {
                    // kept, so the undo can be retried once the conflict is gone
                    save_removal(storage, &token);
                    bail!("Unable to restore preset '{}'. cause: {}", token.preset.name, cause);
                }
            };
            save_presets(storage, &presets);

            println!("Restored preset '{}'.", restored);
        }
    }

    Ok(())
}

fn print_summary(report: &FrameReport) {
    for line in report.summary() {
        println!("{}", line);
    }
}

/// One line per preset, the values in the preset's own unit system.
fn describe(preset: &Preset) -> String {
    let spec = preset.spec();
    let report = FrameReport::new(spec, preset.unit);

    format!(
        "{}: frame {}, anchor {}, center {}, nail {}",
        preset.name,
        format_length(spec.frame_height, preset.unit),
        format_length(spec.anchor_drop, preset.unit),
        report.center,
        report.nail,
    )
}
