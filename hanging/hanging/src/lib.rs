//! Where to put the nail when hanging a picture frame.
//!
//! Given the height of a frame, how far its hanging point is below the top edge, and the height the center of
//! the frame should be at, calculate the height of the nail above the floor.
//!
//! All geometry is in inches, inputs in centimeters are converted on the way in and formatted on the way out.

pub mod diagram;
pub mod frame;
pub mod preferences;
pub mod preset;
pub mod report;
pub mod validation;

pub use diagram::{AnchorMarker, DiagramLayout};
pub use frame::{FrameGeometry, FrameSpec, compute_frame_measurements};
pub use measure_units::UnitSystem;
pub use preferences::{Preferences, Theme};
pub use preset::{Preset, PresetError, PresetInputs, PresetList, RemovalToken, UpsertOutcome};
pub use report::FrameReport;
pub use validation::{FrameInputs, ValidationError, validate, validate_inputs};

/// Validate raw inputs and calculate, the whole pipeline from text to a report.
pub fn calculate(
    frame_raw: &str,
    anchor_raw: &str,
    center_raw: &str,
    unit: UnitSystem,
) -> Result<FrameReport, ValidationError> {
    let spec = validate(frame_raw, anchor_raw, center_raw, unit)?;
    Ok(FrameReport::new(spec, unit))
}
