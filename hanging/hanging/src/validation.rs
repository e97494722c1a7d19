use measure_units::{UnitSystem, is_blank, parse_measurement};
use thiserror::Error;
use tracing::debug;

use crate::frame::FrameSpec;

/// Reasons the inputs can't be used, in the order they are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter the frame height in {unit} (you can use decimals or fractions like 30 1/2).")]
    FrameHeightUnparsable { unit: UnitSystem },
    #[error("Frame height must be greater than zero.")]
    FrameHeightNonPositive,
    #[error("Enter the anchor distance in {unit} (decimals or fractions are OK).")]
    AnchorUnparsable { unit: UnitSystem },
    #[error("Anchor distance can't be negative.")]
    AnchorNegative,
    #[error("Anchor distance can't be greater than the frame height.")]
    AnchorExceedsFrame,
    #[error("Enter the center height in {unit}, or leave it blank to use the default.")]
    CenterUnparsable { unit: UnitSystem },
    #[error("Center height must be greater than zero.")]
    CenterNonPositive,
}

/// Validated inputs, in the unit system they were entered in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    pub unit: UnitSystem,
    pub frame_height: f64,
    pub anchor_drop: f64,
    pub center_height: f64,
}

impl FrameInputs {
    pub fn to_spec(&self) -> FrameSpec {
        FrameSpec {
            frame_height: self.unit.to_inches(self.frame_height),
            anchor_drop: self.unit.to_inches(self.anchor_drop),
            center_height: self.unit.to_inches(self.center_height),
        }
    }
}

/// Validate raw inputs, interpreted in `unit`, and convert them to inches.
///
/// The first failing rule wins:
/// 1. frame height parses
/// 2. frame height > 0
/// 3. anchor parses
/// 4. anchor >= 0
/// 5. anchor <= frame height
/// 6. center height parses and is > 0, a blank center height uses the unit's default
pub fn validate(
    frame_raw: &str,
    anchor_raw: &str,
    center_raw: &str,
    unit: UnitSystem,
) -> Result<FrameSpec, ValidationError> {
    validate_inputs(frame_raw, anchor_raw, center_raw, unit).map(|inputs| inputs.to_spec())
}

/// As [`validate`], but without the conversion to inches.
pub fn validate_inputs(
    frame_raw: &str,
    anchor_raw: &str,
    center_raw: &str,
    unit: UnitSystem,
) -> Result<FrameInputs, ValidationError> {
    let result = validate_inner(frame_raw, anchor_raw, center_raw, unit);
    if let Err(error) = &result {
        debug!(
            "Invalid frame. frame: '{}', anchor: '{}', center: '{}', unit: {}, error: {:?}",
            frame_raw, anchor_raw, center_raw, unit, error
        );
    }
    result
}

/// Range checks on already parsed values, in the same order as [`validate`].
///
/// `NaN` fails the first check it reaches.
pub fn check_ranges(frame_height: f64, anchor_drop: f64, center_height: f64) -> Result<(), ValidationError> {
    if frame_height.is_nan() || frame_height <= 0.0 {
        return Err(ValidationError::FrameHeightNonPositive);
    }
    if anchor_drop.is_nan() || anchor_drop < 0.0 {
        return Err(ValidationError::AnchorNegative);
    }
    if anchor_drop > frame_height {
        return Err(ValidationError::AnchorExceedsFrame);
    }
    if center_height.is_nan() || center_height <= 0.0 {
        return Err(ValidationError::CenterNonPositive);
    }
    Ok(())
}

fn validate_inner(
    frame_raw: &str,
    anchor_raw: &str,
    center_raw: &str,
    unit: UnitSystem,
) -> Result<FrameInputs, ValidationError> {
    let frame_height = parse_measurement(frame_raw).map_err(|_| ValidationError::FrameHeightUnparsable {
        unit,
    })?;
    if frame_height <= 0.0 {
        return Err(ValidationError::FrameHeightNonPositive);
    }

    let anchor_drop = parse_measurement(anchor_raw).map_err(|_| ValidationError::AnchorUnparsable {
        unit,
    })?;
    if anchor_drop < 0.0 {
        return Err(ValidationError::AnchorNegative);
    }
    // compared in the entered unit, before conversion, so an anchor equal to the frame height stays valid
    if anchor_drop > frame_height {
        return Err(ValidationError::AnchorExceedsFrame);
    }

    let center_height = match is_blank(center_raw) {
        true => unit.default_center_height(),
        false => parse_measurement(center_raw).map_err(|_| ValidationError::CenterUnparsable {
            unit,
        })?,
    };
    if center_height <= 0.0 {
        return Err(ValidationError::CenterNonPositive);
    }

    Ok(FrameInputs {
        unit,
        frame_height,
        anchor_drop,
        center_height,
    })
}
