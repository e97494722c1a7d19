use measure_units::{UnitSystem, format_length};

use crate::frame::{FrameGeometry, FrameSpec};

/// Height of the wall in the diagram, which spans twice the center height.
pub const DIAGRAM_HEIGHT_PX: f64 = 280.0;
/// Frames are never drawn shorter than this, so tiny frames stay visible.
pub const MIN_FRAME_HEIGHT_PX: f64 = 24.0;

/// Where to draw the frame, hanging point and nail on a diagram of the wall.
///
/// Vertical positions are in pixels, measured up from the floor.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DiagramLayout {
    /// Pixels per inch
    pub scale: f64,
    pub frame_height_px: f64,
    pub frame_bottom_px: f64,
    pub nail_bottom_px: f64,
    /// `None` when the frame hangs from its top edge.
    pub anchor: Option<AnchorMarker>,

    pub top_label: String,
    pub bottom_label: String,
    pub center_label: String,
    pub nail_label: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnchorMarker {
    /// Position within the frame, from its top edge, 0.0 = top, 1.0 = bottom.
    pub offset_ratio: f64,
    pub label: String,
}

impl DiagramLayout {
    pub fn new(spec: &FrameSpec, geometry: &FrameGeometry, unit: UnitSystem) -> Self {
        let scale = DIAGRAM_HEIGHT_PX / (spec.center_height * 2.0);

        let anchor = match spec.anchor_drop > 0.0 {
            true => Some(AnchorMarker {
                offset_ratio: spec.anchor_drop / spec.frame_height,
                label: format!(
                    "Anchor: {}",
                    format_length(geometry.top_edge - spec.anchor_drop, unit)
                ),
            }),
            false => None,
        };

        Self {
            scale,
            frame_height_px: (spec.frame_height * scale).max(MIN_FRAME_HEIGHT_PX),
            frame_bottom_px: (geometry.bottom_edge * scale).max(0.0),
            nail_bottom_px: geometry.nail_height * scale,
            anchor,
            top_label: format!("Top: {}", format_length(geometry.top_edge, unit)),
            bottom_label: format!("Bottom: {}", format_length(geometry.bottom_edge, unit)),
            center_label: format!("Center: {}", format_length(spec.center_height, unit)),
            nail_label: format!("Nail: {}", format_length(geometry.nail_height, unit)),
        }
    }
}
