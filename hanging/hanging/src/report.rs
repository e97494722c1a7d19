use measure_units::{UnitSystem, format_length};

use crate::diagram::DiagramLayout;
use crate::frame::{FrameGeometry, FrameSpec};

/// The result of a calculation, with values formatted for display in the selected unit system.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FrameReport {
    pub unit: UnitSystem,
    pub spec: FrameSpec,
    pub geometry: FrameGeometry,

    pub nail: String,
    pub top: String,
    pub bottom: String,
    pub center: String,

    pub diagram: DiagramLayout,
}

impl FrameReport {
    pub fn new(spec: FrameSpec, unit: UnitSystem) -> Self {
        let geometry = spec.geometry();

        Self {
            unit,
            spec,
            geometry,
            nail: format_length(geometry.nail_height, unit),
            top: format_length(geometry.top_edge, unit),
            bottom: format_length(geometry.bottom_edge, unit),
            center: format_length(spec.center_height, unit),
            diagram: DiagramLayout::new(&spec, &geometry, unit),
        }
    }

    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("Nail height: {} from the floor.", self.nail),
            format!(
                "The top of the frame will sit at {}, and the bottom will be at {}.",
                self.top, self.bottom
            ),
        ]
    }
}
