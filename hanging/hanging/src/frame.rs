/// A validated frame, all values in inches.
///
/// Invariants: `frame_height > 0`, `0 <= anchor_drop <= frame_height`, `center_height > 0`.
/// Use [`crate::validation::validate`] to build one from user input.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpec {
    pub frame_height: f64,
    /// Distance from the top edge of the frame down to the hanging point, e.g. a taut wire or a D-ring.
    pub anchor_drop: f64,
    /// Height of the center of the frame above the floor.
    pub center_height: f64,
}

impl FrameSpec {
    pub fn geometry(&self) -> FrameGeometry {
        compute_frame_measurements(self.frame_height, self.anchor_drop, self.center_height)
    }
}

/// Heights above the floor, in inches, derived from a [`FrameSpec`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameGeometry {
    pub top_edge: f64,
    pub bottom_edge: f64,
    pub nail_height: f64,
}

pub fn compute_frame_measurements(frame_height: f64, anchor_drop: f64, center_height: f64) -> FrameGeometry {
    let half_height = frame_height / 2.0;
    let top_edge = center_height + half_height;
    let bottom_edge = center_height - half_height;
    let nail_height = top_edge - anchor_drop;

    FrameGeometry {
        top_edge,
        bottom_edge,
        nail_height,
    }
}
