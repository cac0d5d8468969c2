use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Size and tessellation of the preview plane.
pub struct PlaneOptions {
    /// World-space width (equal to CSS pixels at the default camera).
    pub width: f32,
    /// World-space height.
    pub height: f32,
    /// Horizontal subdivisions of the unit plane.
    pub segments_x: u32,
    /// Vertical subdivisions of the unit plane.
    pub segments_y: u32,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            width: 250.0,
            height: 350.0,
            segments_x: 30,
            segments_y: 30,
        }
    }
}
