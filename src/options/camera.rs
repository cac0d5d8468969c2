use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Perspective camera parameters.
///
/// The field of view is not configurable: it is derived from the viewport
/// height and `perspective` so that one world unit covers one CSS pixel.
pub struct CameraOptions {
    /// Distance from the eye to the z = 0 plane the preview lives on.
    pub perspective: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance. Must exceed `perspective` or the plane
    /// lands on the far plane and may be clipped.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            perspective: 1000.0,
            znear: 1.0,
            zfar: 2000.0,
        }
    }
}
