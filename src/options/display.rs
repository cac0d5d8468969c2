use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Surface and antialiasing settings.
pub struct DisplayOptions {
    /// Upper bound for the device pixel ratio used to size the surface.
    pub max_pixel_ratio: f32,
    /// MSAA sample count (1 disables multisampling, otherwise 4).
    pub msaa_samples: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_pixel_ratio: 2.0,
            msaa_samples: 4,
        }
    }
}

impl DisplayOptions {
    /// Sample count clamped to the values every backend supports.
    pub fn sample_count(&self) -> u32 {
        if self.msaa_samples > 1 {
            4
        } else {
            1
        }
    }
}
