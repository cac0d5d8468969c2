use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Smoothing constants for the per-frame animation step.
pub struct MotionOptions {
    /// Fraction of the remaining pointer distance covered per reference
    /// frame. Higher tracks faster but jitters more.
    pub follow_factor: f32,
    /// Fraction of the remaining alpha distance covered per reference frame.
    pub fade_factor: f32,
    /// Scale applied to `(target - offset)` before it reaches the shader.
    pub distortion_strength: f32,
    /// Frame rate the factors above are tuned for.
    pub reference_fps: f32,
    /// Alpha at startup.
    pub initial_alpha: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            follow_factor: 0.1,
            fade_factor: 0.1,
            distortion_strength: 0.0009,
            reference_fps: 60.0,
            initial_alpha: 1.0,
        }
    }
}
