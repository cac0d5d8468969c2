//! Preview options with TOML support.
//!
//! Camera, plane, motion and display settings plus the ordered image list.
//! Every section uses `#[serde(default)]`, so a TOML file that only lists
//! `images` (or only overrides `[motion]`) is valid.

mod camera;
mod display;
mod motion;
mod plane;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use motion::MotionOptions;
pub use plane::PlaneOptions;
use serde::{Deserialize, Serialize};

use crate::error::GlimpseError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Image sources (paths natively, URLs on the web), in link order.
    pub images: Vec<String>,
    /// Perspective camera parameters.
    pub camera: CameraOptions,
    /// Preview plane size and tessellation.
    pub plane: PlaneOptions,
    /// Interpolation constants.
    pub motion: MotionOptions,
    /// Surface sizing and antialiasing.
    pub display: DisplayOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GlimpseError> {
        toml::from_str(content)
            .map_err(|e| GlimpseError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GlimpseError> {
        let content =
            std::fs::read_to_string(path).map_err(GlimpseError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GlimpseError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlimpseError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlimpseError::Io)?;
        }
        std::fs::write(path, content).map_err(GlimpseError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options {
            images: vec!["one.jpg".to_owned(), "two.jpg".to_owned()],
            ..Options::default()
        };
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
images = ["a.png"]

[motion]
follow_factor = 0.25
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.images, vec!["a.png".to_owned()]);
        assert_eq!(opts.motion.follow_factor, 0.25);
        // Everything else should be default
        assert_eq!(opts.motion.fade_factor, 0.1);
        assert_eq!(opts.plane.width, 250.0);
        assert_eq!(opts.plane.height, 350.0);
        assert_eq!(opts.camera.perspective, 1000.0);
        assert_eq!(opts.display.max_pixel_ratio, 2.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("images = 3").unwrap_err();
        assert!(matches!(err, GlimpseError::OptionsParse(_)));
    }

    #[test]
    fn sample_count_is_one_or_four() {
        let mut display = DisplayOptions::default();
        assert_eq!(display.sample_count(), 4);
        display.msaa_samples = 1;
        assert_eq!(display.sample_count(), 1);
        display.msaa_samples = 8;
        assert_eq!(display.sample_count(), 4);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("glimpse-options-test");
        let path = dir.join("preview.toml");
        let mut opts = Options::default();
        opts.motion.distortion_strength = 0.002;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
