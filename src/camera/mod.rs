//! Pixel-aligned perspective camera and viewport measurements.

/// Perspective camera whose field of view maps world units to CSS pixels.
pub mod core;
/// Host window measurements shared by camera, mesh placement and surface.
pub mod viewport;

pub use self::core::{field_of_view, Camera};
pub use self::viewport::Viewport;
