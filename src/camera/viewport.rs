use glam::Vec2;

/// Host window size in CSS (logical) pixels plus the device pixel ratio.
///
/// Recomputed from the host on startup and on every resize; the camera,
/// the mesh placement and the surface size all read the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f32,
    /// Height in CSS pixels.
    pub height: f32,
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f32,
}

impl Viewport {
    /// Viewport from logical size and device pixel ratio. Zero or negative
    /// sizes are clamped to one pixel so the aspect ratio stays finite.
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    /// Viewport from a physical surface size and the scale factor that
    /// produced it (native windows report physical pixels).
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new(
            (f64::from(width) / scale) as f32,
            (f64::from(height) / scale) as f32,
            scale as f32,
        )
    }

    /// `width / height`.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Surface size in device pixels, with the pixel ratio capped at
    /// `max_pixel_ratio`.
    pub fn surface_size(&self, max_pixel_ratio: f32) -> (u32, u32) {
        let ratio = self.pixel_ratio.min(max_pixel_ratio.max(1.0));
        (
            ((self.width * ratio).round() as u32).max(1),
            ((self.height * ratio).round() as u32).max(1),
        )
    }

    /// Convert a top-left-origin screen point to centered world coordinates
    /// (+Y up): `(x - W/2, -y + H/2)`.
    pub fn to_centered(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, -point.y + self.height / 2.0)
    }
}
