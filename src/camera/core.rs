use glam::{Mat4, Vec3};

use super::viewport::Viewport;
use crate::options::CameraOptions;

/// Vertical field of view (degrees) at which one world unit on the z = 0
/// plane covers one pixel, for a camera `perspective` units away.
///
/// `fov = 2 * atan(viewport_height / 2 / perspective)`
pub fn field_of_view(viewport_height: f32, perspective: f32) -> f32 {
    (2.0 * (viewport_height / 2.0 / perspective).atan()).to_degrees()
}

/// Perspective camera looking down -Z at the preview plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Distance from the eye to the z = 0 plane.
    pub perspective: f32,
}

impl Camera {
    /// Camera sized to `viewport`, placed `options.perspective` units in
    /// front of the origin.
    pub fn new(viewport: &Viewport, options: &CameraOptions) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, options.perspective),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.aspect_ratio(),
            fovy: field_of_view(viewport.height, options.perspective),
            znear: options.znear,
            zfar: options.zfar,
            perspective: options.perspective,
        }
    }

    /// Recompute aspect ratio and field of view for a new viewport.
    pub fn resize(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect_ratio();
        self.fovy = field_of_view(viewport.height, self.perspective);
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }
}
