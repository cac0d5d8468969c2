//! GPU-free preview controller state.
//!
//! [`PreviewScene`] owns everything the per-frame update reads and writes:
//! viewport, camera, pointer target, hover flags, the smoothed
//! [`MotionState`] and which image slot is active. The engine turns its
//! [`FrameUniforms`] into GPU writes; tests drive it directly.

use glam::{Mat4, Vec2, Vec3};

use crate::animation::MotionState;
use crate::camera::{Camera, Viewport};
use crate::input::{HoverState, HoverTarget, InputEvent};
use crate::options::Options;
use crate::util::lerp::lerp;

/// Everything the shader pipeline needs for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// Camera view-projection matrix.
    pub view_proj: Mat4,
    /// Plane transform: scale to plane size, then translate to the mesh
    /// position.
    pub model: Mat4,
    /// Distortion offset (shader space, +Y up).
    pub offset: Vec2,
    /// Preview opacity.
    pub alpha: f32,
    /// Image slot to sample, `None` before any image is configured.
    pub texture: Option<usize>,
}

/// Preview controller state.
pub struct PreviewScene {
    options: Options,
    viewport: Viewport,
    camera: Camera,
    pointer: Vec2,
    hover: HoverState,
    motion: MotionState,
    active_texture: Option<usize>,
}

impl PreviewScene {
    /// Scene for `link_count` links. The first configured image starts
    /// active, at the configured initial alpha.
    pub fn new(options: Options, viewport: Viewport, link_count: usize) -> Self {
        let camera = Camera::new(&viewport, &options.camera);
        let motion = MotionState::new(options.motion.initial_alpha);
        let active_texture = (!options.images.is_empty()).then_some(0);
        Self {
            options,
            viewport,
            camera,
            pointer: Vec2::ZERO,
            hover: HoverState::new(link_count),
            motion,
            active_texture,
        }
    }

    /// Apply one input event.
    ///
    /// Entering a link swaps the active image immediately. Leaving a link
    /// nudges alpha one step toward zero on top of the per-frame fade.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::HoverEnter(target) => {
                let _ = self.hover.set(target, true);
                if let HoverTarget::Link(index) = target {
                    self.activate(index);
                }
            }
            InputEvent::HoverLeave(target) => {
                let _ = self.hover.set(target, false);
                if matches!(target, HoverTarget::Link(_)) {
                    self.motion.alpha =
                        lerp(self.motion.alpha, 0.0, self.options.motion.fade_factor)
                            .clamp(0.0, 1.0);
                }
            }
        }
    }

    fn activate(&mut self, index: usize) {
        if index < self.options.images.len() {
            if self.active_texture != Some(index) {
                log::debug!("active image -> {index}");
            }
            self.active_texture = Some(index);
        } else {
            log::debug!(
                "link {index} has no image ({} configured)",
                self.options.images.len()
            );
        }
    }

    /// Track a new viewport: aspect ratio and field of view follow it.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.resize(&viewport);
        log::debug!(
            "viewport {}x{} @{} fov {:.2}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            self.camera.fovy
        );
    }

    /// Advance one frame (`dt` in seconds, `None` for one reference frame)
    /// and return the uniforms to draw with.
    pub fn update(&mut self, dt: Option<f32>) -> FrameUniforms {
        self.motion = self.motion.step(
            self.pointer,
            self.hover.any(),
            dt,
            &self.options.motion,
        );
        self.frame_uniforms()
    }

    /// Uniforms for the current state, without advancing.
    pub fn frame_uniforms(&self) -> FrameUniforms {
        let position = self.mesh_position();
        let plane = &self.options.plane;
        let model = Mat4::from_translation(position.extend(0.0))
            * Mat4::from_scale(Vec3::new(plane.width, plane.height, 1.0));
        FrameUniforms {
            view_proj: self.camera.build_matrix(),
            model,
            offset: self
                .motion
                .distortion(self.options.motion.distortion_strength),
            alpha: self.motion.alpha,
            texture: self.active_texture,
        }
    }

    /// Plane center in world space: the smoothed offset converted to
    /// centered coordinates.
    pub fn mesh_position(&self) -> Vec2 {
        self.viewport.to_centered(self.motion.offset)
    }

    /// Current smoothed state.
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// Current camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Active image slot.
    pub fn active_texture(&self) -> Option<usize> {
        self.active_texture
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;
    use crate::camera::field_of_view;

    fn scene(images: usize) -> PreviewScene {
        let options = Options {
            images: (0..images).map(|i| format!("{i}.jpg")).collect(),
            ..Options::default()
        };
        PreviewScene::new(options, Viewport::new(1000.0, 800.0, 1.0), images)
    }

    #[test]
    fn starts_on_first_image_fully_opaque() {
        let preview = scene(3);
        assert_eq!(preview.active_texture(), Some(0));
        assert_eq!(preview.motion().alpha, 1.0);
        assert_eq!(preview.motion().offset, Vec2::ZERO);
        assert_eq!(scene(0).active_texture(), None);
    }

    #[test]
    fn fades_out_when_nothing_is_hovered() {
        let mut scene = scene(2);
        let first = scene.update(None);
        assert!((first.alpha - 0.9).abs() < 1e-6);
        for _ in 0..100 {
            let _ = scene.update(None);
        }
        assert!(scene.motion().alpha < 0.001);
    }

    #[test]
    fn hover_swaps_texture_at_once_and_fades_in() {
        let mut scene = scene(3);
        for _ in 0..200 {
            let _ = scene.update(None);
        }
        scene.handle_event(InputEvent::HoverEnter(HoverTarget::Container));
        scene.handle_event(InputEvent::HoverEnter(HoverTarget::Link(2)));
        // Discrete swap, no frame needed
        assert_eq!(scene.active_texture(), Some(2));
        let before = scene.motion().alpha;
        let uniforms = scene.update(None);
        assert_eq!(uniforms.texture, Some(2));
        assert!(uniforms.alpha > before);
    }

    #[test]
    fn link_without_image_keeps_current_texture() {
        let mut scene = PreviewScene::new(
            Options {
                images: vec!["only.jpg".to_owned()],
                ..Options::default()
            },
            Viewport::new(800.0, 600.0, 1.0),
            3,
        );
        scene.handle_event(InputEvent::HoverEnter(HoverTarget::Link(2)));
        assert_eq!(scene.active_texture(), Some(0));
        // Still counts as hovered
        assert!(scene.hover.any());
    }

    #[test]
    fn leaving_a_link_nudges_alpha_down() {
        let mut scene = scene(2);
        scene.handle_event(InputEvent::HoverEnter(HoverTarget::Link(1)));
        let alpha = scene.motion().alpha;
        scene.handle_event(InputEvent::HoverLeave(HoverTarget::Link(1)));
        assert!((scene.motion().alpha - alpha * 0.9).abs() < 1e-6);
        assert!(!scene.hover.any());
        // The image stays bound while fading out
        assert_eq!(scene.active_texture(), Some(1));
    }

    #[test]
    fn alpha_heads_back_to_zero_after_leave() {
        let mut scene = scene(2);
        scene.handle_event(InputEvent::HoverEnter(HoverTarget::Container));
        for _ in 0..60 {
            let _ = scene.update(None);
        }
        scene.handle_event(InputEvent::HoverLeave(HoverTarget::Container));
        let mut last = scene.motion().alpha;
        for _ in 0..120 {
            let u = scene.update(None);
            assert!(u.alpha <= last && u.alpha >= 0.0);
            last = u.alpha;
        }
        assert!(last < 0.01);
    }

    #[test]
    fn pointer_drives_offset_and_mesh_position() {
        let mut scene = scene(1);
        scene.handle_event(InputEvent::PointerMoved { x: 100.0, y: 200.0 });
        let _ = scene.update(None);
        let offset = scene.motion().offset;
        assert!((offset - Vec2::new(10.0, 20.0)).length() < 1e-4);
        assert_eq!(
            scene.mesh_position(),
            Vec2::new(offset.x - 500.0, -offset.y + 400.0)
        );
    }

    #[test]
    fn model_matrix_places_and_sizes_the_plane() {
        let mut scene = scene(1);
        scene.handle_event(InputEvent::PointerMoved { x: 500.0, y: 400.0 });
        for _ in 0..300 {
            let _ = scene.update(None);
        }
        let u = scene.frame_uniforms();
        // Pointer at the viewport center: plane centered on the origin.
        let corner = u.model * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!((corner.x - 125.0).abs() < 0.01);
        assert!((corner.y - 175.0).abs() < 0.01);
        // Converged, so no distortion left.
        assert!(u.offset.length() < 1e-4);
    }

    #[test]
    fn resize_updates_camera() {
        let mut scene = scene(1);
        scene.resize(Viewport::new(1600.0, 900.0, 2.0));
        assert!((scene.camera().fovy - field_of_view(900.0, 1000.0)).abs() < 1e-6);
        assert!((scene.camera().aspect - 1600.0 / 900.0).abs() < 1e-6);
        assert_eq!(scene.viewport().pixel_ratio, 2.0);
    }
}
