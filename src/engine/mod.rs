//! The preview engine: GPU resources plus the scene they draw.
//!
//! [`PreviewEngine`] owns the [`RenderContext`], the [`PreviewRenderer`],
//! the texture slot arena and the GPU-free [`PreviewScene`]. Hosts feed it
//! input events, resizes and image load results, and call
//! [`frame`](PreviewEngine::frame) once per animation frame.

mod construction;
mod input;

use crate::error::GlimpseError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::check_texture_size;
use crate::gpu::uniforms::PreviewUniform;
use crate::images::{DecodedImage, TextureSlots};
use crate::renderer::{BoundImage, PreviewRenderer};
use crate::scene::PreviewScene;

/// Cursor-following image preview.
pub struct PreviewEngine {
    context: RenderContext,
    renderer: PreviewRenderer,
    slots: TextureSlots<BoundImage>,
    scene: PreviewScene,
    max_pixel_ratio: f32,
}

impl PreviewEngine {
    /// Store a finished image load in its slot. Failures, including images
    /// larger than the device texture limit, are logged and leave the slot
    /// empty.
    pub fn set_image(
        &mut self,
        index: usize,
        result: Result<DecodedImage, GlimpseError>,
    ) {
        let max_dimension =
            self.context.device.limits().max_texture_dimension_2d;
        let bound = result.and_then(|image| {
            check_texture_size(index, &image, max_dimension)?;
            log::info!(
                "image {index} ready ({}x{})",
                image.width,
                image.height
            );
            Ok(self.renderer.bind_image(&self.context, &image, index))
        });
        let _ = self.slots.fill(index, bound);
    }

    /// Advance the animation by `dt` seconds (`None` for one reference
    /// frame) and draw.
    ///
    /// # Errors
    ///
    /// Returns the surface error when no frame could be acquired; `Lost`
    /// and `Outdated` have already been handled by reconfiguring.
    pub fn frame(&mut self, dt: Option<f32>) -> Result<(), wgpu::SurfaceError> {
        let _ = self.scene.update(dt);
        self.render()
    }

    /// Draw the scene with the current state, without advancing.
    ///
    /// # Errors
    ///
    /// See [`frame`](Self::frame).
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let uniforms = self.scene.frame_uniforms();
        self.renderer
            .write_uniforms(&self.context.queue, &PreviewUniform::from(&uniforms));

        let output = match self.context.get_next_frame() {
            Ok(output) => output,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::debug!("surface {e:?}, reconfiguring");
                self.context.reconfigure();
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.renderer.draw(
            &mut encoder,
            &view,
            self.slots.active(uniforms.texture),
        );
        self.context.submit(encoder);
        output.present();
        Ok(())
    }

    /// The GPU-free scene state.
    pub fn scene(&self) -> &PreviewScene {
        &self.scene
    }

    /// Texture slot arena.
    pub fn slots(&self) -> &TextureSlots<BoundImage> {
        &self.slots
    }

    /// Current surface size in device pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        self.context.size()
    }
}
