//! Engine construction.

use super::PreviewEngine;
use crate::camera::Viewport;
use crate::error::GlimpseError;
use crate::gpu::render_context::RenderContext;
use crate::images::TextureSlots;
use crate::options::Options;
use crate::renderer::PreviewRenderer;
use crate::scene::PreviewScene;

impl PreviewEngine {
    /// Create the engine on a surface target (winit window or HTML canvas).
    ///
    /// `link_count` is the number of hoverable links; the image slots are
    /// sized from `options.images`. Images are delivered afterwards through
    /// [`set_image`](Self::set_image).
    ///
    /// # Errors
    ///
    /// Returns [`GlimpseError::Gpu`] when no surface, adapter or device is
    /// available.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        viewport: Viewport,
        options: Options,
        link_count: usize,
    ) -> Result<Self, GlimpseError> {
        let max_pixel_ratio = options.display.max_pixel_ratio;
        let surface_size = viewport.surface_size(max_pixel_ratio);
        let context = RenderContext::new(target, surface_size).await?;

        let sample_count = options.display.sample_count();
        let renderer = PreviewRenderer::new(&context, &options.plane, sample_count);
        let slots = TextureSlots::new(options.images.len());

        log::info!(
            "preview ready: {}x{} surface, {} images, {} links, {}x msaa",
            surface_size.0,
            surface_size.1,
            options.images.len(),
            link_count,
            sample_count
        );
        if link_count != options.images.len() {
            log::warn!(
                "{link_count} links but {} images; unmatched links keep the \
                 current image",
                options.images.len()
            );
        }

        let scene = PreviewScene::new(options, viewport, link_count);
        Ok(Self {
            context,
            renderer,
            slots,
            scene,
            max_pixel_ratio,
        })
    }
}
