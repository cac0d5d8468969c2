//! Input and resize handling for the engine.

use super::PreviewEngine;
use crate::camera::Viewport;
use crate::input::InputEvent;

impl PreviewEngine {
    /// Process a platform-agnostic input event.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::PointerMoved { x, y });
    /// engine.handle_input(InputEvent::HoverEnter(HoverTarget::Link(0)));
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        self.scene.handle_event(event);
    }

    /// Follow a new viewport: camera aspect and field of view, surface size
    /// (device pixel ratio capped), and the MSAA target.
    pub fn resize(&mut self, viewport: Viewport) {
        self.scene.resize(viewport);
        let size = viewport.surface_size(self.max_pixel_ratio);
        if size != self.context.size() {
            self.context.resize(size.0, size.1);
            self.renderer.resize(&self.context.device, size);
        }
    }
}
