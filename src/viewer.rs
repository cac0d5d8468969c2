//! Standalone preview window backed by winit.
//!
//! The window stands in for the page: the cursor drives the preview and
//! holding digit key `N` hovers link `N - 1` (and the link container).
//!
//! ```no_run
//! # use glimpse::Viewer;
//! Viewer::builder()
//!     .with_images(["photos/one.jpg", "photos/two.jpg"])
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::animation::FrameLoop;
use crate::camera::Viewport;
use crate::engine::PreviewEngine;
use crate::error::GlimpseError;
use crate::images::loader::{spawn_file_loads, LoadResult};
use crate::input::{HoverTarget, InputEvent};
use crate::options::Options;

/// Frames between FPS log lines.
const FPS_LOG_INTERVAL: u64 = 600;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    images: Vec<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Glimpse", no images, default
    /// options).
    fn new() -> Self {
        Self {
            images: Vec::new(),
            options: None,
            title: "Glimpse".into(),
        }
    }

    /// Set the image files, in link order. Overrides `options.images`.
    #[must_use]
    pub fn with_images<I, P>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        let images = if self.images.is_empty() {
            options.images.iter().map(PathBuf::from).collect()
        } else {
            options.images = self
                .images
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            self.images
        };
        Viewer {
            images,
            options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing the hover preview.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    images: Vec<PathBuf>,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`GlimpseError::Viewer`] if the event loop cannot be created
    /// or exits abnormally.
    pub fn run(self) -> Result<(), GlimpseError> {
        let event_loop =
            EventLoop::new().map_err(|e| GlimpseError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            frame_loop: FrameLoop::new(),
            loads: None,
            images: self.images,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GlimpseError::Viewer(e.to_string()))
    }
}

/// Link index for a digit key (`1` → link 0 … `9` → link 8).
fn link_for_key(code: KeyCode) -> Option<usize> {
    let index = match code {
        KeyCode::Digit1 => 0,
        KeyCode::Digit2 => 1,
        KeyCode::Digit3 => 2,
        KeyCode::Digit4 => 3,
        KeyCode::Digit5 => 4,
        KeyCode::Digit6 => 5,
        KeyCode::Digit7 => 6,
        KeyCode::Digit8 => 7,
        KeyCode::Digit9 => 8,
        _ => return None,
    };
    Some(index)
}

/// Hover events for a digit key press or release.
fn hover_events(link: usize, pressed: bool) -> [InputEvent; 2] {
    if pressed {
        [
            InputEvent::HoverEnter(HoverTarget::Container),
            InputEvent::HoverEnter(HoverTarget::Link(link)),
        ]
    } else {
        [
            InputEvent::HoverLeave(HoverTarget::Link(link)),
            InputEvent::HoverLeave(HoverTarget::Container),
        ]
    }
}

fn window_viewport(window: &Window) -> Viewport {
    let inner = window.inner_size();
    Viewport::from_physical(inner.width, inner.height, window.scale_factor())
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<PreviewEngine>,
    frame_loop: FrameLoop,
    loads: Option<Receiver<LoadResult>>,
    images: Vec<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl ViewerApp {
    /// Move finished image loads into the engine.
    fn drain_loads(&mut self) {
        let (Some(rx), Some(engine)) = (&self.loads, &mut self.engine) else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok((index, result)) => engine.set_image(index, result),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    log::debug!(
                        "all image loads finished ({} ready)",
                        engine.slots().ready_count()
                    );
                    self.loads = None;
                    return;
                }
            }
        }
    }

    fn redraw(&mut self) {
        self.drain_loads();
        let Some(frame) = self.frame_loop.advance() else {
            return;
        };
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };
        match engine.frame(frame.dt) {
            Ok(()) => {}
            // Already reconfigured; the next frame picks it up.
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {}
            Err(wgpu::SurfaceError::Timeout) => log::warn!("frame timed out"),
            Err(e) => log::error!("render error: {e:?}"),
        }
        if frame.number % FPS_LOG_INTERVAL == 0 {
            log::debug!("{:.1} fps", self.frame_loop.fps());
        }
        if self.frame_loop.is_running() {
            window.request_redraw();
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(engine) = &mut self.engine else {
            return;
        };
        if let Some(link) = link_for_key(code) {
            if event.repeat {
                return;
            }
            let pressed = event.state == ElementState::Pressed;
            for hover in hover_events(link, pressed) {
                engine.handle_input(hover);
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_transparent(true)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes()
                .with_title(&self.title)
                .with_transparent(true)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let link_count = self.images.len();
        let engine_result = pollster::block_on(PreviewEngine::new(
            window.clone(),
            window_viewport(&window),
            options,
            link_count,
        ));

        let engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize preview: {e}");
                event_loop.exit();
                return;
            }
        };

        self.loads = Some(spawn_file_loads(&self.images));
        let _ = self.frame_loop.start();

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            self.frame_loop.stop();
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(engine)) =
                    (&self.window, &mut self.engine)
                {
                    engine.resize(window_viewport(window));
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::CursorMoved { position, .. } => {
                if let (Some(window), Some(engine)) =
                    (&self.window, &mut self.engine)
                {
                    let logical = position.to_logical::<f32>(window.scale_factor());
                    engine.handle_input(InputEvent::PointerMoved {
                        x: logical.x,
                        y: logical.y,
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    self.frame_loop.stop();
                    event_loop.exit();
                    return;
                }
                self.handle_key(&event);
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_to_links() {
        assert_eq!(link_for_key(KeyCode::Digit1), Some(0));
        assert_eq!(link_for_key(KeyCode::Digit9), Some(8));
        assert_eq!(link_for_key(KeyCode::KeyA), None);
    }

    #[test]
    fn press_and_release_are_symmetric() {
        let [a, b] = hover_events(2, true);
        assert_eq!(a, InputEvent::HoverEnter(HoverTarget::Container));
        assert_eq!(b, InputEvent::HoverEnter(HoverTarget::Link(2)));
        let [c, d] = hover_events(2, false);
        assert_eq!(c, InputEvent::HoverLeave(HoverTarget::Link(2)));
        assert_eq!(d, InputEvent::HoverLeave(HoverTarget::Container));
    }

    #[test]
    fn builder_images_override_options() {
        let options = Options {
            images: vec!["from-options.png".to_owned()],
            ..Options::default()
        };
        let viewer = Viewer::builder()
            .with_options(options)
            .with_images(["a.png", "b.png"])
            .build();
        assert_eq!(viewer.images.len(), 2);
        assert_eq!(viewer.options.images, vec!["a.png", "b.png"]);
    }

    #[test]
    fn builder_falls_back_to_option_images() {
        let options = Options {
            images: vec!["x.jpg".to_owned()],
            ..Options::default()
        };
        let viewer = Viewer::builder().with_options(options).build();
        assert_eq!(viewer.images, vec![PathBuf::from("x.jpg")]);
    }
}
