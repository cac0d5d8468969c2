//! Page-side state shared by the DOM callbacks.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use super::listener::Listener;
use crate::animation::FrameLoop;
use crate::camera::Viewport;
use crate::engine::PreviewEngine;
use crate::error::GlimpseError;
use crate::images::DecodedImage;
use crate::input::{HoverTarget, InputEvent};

/// Current window size and device pixel ratio.
pub(super) fn window_viewport(window: &Window) -> Viewport {
    let read = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    Viewport::new(
        read(window.inner_width()),
        read(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

/// Everything a mounted preview owns on the page.
///
/// DOM callbacks hold [`Weak`] references, so dropping the last [`Rc`]
/// (the JS handle) tears the preview down.
pub(super) struct Host {
    window: Window,
    canvas: HtmlCanvasElement,
    engine: RefCell<PreviewEngine>,
    frame_loop: RefCell<FrameLoop>,
    animation_frame: RefCell<Option<Closure<dyn FnMut()>>>,
    animation_frame_id: Cell<Option<i32>>,
    listeners: RefCell<Vec<Listener>>,
}

impl Host {
    pub(super) fn new(
        window: Window,
        canvas: HtmlCanvasElement,
        engine: PreviewEngine,
    ) -> Rc<Self> {
        Rc::new(Self {
            window,
            canvas,
            engine: RefCell::new(engine),
            frame_loop: RefCell::new(FrameLoop::new()),
            animation_frame: RefCell::new(None),
            animation_frame_id: Cell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub(super) fn set_image(
        &self,
        index: usize,
        result: Result<DecodedImage, GlimpseError>,
    ) {
        if self.frame_loop.borrow().is_running() {
            self.engine.borrow_mut().set_image(index, result);
        }
    }

    fn input(&self, event: InputEvent) {
        self.engine.borrow_mut().handle_input(event);
    }

    /// Follow the window size; the canvas backing store tracks the surface.
    pub(super) fn resize(&self) {
        let viewport = window_viewport(&self.window);
        let mut engine = self.engine.borrow_mut();
        engine.resize(viewport);
        let (width, height) = engine.surface_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        log::debug!(
            "resized to {}x{} css px, {width}x{height} device px",
            viewport.width,
            viewport.height
        );
    }

    /// Register the pointer, hover and resize listeners.
    pub(super) fn attach_listeners(
        self: &Rc<Self>,
        container: &HtmlElement,
        links: &[HtmlElement],
    ) -> Result<(), GlimpseError> {
        let mut listeners = Vec::with_capacity(2 * links.len() + 4);

        let hover = |target: &EventTarget,
                     hover_target: HoverTarget|
         -> Result<[Listener; 2], GlimpseError> {
            let enter = Rc::downgrade(self);
            let leave = Rc::downgrade(self);
            Ok([
                Listener::attach(target, "mouseenter", move |_| {
                    if let Some(host) = enter.upgrade() {
                        host.input(InputEvent::HoverEnter(hover_target));
                    }
                })?,
                Listener::attach(target, "mouseleave", move |_| {
                    if let Some(host) = leave.upgrade() {
                        host.input(InputEvent::HoverLeave(hover_target));
                    }
                })?,
            ])
        };

        for (index, link) in links.iter().enumerate() {
            let target: &EventTarget = link.as_ref();
            listeners.extend(hover(target, HoverTarget::Link(index))?);
        }
        let target: &EventTarget = container.as_ref();
        listeners.extend(hover(target, HoverTarget::Container)?);
        let window: &EventTarget = self.window.as_ref();

        let weak = Rc::downgrade(self);
        listeners.push(Listener::attach(
            window,
            "mousemove",
            move |event| {
                let (Some(host), Some(mouse)) =
                    (weak.upgrade(), event.dyn_ref::<MouseEvent>())
                else {
                    return;
                };
                host.input(InputEvent::PointerMoved {
                    x: mouse.client_x() as f32,
                    y: mouse.client_y() as f32,
                });
            },
        )?);

        let weak = Rc::downgrade(self);
        listeners.push(Listener::attach(
            window,
            "resize",
            move |_| {
                if let Some(host) = weak.upgrade() {
                    host.resize();
                }
            },
        )?);

        self.listeners.borrow_mut().extend(listeners);
        Ok(())
    }

    /// Install the `requestAnimationFrame` callback and schedule the first
    /// frame.
    pub(super) fn start(self: &Rc<Self>) {
        if !self.frame_loop.borrow_mut().start() {
            return;
        }
        let weak: Weak<Self> = Rc::downgrade(self);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(host) = weak.upgrade() {
                host.tick();
            }
        });
        *self.animation_frame.borrow_mut() = Some(closure);
        self.request_frame();
    }

    fn request_frame(&self) {
        let callback = self.animation_frame.borrow();
        let Some(closure) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => self.animation_frame_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
        }
    }

    fn tick(&self) {
        self.animation_frame_id.set(None);
        let Some(frame) = self.frame_loop.borrow_mut().advance() else {
            return;
        };
        match self.engine.borrow_mut().frame(frame.dt) {
            // Lost and outdated surfaces were reconfigured by the engine.
            Ok(())
            | Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {}
            Err(e) => log::error!("render error: {e:?}"),
        }
        if self.frame_loop.borrow().is_running() {
            self.request_frame();
        }
    }

    pub(super) fn is_running(&self) -> bool {
        self.frame_loop.borrow().is_running()
    }

    /// Cancel the frame loop, detach every listener and remove the canvas.
    pub(super) fn stop(&self) {
        self.frame_loop.borrow_mut().stop();
        if let Some(id) = self.animation_frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let _ = self.animation_frame.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        self.canvas.remove();
        log::info!("preview stopped");
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        if let Some(id) = self.animation_frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
