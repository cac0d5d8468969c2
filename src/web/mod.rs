//! Browser host: mounts the preview into a page.
//!
//! The page hands over its container and link elements explicitly
//! ([`mount`]), or names them with CSS selectors ([`mount_by_selectors`]).
//! A canvas is appended to the container, images are fetched in the
//! background, and a `requestAnimationFrame` loop drives the engine until
//! [`PreviewHandle::stop`] is called.
//!
//! ```js
//! import init, { mount } from "./pkg/glimpse.js";
//! await init();
//! const handle = await mount(
//!   document.querySelector("nav"),
//!   [...document.querySelectorAll("nav a")],
//!   ["img/one.jpg", "img/two.jpg"],
//! );
//! // later: handle.stop();
//! ```

mod fetch;
mod host;
mod listener;

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use self::host::{window_viewport, Host};
use crate::engine::PreviewEngine;
use crate::error::GlimpseError;
use crate::options::Options;

#[allow(clippy::needless_pass_by_value)]
pub(crate) fn js_error(value: JsValue) -> GlimpseError {
    GlimpseError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl From<GlimpseError> for JsValue {
    fn from(e: GlimpseError) -> Self {
        Self::from_str(&e.to_string())
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Fails harmlessly when a second preview is mounted.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn window_and_document() -> Result<(Window, Document), GlimpseError> {
    let window = web_sys::window()
        .ok_or_else(|| GlimpseError::MissingElement("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| GlimpseError::MissingElement("document".into()))?;
    Ok((window, document))
}

/// A fixed, full-window canvas that lets pointer events through.
fn create_canvas(
    document: &Document,
    (width, height): (u32, u32),
) -> Result<HtmlCanvasElement, GlimpseError> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| GlimpseError::Js("canvas is not an HtmlCanvasElement".into()))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let style = canvas.style();
    for (property, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100vw"),
        ("height", "100vh"),
        ("pointer-events", "none"),
    ] {
        style.set_property(property, value).map_err(js_error)?;
    }
    Ok(canvas)
}

/// Mount a preview on explicitly provided elements.
///
/// Link `i` shows image `i` of `options.images`. The returned handle must be
/// kept; dropping it tears the preview down.
///
/// # Errors
///
/// [`GlimpseError::Gpu`] when no WebGL2/WebGPU context is available, or
/// [`GlimpseError::Js`] when a DOM call fails.
pub async fn mount_preview(
    container: HtmlElement,
    links: Vec<HtmlElement>,
    options: Options,
) -> Result<PreviewHandle, GlimpseError> {
    let (window, document) = window_and_document()?;
    let viewport = window_viewport(&window);
    let canvas = create_canvas(
        &document,
        viewport.surface_size(options.display.max_pixel_ratio),
    )?;
    let _ = container.append_child(&canvas).map_err(js_error)?;

    let images = options.images.clone();
    let engine = match PreviewEngine::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        viewport,
        options,
        links.len(),
    )
    .await
    {
        Ok(engine) => engine,
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };

    let host = Host::new(window.clone(), canvas, engine);
    if let Err(e) = host.attach_listeners(&container, &links) {
        host.stop();
        return Err(e);
    }
    host.start();
    fetch::spawn_image_loads(&Rc::downgrade(&host), &window, &images);
    Ok(PreviewHandle { host })
}

/// Mount a preview on the elements matched by two CSS selectors.
///
/// # Errors
///
/// [`GlimpseError::MissingElement`] when the container or every link is
/// missing, plus the errors of [`mount_preview`].
pub async fn mount_preview_by_selectors(
    container_selector: &str,
    link_selector: &str,
    options: Options,
) -> Result<PreviewHandle, GlimpseError> {
    let (_, document) = window_and_document()?;
    let container = document
        .query_selector(container_selector)
        .map_err(js_error)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| {
            GlimpseError::MissingElement(container_selector.to_owned())
        })?;
    let nodes = document
        .query_selector_all(link_selector)
        .map_err(js_error)?;
    let links: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    if links.is_empty() {
        return Err(GlimpseError::MissingElement(link_selector.to_owned()));
    }
    mount_preview(container, links, options).await
}

/// Options from an optional TOML string, with `images` overriding the
/// image list when non-empty.
fn resolve_options(
    images: Vec<String>,
    options_toml: Option<String>,
) -> Result<Options, GlimpseError> {
    let mut options = match options_toml {
        Some(toml) => Options::from_toml(&toml)?,
        None => Options::default(),
    };
    if !images.is_empty() {
        options.images = images;
    }
    Ok(options)
}

/// JS entry point: mount on a container element and an array of link
/// elements.
#[wasm_bindgen]
pub async fn mount(
    container: HtmlElement,
    links: Array,
    images: Vec<String>,
    options_toml: Option<String>,
) -> Result<PreviewHandle, JsValue> {
    init_logging();
    let links = links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            link.dyn_into::<HtmlElement>()
                .map_err(|_| GlimpseError::MissingElement(format!("link {i}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let options = resolve_options(images, options_toml)?;
    Ok(mount_preview(container, links, options).await?)
}

/// JS entry point: mount on the elements matched by CSS selectors.
#[wasm_bindgen(js_name = "mountBySelectors")]
pub async fn mount_by_selectors(
    container_selector: String,
    link_selector: String,
    images: Vec<String>,
    options_toml: Option<String>,
) -> Result<PreviewHandle, JsValue> {
    init_logging();
    let options = resolve_options(images, options_toml)?;
    Ok(mount_preview_by_selectors(&container_selector, &link_selector, options)
        .await?)
}

/// A mounted preview.
#[wasm_bindgen]
pub struct PreviewHandle {
    host: Rc<Host>,
}

#[wasm_bindgen]
impl PreviewHandle {
    /// Cancel the frame loop, detach listeners and remove the canvas.
    /// Stopping twice is a no-op.
    pub fn stop(&self) {
        if self.host.is_running() {
            self.host.stop();
        }
    }

    /// Whether the frame loop is still scheduling frames.
    #[wasm_bindgen(js_name = "isRunning")]
    pub fn is_running(&self) -> bool {
        self.host.is_running()
    }

    /// Re-read the window size (for layout changes that fire no `resize`).
    pub fn resize(&self) {
        self.host.resize();
    }
}
