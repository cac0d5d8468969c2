use std::rc::Weak;

use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Response, Window};

use super::host::Host;
use super::js_error;
use crate::error::GlimpseError;
use crate::images::decode_image;

/// Fetch `url` and return the response body.
async fn fetch_bytes(window: &Window, url: &str) -> Result<Vec<u8>, GlimpseError> {
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(GlimpseError::Js(format!(
            "{url}: HTTP {}",
            response.status()
        )));
    }
    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Start one fetch per URL. Each result lands in the slot of its URL's
/// index, whatever order the responses arrive in.
pub(super) fn spawn_image_loads(host: &Weak<Host>, window: &Window, urls: &[String]) {
    for (index, url) in urls.iter().enumerate() {
        let host = host.clone();
        let window = window.clone();
        let url = url.clone();
        spawn_local(async move {
            let result = match fetch_bytes(&window, &url).await {
                Ok(bytes) => decode_image(index, &bytes),
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log::debug!("loading {url}: {e}");
            }
            // The preview may have been dropped while the request was out.
            if let Some(host) = host.upgrade() {
                host.set_image(index, result);
            }
        });
    }
}
