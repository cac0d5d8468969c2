//! Preview rendering: plane geometry and the render pass that draws it.

/// Subdivided unit plane and its GPU buffers.
pub mod plane;
/// Preview pipeline, uniforms and draw call.
pub mod preview_pass;

pub use preview_pass::{BoundImage, PreviewRenderer};
