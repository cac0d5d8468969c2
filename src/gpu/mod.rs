//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, bind group and pipeline
//! helpers, texture uploads, and the preview uniform layout.

/// Shared wgpu boilerplate helpers for the preview pipeline.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// MSAA color target and uploaded image textures.
pub mod texture;
/// Preview uniform buffer layout.
pub mod uniforms;
