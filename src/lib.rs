// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Cursor-following image hover preview rendered with wgpu.
//!
//! A textured plane follows the pointer with exponential smoothing, bends
//! along its direction of travel in the vertex shader, and fades in while a
//! navigation link (or the link container) is hovered. Hovering link `i`
//! swaps in image `i`.
//!
//! # Key entry points
//!
//! - [`engine::PreviewEngine`] - GPU owner; feed it input and call `frame`
//! - [`scene::PreviewScene`] - the GPU-free per-frame state machine
//! - [`animation::MotionState`] - the pure smoothing step
//! - [`options::Options`] - runtime configuration (camera, plane, motion,
//!   display, images)
//! - `Viewer` (feature `viewer`) - standalone winit window
//! - `web::mount` (feature `web`, wasm32) - mount into a page
//!
//! # Architecture
//!
//! Hosts translate their events into [`input::InputEvent`]s. Each frame the
//! scene steps [`animation::MotionState`] toward the pointer, the engine
//! writes the resulting uniforms and draws one multisampled pass onto a
//! transparent surface. Images decode off the render path and land in a
//! fixed-size slot arena indexed by link.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod images;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use engine::PreviewEngine;
pub use error::GlimpseError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
