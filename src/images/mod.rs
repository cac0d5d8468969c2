//! Image sources: decoding and the fixed-size slot arena textures live in.
//!
//! Every configured image gets a slot index when it is requested. Loads can
//! finish in any order; each one writes only its own slot, so link `i`
//! always shows image `i` no matter which download wins.

/// Bytes → RGBA8 decoding.
pub mod decode;
/// Background file loading for native hosts.
#[cfg(not(target_arch = "wasm32"))]
pub mod loader;
/// Indexed slot arena.
pub mod slots;

pub use decode::{decode_image, DecodedImage};
pub use slots::{Slot, TextureSlots};
