//! Shared utilities: interpolation helpers and frame timing.

pub mod frame_timing;
pub mod lerp;
