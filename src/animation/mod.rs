//! Per-frame animation: the pure smoothing step and the loop that drives it.
//!
//! [`MotionState::step`] is a pure function of the previous state, the
//! pointer target, hover state and elapsed time. [`FrameLoop`] is the
//! Idle → Running → Stopped state machine host glue consults before
//! scheduling another frame.

mod frame_loop;
mod motion;

pub use frame_loop::{Frame, FrameLoop, LoopState};
pub use motion::MotionState;
