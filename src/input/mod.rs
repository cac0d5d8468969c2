//! Input handling: platform-agnostic events and hover tracking.

/// Platform-agnostic input events.
pub mod event;
/// Which links (and the link container) are currently hovered.
pub mod hover;

pub use event::{HoverTarget, InputEvent};
pub use hover::HoverState;
