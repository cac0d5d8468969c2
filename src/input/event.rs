/// Platform-agnostic input events.
///
/// Browser listeners and the native viewer both translate their raw events
/// into these before handing them to the scene.
///
/// # Example
///
/// ```
/// # use glimpse::input::{HoverTarget, InputEvent};
/// let events = [
///     InputEvent::PointerMoved { x: 120.0, y: 48.0 },
///     InputEvent::HoverEnter(HoverTarget::Link(0)),
/// ];
/// assert_eq!(events.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to an absolute position.
    PointerMoved {
        /// Horizontal position in CSS pixels from the left edge.
        x: f32,
        /// Vertical position in CSS pixels from the top edge.
        y: f32,
    },
    /// The pointer entered a tracked element.
    HoverEnter(HoverTarget),
    /// The pointer left a tracked element.
    HoverLeave(HoverTarget),
}

/// An element whose hover state drives the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    /// The navigation link at this index (matches the image slot index).
    Link(usize),
    /// The element that contains all links.
    Container,
}
