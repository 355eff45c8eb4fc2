//! Pointer input types
//!
//! The host delivers pointer events in the same coordinate space as
//! resolved widget rectangles: top-left origin, pixels. Dispatch itself
//! lives on [`crate::UiManager`] and walks widgets in reverse insertion
//! order so the visually topmost widget is tested first.

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}
