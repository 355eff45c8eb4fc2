//! Panel widgets - plain containers and stacking containers

use super::core::Axis;
use super::Widget;

/// A rectangular container; children resolve their anchors against its
/// resolved rectangle
#[derive(Debug)]
pub struct Panel {
    /// Owned child widgets, in insertion (draw) order
    pub children: Vec<Widget>,
}

impl Panel {
    /// Create an empty panel
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

/// A container that lays children edge-to-edge along one axis
///
/// Each child's offset along the axis accumulates the sizes of the children
/// before it plus fixed spacing; the cross-axis offset is zeroed, leaving
/// children top/left-aligned within the panel. Assignment happens before
/// each child's own anchor is resolved within the fixed panel rectangle.
#[derive(Debug)]
pub struct StackPanel {
    /// Layout axis
    pub axis: Axis,
    /// Fixed spacing between consecutive children in pixels
    pub spacing: f32,
    /// Owned child widgets, in stacking (and draw) order
    pub children: Vec<Widget>,
}

impl StackPanel {
    /// Create an empty stacking panel
    pub fn new(axis: Axis, spacing: f32) -> Self {
        Self {
            axis,
            spacing,
            children: Vec::new(),
        }
    }
}
