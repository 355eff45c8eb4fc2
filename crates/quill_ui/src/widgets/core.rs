//! Core widget primitives
//!
//! Shared types and structures used by all widgets.

use crate::foundation::math::{Rect, Vec4};

/// Anchor point for widget positioning
///
/// `Manual` means the widget's raw (x, y) coordinates are authoritative
/// (relative to the parent's resolved origin, offsets ignored). All other
/// anchors are resolved against the container rectangle plus a pixel
/// offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Absolute coordinates, offsets ignored
    Manual,
    /// Top-left corner of the container
    TopLeft,
    /// Top-center
    TopCenter,
    /// Top-right corner
    TopRight,
    /// Middle-left
    MiddleLeft,
    /// Center of the container
    MiddleCenter,
    /// Middle-right
    MiddleRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-center
    BottomCenter,
    /// Bottom-right corner
    BottomRight,
}

impl Anchor {
    /// Normalized alignment factors (0.0, 0.5, 1.0) per axis, or `None`
    /// for `Manual`
    pub fn factors(self) -> Option<(f32, f32)> {
        match self {
            Self::Manual => None,
            Self::TopLeft => Some((0.0, 0.0)),
            Self::TopCenter => Some((0.5, 0.0)),
            Self::TopRight => Some((1.0, 0.0)),
            Self::MiddleLeft => Some((0.0, 0.5)),
            Self::MiddleCenter => Some((0.5, 0.5)),
            Self::MiddleRight => Some((1.0, 0.5)),
            Self::BottomLeft => Some((0.0, 1.0)),
            Self::BottomCenter => Some((0.5, 1.0)),
            Self::BottomRight => Some((1.0, 1.0)),
        }
    }
}

/// Layout axis for stacking panels and scale widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// Errors raised by invalid widget construction or mutation
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// Widget id is empty
    #[error("Widget id must not be empty")]
    EmptyId,

    /// A widget with this id already exists in the tree
    #[error("Duplicate widget id '{0}'")]
    DuplicateId(String),

    /// Declared size is not positive
    #[error("Widget '{id}' has non-positive size {width}x{height}")]
    InvalidSize {
        /// Offending widget id
        id: String,
        /// Declared width
        width: f32,
        /// Declared height
        height: f32,
    },

    /// Scale range is inverted
    #[error("Widget '{id}' has inverted range [{min}, {max}]")]
    InvalidRange {
        /// Offending widget id
        id: String,
        /// Declared minimum
        min: f32,
        /// Declared maximum
        max: f32,
    },

    /// Operation requires a container or scale widget
    #[error("Widget '{0}' does not support this operation")]
    NotAContainer(String),
}

/// Base properties shared by every widget
///
/// `actual_x`/`actual_y` are always derived by the layout pass, never set
/// directly by application code; only `Manual`-anchored widgets carry
/// meaningful raw (x, y).
#[derive(Debug, Clone)]
pub struct WidgetBase {
    /// Unique identifier, checked at insertion time
    pub id: String,

    /// Raw position, meaningful only under `Anchor::Manual`
    pub x: f32,
    /// Raw position, meaningful only under `Anchor::Manual`
    pub y: f32,

    /// Resolved screen position, recomputed every layout pass
    pub actual_x: f32,
    /// Resolved screen position, recomputed every layout pass
    pub actual_y: f32,

    /// Declared width in pixels (derived from text metrics for labels)
    pub width: f32,
    /// Declared height in pixels
    pub height: f32,

    /// Whether this widget (and its subtree) draws and receives input
    pub visible: bool,

    /// Background color; alpha 0 suppresses the background quad
    pub background: Vec4,

    /// Anchor point within the container
    pub anchor: Anchor,
    /// Pixel offset from the anchor point
    pub offset_x: f32,
    /// Pixel offset from the anchor point
    pub offset_y: f32,
}

impl WidgetBase {
    /// Create a base with defaults and a validated id
    pub fn new(id: impl Into<String>) -> Result<Self, WidgetError> {
        let id = id.into();
        if id.is_empty() {
            return Err(WidgetError::EmptyId);
        }
        Ok(Self {
            id,
            x: 0.0,
            y: 0.0,
            actual_x: 0.0,
            actual_y: 0.0,
            width: 0.0,
            height: 0.0,
            visible: true,
            background: Vec4::new(0.0, 0.0, 0.0, 0.0),
            anchor: Anchor::TopLeft,
            offset_x: 0.0,
            offset_y: 0.0,
        })
    }

    /// The resolved bounding rectangle from the last layout pass
    pub fn rect(&self) -> Rect {
        Rect::new(self.actual_x, self.actual_y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id_rejected() {
        assert!(matches!(WidgetBase::new(""), Err(WidgetError::EmptyId)));
    }

    #[test]
    fn test_anchor_factors() {
        assert_eq!(Anchor::Manual.factors(), None);
        assert_eq!(Anchor::TopLeft.factors(), Some((0.0, 0.0)));
        assert_eq!(Anchor::MiddleCenter.factors(), Some((0.5, 0.5)));
        assert_eq!(Anchor::BottomRight.factors(), Some((1.0, 1.0)));
    }
}
