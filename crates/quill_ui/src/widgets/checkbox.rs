//! Checkbox widget - toggles on click

use crate::foundation::math::Vec4;

/// Checkbox payload
#[derive(Debug, Clone)]
pub struct Checkbox {
    /// Label text drawn to the right of the box
    pub text: String,

    /// Current checked state
    pub checked: bool,

    /// Side length of the box in pixels
    pub box_size: f32,

    /// Gap between box and label in pixels
    pub gap: f32,

    /// Box outline/background color
    pub box_color: Vec4,

    /// Mark color when checked
    pub mark_color: Vec4,

    /// Label text color
    pub text_color: Vec4,
}

impl Checkbox {
    /// Create an unchecked checkbox with default colors
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
            box_size: 16.0,
            gap: 6.0,
            box_color: Vec4::new(0.25, 0.25, 0.25, 1.0),
            mark_color: Vec4::new(0.9, 0.9, 0.9, 1.0),
            text_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}
