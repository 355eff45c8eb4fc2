//! Label widget - text display with optional procedural effects

use crate::foundation::math::Vec4;
use crate::text::TextEffect;

/// Text label payload
///
/// A label's declared size is derived from text metrics every layout pass,
/// so changing the text re-sizes it on the next resolve.
#[derive(Debug, Clone)]
pub struct Label {
    /// Text content to display
    pub text: String,

    /// Text color (RGBA), applied to the whole run unless per-character
    /// colors are set
    pub color: Vec4,

    /// Procedural effect applied when drawing
    pub effect: TextEffect,

    /// Optional per-character colors; applied only when their count equals
    /// the number of visible characters
    pub per_char_colors: Option<Vec<Vec4>>,
}

impl Label {
    /// Create a white label with no effect
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            effect: TextEffect::None,
            per_char_colors: None,
        }
    }
}
