//! Text field widget - single-line editable text

use crate::foundation::math::Vec4;

/// Text field payload
///
/// Gains focus on pointer-down; the host forwards key input to the focused
/// field through the manager's edit helpers.
#[derive(Debug, Clone)]
pub struct TextField {
    /// Current content
    pub text: String,

    /// Whether this field receives key input
    pub focused: bool,

    /// Content text color
    pub text_color: Vec4,

    /// Caret color while focused
    pub caret_color: Vec4,

    /// Inner horizontal padding in pixels
    pub padding: f32,
}

impl TextField {
    /// Create an empty unfocused field
    pub fn new() -> Self {
        Self {
            text: String::new(),
            focused: false,
            text_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            caret_color: Vec4::new(0.9, 0.9, 0.9, 1.0),
            padding: 4.0,
        }
    }

    /// Append a character, returning whether the content changed
    pub fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Remove the last character, returning whether the content changed
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_reports_changes() {
        let mut field = TextField::new();
        assert!(field.push_char('a'));
        assert!(!field.push_char('\u{8}'));
        assert!(field.backspace());
        assert!(!field.backspace());
        assert!(field.text.is_empty());
    }
}
