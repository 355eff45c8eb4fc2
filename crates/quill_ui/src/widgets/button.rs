//! Button widget - interactive clickable buttons

use crate::foundation::math::Vec4;

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal resting state
    Normal,
    /// Button was pressed this frame
    Pressed,
    /// Button is disabled (non-interactive)
    Disabled,
}

/// Button payload
///
/// The pressed state is transient: it is set when a pointer-down lands on
/// the button and cleared by the manager at the start of the next frame.
#[derive(Debug, Clone)]
pub struct Button {
    /// Button label text
    pub text: String,

    /// Current button state
    pub state: ButtonState,

    /// Face color in the normal state
    pub normal_color: Vec4,
    /// Face color while pressed
    pub pressed_color: Vec4,
    /// Face color while disabled
    pub disabled_color: Vec4,

    /// Label text color
    pub text_color: Vec4,

    /// Whether the button reacts to input
    pub enabled: bool,
}

impl Button {
    /// Create an enabled button with default colors
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: ButtonState::Normal,
            normal_color: Vec4::new(0.3, 0.3, 0.3, 0.9),
            pressed_color: Vec4::new(0.5, 0.5, 0.6, 1.0),
            disabled_color: Vec4::new(0.2, 0.2, 0.2, 0.5),
            text_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            enabled: true,
        }
    }

    /// Get the face color for the current state
    pub fn current_color(&self) -> Vec4 {
        if !self.enabled {
            return self.disabled_color;
        }
        match self.state {
            ButtonState::Normal => self.normal_color,
            ButtonState::Pressed => self.pressed_color,
            ButtonState::Disabled => self.disabled_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_overrides_state_color() {
        let mut button = Button::new("OK");
        button.enabled = false;
        button.state = ButtonState::Pressed;
        assert_eq!(button.current_color(), button.disabled_color);
    }
}
