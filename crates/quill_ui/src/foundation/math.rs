//! Math utilities and types
//!
//! Provides fundamental math types for 2D screen-space UI work.

pub use nalgebra::{Matrix4, Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (colors, RGBA)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Axis-aligned rectangle in screen pixels, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge in pixels
    pub x: f32,
    /// Top edge in pixels
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Build an orthographic projection with the origin at the top-left corner
/// of the screen, matching the widget coordinate space.
///
/// Must be recomputed whenever the host window resizes.
pub fn ortho_top_left(screen_width: f32, screen_height: f32) -> Mat4 {
    Mat4::new_orthographic(0.0, screen_width, screen_height, 0.0, -1.0, 1.0)
}
