//! UI render commands

use crate::foundation::math::Vec4;

use super::backend::TextureHandle;
use super::vertex::{QuadVertex, UiVertex};

/// Color mode for a text draw
#[derive(Debug, Clone, PartialEq)]
pub enum TextColorMode {
    /// One flat color applied to every glyph in the run
    Uniform(Vec4),
    /// One color per emitted glyph quad, in quad order
    PerQuad(Vec<Vec4>),
}

/// UI render command for a single element
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Render a solid color quad (position-only vertices, 8 bytes per vertex)
    Quad {
        /// Quad vertex data (two triangles)
        vertices: [QuadVertex; 6],
        /// Flat color
        color: Vec4,
    },
    /// Render a text run against a glyph atlas (position + UV vertices)
    Text {
        /// Atlas texture to sample, bound to unit 0
        atlas: TextureHandle,
        /// Glyph quad vertex data, 6 vertices per visible glyph
        vertices: Vec<UiVertex>,
        /// Uniform or per-glyph colors
        colors: TextColorMode,
    },
}
