//! Render Backend Trait
//!
//! Defines the interface between the UI toolkit and rendering backends.
//! Keeps the toolkit independent of Vulkan/DirectX/OpenGL specifics.

use crate::foundation::math::{Mat4, Vec4};

use super::commands::TextColorMode;
use super::vertex::{QuadVertex, UiVertex};

/// Handle to a texture uploaded to the GPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Backend error type
pub type BackendResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Backend-agnostic UI rendering interface
///
/// Texture sampling contract for atlases uploaded through
/// [`RenderBackend::upload_atlas`]: trilinear minification with mipmaps,
/// linear magnification, clamp-to-edge wrapping.
pub trait RenderBackend {
    /// Begin UI rendering pass
    ///
    /// The projection is orthographic with a top-left origin, matching the
    /// resolved widget coordinate space; it changes only on resize.
    fn begin_ui_pass(&mut self, projection: &Mat4) -> BackendResult<()>;

    /// Upload an RGBA8 glyph atlas, returning its GPU handle
    fn upload_atlas(&mut self, width: u32, height: u32, rgba: &[u8]) -> BackendResult<TextureHandle>;

    /// Destroy a previously uploaded atlas texture
    ///
    /// Never called while a frame's draws are in flight; atlas mutation is
    /// serialized against rendering by the single-threaded frame model.
    fn destroy_texture(&mut self, handle: TextureHandle) -> BackendResult<()>;

    /// Render a batch of solid color quads
    ///
    /// # Arguments
    /// * `vertices` - All quad vertices in a single buffer
    /// * `draws` - Draw ranges: (start_vertex, vertex_count, color)
    fn draw_quad_batch(
        &mut self,
        vertices: &[QuadVertex],
        draws: &[(usize, usize, Vec4)],
    ) -> BackendResult<()>;

    /// Render a batch of glyph quads sampled from one atlas
    ///
    /// # Arguments
    /// * `atlas` - Atlas texture, bound to sampler unit 0
    /// * `vertices` - All glyph vertices in a single buffer
    /// * `draws` - Draw ranges: (start_vertex, vertex_count, colors)
    fn draw_text_batch(
        &mut self,
        atlas: TextureHandle,
        vertices: &[UiVertex],
        draws: &[(usize, usize, TextColorMode)],
    ) -> BackendResult<()>;

    /// End UI rendering pass
    fn end_ui_pass(&mut self) -> BackendResult<()>;
}
