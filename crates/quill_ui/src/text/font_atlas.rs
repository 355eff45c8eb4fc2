//! Glyph atlas construction
//!
//! Rasterizes a fixed printable character set for one (font, size) pair into
//! a single packed RGBA texture using the `fontdue` library, producing
//! per-character metrics for layout.
//!
//! Packing is shelf-based: glyphs fill a row left to right, wrapping to a
//! new row when the current one is full. A glyph that cannot fit anywhere
//! degrades to an advance-only placeholder so text layout stays consistent.

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings};
use nalgebra::Vector2;

use crate::foundation::math::Vec2;

/// First character of the rasterized set (space)
pub const CHARSET_START: u32 = 32;
/// Last character of the rasterized set (tilde)
pub const CHARSET_END: u32 = 126;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to read a font file from disk
    #[error("Failed to read font file '{path}': {source}")]
    Io {
        /// Path that failed to load
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse font data
    #[error("Failed to load font: {0}")]
    LoadError(String),

    /// Failed to create or export the atlas image
    #[error("Failed to create atlas texture: {0}")]
    AtlasCreationError(String),
}

/// Metrics for a single character in the atlas
///
/// A character with zero rendered area (space, or a glyph that did not fit
/// in the atlas) has zeroed UV and size fields and only a nonzero advance.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMetrics {
    /// UV coordinates in the atlas (normalized 0.0-1.0) - top-left corner
    pub uv_min: Vec2,
    /// UV coordinates in the atlas (normalized 0.0-1.0) - bottom-right corner
    pub uv_max: Vec2,

    /// Glyph size in pixels
    pub size: Vec2,

    /// Offset from the pen position (top-left of the line box) to the
    /// glyph's visible top-left corner
    pub bearing: Vec2,

    /// Horizontal pen movement for the next character
    pub advance: f32,
}

impl GlyphMetrics {
    /// An advance-only placeholder with no rendered area
    pub fn advance_only(advance: f32) -> Self {
        Self {
            uv_min: Vector2::zeros(),
            uv_max: Vector2::zeros(),
            size: Vector2::zeros(),
            bearing: Vector2::zeros(),
            advance,
        }
    }

    /// Whether this glyph emits geometry when drawn
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Atlas texture parameters
#[derive(Debug, Clone, Copy)]
pub struct AtlasSettings {
    /// Atlas width in pixels
    pub width: u32,
    /// Atlas height in pixels
    pub height: u32,
    /// Padding between packed glyphs in pixels
    pub padding: u32,
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            padding: 2,
        }
    }
}

/// Shelf packer over a fixed-size atlas
///
/// Maintains a cursor and the tallest glyph seen in the current row.
/// Placement is deterministic in insertion order.
#[derive(Debug)]
pub(crate) struct ShelfPacker {
    width: u32,
    height: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
}

impl ShelfPacker {
    pub(crate) fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
            cursor_x: 0,
            cursor_y: 0,
            row_height: 0,
        }
    }

    /// Place a rectangle, returning its top-left corner, or `None` if it
    /// cannot fit anywhere in the remaining atlas space.
    ///
    /// A failed placement leaves the cursor untouched, so the remainder of
    /// the current row stays usable for smaller rectangles.
    pub(crate) fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w + self.padding > self.width {
            return None;
        }

        // Wrap to a new row when the current one is full
        let mut x = self.cursor_x;
        let mut y = self.cursor_y;
        let mut row_height = self.row_height;
        if x + w + self.padding > self.width {
            x = 0;
            y += row_height + self.padding;
            row_height = 0;
        }

        if y + h + self.padding > self.height {
            return None;
        }

        self.cursor_x = x + w + self.padding;
        self.cursor_y = y;
        self.row_height = row_height.max(h);
        Some((x, y))
    }
}

/// A packed font atlas for one (font file, size) pair
///
/// Holds the CPU-side RGBA raster (white RGB, glyph coverage in alpha), the
/// per-character metrics table, and - once uploaded through a backend - the
/// GPU texture handle. The texture is shared read-only by every widget that
/// renders with this font.
pub struct FontAtlas {
    glyphs: HashMap<char, GlyphMetrics>,
    size_px: f32,
    line_height: f32,
    ascent: f32,
    atlas_width: u32,
    atlas_height: u32,
    pixels: Vec<u8>,
    texture: Option<crate::render::TextureHandle>,
}

impl FontAtlas {
    /// Build an atlas from raw TrueType/OpenType font data
    ///
    /// Rasterizes all printable ASCII characters (32-126) at `size_px` and
    /// shelf-packs them into one RGBA texture. Glyphs that do not fit are
    /// recorded advance-only and logged; they never fail the build.
    pub fn build(font_data: &[u8], size_px: f32, settings: AtlasSettings) -> FontResult<Self> {
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::LoadError(format!("fontdue error: {e}")))?;

        let glyph_count = (CHARSET_END - CHARSET_START + 1) as usize;
        log::info!("Rasterizing {glyph_count} glyphs at {size_px}px");

        let mut rasterized = Vec::with_capacity(glyph_count);
        let mut max_glyph_height = 0usize;

        for code_point in CHARSET_START..=CHARSET_END {
            let ch = char::from_u32(code_point)
                .ok_or_else(|| FontError::LoadError(format!("invalid code point {code_point}")))?;
            let (metrics, bitmap) = font.rasterize(ch, size_px);
            max_glyph_height = max_glyph_height.max(metrics.height);
            rasterized.push((ch, metrics, bitmap));
        }

        let line_metrics = font.horizontal_line_metrics(size_px);
        #[allow(clippy::cast_precision_loss)]
        let (line_height, ascent) = match line_metrics {
            Some(m) => (m.new_line_size, m.ascent),
            // Some fonts carry no horizontal metrics; fall back to the
            // tallest rasterized glyph
            None => (max_glyph_height as f32, max_glyph_height as f32),
        };

        let mut packer = ShelfPacker::new(settings.width, settings.height, settings.padding);
        // usize arithmetic: width * height * 4 can exceed u32 for large
        // configured atlases
        let mut pixels = vec![0u8; settings.width as usize * settings.height as usize * 4];
        let mut glyphs = HashMap::with_capacity(glyph_count);
        let mut skipped = 0usize;

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        for (ch, metrics, bitmap) in rasterized {
            if metrics.width == 0 || metrics.height == 0 {
                glyphs.insert(ch, GlyphMetrics::advance_only(metrics.advance_width));
                continue;
            }

            let Some((x, y)) = packer.place(metrics.width as u32, metrics.height as u32) else {
                log::warn!("Glyph '{ch}' does not fit in {}x{} atlas, degrading to advance-only",
                    settings.width, settings.height);
                skipped += 1;
                glyphs.insert(ch, GlyphMetrics::advance_only(metrics.advance_width));
                continue;
            };

            // Copy coverage into the alpha channel; RGB stays white so the
            // shader can tint by a color uniform
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    let dst_x = (x + col as u32) as usize;
                    let dst_y = (y + row as u32) as usize;
                    let dst = (dst_y * settings.width as usize + dst_x) * 4;
                    pixels[dst] = 255;
                    pixels[dst + 1] = 255;
                    pixels[dst + 2] = 255;
                    pixels[dst + 3] = coverage;
                }
            }

            let atlas_w = settings.width as f32;
            let atlas_h = settings.height as f32;
            let glyph_w = metrics.width as f32;
            let glyph_h = metrics.height as f32;

            glyphs.insert(
                ch,
                GlyphMetrics {
                    uv_min: Vector2::new(x as f32 / atlas_w, y as f32 / atlas_h),
                    uv_max: Vector2::new(
                        (x as f32 + glyph_w) / atlas_w,
                        (y as f32 + glyph_h) / atlas_h,
                    ),
                    size: Vector2::new(glyph_w, glyph_h),
                    // Pen sits at the top-left of the line box; the glyph's
                    // visible top is ascent minus its height above baseline
                    bearing: Vector2::new(
                        metrics.xmin as f32,
                        ascent - (metrics.ymin as f32 + glyph_h),
                    ),
                    advance: metrics.advance_width,
                },
            );
        }

        log::info!(
            "Atlas packed: {}x{}, {} glyphs cached, {} skipped",
            settings.width,
            settings.height,
            glyphs.len(),
            skipped
        );

        Ok(Self {
            glyphs,
            size_px,
            line_height,
            ascent,
            atlas_width: settings.width,
            atlas_height: settings.height,
            pixels,
            texture: None,
        })
    }

    /// Build an atlas from a font file on disk
    pub fn from_file(path: &Path, size_px: f32, settings: AtlasSettings) -> FontResult<Self> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::build(&data, size_px, settings)
    }

    /// Construct an atlas from precomputed metrics with no raster data
    ///
    /// Useful for headless layout and measurement where no GPU or font file
    /// is available.
    pub fn from_metrics(glyphs: HashMap<char, GlyphMetrics>, size_px: f32, line_height: f32) -> Self {
        Self {
            glyphs,
            size_px,
            line_height,
            ascent: line_height,
            atlas_width: 0,
            atlas_height: 0,
            pixels: Vec::new(),
            texture: None,
        }
    }

    /// Get metrics for a character, if it is part of the rasterized set
    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        self.glyphs.get(&ch)
    }

    /// Metrics used for characters outside the rasterized set
    ///
    /// Falls back to the space glyph so unmapped characters still advance
    /// the pen.
    pub fn missing_glyph(&self) -> Option<&GlyphMetrics> {
        self.glyphs.get(&' ')
    }

    /// Font size in pixels
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Distance between baselines
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Distance from the top of the line box to the baseline
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Atlas dimensions in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        (self.atlas_width, self.atlas_height)
    }

    /// CPU-side RGBA raster, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// GPU texture handle, once uploaded
    pub fn texture(&self) -> Option<crate::render::TextureHandle> {
        self.texture
    }

    /// Record the GPU texture handle after upload
    pub fn set_texture(&mut self, handle: crate::render::TextureHandle) {
        self.texture = Some(handle);
    }

    /// Save the atlas raster to a PNG file for debugging
    pub fn debug_save_png(&self, path: &Path) -> FontResult<()> {
        let image = image::RgbaImage::from_raw(self.atlas_width, self.atlas_height, self.pixels.clone())
            .ok_or_else(|| FontError::AtlasCreationError("raster buffer size mismatch".to_string()))?;
        image
            .save(path)
            .map_err(|e| FontError::AtlasCreationError(e.to_string()))
    }
}

impl std::fmt::Debug for FontAtlas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAtlas")
            .field("size_px", &self.size_px)
            .field("glyphs", &self.glyphs.len())
            .field("atlas", &(self.atlas_width, self.atlas_height))
            .field("texture", &self.texture)
            .finish()
    }
}
