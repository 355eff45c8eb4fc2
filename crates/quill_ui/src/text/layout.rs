//! Text layout engine
//!
//! Converts text strings into positioned glyph quads for rendering and
//! provides the measurement contract used by widget sizing: a string's
//! width is the sum of its characters' advances, its height the font's
//! line height.

use crate::foundation::math::{Rect, Vec2, Vec4};
use crate::render::commands::TextColorMode;
use crate::render::vertex::{textured_quad_vertices, UiVertex};

use super::effect::TextEffect;
use super::font_atlas::FontAtlas;

/// Width of `text` in pixels: the sum of per-character advances
///
/// Characters outside the rasterized set use the missing-glyph metric so
/// layout stays consistent.
pub fn measure_width(atlas: &FontAtlas, text: &str) -> f32 {
    text.chars()
        .map(|ch| {
            atlas
                .glyph(ch)
                .or_else(|| atlas.missing_glyph())
                .map_or(0.0, |g| g.advance)
        })
        .sum()
}

/// Lay out a text run as glyph quads
///
/// The pen starts at `origin` (top-left of the line box) and advances by
/// each character's advance, independent of effect displacement. Zero-area
/// characters advance the pen without emitting a quad. For `Typewriter`,
/// characters past the reveal point contribute nothing, not even advance.
///
/// If `per_char_colors` is supplied and its length equals the number of
/// visible characters, each quad gets its character's color; otherwise
/// `color` applies to the whole run.
pub fn layout_text(
    atlas: &FontAtlas,
    text: &str,
    origin: Vec2,
    effect: &TextEffect,
    elapsed: f32,
    color: Vec4,
    per_char_colors: Option<&[Vec4]>,
) -> (Vec<UiVertex>, TextColorMode) {
    let chars: Vec<char> = text.chars().collect();
    let visible = effect.visible_chars(chars.len(), elapsed);

    let per_char = per_char_colors.filter(|colors| colors.len() == visible);

    let mut vertices = Vec::with_capacity(visible * 6);
    let mut quad_colors = if per_char.is_some() {
        Vec::with_capacity(visible)
    } else {
        Vec::new()
    };

    let mut pen_x = origin.x;

    for (index, &ch) in chars.iter().take(visible).enumerate() {
        let Some(glyph) = atlas.glyph(ch).or_else(|| atlas.missing_glyph()) else {
            continue;
        };

        if glyph.has_area() {
            let displacement = effect.displacement(index, elapsed);
            let rect = Rect::new(
                pen_x + glyph.bearing.x + displacement.x,
                origin.y + glyph.bearing.y + displacement.y,
                glyph.size.x,
                glyph.size.y,
            );
            vertices.extend_from_slice(&textured_quad_vertices(
                rect,
                [glyph.uv_min.x, glyph.uv_min.y],
                [glyph.uv_max.x, glyph.uv_max.y],
            ));

            if let Some(colors) = per_char {
                quad_colors.push(colors[index]);
            }
        }

        pen_x += glyph.advance;
    }

    let colors = if per_char.is_some() {
        TextColorMode::PerQuad(quad_colors)
    } else {
        TextColorMode::Uniform(color)
    };

    (vertices, colors)
}
