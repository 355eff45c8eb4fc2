//! Text rendering: glyph atlas construction, font caching, measurement,
//! layout into textured quads, and procedural text effects.

pub mod effect;
pub mod font_atlas;
pub mod font_cache;
pub mod layout;

pub use effect::TextEffect;
pub use font_atlas::{AtlasSettings, FontAtlas, FontError, FontResult, GlyphMetrics};
pub use font_cache::FontCache;
pub use layout::{layout_text, measure_width};
