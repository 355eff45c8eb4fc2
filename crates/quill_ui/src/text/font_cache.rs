//! Font instance cache
//!
//! Atlases are keyed by normalized absolute font path plus pixel size.
//! Loading is idempotent: repeated requests for the same (file, size) pair
//! return the cached instance without rebuilding.
//!
//! Runtime font switches never crash the frame loop: a switch to a font
//! that cannot be loaded falls back to the previously active font, then to
//! the first cached font, then to "no active font" (text silently skipped).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::font_atlas::{AtlasSettings, FontAtlas, FontError, FontResult};

/// Cache key: normalized path + size bits
///
/// Sizes are keyed by their bit pattern so fractional pixel sizes hash
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
    path: PathBuf,
    size_bits: u32,
}

impl FontKey {
    fn new(path: PathBuf, size_px: f32) -> Self {
        Self {
            path,
            size_bits: size_px.to_bits(),
        }
    }
}

/// Cache of font atlases with one active font for text drawing
pub struct FontCache {
    settings: AtlasSettings,
    fonts: HashMap<FontKey, FontAtlas>,
    /// Insertion order, for the first-available fallback
    order: Vec<FontKey>,
    active: Option<FontKey>,
}

impl FontCache {
    /// Create an empty cache using the given atlas parameters
    pub fn new(settings: AtlasSettings) -> Self {
        Self {
            settings,
            fonts: HashMap::new(),
            order: Vec::new(),
            active: None,
        }
    }

    /// Load a font atlas, or return the cached one for this (file, size)
    ///
    /// The path is canonicalized so different spellings of the same file
    /// share one atlas. A missing or unparsable font is an error; callers
    /// doing first-time setup should treat it as fatal.
    ///
    /// The first successfully loaded font becomes the active font.
    pub fn load(&mut self, path: &Path, size_px: f32) -> FontResult<&FontAtlas> {
        let canonical = path.canonicalize().map_err(|source| FontError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let key = FontKey::new(canonical.clone(), size_px);

        if !self.fonts.contains_key(&key) {
            let atlas = FontAtlas::from_file(&canonical, size_px, self.settings)?;
            log::info!("Cached font atlas for '{}' at {size_px}px", canonical.display());
            self.fonts.insert(key.clone(), atlas);
            self.order.push(key.clone());
            if self.active.is_none() {
                self.active = Some(key.clone());
            }
        }

        Ok(&self.fonts[&key])
    }

    /// Insert a prebuilt atlas under a symbolic name
    ///
    /// For preloaded font data and headless use; the name is not
    /// canonicalized. Idempotent like [`Self::load`]: an atlas already
    /// cached under this (name, size) is kept and the new one dropped. The
    /// first inserted atlas becomes active if none is.
    pub fn insert(&mut self, name: impl Into<PathBuf>, size_px: f32, atlas: FontAtlas) {
        let key = FontKey::new(name.into(), size_px);
        if !self.fonts.contains_key(&key) {
            self.fonts.insert(key.clone(), atlas);
            self.order.push(key.clone());
        }
        if self.active.is_none() {
            self.active = Some(key);
        }
    }

    /// Switch the active font, loading it on demand
    ///
    /// Never fails: if the font cannot be loaded the previous active font
    /// stays in effect; if there is none, the first cached font is used; if
    /// the cache is empty no font is active and text is not drawn.
    pub fn set_active(&mut self, path: &Path, size_px: f32) {
        match self.load(path, size_px) {
            Ok(_) => {
                // load() canonicalized and cached the font
                if let Ok(canonical) = path.canonicalize() {
                    self.active = Some(FontKey::new(canonical, size_px));
                }
            }
            Err(e) => {
                log::warn!("Font switch to '{}' failed ({e}), keeping fallback", path.display());
                if self.active.is_none() {
                    self.active = self.order.first().cloned();
                }
            }
        }
    }

    /// The active atlas, if any font is loaded
    pub fn active(&self) -> Option<&FontAtlas> {
        self.active.as_ref().and_then(|key| self.fonts.get(key))
    }

    /// Number of cached atlases
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether the cache holds no atlases
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Iterate over cached atlases mutably (texture upload)
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FontAtlas> {
        self.fonts.values_mut()
    }

    /// Remove every cached atlas, returning them so the caller can release
    /// their GPU textures
    pub fn clear(&mut self) -> Vec<FontAtlas> {
        self.active = None;
        self.order.clear();
        self.fonts.drain().map(|(_, atlas)| atlas).collect()
    }
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("fonts", &self.fonts.len())
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::font_atlas::GlyphMetrics;
    use std::collections::HashMap as StdHashMap;

    fn stub_atlas(advance: f32) -> FontAtlas {
        let mut glyphs = StdHashMap::new();
        glyphs.insert('x', GlyphMetrics::advance_only(advance));
        FontAtlas::from_metrics(glyphs, 16.0, 20.0)
    }

    #[test]
    fn test_first_insert_becomes_active() {
        let mut cache = FontCache::new(AtlasSettings::default());
        assert!(cache.active().is_none());

        cache.insert("alpha.ttf", 16.0, stub_atlas(5.0));
        cache.insert("beta.ttf", 16.0, stub_atlas(9.0));

        let active = cache.active().expect("active font");
        assert_eq!(active.glyph('x').unwrap().advance, 5.0);
    }

    #[test]
    fn test_missing_file_is_error_but_active_survives() {
        let mut cache = FontCache::new(AtlasSettings::default());
        cache.insert("alpha.ttf", 16.0, stub_atlas(5.0));

        assert!(cache
            .load(Path::new("/nonexistent/font.ttf"), 16.0)
            .is_err());

        // Runtime switch to a bad font keeps the previous active font
        cache.set_active(Path::new("/nonexistent/font.ttf"), 16.0);
        assert_eq!(cache.active().unwrap().glyph('x').unwrap().advance, 5.0);
    }

    #[test]
    fn test_insert_same_key_is_idempotent() {
        let mut cache = FontCache::new(AtlasSettings::default());
        cache.insert("alpha.ttf", 16.0, stub_atlas(5.0));
        cache.insert("alpha.ttf", 16.0, stub_atlas(7.0));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.order.len(), 1);
        // The first atlas is kept, matching load()
        assert_eq!(cache.active().unwrap().glyph('x').unwrap().advance, 5.0);
    }

    #[test]
    fn test_clear_drops_active() {
        let mut cache = FontCache::new(AtlasSettings::default());
        cache.insert("alpha.ttf", 16.0, stub_atlas(5.0));

        let drained = cache.clear();
        assert_eq!(drained.len(), 1);
        assert!(cache.active().is_none());
        assert!(cache.is_empty());
    }
}
