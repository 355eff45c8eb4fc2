//! Render context
//!
//! Owns the shared rendering state - font cache, active font, projection
//! matrix - with an explicit construction/teardown lifecycle. One context is
//! created at startup and threaded through resolve/draw/dispose calls;
//! there is no process-wide global state.

use std::path::Path;

use crate::config::UiConfig;
use crate::foundation::math::{ortho_top_left, Mat4};
use crate::text::{AtlasSettings, FontCache, FontResult};

use super::backend::{BackendResult, RenderBackend};

/// Shared rendering state for the UI toolkit
pub struct RenderContext {
    fonts: FontCache,
    screen_width: f32,
    screen_height: f32,
    projection: Mat4,
}

impl RenderContext {
    /// Create a context and load the default font from `config`
    ///
    /// A missing or unparsable default font is a fatal initialization
    /// error; rendering cannot proceed without it.
    pub fn new(config: &UiConfig) -> FontResult<Self> {
        let settings = AtlasSettings {
            width: config.atlas_size,
            height: config.atlas_size,
            padding: config.atlas_padding,
        };
        let mut fonts = FontCache::new(settings);
        fonts.load(Path::new(&config.font_path), config.font_size_px)?;

        Ok(Self::with_fonts(fonts, 800.0, 600.0))
    }

    /// Create a context around an existing font cache
    ///
    /// Also the headless entry point: a cache populated via
    /// [`FontCache::insert`] needs no font files or GPU.
    pub fn with_fonts(fonts: FontCache, screen_width: f32, screen_height: f32) -> Self {
        Self {
            fonts,
            screen_width,
            screen_height,
            projection: ortho_top_left(screen_width, screen_height),
        }
    }

    /// Handle a host resize: recompute the projection matrix
    ///
    /// The widget tree must be re-resolved afterwards; the manager does
    /// this on its next frame.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
        self.projection = ortho_top_left(width, height);
        log::debug!("Projection recomputed for {width}x{height}");
    }

    /// Current screen size in pixels
    pub fn screen_size(&self) -> (f32, f32) {
        (self.screen_width, self.screen_height)
    }

    /// Orthographic projection, top-left origin
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Font cache (shared, read-only during rendering)
    pub fn fonts(&self) -> &FontCache {
        &self.fonts
    }

    /// Font cache for load/unload calls
    ///
    /// Atlas mutation must never overlap an in-flight draw; in the
    /// single-threaded frame model this means calling between frames.
    pub fn fonts_mut(&mut self) -> &mut FontCache {
        &mut self.fonts
    }

    /// Upload any atlases that do not yet have a GPU texture
    ///
    /// Idempotent; called by the manager before drawing each frame.
    pub fn prepare_atlases(&mut self, backend: &mut dyn RenderBackend) -> BackendResult<()> {
        for atlas in self.fonts.iter_mut() {
            if atlas.texture().is_none() {
                let (width, height) = atlas.dimensions();
                if width == 0 || height == 0 {
                    // Metrics-only atlas (headless); nothing to upload
                    continue;
                }
                let handle = backend.upload_atlas(width, height, atlas.pixels())?;
                atlas.set_texture(handle);
                log::info!("Uploaded font atlas {width}x{height} as {handle:?}");
            }
        }
        Ok(())
    }

    /// Tear down GPU resources and empty the font cache
    pub fn dispose(&mut self, backend: &mut dyn RenderBackend) -> BackendResult<()> {
        for atlas in self.fonts.clear() {
            if let Some(handle) = atlas.texture() {
                backend.destroy_texture(handle)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("screen", &(self.screen_width, self.screen_height))
            .field("fonts", &self.fonts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    #[test]
    fn test_missing_default_font_is_fatal() {
        let config = UiConfig {
            font_path: "/nonexistent/font.ttf".to_string(),
            ..UiConfig::default()
        };
        assert!(RenderContext::new(&config).is_err());
    }

    #[test]
    fn test_resize_recomputes_projection() {
        let mut context =
            RenderContext::with_fonts(FontCache::new(crate::text::AtlasSettings::default()), 800.0, 600.0);
        let before = *context.projection();

        context.resize(1024.0, 768.0);
        assert_ne!(*context.projection(), before);
        assert_eq!(context.screen_size(), (1024.0, 768.0));
    }
}
