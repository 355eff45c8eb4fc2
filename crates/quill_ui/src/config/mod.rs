//! Configuration system

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Toolkit configuration
///
/// Controls the default font and glyph atlas parameters used when a
/// [`crate::render::RenderContext`] is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Path to the default TrueType/OpenType font file
    pub font_path: String,

    /// Default font size in pixels
    pub font_size_px: f32,

    /// Atlas texture side length in pixels (square texture)
    pub atlas_size: u32,

    /// Padding between packed glyphs in pixels
    pub atlas_padding: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_path: "resources/fonts/default.ttf".to_string(),
            font_size_px: 24.0,
            atlas_size: 1024,
            atlas_padding: 2,
        }
    }
}

impl Config for UiConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.atlas_size, 1024);
        assert_eq!(config.atlas_padding, 2);
        assert!(config.font_size_px > 0.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = UiConfig {
            font_path: "fonts/mono.ttf".to_string(),
            font_size_px: 18.0,
            atlas_size: 512,
            atlas_padding: 1,
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: UiConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.font_path, config.font_path);
        assert_eq!(parsed.atlas_size, 512);
    }

    #[test]
    fn test_file_round_trip_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let config = UiConfig {
            font_path: "fonts/mono.ttf".to_string(),
            font_size_px: 18.0,
            atlas_size: 512,
            atlas_padding: 1,
        };

        for name in ["ui.toml", "ui.ron"] {
            let path = dir.path().join(name);
            let path = path.to_str().unwrap();

            config.save_to_file(path).unwrap();
            let loaded = UiConfig::load_from_file(path).unwrap();
            assert_eq!(loaded.font_path, config.font_path);
            assert_eq!(loaded.atlas_size, 512);
            assert_eq!(loaded.atlas_padding, 1);
        }
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui.json");
        let path = path.to_str().unwrap();

        let config = UiConfig::default();
        assert!(matches!(
            config.save_to_file(path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            UiConfig::load_from_file(path),
            Err(ConfigError::Io(_) | ConfigError::UnsupportedFormat(_))
        ));
    }
}
