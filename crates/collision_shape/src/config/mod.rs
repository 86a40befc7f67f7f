//! Configuration system
//!
//! Settings are plain serde structs that can be loaded from and saved to
//! TOML or RON files. The only settings the shape owners read are the
//! debug-collision visualization settings.

pub use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
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

/// Ambient debug-visualization settings consulted when collision shapes draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugCollisionSettings {
    /// Running inside an editor; shapes are always drawn
    pub editor_hint: bool,

    /// Collision shapes are drawn at runtime
    pub debug_collisions: bool,

    /// Color used to draw collision shapes
    pub collisions_color: Color,
}

impl Default for DebugCollisionSettings {
    fn default() -> Self {
        Self {
            editor_hint: false,
            debug_collisions: false,
            collisions_color: Color::rgba(0.0, 0.6, 0.7, 0.5),
        }
    }
}

impl DebugCollisionSettings {
    /// Settings with runtime collision drawing turned on
    pub fn debugging() -> Self {
        Self {
            debug_collisions: true,
            ..Default::default()
        }
    }

    /// Builder-style color override
    pub fn with_color(mut self, color: Color) -> Self {
        self.collisions_color = color;
        self
    }

    /// True when collision shapes should produce debug draw commands
    pub fn is_active(&self) -> bool {
        self.editor_hint || self.debug_collisions
    }
}

impl Config for DebugCollisionSettings {}
