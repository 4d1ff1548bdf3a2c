#![forbid(unsafe_code)]

//! Work tab configuration.
//!
//! Two groups of settings, loadable from TOML or JSON:
//!
//! ```toml
//! [feedback]
//! use_sounds = true
//! verbose_messages = false
//!
//! [layout]
//! icon_diameter = 30.0
//! short_spacing = 5.0
//! ```
//!
//! Feedback toggles only gate sounds and messages; they never change widget
//! state. Missing keys fall back to [`WorktabConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorktabConfig {
    pub feedback: FeedbackConfig,
    pub layout: LayoutConfig,
}

/// Effect toggles for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Play sounds on enable, disable and drop.
    pub use_sounds: bool,
    /// Emit a message for every individual change.
    pub verbose_messages: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            use_sounds: true,
            verbose_messages: false,
        }
    }
}

impl FeedbackConfig {
    /// Everything off.
    pub const QUIET: Self = Self {
        use_sounds: false,
        verbose_messages: false,
    };

    /// Everything on.
    pub const VERBOSE: Self = Self {
        use_sounds: true,
        verbose_messages: true,
    };
}

/// Slot metrics shared by surfaces and headers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Side length of one item icon.
    pub icon_diameter: f32,
    /// Gap between neighbouring slots.
    pub short_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            icon_diameter: 30.0,
            short_spacing: 5.0,
        }
    }
}

impl LayoutConfig {
    /// Distance between the centers of neighbouring slots.
    #[must_use]
    pub fn slot_stride(&self) -> f32 {
        self.icon_diameter + self.short_spacing
    }

    /// Offset of the first slot center from the area's left edge.
    #[must_use]
    pub fn leading_offset(&self) -> f32 {
        2.0 * self.short_spacing + self.icon_diameter / 2.0
    }
}

impl WorktabConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::TomlSer)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.layout.icon_diameter.is_finite() && self.layout.icon_diameter > 0.0) {
            errors.push(format!(
                "layout.icon_diameter must be > 0, got {}",
                self.layout.icon_diameter
            ));
        }
        if !(self.layout.short_spacing.is_finite() && self.layout.short_spacing >= 0.0) {
            errors.push(format!(
                "layout.short_spacing must be >= 0, got {}",
                self.layout.short_spacing
            ));
        }

        errors
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(target: "worktab.config", ?errors, "rejected configuration");
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// TOML serialization error.
    TomlSer(toml::ser::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::TomlSer(e) => write!(f, "TOML serialization error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::TomlSer(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
