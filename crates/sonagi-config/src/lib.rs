//! Configuration file handling for the sonagi digital rain.
//!
//! An optional `sonagi.toml` in the platform config directory overrides the
//! built-in rain parameters:
//!
//! ```toml
//! color = "#00ff41"         # base matrix color
//! font_size = 16            # logical pixels per glyph cell
//! tick_ms = 33              # frame period
//! fade = 0.05               # trail decay per frame
//! reset_threshold = 0.975   # reset gate once a column is past the bottom
//! ```
//!
//! Every field defaults to the built-in rain constants, so a missing
//! file, an empty file, and a partial file all behave sensibly. Unknown
//! keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use sonagi_core::{
    DEFAULT_FADE, DEFAULT_FONT_SIZE, DEFAULT_RESET_THRESHOLD, DEFAULT_TICK, RainParams,
    parse_hex_color,
};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE: &str = "sonagi.toml";

/// User-tunable settings for the rain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base matrix color as a hex string. The `SONAGI_MATRIX` environment
    /// variable still wins each frame.
    pub color: Option<String>,
    /// Glyph cell size in logical pixels.
    pub font_size: u16,
    /// Frame period in milliseconds.
    pub tick_ms: u64,
    /// Fraction of trail luminance removed per frame.
    pub fade: f64,
    /// Unit draws above this restart a column that has left the surface.
    pub reset_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: None,
            font_size: DEFAULT_FONT_SIZE,
            tick_ms: DEFAULT_TICK.as_millis() as u64,
            fade: DEFAULT_FADE,
            reset_threshold: DEFAULT_RESET_THRESHOLD,
        }
    }
}

impl Config {
    /// Load the config from the platform location.
    ///
    /// A missing file (or a platform with no config directory) yields the
    /// defaults; a file that does not parse or validate is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Platform config file location, e.g. `~/.config/sonagi/sonagi.toml`
    /// on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sonagi").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the config from a specific file, defaulting when it is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Parse)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Check every field is within its accepted range.
    ///
    /// Returns human-readable violations; an empty list means the config is
    /// valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.font_size == 0 {
            errors.push("font_size must be at least 1".into());
        }
        if self.tick_ms == 0 {
            errors.push("tick_ms must be at least 1".into());
        }
        if !(self.fade > 0.0 && self.fade <= 1.0) {
            errors.push(format!("fade must be in (0, 1], got {}", self.fade));
        }
        if !(0.0..1.0).contains(&self.reset_threshold) {
            errors.push(format!(
                "reset_threshold must be in [0, 1), got {}",
                self.reset_threshold
            ));
        }
        if let Some(color) = &self.color
            && parse_hex_color(color).is_none()
        {
            errors.push(format!("color must be a hex color like \"#00ff41\", got {color:?}"));
        }

        errors
    }

    /// The engine parameters this config describes.
    #[must_use]
    pub fn rain_params(&self) -> RainParams {
        RainParams {
            font_size: self.font_size,
            fade: self.fade,
            reset_threshold: self.reset_threshold,
        }
    }

    /// The frame period this config describes.
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Errors from loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the file.
    Io(std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
    /// Values outside their accepted ranges.
    Invalid(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read config: {e}"),
            Self::Parse(e) => write!(f, "could not parse config: {e}"),
            Self::Invalid(errors) => write!(f, "invalid config: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}
