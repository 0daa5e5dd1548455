//! Tool configuration from `iconprep.toml`.
//!
//! The file is optional: when none is found, built-in defaults apply.
//!
//! # Sections
//!
//! | Section    | Purpose                                       |
//! |------------|-----------------------------------------------|
//! | `[filter]` | SVG file rewritten by `filter-svg`            |
//! | `[pad]`    | Default ratio and canvas fill for `pad-icon`  |
//!
//! # Example
//!
//! ```toml
//! [filter]
//! input = "assets/icon/icon.svg"
//!
//! [pad]
//! ratio = 0.2
//! background = "#00000000"
//! ```

mod error;
mod util;

pub use error::ConfigError;
pub use util::find_config_file;

use crate::image::{Background, DEFAULT_RATIO};
use crate::{debug, log};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "iconprep.toml";

/// SVG rewritten when no path is given.
pub const DEFAULT_SVG: &str = "assets/icon/icon.svg";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing iconprep.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Config file this was loaded from, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    pub filter: FilterConfig,
    pub pad: PadConfig,
}

/// `[filter]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// SVG file to rewrite in place.
    /// Relative paths resolve against the config file's directory.
    pub input: PathBuf,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SVG),
        }
    }
}

/// `[pad]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Fraction of width/height added on each side.
    pub ratio: f64,
    /// Canvas fill, `#RRGGBB` or `#RRGGBBAA`.
    pub background: Background,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            background: Background::TRANSPARENT,
        }
    }
}

impl ToolsConfig {
    /// Locate and load the config file, falling back to defaults when absent.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(config_name) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(&path)
            }
            None => {
                debug!("config"; "{} not found, using defaults", config_name.display());
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), ignored.join(", "));
        }
        config.validate()?;

        if let Some(root) = path.parent()
            && config.filter.input.is_relative()
        {
            config.filter.input = root.join(&config.filter.input);
        }
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.pad.ratio.is_finite() || self.pad.ratio < 0.0 {
            return Err(ConfigError::Validation(format!(
                "pad.ratio must be a finite, non-negative number, got {}",
                self.pad.ratio
            )));
        }
        if self.filter.input.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "filter.input must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
