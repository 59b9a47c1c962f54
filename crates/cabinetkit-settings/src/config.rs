//! Configuration Management
//!
//! User defaults for new cabinets and drawing export preferences, stored as
//! JSON or TOML. The format is chosen by file extension.

use crate::error::{SettingsError, SettingsResult};
use cabinetkit_construction::Configuration;
use cabinetkit_core::Material;
use cabinetkit_drafting::{DrawingTier, SvgOptions, ViewMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the platform config dir holding CabinetKit files
pub const CONFIG_DIR_NAME: &str = "cabinetkit";
/// File name of the default configuration
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Values applied to a cabinet when the caller does not override them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsSection {
    pub material: Material,
    pub configuration: Configuration,
}

/// Drawing export preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSection {
    /// Canvas width in screen units
    pub width: f64,
    /// Canvas height in screen units
    pub height: f64,
    /// Margin kept clear on every side
    pub padding: f64,
    pub tier: DrawingTier,
    pub view: ViewMode,
    /// Leave the SVG background unfilled
    pub transparent: bool,
}

impl Default for DrawingSection {
    fn default() -> Self {
        let svg = SvgOptions::default();
        Self {
            width: svg.width,
            height: svg.height,
            padding: svg.padding,
            tier: DrawingTier::default(),
            view: ViewMode::default(),
            transparent: false,
        }
    }
}

/// Complete user configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsSection,
    pub drawing: DrawingSection,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(Format::Json)
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        Ok(Format::Toml)
    } else {
        Err(SettingsError::UnsupportedFormat(format!(
            "{} (config file must be .json or .toml)",
            path.display()
        )))
    }
}

impl Config {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.defaults
            .material
            .validate()
            .map_err(|e| SettingsError::from_cabinet("defaults.material", e))?;
        self.defaults
            .configuration
            .validate()
            .map_err(|e| SettingsError::from_cabinet("defaults.configuration", e))?;

        let drawing = &self.drawing;
        if !drawing.width.is_finite() || drawing.width <= 0.0 {
            return Err(SettingsError::invalid(
                "drawing.width",
                format!("must be > 0, got {}", drawing.width),
            ));
        }
        if !drawing.height.is_finite() || drawing.height <= 0.0 {
            return Err(SettingsError::invalid(
                "drawing.height",
                format!("must be > 0, got {}", drawing.height),
            ));
        }
        if !drawing.padding.is_finite() || drawing.padding < 0.0 {
            return Err(SettingsError::invalid(
                "drawing.padding",
                format!("must not be negative, got {}", drawing.padding),
            ));
        }
        if drawing.padding * 2.0 >= drawing.width.min(drawing.height) {
            return Err(SettingsError::invalid(
                "drawing.padding",
                format!(
                    "{} leaves no room on a {} x {} canvas",
                    drawing.padding, drawing.width, drawing.height
                ),
            ));
        }

        Ok(())
    }

    /// SVG export options derived from the drawing section
    pub fn svg_options(&self) -> SvgOptions {
        let mut options = SvgOptions {
            width: self.drawing.width,
            height: self.drawing.height,
            padding: self.drawing.padding,
            ..SvgOptions::default()
        };
        if self.drawing.transparent {
            options.background = None;
        }
        options
    }
}

/// Platform default location: `<config dir>/cabinetkit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("platform config directory is unknown".to_string())
        })
}
