//! Configuration file support for strokepad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/strokepad/config.toml`. Settings include drawing defaults
//! (tool, color, stroke widths) and canvas dimensions.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig};

use crate::draw::Color;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_EDGE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// default_tool = "pencil"
/// stroke_width = 5.0
/// icon_stroke_width = 3.0
///
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing defaults (tool, color, stroke widths)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas surface settings
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1.0 - 20.0
    /// - `icon_stroke_width`: 0.5 - `stroke_width`
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    fn validate_and_clamp(&mut self) {
        // Stroke width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = clamp_or(self.drawing.stroke_width, 1.0, 20.0, 5.0);
        }

        // Icons must stay thinner than (or as thin as) canvas strokes
        let max_icon = self.drawing.stroke_width;
        if !(0.5..=max_icon).contains(&self.drawing.icon_stroke_width) {
            log::warn!(
                "Invalid icon_stroke_width {:.1}, clamping to 0.5-{:.1} range",
                self.drawing.icon_stroke_width,
                max_icon
            );
            self.drawing.icon_stroke_width =
                clamp_or(self.drawing.icon_stroke_width, 0.5, max_icon, 0.5);
        }

        for (name, edge) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_EDGE).contains(&*edge) {
                log::warn!("Invalid canvas {name} {edge}, clamping to 1-{MAX_CANVAS_EDGE} range");
                *edge = (*edge).clamp(1, MAX_CANVAS_EDGE);
            }
        }
    }

    /// Background color painted on every canvas clear.
    pub fn background_color(&self) -> Option<Color> {
        self.canvas.background.as_ref().map(ColorSpec::to_color)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/strokepad/config.toml`
    /// (`$XDG_CONFIG_HOME/strokepad/config.toml` when set).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("strokepad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// JSON schema describing the config file, for editors and validators.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Clamps finite values into range; NaN falls back to `fallback`.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
