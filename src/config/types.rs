//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{DEFAULT_ICON_STROKE_WIDTH, DEFAULT_STROKE_WIDTH};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool, color and stroke used when a session starts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial color: a name, a hex string like "#3366cc", or `[r, g, b]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial tool (line, rectangle, circle, pencil)
    #[serde(default)]
    pub default_tool: Tool,

    /// Stroke width for shapes on the canvas in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Stroke width for toolbar icons in pixels (valid range: 0.5 - stroke_width)
    #[serde(default = "default_icon_stroke_width")]
    pub icon_stroke_width: f64,

    /// Recolor a pencil stroke that is still being drawn when the color changes.
    /// When false, a stroke keeps the color it was started with.
    #[serde(default)]
    pub retroactive_pencil_color: bool,

    /// Maximum number of shapes on the canvas (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_tool: Tool::default(),
            stroke_width: default_stroke_width(),
            icon_stroke_width: default_icon_stroke_width(),
            retroactive_pencil_color: false,
            max_shapes: 0,
        }
    }
}

/// Canvas surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Color painted on every clear; transparent when unset
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_icon_stroke_width() -> f64 {
    DEFAULT_ICON_STROKE_WIDTH
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}
