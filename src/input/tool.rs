//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing tool selection.
///
/// The active tool determines what shape is created when the user drags the
/// pointer across the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Straight line from press point to release point
    #[default]
    Line,
    /// Rectangle outline from press corner to release corner
    Rectangle,
    /// Circle outline centered on the press point
    Circle,
    /// Freehand drawing - follows the pointer path
    Pencil,
}

/// Error returned for a tool name outside the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool '{0}' (expected line, rectangle, circle or pencil)")]
pub struct ToolParseError(pub String);

impl Tool {
    /// Every tool, in palette order.
    pub const ALL: [Tool; 4] = [Tool::Line, Tool::Rectangle, Tool::Circle, Tool::Pencil];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Pencil => "pencil",
        }
    }
}

impl FromStr for Tool {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" => Ok(Tool::Line),
            "rectangle" | "rect" => Ok(Tool::Rectangle),
            "circle" => Ok(Tool::Circle),
            "pencil" | "pen" => Ok(Tool::Pencil),
            _ => Err(ToolParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
