//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// default_color = "#3366cc"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or hex value
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names or malformed hex values fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name.parse::<Color>().unwrap_or_else(|err| {
                warn!("Invalid color '{}' ({}), using black", name, err);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;

    #[test]
    fn names_hex_and_rgb_all_resolve() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#ff0000".into()).to_color(), RED);
        assert_eq!(
            ColorSpec::Rgb([255, 128, 0]).to_color().to_rgba8(),
            [255, 128, 0, 255]
        );
    }

    #[test]
    fn invalid_spec_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("mauve-ish".into()).to_color(), BLACK);
    }
}
