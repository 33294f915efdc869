//! RGBA color type, hex parsing and predefined color constants.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use strokepad::draw::Color;
/// let red: Color = "#ff0000".parse().unwrap();
/// assert_eq!(red, Color::new(1.0, 0.0, 0.0, 1.0));
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a color string is neither a known name nor valid hex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,

    #[error("invalid hex color '{0}': expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidLength(String),

    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, u8::MAX)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.is_ascii() {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit(value.to_string()))
        };

        match digits.len() {
            3 => {
                // #abc expands to #aabbcc
                let mut expanded = [0u8; 3];
                for (slot, i) in expanded.iter_mut().zip(0..3) {
                    let nibble = channel(&digits[i..=i])?;
                    *slot = nibble * 17;
                }
                Ok(Self::from_rgb8(expanded[0], expanded[1], expanded[2]))
            }
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Ok(Self::from_rgba8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            _ => Err(ColorParseError::InvalidLength(value.to_string())),
        }
    }

    /// Formats the color as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts a predefined color name or a hex value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(named) = crate::util::name_to_color(s.trim()) {
            return Ok(named);
        }
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Fully transparent color, used to clear surfaces without a background.
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color = Color::from_hex("#3366cc").unwrap();
        assert_eq!(color.to_rgba8(), [0x33, 0x66, 0xcc, 0xff]);
    }

    #[test]
    fn short_hex_expands_each_digit() {
        let color: Color = "#f80".parse().unwrap();
        assert_eq!(color.to_rgba8(), [0xff, 0x88, 0x00, 0xff]);
    }

    #[test]
    fn hash_prefix_is_optional_and_case_is_ignored() {
        assert_eq!(Color::from_hex("00FF00").unwrap(), GREEN);
    }

    #[test]
    fn eight_digit_hex_keeps_alpha() {
        let color = Color::from_hex("#00000080").unwrap();
        assert_eq!(color.to_rgba8()[3], 0x80);
        assert_eq!(color.to_hex(), "#00000080");
    }

    #[test]
    fn names_take_precedence_over_hex() {
        assert_eq!("Pink".parse::<Color>().unwrap(), PINK);
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(Color::from_hex("  "), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::from_hex("#ééé"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn default_is_black_and_displays_as_hex() {
        assert_eq!(Color::default().to_string(), "#000000");
    }
}
