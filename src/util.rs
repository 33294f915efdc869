//! Utility functions for color names and geometry.
//!
//! This module provides:
//! - Name-to-color mapping used by config files and event scripts
//! - Axis-aligned bounds used for shape summaries

use crate::draw::{Color, color::*};
use std::fmt;

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.1 tolerance) to identify colors. Returns
/// "Custom" if the color doesn't match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned bounding box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&(x0, y0), rest) = points.split_first()?;
        let mut bounds = Bounds {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for &(x, y) in rest {
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    /// Grows the box by `padding` on every side.
    pub fn inflate(self, padding: f64) -> Self {
        Bounds {
            min_x: self.min_x - padding,
            min_y: self.min_y - padding,
            max_x: self.max_x + padding,
            max_y: self.max_y + padding,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width(),
            self.height(),
            self.min_x,
            self.min_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(name_to_color("ORANGE"), Some(ORANGE));
        assert_eq!(name_to_color("teal"), None);
    }

    #[test]
    fn color_names_round_trip_for_palette() {
        for name in ["Red", "Green", "Blue", "Yellow", "Orange", "Pink", "White", "Black"] {
            let color = name_to_color(name).unwrap();
            assert_eq!(color_to_name(&color), name);
        }
        assert_eq!(color_to_name(&Color::from_rgb8(40, 120, 200)), "Custom");
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = Bounds::from_points(&[(3.0, 4.0), (-1.0, 10.0), (2.0, -2.0)]).unwrap();
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.min_y, -2.0);
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 12.0);
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn bounds_display_shows_size_and_corner() {
        let bounds = Bounds::from_points(&[(10.0, 10.0), (0.0, 4.0)]).unwrap().inflate(1.0);
        assert_eq!(bounds.to_string(), "12x8 at (-1, 3)");
    }
}
