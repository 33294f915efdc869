//! Shape definitions for the sketch canvas.

use super::color::Color;
use super::render::StrokeStyle;
use super::surface::Surface;
use crate::input::Tool;
use crate::util::Bounds;
use std::f64::consts::PI;
use std::fmt;
use thiserror::Error;

/// Represents a drawable shape on the canvas.
///
/// Each variant represents a different drawing tool/primitive with its specific
/// geometry. All shapes store their own color; stroke width is supplied at render
/// time so the same geometry can be drawn full size or as a toolbar icon.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Straight line between the press point and the release point
    Line {
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        color: Color,
    },
    /// Rectangle outline anchored at the press point
    Rectangle {
        start_x: f64,
        start_y: f64,
        /// Signed width; negative when dragged to the left
        width: f64,
        /// Signed height; negative when dragged upwards
        height: f64,
        color: Color,
    },
    /// Circle outline centered on the press point
    Circle {
        center_x: f64,
        center_y: f64,
        /// Never negative
        radius: f64,
        color: Color,
    },
    /// Freehand stroke - polyline connecting pointer drag points
    Pencil {
        /// Sequence of (x, y) coordinates in the order they were traced
        points: Vec<(f64, f64)>,
        color: Color,
    },
}

/// Rejected shape geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("circle radius must be a finite, non-negative number (got {0})")]
    InvalidRadius(f64),
}

impl Shape {
    pub fn line(start_x: f64, start_y: f64, end_x: f64, end_y: f64, color: Color) -> Self {
        Shape::Line {
            start_x,
            start_y,
            end_x,
            end_y,
            color,
        }
    }

    pub fn rectangle(start_x: f64, start_y: f64, width: f64, height: f64, color: Color) -> Self {
        Shape::Rectangle {
            start_x,
            start_y,
            width,
            height,
            color,
        }
    }

    pub fn circle(
        center_x: f64,
        center_y: f64,
        radius: f64,
        color: Color,
    ) -> Result<Self, ShapeError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Shape::Circle {
            center_x,
            center_y,
            radius,
            color,
        })
    }

    /// Starts a freehand stroke seeded with its first point.
    pub fn pencil(x: f64, y: f64, color: Color) -> Self {
        Shape::Pencil {
            points: vec![(x, y)],
            color,
        }
    }

    /// Builds the shape a drag from `origin` to `current` produces with `tool`.
    ///
    /// This is the single derivation used both for the live candidate and for
    /// the committed shape. Returns `None` for [`Tool::Pencil`], whose geometry
    /// is the accumulated point sequence rather than a derivation, and for
    /// drags whose extent overflows to a non-finite size.
    pub fn from_drag(
        tool: Tool,
        origin: (f64, f64),
        current: (f64, f64),
        color: Color,
    ) -> Option<Self> {
        let (ox, oy) = origin;
        let (cx, cy) = current;
        match tool {
            Tool::Line => Some(Shape::line(ox, oy, cx, cy, color)),
            Tool::Rectangle => {
                let (width, height) = (cx - ox, cy - oy);
                (width.is_finite() && height.is_finite())
                    .then(|| Shape::rectangle(ox, oy, width, height, color))
            }
            Tool::Circle => Shape::circle(ox, oy, (cx - ox).hypot(cy - oy), color).ok(),
            Tool::Pencil => None,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Line { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Pencil { color, .. } => *color,
        }
    }

    /// Recolors the shape. Only the controller calls this, and only on a
    /// stroke that has not been committed yet.
    pub(crate) fn set_color(&mut self, new_color: Color) {
        match self {
            Shape::Line { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Pencil { color, .. } => *color = new_color,
        }
    }

    /// Appends a point to a freehand stroke.
    ///
    /// Returns `false` (and does nothing) for every other variant.
    pub fn add_point(&mut self, x: f64, y: f64) -> bool {
        match self {
            Shape::Pencil { points, .. } => {
                points.push((x, y));
                true
            }
            _ => false,
        }
    }

    /// Issues this shape's stroke primitives onto `surface`.
    ///
    /// A pencil stroke with fewer than two points draws nothing.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, style: StrokeStyle) {
        if let Shape::Pencil { points, .. } = self {
            if points.len() < 2 {
                return;
            }
        }

        surface.set_stroke_color(self.color());
        surface.set_line_width(style.width);
        surface.set_line_cap(style.cap);
        surface.begin_path();

        match self {
            Shape::Line {
                start_x,
                start_y,
                end_x,
                end_y,
                ..
            } => {
                surface.move_to(*start_x, *start_y);
                surface.line_to(*end_x, *end_y);
            }
            Shape::Rectangle {
                start_x,
                start_y,
                width,
                height,
                ..
            } => {
                surface.rect(*start_x, *start_y, *width, *height);
            }
            Shape::Circle {
                center_x,
                center_y,
                radius,
                ..
            } => {
                surface.arc(*center_x, *center_y, *radius, 0.0, 2.0 * PI);
            }
            Shape::Pencil { points, .. } => {
                let (x0, y0) = points[0];
                surface.move_to(x0, y0);
                for &(x, y) in &points[1..] {
                    surface.line_to(x, y);
                }
            }
        }

        surface.stroke();
    }

    /// Returns the axis-aligned bounding box for this shape, expanded to cover
    /// half of `stroke_width` on every side.
    ///
    /// Returns `None` for a freehand stroke without points.
    pub fn bounding_box(&self, stroke_width: f64) -> Option<Bounds> {
        let bounds = match self {
            Shape::Line {
                start_x,
                start_y,
                end_x,
                end_y,
                ..
            } => Bounds::from_points(&[(*start_x, *start_y), (*end_x, *end_y)])?,
            Shape::Rectangle {
                start_x,
                start_y,
                width,
                height,
                ..
            } => Bounds::from_points(&[
                (*start_x, *start_y),
                (*start_x + *width, *start_y + *height),
            ])?,
            Shape::Circle {
                center_x,
                center_y,
                radius,
                ..
            } => Bounds {
                min_x: center_x - radius,
                min_y: center_y - radius,
                max_x: center_x + radius,
                max_y: center_y + radius,
            },
            Shape::Pencil { points, .. } => Bounds::from_points(points)?,
        };
        Some(bounds.inflate(stroke_width / 2.0))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Line {
                start_x,
                start_y,
                end_x,
                end_y,
                color,
            } => write!(
                f,
                "line ({start_x}, {start_y}) -> ({end_x}, {end_y}) {color}"
            ),
            Shape::Rectangle {
                start_x,
                start_y,
                width,
                height,
                color,
            } => write!(f, "rectangle ({start_x}, {start_y}) {width}x{height} {color}"),
            Shape::Circle {
                center_x,
                center_y,
                radius,
                color,
            } => write!(f, "circle ({center_x}, {center_y}) r={radius} {color}"),
            Shape::Pencil { points, color } => {
                write!(f, "pencil {} points {color}", points.len())
            }
        }
    }
}
