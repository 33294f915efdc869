//! Stroke styling and batch rendering of shapes.

use super::shape::Shape;
use super::surface::{LineCap, Surface};

/// Stroke width for committed shapes and previews, in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Stroke width for the toolbar icons, in pixels.
pub const DEFAULT_ICON_STROKE_WIDTH: f64 = 3.0;

/// How a shape's outline is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels
    pub width: f64,
    /// End cap for every stroked path
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Round-capped style of the given width.
    pub const fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(DEFAULT_STROKE_WIDTH)
    }
}

/// Renders all shapes in order (first shape = bottom layer).
pub fn render_shapes<S: Surface + ?Sized>(surface: &mut S, shapes: &[Shape], style: StrokeStyle) {
    for shape in shapes {
        shape.render(surface, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, GREEN, RED};
    use crate::draw::surface::RecordingSurface;

    #[test]
    fn shapes_render_in_slice_order() {
        let shapes = vec![
            Shape::line(0.0, 0.0, 5.0, 5.0, RED),
            Shape::rectangle(1.0, 1.0, 2.0, 2.0, GREEN),
            Shape::circle(2.0, 2.0, 1.0, BLUE).unwrap(),
        ];
        let mut surface = RecordingSurface::new();
        render_shapes(&mut surface, &shapes, StrokeStyle::default());

        assert_eq!(surface.visible_stroke_colors(), vec![RED, GREEN, BLUE]);
    }
}
