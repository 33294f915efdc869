//! Frame container for the committed shapes of a drawing session.

use super::shape::Shape;

/// Ordered collection of committed shapes.
///
/// Shapes are kept in draw order (first = bottom layer, last = top layer).
/// Committed geometry is immutable: the frame only hands out shared
/// references, and the only way to remove shapes is to [`Frame::clear`] them all.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all shapes from the frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Adds a shape on top of the existing ones, enforcing a maximum shape
    /// count when `max` > 0.
    ///
    /// Returns `true` if the shape was added, `false` if the limit would be exceeded.
    pub fn try_add_shape(&mut self, shape: Shape, max: usize) -> bool {
        if max == 0 || self.shapes.len() < max {
            self.shapes.push(shape);
            true
        } else {
            false
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn try_add_shape_respects_limit() {
        let mut frame = Frame::new();
        assert!(frame.try_add_shape(Shape::line(0.0, 0.0, 1.0, 1.0, RED), 1));
        assert!(!frame.try_add_shape(Shape::line(1.0, 1.0, 2.0, 2.0, BLUE), 1));
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn zero_limit_means_unlimited() {
        let mut frame = Frame::new();
        for i in 0..50 {
            assert!(frame.try_add_shape(Shape::pencil(i as f64, 0.0, RED), 0));
        }
        assert_eq!(frame.len(), 50);
    }

    #[test]
    fn shapes_keep_insertion_order() {
        let mut frame = Frame::new();
        assert!(frame.try_add_shape(Shape::line(0.0, 0.0, 1.0, 1.0, RED), 0));
        assert!(frame.try_add_shape(Shape::rectangle(0.0, 0.0, 1.0, 1.0, BLUE), 0));

        let colors: Vec<_> = frame.shapes().iter().map(Shape::color).collect();
        assert_eq!(colors, vec![RED, BLUE]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut frame = Frame::new();
        assert!(frame.try_add_shape(Shape::line(0.0, 0.0, 1.0, 1.0, RED), 0));
        frame.clear();
        assert!(frame.is_empty());
        frame.clear();
        assert!(frame.is_empty());
    }
}
