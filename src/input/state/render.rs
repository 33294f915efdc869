use crate::draw::{Shape, Surface, render_shapes};
use crate::ui;

use super::{DrawingState, InputState};

impl InputState {
    /// Returns the candidate shape of a non-pencil drag for live preview.
    ///
    /// # Returns
    /// - `Some(Shape)` while dragging with line, rectangle or circle after the
    ///   pointer has moved
    /// - `None` when idle, when drawing with the pencil, or before the first move
    ///
    /// The candidate uses the current color, so a color change mid-drag shows
    /// up immediately. It is never added to the committed shapes.
    pub fn candidate_shape(&self) -> Option<Shape> {
        match &self.state {
            DrawingState::Drawing {
                tool,
                origin,
                current: Some(current),
                stroke: None,
            } => Shape::from_drag(*tool, *origin, *current, self.current_color),
            _ => None,
        }
    }

    /// Repaints the whole canvas.
    ///
    /// Clears the surface, renders every committed shape in order, then the
    /// in-progress pencil stroke or the candidate shape on top.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let style = self.settings.stroke_style;
        surface.clear();
        render_shapes(surface, self.frame.shapes(), style);

        if let Some(stroke) = self.in_progress() {
            stroke.render(surface, style);
        } else if let Some(candidate) = self.candidate_shape() {
            candidate.render(surface, style);
        }

        self.needs_redraw = false;
    }

    /// Repaints the live preview sample for the current tool and color.
    pub fn render_preview<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        ui::render_live_preview(
            surface,
            self.current_tool,
            self.current_color,
            self.settings.stroke_style,
        );
        self.preview_dirty = false;
    }
}
