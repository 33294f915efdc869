use crate::draw::Shape;
use crate::input::tool::Tool;
use log::{debug, warn};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a primary pointer press.
    ///
    /// Starts drawing with the current tool. The pencil tool creates its stroke
    /// immediately, seeded with the press point; other tools only record the
    /// origin. Presses while already drawing are ignored.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if self.is_drawing() {
            debug!("Ignoring pointer down at ({x}, {y}) while already drawing");
            return;
        }

        let tool = self.current_tool;
        let stroke = (tool == Tool::Pencil).then(|| Shape::pencil(x, y, self.current_color));
        self.state = DrawingState::Drawing {
            tool,
            origin: (x, y),
            current: None,
            stroke,
        };
        self.needs_redraw = true;
        debug!("Started {tool} at ({x}, {y})");
    }

    /// Processes pointer motion.
    ///
    /// - Pencil: appends the point to the stroke
    /// - Other tools: moves the candidate's free end for live preview
    ///
    /// Does nothing while idle.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if let DrawingState::Drawing {
            current, stroke, ..
        } = &mut self.state
        {
            if let Some(stroke) = stroke {
                stroke.add_point(x, y);
            }
            *current = Some((x, y));
            self.needs_redraw = true;
        }
    }

    /// Processes a primary pointer release.
    ///
    /// Finalizes the interaction into a committed shape, using the same
    /// derivation as the live candidate, and returns to idle.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) {
        let DrawingState::Drawing {
            tool,
            origin,
            stroke,
            ..
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };

        self.needs_redraw = true;
        let shape = match stroke {
            Some(stroke) => stroke,
            None => match Shape::from_drag(tool, origin, (x, y), self.current_color) {
                Some(shape) => shape,
                None => {
                    warn!("Discarding {tool} from {origin:?} to ({x}, {y}): size is not finite");
                    return;
                }
            },
        };

        match shape.bounding_box(self.settings.stroke_style.width) {
            Some(bounds) => debug!("Committing {shape} covering {bounds}"),
            None => debug!("Committing {shape}"),
        }
        if !self.frame.try_add_shape(shape, self.settings.max_shapes) {
            warn!(
                "Shape limit ({}) reached; discarding new shape",
                self.settings.max_shapes
            );
        }
    }
}
