//! Tool palette icons and the live tool/color preview.
//!
//! Both use a fixed miniature geometry per tool and go through the same
//! [`Shape::render`] routine as the canvas, so what the icon shows is exactly
//! what the tool draws.

use crate::draw::{BLACK, Color, Shape, StrokeStyle, Surface};
use crate::input::{InputEvent, Tool};

/// Edge length of an icon / preview surface in pixels.
pub const ICON_SIZE: f64 = 50.0;

/// The fixed sample geometry shown for `tool`.
///
/// Returns `None` if a shape constructor rejects the sample geometry.
pub fn sample_shape(tool: Tool, color: Color) -> Option<Shape> {
    match tool {
        Tool::Line => Some(Shape::line(10.0, 10.0, 40.0, 40.0, color)),
        Tool::Rectangle => Some(Shape::rectangle(10.0, 10.0, 30.0, 30.0, color)),
        Tool::Circle => Shape::circle(25.0, 25.0, 15.0, color).ok(),
        Tool::Pencil => {
            let mut stroke = Shape::pencil(10.0, 10.0, color);
            for (x, y) in [(20.0, 20.0), (30.0, 10.0), (40.0, 20.0)] {
                stroke.add_point(x, y);
            }
            Some(stroke)
        }
    }
}

/// Paints the palette icon for `tool`: black sample at the icon stroke width.
pub fn render_tool_icon<S: Surface + ?Sized>(surface: &mut S, tool: Tool, icon_style: StrokeStyle) {
    surface.clear();
    if let Some(sample) = sample_shape(tool, BLACK) {
        sample.render(surface, icon_style);
    }
}

/// Paints the live preview: the current tool's sample in the current color.
pub fn render_live_preview<S: Surface + ?Sized>(
    surface: &mut S,
    tool: Tool,
    color: Color,
    style: StrokeStyle,
) {
    surface.clear();
    if let Some(sample) = sample_shape(tool, color) {
        sample.render(surface, style);
    }
}

/// The four selectable tool icons.
#[derive(Debug, Clone)]
pub struct ToolPalette {
    selected: Tool,
}

impl ToolPalette {
    pub fn new(selected: Tool) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Tool {
        self.selected
    }

    /// Tools in display order.
    pub fn tools(&self) -> [Tool; 4] {
        Tool::ALL
    }

    /// Marks `tool` as selected and returns the event to feed the controller.
    pub fn select(&mut self, tool: Tool) -> InputEvent {
        self.selected = tool;
        InputEvent::SetTool(tool)
    }

    /// Routes an event through the palette before it reaches the controller.
    ///
    /// Tool changes go through [`ToolPalette::select`] so the highlighted icon
    /// always matches the controller's tool. Other events pass unchanged.
    pub fn route(&mut self, event: InputEvent) -> InputEvent {
        match event {
            InputEvent::SetTool(tool) => self.select(tool),
            other => other,
        }
    }

    /// Paints every icon once, one surface per tool in display order.
    ///
    /// Extra surfaces are left untouched; missing ones skip their tool.
    pub fn render_icons<S: Surface>(&self, surfaces: &mut [S], icon_style: StrokeStyle) {
        for (surface, tool) in surfaces.iter_mut().zip(self.tools()) {
            render_tool_icon(surface, tool, icon_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, RecordingSurface, SurfaceOp};

    #[test]
    fn icons_are_black_and_thin() {
        let palette = ToolPalette::new(Tool::Line);
        let mut surfaces = vec![RecordingSurface::new(); 4];
        palette.render_icons(&mut surfaces, StrokeStyle::new(3.0));

        for surface in &surfaces {
            assert_eq!(surface.ops().first(), Some(&SurfaceOp::Clear));
            assert!(surface.ops().contains(&SurfaceOp::LineWidth(3.0)));
            assert_eq!(surface.visible_stroke_colors(), vec![BLACK]);
        }
    }

    #[test]
    fn every_tool_sample_fits_the_icon() {
        for tool in Tool::ALL {
            let bounds = sample_shape(tool, BLACK).unwrap().bounding_box(0.0).unwrap();
            assert!(bounds.min_x >= 0.0 && bounds.min_y >= 0.0);
            assert!(bounds.max_x <= ICON_SIZE && bounds.max_y <= ICON_SIZE);
        }
    }

    #[test]
    fn live_preview_uses_current_color_and_full_width() {
        let mut surface = RecordingSurface::new();
        render_live_preview(&mut surface, Tool::Circle, RED, StrokeStyle::new(5.0));

        assert!(surface.ops().contains(&SurfaceOp::LineWidth(5.0)));
        assert_eq!(surface.visible_stroke_colors(), vec![RED]);
        assert!(
            surface
                .ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::Arc { radius, .. } if *radius == 15.0))
        );
    }

    #[test]
    fn selecting_emits_set_tool() {
        let mut palette = ToolPalette::new(Tool::Line);
        assert_eq!(palette.select(Tool::Pencil), InputEvent::SetTool(Tool::Pencil));
        assert_eq!(palette.selected(), Tool::Pencil);
    }

    #[test]
    fn route_tracks_tool_changes_only() {
        let mut palette = ToolPalette::new(Tool::Line);
        assert_eq!(
            palette.route(InputEvent::SetTool(Tool::Circle)),
            InputEvent::SetTool(Tool::Circle)
        );
        assert_eq!(palette.selected(), Tool::Circle);
        assert_eq!(palette.route(InputEvent::Clear), InputEvent::Clear);
        assert_eq!(palette.selected(), Tool::Circle);
    }

    #[test]
    fn pencil_sample_is_a_four_point_stroke() {
        let sample = sample_shape(Tool::Pencil, RED).unwrap();
        assert_eq!(sample.to_string(), "pencil 4 points #ff0000");
    }
}
