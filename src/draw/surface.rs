//! Drawing surface abstraction and its backends.
//!
//! Shapes never talk to a rendering library directly; they issue stroke/path
//! primitives through [`Surface`]. Two backends are provided:
//! - [`CairoSurface`]: wraps a Cairo context (image surfaces, windows)
//! - [`RecordingSurface`]: keeps the issued primitives as [`SurfaceOp`] values,
//!   for headless inspection

use super::color::{Color, TRANSPARENT};

/// Line end style for stroked paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// 2D drawing target exposing the stroke/path primitives shapes need.
///
/// There are no fill, image or text operations.
pub trait Surface {
    /// Erases the whole surface.
    fn clear(&mut self);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a circular arc around (`cx`, `cy`) from `start` to `end` radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    /// Adds a rectangle path. `width` and `height` may be negative.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn set_line_cap(&mut self, cap: LineCap);

    /// Strokes the current path with the current color, width and cap.
    fn stroke(&mut self);
}

/// A single primitive issued to a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    StrokeColor(Color),
    LineWidth(f64),
    LineCap(LineCap),
    Stroke,
}

/// Surface that records every primitive instead of rasterizing it.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations recorded so far, in issue order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Operations issued after the most recent [`SurfaceOp::Clear`].
    ///
    /// Since every redraw starts with a clear, this is what is visible now.
    pub fn visible_ops(&self) -> &[SurfaceOp] {
        match self.ops.iter().rposition(|op| *op == SurfaceOp::Clear) {
            Some(index) => &self.ops[index + 1..],
            None => &self.ops,
        }
    }

    /// Number of `Stroke` operations still visible.
    pub fn visible_stroke_count(&self) -> usize {
        self.visible_ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke))
            .count()
    }

    /// Stroke colors of the visible strokes, in paint order.
    pub fn visible_stroke_colors(&self) -> Vec<Color> {
        let mut current = None;
        let mut colors = Vec::new();
        for op in self.visible_ops() {
            match op {
                SurfaceOp::StrokeColor(color) => current = Some(*color),
                SurfaceOp::Stroke => colors.extend(current),
                _ => {}
            }
        }
        colors
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo(x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.ops.push(SurfaceOp::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(SurfaceOp::LineCap(cap));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }
}

/// Cairo-backed surface.
///
/// `clear` paints the background color with the `Source` operator, so a
/// transparent background really erases previous content.
pub struct CairoSurface {
    ctx: cairo::Context,
    background: Color,
}

impl CairoSurface {
    /// Wraps a context whose clears produce a transparent canvas.
    pub fn new(ctx: cairo::Context) -> Self {
        Self::with_background(ctx, TRANSPARENT)
    }

    pub fn with_background(ctx: cairo::Context, background: Color) -> Self {
        Self { ctx, background }
    }
}

impl Surface for CairoSurface {
    fn clear(&mut self) {
        let bg = self.background;
        self.ctx.save().ok();
        self.ctx.set_operator(cairo::Operator::Source);
        self.ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        let _ = self.ctx.paint(); // Ignore errors - a failed clear leaves old pixels
        self.ctx.restore().ok();
        self.ctx.new_path();
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        // Break the path so the arc does not get a connector from the last point
        self.ctx.new_sub_path();
        self.ctx.arc(cx, cy, radius, start, end);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // Cairo accepts negative extents, same as a canvas `rect`
        self.ctx.rectangle(x, y, width, height);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
    }

    fn stroke(&mut self) {
        let _ = self.ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    fn alpha_at(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> u8 {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().expect("exclusive access to image data");
        // ARGB32 is native-endian; alpha is the most significant byte
        let offset = y * stride + x * 4;
        let pixel = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        (pixel >> 24) as u8
    }

    #[test]
    fn visible_ops_starts_after_last_clear() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.clear();
        surface.move_to(1.0, 2.0);
        surface.stroke();

        assert_eq!(
            surface.visible_ops(),
            &[SurfaceOp::MoveTo(1.0, 2.0), SurfaceOp::Stroke]
        );
        assert_eq!(surface.visible_stroke_count(), 1);
    }

    #[test]
    fn cairo_surface_strokes_and_clears_pixels() {
        let mut image = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        {
            let ctx = cairo::Context::new(&image).unwrap();
            let mut surface = CairoSurface::new(ctx);
            surface.set_stroke_color(RED);
            surface.set_line_width(4.0);
            surface.begin_path();
            surface.move_to(0.0, 10.0);
            surface.line_to(20.0, 10.0);
            surface.stroke();
        }
        assert_eq!(alpha_at(&mut image, 10, 10), 255);
        assert_eq!(alpha_at(&mut image, 10, 0), 0);

        {
            let ctx = cairo::Context::new(&image).unwrap();
            let mut surface = CairoSurface::new(ctx);
            surface.clear();
        }
        assert_eq!(alpha_at(&mut image, 10, 10), 0);
    }
}
