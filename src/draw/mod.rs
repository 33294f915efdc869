//! Shape model, drawing surfaces and rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with hex parsing and predefined constants
//! - [`Shape`]: the closed set of drawable primitives (line, rectangle, circle, pencil)
//! - [`Frame`]: append-only container for committed shapes
//! - [`Surface`]: the stroke/path primitive interface shapes render through

pub mod color;
pub mod frame;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use frame::Frame;
pub use render::{DEFAULT_ICON_STROKE_WIDTH, DEFAULT_STROKE_WIDTH, StrokeStyle, render_shapes};
pub use shape::{Shape, ShapeError};
pub use surface::{CairoSurface, LineCap, RecordingSurface, Surface, SurfaceOp};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
