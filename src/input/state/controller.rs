//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{Color, Frame, Shape, StrokeStyle};
use crate::input::events::{InputEvent, PointerEvent};
use crate::input::tool::Tool;
use log::debug;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or holding the pointer down on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not drawing - waiting for a pointer press
    Idle,
    /// Pointer held down on the canvas
    Drawing {
        /// Tool that was active when the pointer went down
        tool: Tool,
        /// Where the pointer was pressed
        origin: (f64, f64),
        /// Latest pointer position seen by a move, if any
        current: Option<(f64, f64)>,
        /// The freehand stroke being extended (pencil tool only)
        stroke: Option<Shape>,
    },
}

/// Knobs that shape controller behavior, usually taken from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    /// Stroke used for committed shapes, candidates and the live preview
    pub stroke_style: StrokeStyle,
    /// Thinner stroke used for toolbar icons
    pub icon_style: StrokeStyle,
    /// Recolor an in-progress pencil stroke when the color changes mid-stroke
    pub retroactive_pencil_color: bool,
    /// Maximum number of committed shapes (0 = unlimited)
    pub max_shapes: usize,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            stroke_style: StrokeStyle::new(crate::draw::DEFAULT_STROKE_WIDTH),
            icon_style: StrokeStyle::new(crate::draw::DEFAULT_ICON_STROKE_WIDTH),
            retroactive_pencil_color: false,
            max_shapes: 0,
        }
    }
}

/// Main input state containing all drawing session state.
///
/// Holds the committed shapes, the active tool and color, and the drawing
/// state machine. Hosts feed it events and repaint whenever [`needs_redraw`]
/// (canvas) or [`preview_dirty`] (tool/color preview) is set.
///
/// [`needs_redraw`]: InputState::needs_redraw
/// [`preview_dirty`]: InputState::preview_dirty
pub struct InputState {
    /// Committed shapes in draw order
    pub(super) frame: Frame,
    /// Color used for new shapes
    pub(super) current_color: Color,
    /// Tool used for the next pointer press
    pub(super) current_tool: Tool,
    /// Current drawing mode state machine
    pub(crate) state: DrawingState,
    /// Whether the canvas needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the tool/color preview needs to be redrawn
    pub preview_dirty: bool,
    pub settings: ControllerSettings,
}

impl InputState {
    /// Creates a new InputState with the given initial tool and color.
    pub fn with_defaults(color: Color, tool: Tool, settings: ControllerSettings) -> Self {
        Self {
            frame: Frame::new(),
            current_color: color,
            current_tool: tool,
            state: DrawingState::Idle,
            needs_redraw: true,
            preview_dirty: true,
            settings,
        }
    }

    /// Builds the session state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        let settings = ControllerSettings {
            stroke_style: StrokeStyle::new(drawing.stroke_width),
            icon_style: StrokeStyle::new(drawing.icon_stroke_width),
            retroactive_pencil_color: drawing.retroactive_pencil_color,
            max_shapes: drawing.max_shapes,
        };
        Self::with_defaults(drawing.default_color.to_color(), drawing.default_tool, settings)
    }

    /// Committed shapes, bottom layer first.
    pub fn shapes(&self) -> &[Shape] {
        self.frame.shapes()
    }

    /// Color used for new shapes.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Tool used for the next pointer press.
    pub fn current_tool(&self) -> Tool {
        self.current_tool
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// The press point of the current interaction, if drawing.
    pub fn origin(&self) -> Option<(f64, f64)> {
        match &self.state {
            DrawingState::Drawing { origin, .. } => Some(*origin),
            DrawingState::Idle => None,
        }
    }

    /// The freehand stroke being drawn, if any.
    pub fn in_progress(&self) -> Option<&Shape> {
        match &self.state {
            DrawingState::Drawing { stroke, .. } => stroke.as_ref(),
            DrawingState::Idle => None,
        }
    }

    /// Dispatches a backend-neutral event to the matching handler.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pointer(PointerEvent::Down { x, y }) => self.on_pointer_down(x, y),
            InputEvent::Pointer(PointerEvent::Move { x, y }) => self.on_pointer_move(x, y),
            InputEvent::Pointer(PointerEvent::Up { x, y }) => self.on_pointer_up(x, y),
            InputEvent::SetTool(tool) => self.set_tool(tool),
            InputEvent::SetColor(color) => self.set_color(color),
            InputEvent::Clear => self.clear(),
            InputEvent::Cancel => self.cancel(),
        }
    }

    /// Changes the color used for new shapes.
    ///
    /// Candidates of non-pencil drags always show the current color and are
    /// committed with the color current at release. An in-progress pencil
    /// stroke keeps the color it started with unless
    /// [`ControllerSettings::retroactive_pencil_color`] is set.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
        self.preview_dirty = true;

        if let DrawingState::Drawing {
            stroke: Some(stroke),
            ..
        } = &mut self.state
        {
            if self.settings.retroactive_pencil_color {
                stroke.set_color(color);
            }
        }
        if self.is_drawing() {
            self.needs_redraw = true;
        }
        debug!("Color set to {color}");
    }

    /// Selects the tool for the next pointer press. An interaction already in
    /// progress keeps the tool it started with.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.current_tool != tool {
            debug!("Tool changed: {} -> {}", self.current_tool, tool);
        }
        self.current_tool = tool;
        self.preview_dirty = true;
    }

    /// Removes every committed shape. Tool and color are unchanged.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.needs_redraw = true;
        debug!("Canvas cleared");
    }

    /// Drops the current interaction without committing anything.
    pub fn cancel(&mut self) {
        if self.is_drawing() {
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
            debug!("Drawing cancelled");
        }
    }
}
