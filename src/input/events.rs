//! Backend-neutral input events.

use super::tool::Tool;
use crate::draw::Color;

/// Pointer interaction in surface-local coordinates.
///
/// Hosts translate their native coordinates (window, page, client) before
/// building these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { x: f64, y: f64 },
    /// Pointer moved (with or without the button held)
    Move { x: f64, y: f64 },
    /// Primary button released
    Up { x: f64, y: f64 },
}

/// Everything the drawing controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    /// A tool icon in the palette was selected
    SetTool(Tool),
    /// The color control changed
    SetColor(Color),
    /// The clear action was triggered
    Clear,
    /// Abandon the current interaction without committing it
    Cancel,
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}
