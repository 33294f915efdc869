//! Input handling and the drawing state machine.
//!
//! This module turns backend-neutral input events into drawing actions. It
//! maintains the current tool and color, the committed shapes, and the state
//! machine that produces live candidates and committed shapes from pointer
//! interaction.

pub mod events;
pub mod script;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{InputEvent, PointerEvent};
pub use script::{ScriptError, parse_script};
pub use state::{ControllerSettings, DrawingState, InputState};
pub use tool::{Tool, ToolParseError};
