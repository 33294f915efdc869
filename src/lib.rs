//! Library exports for the strokepad drawing core.
//!
//! Exposes the shape model, the pointer-driven drawing controller, the tool
//! palette and configuration so that front ends (windowed hosts, the replay
//! CLI, tests) share one implementation.

pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod ui;
pub mod util;

pub use config::Config;
pub use draw::{Color, Shape, Surface};
pub use input::{InputEvent, InputState, PointerEvent, Tool};
