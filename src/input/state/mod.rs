mod controller;
mod pointer;
mod render;

pub use controller::{ControllerSettings, DrawingState, InputState};
