//! Input handling with gamepad support
//!
//! Action-based input that works with keyboard/mouse and gamepads. The app
//! polls once per frame into a `FrameInput` snapshot and passes that down.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{button, Gamepad};
pub use state::*;
