//! Immediate-mode UI helpers
//!
//! Shared by the menus, the HUD and the case overlays:
//! - Rect for layout and collision geometry
//! - Mouse state mapped into the logical 1280x720 space
//! - Buttons, panels, wrapped text

mod input;
mod rect;
mod theme;
mod viewport;
mod widgets;

pub use input::*;
pub use rect::*;
pub use theme::*;
pub use viewport::*;
pub use widgets::*;
