//! Menus and popups
//!
//! - Main menu and settings screens
//! - Map popup for jumping between scenes
//! - Quit confirmation
//!
//! Each one takes a `FrameInput` and returns an action enum for the app to
//! act on; drawing is separate so the logic runs without a window.

mod confirm;
mod main_menu;
mod map;
mod settings;

pub use confirm::*;
pub use main_menu::*;
pub use map::*;
pub use settings::*;

use crate::input::{Action, FrameInput};
use crate::ui::Rect;

/// Keyboard cursor over a vertical list of buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuCursor {
    pub selected: usize,
}

impl MenuCursor {
    /// Move with Up/Down, skipping disabled entries. Mouse hover over an
    /// enabled button moves the cursor too.
    pub fn navigate(&mut self, input: &FrameInput, enabled: &[bool], rects: &[Rect]) {
        let n = enabled.len();
        if n == 0 || !enabled.iter().any(|e| *e) {
            return;
        }
        if input.pressed(Action::MenuDown) {
            self.step(enabled, 1);
        }
        if input.pressed(Action::MenuUp) {
            self.step(enabled, n - 1);
        }
        if let Some(i) = (0..n.min(rects.len())).find(|&i| enabled[i] && input.mouse.inside(&rects[i])) {
            self.selected = i;
        }
    }

    fn step(&mut self, enabled: &[bool], delta: usize) {
        let n = enabled.len();
        let mut i = self.selected;
        for _ in 0..n {
            i = (i + delta) % n;
            if enabled[i] {
                self.selected = i;
                return;
            }
        }
    }

    /// Entry activated this frame by Enter or a click
    pub fn activated(&self, input: &FrameInput, enabled: &[bool], rects: &[Rect]) -> Option<usize> {
        if let Some(i) = (0..enabled.len().min(rects.len())).find(|&i| enabled[i] && input.mouse.clicked(&rects[i])) {
            return Some(i);
        }
        if input.pressed(Action::Confirm) && enabled.get(self.selected).copied().unwrap_or(false) {
            return Some(self.selected);
        }
        None
    }
}

/// Centered column of equal buttons
pub fn button_column(count: usize, top: f32, width: f32, height: f32, gap: f32) -> Vec<Rect> {
    use crate::config::SCENE_WIDTH;
    let x = (SCENE_WIDTH - width) * 0.5;
    (0..count).map(|i| Rect::new(x, top + i as f32 * (height + gap), width, height)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MouseState;

    #[test]
    fn test_cursor_skips_disabled() {
        let enabled = [true, false, true, true];
        let mut cursor = MenuCursor::default();
        let down = FrameInput::default().with_pressed(&[Action::MenuDown]);
        let up = FrameInput::default().with_pressed(&[Action::MenuUp]);

        cursor.navigate(&down, &enabled, &[]);
        assert_eq!(cursor.selected, 2);
        cursor.navigate(&up, &enabled, &[]);
        assert_eq!(cursor.selected, 0);
        cursor.navigate(&up, &enabled, &[]);
        assert_eq!(cursor.selected, 3);
    }

    #[test]
    fn test_activation() {
        let enabled = [true, false];
        let rects = button_column(2, 100.0, 200.0, 50.0, 10.0);
        let cursor = MenuCursor::default();

        let enter = FrameInput::default().with_pressed(&[Action::Confirm]);
        assert_eq!(cursor.activated(&enter, &enabled, &rects), Some(0));

        let r = rects[1];
        let click = FrameInput::default().with_mouse(MouseState { x: r.center_x(), y: r.center_y(), left_pressed: true, ..Default::default() });
        assert_eq!(cursor.activated(&click, &enabled, &rects), None);
    }
}
