//! Mouse state in logical scene coordinates

use macroquad::prelude::*;

use super::{Rect, Viewport};

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
    pub scroll: f32,        // Scroll wheel delta, positive = up
}

impl MouseState {
    /// Read macroquad's mouse and map it through the letterbox viewport
    pub fn poll(viewport: &Viewport) -> Self {
        let (sx, sy) = mouse_position();
        let (x, y) = viewport.to_logical(sx, sy);
        let wheel = mouse_wheel().1;
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            scroll: if wheel > 0.0 { 1.0 } else if wheel < 0.0 { -1.0 } else { 0.0 },
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_requires_press() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut m = MouseState { x: 5.0, y: 5.0, ..Default::default() };
        assert!(m.inside(&r));
        assert!(!m.clicked(&r));
        m.left_pressed = true;
        assert!(m.clicked(&r));
    }
}
