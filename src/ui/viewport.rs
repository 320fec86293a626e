//! Letterboxed mapping from the fixed logical scene to the window

use macroquad::prelude::*;

use crate::config::{SCENE_HEIGHT, SCENE_WIDTH};

/// Uniform scale plus centering offset, recomputed when the window resizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Viewport {
    pub fn fit(screen_w: f32, screen_h: f32) -> Self {
        let scale = (screen_w / SCENE_WIDTH).min(screen_h / SCENE_HEIGHT).max(0.01);
        Self {
            scale,
            offset_x: ((screen_w - SCENE_WIDTH * scale) * 0.5).max(0.0),
            offset_y: ((screen_h - SCENE_HEIGHT * scale) * 0.5).max(0.0),
        }
    }

    pub fn current() -> Self {
        Self::fit(screen_width(), screen_height())
    }

    /// Window pixel -> logical coordinate
    pub fn to_logical(&self, sx: f32, sy: f32) -> (f32, f32) {
        ((sx - self.offset_x) / self.scale, (sy - self.offset_y) / self.scale)
    }

    /// Camera drawing the logical scene into the letterboxed area
    pub fn camera(&self) -> Camera2D {
        let mut camera = Camera2D::from_display_rect(macroquad::math::Rect::new(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT));
        camera.viewport = Some((
            self.offset_x as i32,
            self.offset_y as i32,
            (SCENE_WIDTH * self.scale) as i32,
            (SCENE_HEIGHT * self.scale) as i32,
        ));
        camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_window_pillarboxes() {
        let v = Viewport::fit(2560.0 + 200.0, 1440.0);
        assert!((v.scale - 2.0).abs() < 0.001);
        assert!((v.offset_x - 100.0).abs() < 0.001);
        assert_eq!(v.offset_y, 0.0);
    }

    #[test]
    fn test_to_logical() {
        let v = Viewport::fit(640.0, 360.0 + 40.0);
        let (x, y) = v.to_logical(320.0, 200.0);
        assert!((x - 640.0).abs() < 0.01);
        assert!((y - 360.0).abs() < 0.01);
    }
}
