//! Player character
//!
//! Movement, facing, and sprite-sheet animation. Collision is not handled
//! here: the scene resolves the moved rect against its geometry afterwards.

use macroquad::prelude::*;

use crate::config::{DirectionLayout, FrameStrip, PlayerSettings};
use crate::ui::Rect;

/// Facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// Facing for a movement axis (+y is down). Horizontal input wins over
    /// vertical, right over left, down over up.
    pub fn from_axis(axis: Vec2) -> Option<Self> {
        if axis.x > 0.0 {
            Some(Direction::Right)
        } else if axis.x < 0.0 {
            Some(Direction::Left)
        } else if axis.y > 0.0 {
            Some(Direction::Down)
        } else if axis.y < 0.0 {
            Some(Direction::Up)
        } else {
            None
        }
    }

    fn strip(self, layout: &DirectionLayout) -> &FrameStrip {
        match self {
            Direction::Down => &layout.down,
            Direction::Right => &layout.right,
            Direction::Up => &layout.up,
            Direction::Left => &layout.left,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub rect: Rect,
    pub direction: Direction,
    pub moving: bool,
    pub animation_frame: usize,
    animation_counter: f32,
}

impl Player {
    pub fn new(settings: &PlayerSettings, x: f32, y: f32) -> Self {
        let (w, h) = settings.size();
        Self {
            x,
            y,
            rect: Rect::new(x, y, w, h),
            direction: Direction::Down,
            moving: false,
            animation_frame: 0,
            animation_counter: 0.0,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Teleport, keeping the rect in sync
    pub fn place_at(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Step along `axis` for `dt` seconds, clamped to `bounds`.
    ///
    /// `speed` is in pixels per frame at 60 FPS, so the game moves at the
    /// same rate whatever the frame cap.
    pub fn apply_movement(&mut self, axis: Vec2, dt: f32, speed: f32, bounds: &Rect) {
        self.moving = false;
        if let Some(direction) = Direction::from_axis(axis) {
            self.direction = direction;
            self.moving = true;
        }

        let step = speed * dt * 60.0;
        let max_x = (bounds.right() - self.rect.w).max(bounds.x);
        let max_y = (bounds.bottom() - self.rect.h).max(bounds.y);
        let x = (self.x + axis.x * step).clamp(bounds.x, max_x);
        let y = (self.y + axis.y * step).clamp(bounds.y, max_y);
        self.place_at(x, y);
    }

    /// Advance the walk or idle animation by one frame tick
    pub fn tick_animation(&mut self, settings: &PlayerSettings) {
        let (speed, layout) = if self.moving {
            (settings.animation_speed, &settings.walk_layout)
        } else {
            (settings.idle_animation_speed, &settings.idle_layout)
        };

        self.animation_counter += speed;
        if self.animation_counter >= 1.0 {
            self.animation_counter = 0.0;
            let frames = self.direction.strip(layout).cols.len();
            if frames > 0 {
                self.animation_frame = (self.animation_frame + 1) % frames;
            }
        }
    }

    /// Source rect of the current frame inside the sprite sheet
    pub fn frame_source(&self, settings: &PlayerSettings) -> Option<Rect> {
        let layout = if self.moving { &settings.walk_layout } else { &settings.idle_layout };
        let strip = self.direction.strip(layout);
        if strip.cols.is_empty() {
            return None;
        }
        let col = strip.cols[self.animation_frame % strip.cols.len()] as f32;
        let row = strip.row as f32;
        let w = settings.sprite_width;
        let h = settings.sprite_height;
        Some(Rect::new(
            col * (w + settings.col_spacing),
            settings.row_spacing + row * (h + settings.row_spacing),
            w,
            h,
        ))
    }

    pub fn draw(&self, sheet: Option<&Texture2D>, settings: &PlayerSettings) {
        let r = self.rect;
        match (sheet, self.frame_source(settings)) {
            (Some(tex), Some(src)) => {
                draw_texture_ex(
                    tex,
                    r.x,
                    r.y,
                    WHITE,
                    DrawTextureParams {
                        source: Some(macroquad::math::Rect::new(src.x, src.y, src.w, src.h)),
                        dest_size: Some(vec2(r.w, r.h)),
                        ..Default::default()
                    },
                );
            }
            _ => self.draw_fallback(),
        }

        // Footsteps
        if self.moving && (self.animation_frame == 1 || self.animation_frame == 3) {
            let (cx, cy) = (r.center_x(), r.center_y());
            let foot = 6.0;
            match self.direction {
                Direction::Down | Direction::Up => {
                    draw_circle(cx - foot, r.bottom(), 2.0, WHITE);
                    draw_circle(cx + foot, r.bottom(), 2.0, WHITE);
                }
                Direction::Left | Direction::Right => {
                    draw_circle(cx, cy - foot, 2.0, WHITE);
                    draw_circle(cx, cy + foot, 2.0, WHITE);
                }
            }
        }
    }

    /// Blue block with a yellow arrow for the facing direction
    fn draw_fallback(&self) {
        let r = self.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, BLUE);

        let (cx, cy) = (r.center_x(), r.center_y());
        let (tip, a, b) = match self.direction {
            Direction::Down => (vec2(cx, r.bottom()), vec2(cx - 5.0, cy), vec2(cx + 5.0, cy)),
            Direction::Right => (vec2(r.right(), cy), vec2(cx, cy - 5.0), vec2(cx, cy + 5.0)),
            Direction::Up => (vec2(cx, r.y), vec2(cx - 5.0, cy), vec2(cx + 5.0, cy)),
            Direction::Left => (vec2(r.x, cy), vec2(cx, cy - 5.0), vec2(cx, cy + 5.0)),
        };
        draw_triangle(tip, a, b, YELLOW);
    }
}
