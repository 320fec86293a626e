//! Scene Collision
//!
//! Two independent blockers per scene:
//! - an obstacle registry of axis-aligned rects taken from furniture placements
//! - a wall mask, one bit per pixel, built from a color-keyed wall image
//!
//! A rect collides if either one reports overlap. The resolver on top of
//! that turns a blocked move into a slide along the wall, a small deflection
//! around a corner, or a full stop.

use image::{imageops::FilterType, DynamicImage};
use serde::{Deserialize, Serialize};

use crate::ui::Rect;

/// Anything that can answer "is this rect blocked?"
pub trait Collider {
    fn check_collision(&self, rect: &Rect) -> bool;

    /// Area the player must stay inside, if any
    fn bounds(&self) -> Option<Rect> {
        None
    }
}

// =============================================================================
// Wall mask
// =============================================================================

/// Per-pixel solidity bitmap covering the whole scene surface
#[derive(Debug, Clone)]
pub struct WallMask {
    width: usize,
    height: usize,
    /// Row-major bitset, 64 pixels per word
    words: Vec<u64>,
}

impl WallMask {
    /// Mask with no solid pixels
    pub fn empty(width: usize, height: usize) -> Self {
        let words = (width * height).div_ceil(64);
        Self { width, height, words: vec![0; words] }
    }

    /// Build a mask from a wall image scaled to `width` x `height`.
    ///
    /// Black is the color key: black or transparent pixels are walkable,
    /// everything else is solid.
    pub fn from_image(img: &DynamicImage, width: u32, height: u32) -> Self {
        let rgba = img.to_rgba8();
        let scaled = if rgba.width() == width && rgba.height() == height {
            rgba
        } else {
            image::imageops::resize(&rgba, width, height, FilterType::Nearest)
        };

        let mut mask = Self::empty(width as usize, height as usize);
        for (x, y, px) in scaled.enumerate_pixels() {
            let [r, g, b, a] = px.0;
            if a > 127 && (r, g, b) != (0, 0, 0) {
                mask.set(x as usize, y as usize, true);
            }
        }
        mask
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set(&mut self, x: usize, y: usize, solid: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = y * self.width + x;
        if solid {
            self.words[i / 64] |= 1 << (i % 64);
        } else {
            self.words[i / 64] &= !(1 << (i % 64));
        }
    }

    /// Pixel lookup. Outside the mask counts as free.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let i = y * self.width + x;
        self.words[i / 64] & (1 << (i % 64)) != 0
    }

    /// Number of solid pixels
    pub fn solid_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True if any solid pixel lies under the rect's footprint.
    ///
    /// The footprint covers pixel columns `floor(x)..ceil(right)` and rows
    /// `floor(y)..ceil(bottom)`, clipped to the mask.
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        if rect.is_empty() || self.solid_count_is_zero() {
            return false;
        }
        let x0 = rect.x.floor().max(0.0) as usize;
        let y0 = rect.y.floor().max(0.0) as usize;
        let x1 = (rect.right().ceil().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().ceil().max(0.0) as usize).min(self.height);

        (y0..y1).any(|y| (x0..x1).any(|x| self.get(x, y)))
    }

    fn solid_count_is_zero(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// RGBA8 overlay with `color` on solid pixels, transparent elsewhere
    pub fn overlay_rgba(&self, color: [u8; 4]) -> Vec<u8> {
        let mut out = vec![0u8; self.width * self.height * 4];
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    let i = (y * self.width + x) * 4;
                    out[i..i + 4].copy_from_slice(&color);
                }
            }
        }
        out
    }
}

// =============================================================================
// Obstacle registry
// =============================================================================

/// Ordered list of blocking rects for one scene
#[derive(Debug, Clone, Default)]
pub struct ObstacleRegistry {
    rects: Vec<Rect>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    pub fn from_rects(rects: impl IntoIterator<Item = Rect>) -> Self {
        let mut registry = Self::new();
        registry.rebuild(rects);
        registry
    }

    /// Replace every rect, keeping the given order
    pub fn rebuild(&mut self, rects: impl IntoIterator<Item = Rect>) {
        self.rects.clear();
        self.rects.extend(rects);
    }

    /// Linear scan, no spatial index
    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.rects.iter().any(|r| r.overlaps(rect))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

// =============================================================================
// Combined world
// =============================================================================

/// Obstacle rects plus wall mask for one scene
#[derive(Debug, Clone)]
pub struct CollisionWorld {
    pub obstacles: ObstacleRegistry,
    pub mask: WallMask,
}

impl CollisionWorld {
    pub fn new(obstacles: ObstacleRegistry, mask: WallMask) -> Self {
        Self { obstacles, mask }
    }
}

impl Collider for CollisionWorld {
    fn check_collision(&self, rect: &Rect) -> bool {
        self.obstacles.overlaps(rect) || self.mask.overlaps_rect(rect)
    }

    /// The mask always covers the whole scene
    fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, self.mask.width() as f32, self.mask.height() as f32))
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Deflection constants used when both axis slides are blocked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionTuning {
    /// Perpendicular nudge in pixels
    pub nudge_px: f32,
    /// Fraction of the blocked step taken while nudging
    pub step_fraction: f32,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self { nudge_px: 3.0, step_fraction: 0.5 }
    }
}

/// Decide where the player ends up after trying to move to `desired`.
///
/// Order is fixed: full move, X-slide, Y-slide, deflection, full stop.
/// Deflection never leaves the collider's bounds. Pure function of its inputs.
pub fn resolve_movement<C: Collider + ?Sized>(
    world: &C,
    desired: &Rect,
    old: (f32, f32),
    tuning: &CollisionTuning,
) -> (f32, f32) {
    let (old_x, old_y) = old;
    let free = |x: f32, y: f32| !world.check_collision(&desired.moved_to(x, y));

    if free(desired.x, desired.y) {
        return (desired.x, desired.y);
    }

    let dx = desired.x - old_x;
    let dy = desired.y - old_y;
    if dx == 0.0 && dy == 0.0 {
        return old;
    }

    // Slide along a horizontal wall
    if free(desired.x, old_y) {
        return (desired.x, old_y);
    }
    // Slide along a vertical wall
    if free(old_x, desired.y) {
        return (old_x, desired.y);
    }

    let nudge = tuning.nudge_px;
    let step = tuning.step_fraction;
    let mut candidates: Vec<(f32, f32)> = Vec::with_capacity(4);
    if dx != 0.0 {
        candidates.push((old_x + dx * step, old_y - nudge));
        candidates.push((old_x + dx * step, old_y + nudge));
    }
    if dy != 0.0 {
        candidates.push((old_x - nudge, old_y + dy * step));
        candidates.push((old_x + nudge, old_y + dy * step));
    }
    let bounds = world.bounds();
    let in_bounds = |x: f32, y: f32| {
        bounds.map_or(true, |b| x >= b.x && y >= b.y && x + desired.w <= b.right() && y + desired.h <= b.bottom())
    };
    if let Some(pos) = candidates.into_iter().find(|&(x, y)| in_bounds(x, y) && free(x, y)) {
        return pos;
    }

    old
}
