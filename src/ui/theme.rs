//! UI Theme - Shared colors and styling constants
//!
//! Noir palette used by menus, the HUD, and the case overlays.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Letterbox / menu background
pub const BG_COLOR: Color = Color::new(0.07, 0.07, 0.09, 1.0);

/// Modal panel background
pub const PANEL_BG: Color = Color::new(0.12, 0.12, 0.15, 0.96);

/// Modal panel border
pub const PANEL_BORDER: Color = Color::new(0.45, 0.38, 0.22, 1.0);

/// Dim layer behind modals
pub const OVERLAY_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.6);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.88, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.55, 0.55, 0.58, 1.0);

/// Gold accent for titles and selection
pub const ACCENT_COLOR: Color = Color::new(0.86, 0.7, 0.3, 1.0);

pub const SUCCESS_COLOR: Color = Color::new(0.35, 0.85, 0.4, 1.0);
pub const DANGER_COLOR: Color = Color::new(0.9, 0.25, 0.25, 1.0);

// =============================================================================
// Buttons
// =============================================================================

pub const BUTTON_BG: Color = Color::new(0.2, 0.2, 0.24, 1.0);
pub const BUTTON_HOVER: Color = Color::new(0.3, 0.27, 0.2, 1.0);
pub const BUTTON_DISABLED: Color = Color::new(0.15, 0.15, 0.17, 1.0);

// =============================================================================
// Scene overlays
// =============================================================================

/// "[F]" prompt text
pub const PROMPT_TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Toast box behind dialogue lines
pub const TOAST_BG: Color = Color::new(0.0, 0.0, 0.0, 0.75);

/// Obstacle rects, outline and translucent fill
pub const DEBUG_OBSTACLE: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const DEBUG_OBSTACLE_FILL: Color = Color::new(1.0, 0.0, 0.0, 0.25);

/// Wall mask overlay (RGBA8, baked into a texture)
pub const DEBUG_MASK_RGBA: [u8; 4] = [0, 120, 255, 110];

/// Interaction zones
pub const DEBUG_ZONE: Color = Color::new(0.0, 1.0, 1.0, 1.0);

/// Y-sort reference lines
pub const DEBUG_SORT: Color = Color::new(0.0, 1.0, 0.0, 0.8);

/// Debug stats line
pub const DEBUG_TEXT: Color = Color::new(1.0, 1.0, 0.0, 1.0);

// =============================================================================
// Notebook
// =============================================================================

pub const PAPER_COLOR: Color = Color::new(0.93, 0.89, 0.78, 1.0);
pub const INK_COLOR: Color = Color::new(0.15, 0.12, 0.1, 1.0);
pub const INK_DIM: Color = Color::new(0.45, 0.4, 0.35, 1.0);
pub const INK_HIGHLIGHT: Color = Color::new(0.65, 0.12, 0.1, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_TITLE: f32 = 56.0;
pub const FONT_SIZE_HEADER: f32 = 32.0;
pub const FONT_SIZE_CONTENT: f32 = 22.0;
pub const FONT_SIZE_SMALL: f32 = 18.0;
