//! Gamepad support
//!
//! Native: gilrs, polled once per frame into a button bitmask.
//! WASM: no gamepad backend, every query reports nothing pressed.

use macroquad::prelude::Vec2;

// Standard gamepad button indices (Xbox layout)
pub mod button {
    pub const A: u32 = 0;           // South: interact / confirm
    pub const B: u32 = 1;           // East: back
    pub const X: u32 = 2;           // West: inventory
    pub const Y: u32 = 3;           // North: notebook
    pub const SELECT: u32 = 8;      // Map
    pub const START: u32 = 9;       // Confirm in menus
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Buttons held this frame and last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMasks {
    pub current: u32,
    pub previous: u32,
}

impl ButtonMasks {
    pub fn advance(&mut self, current: u32) {
        self.previous = self.current;
        self.current = current;
    }

    pub fn down(&self, button: u32) -> bool {
        self.current & (1 << button) != 0
    }

    /// Rising edge since the last poll
    pub fn pressed(&self, button: u32) -> bool {
        self.down(button) && self.previous & (1 << button) == 0
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
        deadzone: f32,
        masks: ButtonMasks,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    eprintln!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs, deadzone: 0.15, masks: ButtonMasks::default() }
        }

        /// Drain gilrs events and latch this frame's buttons
        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                while gilrs.next_event().is_some() {}
            }
            let mask = self.read_button_mask();
            self.masks.advance(mask);
        }

        pub fn has_gamepad(&self) -> bool {
            self.active().is_some()
        }

        fn active(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        fn read_button_mask(&self) -> u32 {
            let Some(gp) = self.active() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << button::A; }
            if gp.is_pressed(GilrsButton::East) { mask |= 1 << button::B; }
            if gp.is_pressed(GilrsButton::West) { mask |= 1 << button::X; }
            if gp.is_pressed(GilrsButton::North) { mask |= 1 << button::Y; }
            if gp.is_pressed(GilrsButton::Select) { mask |= 1 << button::SELECT; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << button::START; }
            if gp.is_pressed(GilrsButton::DPadUp) { mask |= 1 << button::DPAD_UP; }
            if gp.is_pressed(GilrsButton::DPadDown) { mask |= 1 << button::DPAD_DOWN; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << button::DPAD_RIGHT; }

            mask
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            self.masks.down(button)
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            self.masks.pressed(button)
        }

        /// Left stick, +y is down
        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY);
            apply_deadzone(x, y, self.deadzone)
        }
    }
}

// ============================================================================
// WASM: keyboard and mouse only
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Apply radial deadzone with linear rescaling
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_is_rising_edge() {
        let mut masks = ButtonMasks::default();
        masks.advance(1 << button::A);
        assert!(masks.pressed(button::A));
        masks.advance(1 << button::A);
        assert!(masks.down(button::A));
        assert!(!masks.pressed(button::A));
        masks.advance(0);
        masks.advance(1 << button::A | 1 << button::B);
        assert!(masks.pressed(button::A));
        assert!(masks.pressed(button::B));
    }

    #[test]
    fn test_deadzone() {
        assert_eq!(apply_deadzone(0.1, 0.0, 0.15), Vec2::ZERO);
        let v = apply_deadzone(1.0, 0.0, 0.15);
        assert!((v.x - 1.0).abs() < 0.001);
    }
}
