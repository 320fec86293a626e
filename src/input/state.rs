//! Input state management
//!
//! Polls both keyboard (macroquad) and gamepad (gilrs) input, combining
//! them into a per-frame snapshot that scene logic reads.

use macroquad::prelude::*;

use super::{button, Action, Gamepad};
use crate::ui::{MouseState, Viewport};

/// Everything a scene needs from input for one frame. Plain data so scene
/// logic can be driven from tests without a window.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pressed: Vec<Action>,
    /// Normalized movement, +y is down
    pub move_axis: Vec2,
    pub mouse: MouseState,
    /// Number key 1..8 pressed this frame
    pub scene_key: Option<u32>,
    /// Seconds since last frame
    pub dt: f32,
}

impl FrameInput {
    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Builder for tests and synthetic frames
    pub fn with_pressed(mut self, actions: &[Action]) -> Self {
        self.pressed.extend_from_slice(actions);
        self
    }

    pub fn with_mouse(mut self, mouse: MouseState) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn with_axis(mut self, axis: Vec2, dt: f32) -> Self {
        self.move_axis = axis;
        self.dt = dt;
        self
    }
}

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame, then read the snapshot
    pub fn poll(&mut self, viewport: &Viewport) -> FrameInput {
        self.gamepad.poll();

        let pressed = Action::PRESSABLE
            .iter()
            .copied()
            .filter(|a| self.action_pressed(*a))
            .collect();

        FrameInput {
            pressed,
            move_axis: self.move_axis(),
            mouse: MouseState::poll(viewport),
            scene_key: scene_key_pressed(),
            dt: get_frame_time().min(0.1),
        }
    }

    /// Movement vector combining keys, D-pad and left stick
    pub fn move_axis(&self) -> Vec2 {
        let mut result = Vec2::ZERO;
        if self.action_down(Action::MoveUp) { result.y -= 1.0; }
        if self.action_down(Action::MoveDown) { result.y += 1.0; }
        if self.action_down(Action::MoveLeft) { result.x -= 1.0; }
        if self.action_down(Action::MoveRight) { result.x += 1.0; }

        // Gamepad left stick (take if larger magnitude)
        let stick = self.gamepad.left_stick();
        if stick.length() > result.length() {
            result = stick;
        }

        // Normalize diagonals
        if result.length() > 1.0 {
            result = result.normalize();
        }
        result
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let gp = &self.gamepad;
        match action {
            Action::MoveUp => gp.is_button_down(button::DPAD_UP),
            Action::MoveDown => gp.is_button_down(button::DPAD_DOWN),
            Action::MoveLeft => gp.is_button_down(button::DPAD_LEFT),
            Action::MoveRight => gp.is_button_down(button::DPAD_RIGHT),
            _ => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        let gp = &self.gamepad;
        match action {
            Action::MenuUp => gp.is_button_pressed(button::DPAD_UP),
            Action::MenuDown => gp.is_button_pressed(button::DPAD_DOWN),
            Action::MenuLeft => gp.is_button_pressed(button::DPAD_LEFT),
            Action::MenuRight => gp.is_button_pressed(button::DPAD_RIGHT),
            Action::Confirm => gp.is_button_pressed(button::A) || gp.is_button_pressed(button::START),
            Action::Interact => gp.is_button_pressed(button::A),
            Action::Back => gp.is_button_pressed(button::B),
            Action::ToggleInventory => gp.is_button_pressed(button::X),
            Action::ToggleNotebook => gp.is_button_pressed(button::Y),
            Action::ToggleMap => gp.is_button_pressed(button::SELECT),
            _ => false,
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn keyboard_down(action: Action) -> bool {
    match action {
        Action::MoveUp => is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        Action::MoveDown => is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        _ => false,
    }
}

fn keyboard_pressed(action: Action) -> bool {
    match action {
        Action::MenuUp => is_key_pressed(KeyCode::Up),
        Action::MenuDown => is_key_pressed(KeyCode::Down),
        Action::MenuLeft => is_key_pressed(KeyCode::Left),
        Action::MenuRight => is_key_pressed(KeyCode::Right),
        Action::Confirm => is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        Action::Back => is_key_pressed(KeyCode::Escape),
        Action::Interact => is_key_pressed(KeyCode::F),
        Action::ToggleInventory => is_key_pressed(KeyCode::E),
        Action::ToggleNotebook => is_key_pressed(KeyCode::R),
        Action::ToggleMap => is_key_pressed(KeyCode::M),
        Action::ToggleDebug => is_key_pressed(KeyCode::F3),
        _ => false,
    }
}

fn scene_key_pressed() -> Option<u32> {
    const KEYS: [KeyCode; 8] = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
        KeyCode::Key7,
        KeyCode::Key8,
    ];
    KEYS.iter().position(|k| is_key_pressed(*k)).map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_input_builder() {
        let input = FrameInput::default()
            .with_pressed(&[Action::Confirm, Action::MenuDown])
            .with_axis(vec2(1.0, 0.0), 0.016);
        assert!(input.pressed(Action::Confirm));
        assert!(input.pressed(Action::MenuDown));
        assert!(!input.pressed(Action::Back));
        assert_eq!(input.move_axis, vec2(1.0, 0.0));
    }
}
