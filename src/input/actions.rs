//! Game action definitions
//!
//! Keyboard:
//! - WASD / arrows = move (arrows also navigate menus)
//! - F = interact, E = inventory, R = notebook, M = map
//! - Enter = confirm, Esc = back, F3 = collision debug overlay
//! - 1..8 = jump straight to a scene
//!
//! Gamepad (Xbox names):
//! - Left stick / D-pad = move and navigate
//! - A = interact / confirm, B = back
//! - X = inventory, Y = notebook, Select = map

/// All discrete actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Menu navigation (pressed)
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    Confirm,
    Back,

    // Exploration
    Interact,
    ToggleInventory,
    ToggleNotebook,
    ToggleMap,
    ToggleDebug,
}

impl Action {
    /// Actions checked for a press edge every frame
    pub const PRESSABLE: [Action; 11] = [
        Action::MenuUp,
        Action::MenuDown,
        Action::MenuLeft,
        Action::MenuRight,
        Action::Confirm,
        Action::Back,
        Action::Interact,
        Action::ToggleInventory,
        Action::ToggleNotebook,
        Action::ToggleMap,
        Action::ToggleDebug,
    ];
}
