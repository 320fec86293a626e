//! "Are you sure?" dialog shown before leaving a running game

use macroquad::prelude::*;

use crate::input::{Action, FrameInput};
use crate::ui::{self, MouseState, Rect};

const DIALOG: Rect = Rect::new(440.0, 250.0, 400.0, 220.0);
const YES: Rect = Rect::new(480.0, 380.0, 140.0, 50.0);
const NO: Rect = Rect::new(660.0, 380.0, 140.0, 50.0);

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    None,
    Yes,
    No,
}

#[derive(Debug, Clone, Default)]
pub struct QuitConfirm {
    pub open: bool,
    /// Keyboard focus on "Yes"; starts on "No"
    yes_focused: bool,
}

impl QuitConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.open = true;
        self.yes_focused = false;
    }

    pub fn yes_focused(&self) -> bool {
        self.yes_focused
    }

    pub fn handle_input(&mut self, input: &FrameInput) -> ConfirmAction {
        if input.pressed(Action::MenuLeft) || input.pressed(Action::MenuRight) {
            self.yes_focused = !self.yes_focused;
        }

        let action = if input.mouse.clicked(&YES) {
            ConfirmAction::Yes
        } else if input.mouse.clicked(&NO) || input.pressed(Action::Back) {
            ConfirmAction::No
        } else if input.pressed(Action::Confirm) {
            if self.yes_focused { ConfirmAction::Yes } else { ConfirmAction::No }
        } else {
            ConfirmAction::None
        };

        if action != ConfirmAction::None {
            self.open = false;
        }
        action
    }

    pub fn draw(&self, mouse: &MouseState) {
        ui::draw_dim_overlay();
        ui::draw_panel(DIALOG, ui::PANEL_BG, ui::PANEL_BORDER);
        ui::draw_text_centered("Are you sure?", DIALOG.center_x(), DIALOG.y + 50.0, ui::FONT_SIZE_HEADER, ui::TEXT_COLOR);
        ui::draw_text_centered(
            "Progress in this case will be kept.",
            DIALOG.center_x(),
            DIALOG.y + 92.0,
            ui::FONT_SIZE_SMALL,
            ui::TEXT_DIM,
        );
        ui::text_button_highlighted(mouse, YES, "Yes", true, self.yes_focused);
        ui::text_button_highlighted(mouse, NO, "No", true, !self.yes_focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(dialog: &mut QuitConfirm, actions: &[Action]) -> ConfirmAction {
        dialog.handle_input(&FrameInput::default().with_pressed(actions))
    }

    #[test]
    fn test_enter_defaults_to_no() {
        let mut dialog = QuitConfirm::new();
        dialog.show();
        assert_eq!(press(&mut dialog, &[Action::Confirm]), ConfirmAction::No);
        assert!(!dialog.open);
    }

    #[test]
    fn test_left_right_then_enter() {
        let mut dialog = QuitConfirm::new();
        dialog.show();
        assert_eq!(press(&mut dialog, &[Action::MenuLeft]), ConfirmAction::None);
        assert!(dialog.yes_focused());
        assert!(dialog.open);
        assert_eq!(press(&mut dialog, &[Action::Confirm]), ConfirmAction::Yes);

        // Reopening resets focus
        dialog.show();
        assert!(!dialog.yes_focused());
    }

    #[test]
    fn test_mouse_and_escape() {
        let mut dialog = QuitConfirm::new();
        dialog.show();
        let mouse = MouseState { x: YES.center_x(), y: YES.center_y(), left_pressed: true, ..Default::default() };
        assert_eq!(dialog.handle_input(&FrameInput::default().with_mouse(mouse)), ConfirmAction::Yes);

        dialog.show();
        assert_eq!(press(&mut dialog, &[Action::Back]), ConfirmAction::No);
    }
}
