//! Title screen

use macroquad::prelude::*;

use super::{button_column, MenuCursor};
use crate::config::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::input::{Action, FrameInput};
use crate::ui::{self, MouseState, Rect};

const LABELS: [&str; 4] = ["New Game", "Continue", "Settings", "Quit"];

#[derive(Debug, Clone, PartialEq)]
pub enum MainMenuAction {
    None,
    NewGame,
    Continue,
    Settings,
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct MainMenu {
    cursor: MenuCursor,
    /// Continue is only offered once a game is running
    pub can_continue: bool,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.cursor.selected
    }

    pub fn button_rects() -> Vec<Rect> {
        button_column(LABELS.len(), 320.0, 320.0, 56.0, 16.0)
    }

    fn enabled(&self) -> [bool; 4] {
        [true, self.can_continue, true, true]
    }

    pub fn handle_input(&mut self, input: &FrameInput) -> MainMenuAction {
        let rects = Self::button_rects();
        let enabled = self.enabled();
        self.cursor.navigate(input, &enabled, &rects);

        match self.cursor.activated(input, &enabled, &rects) {
            Some(0) => MainMenuAction::NewGame,
            Some(1) => MainMenuAction::Continue,
            Some(2) => MainMenuAction::Settings,
            Some(3) => MainMenuAction::Quit,
            _ if input.pressed(Action::Back) && self.can_continue => MainMenuAction::Continue,
            _ => MainMenuAction::None,
        }
    }

    pub fn draw(&self, mouse: &MouseState) {
        draw_rectangle(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT, ui::BG_COLOR);
        ui::draw_text_centered("THE SE7ENTH CODE", SCENE_WIDTH * 0.5, 170.0, ui::FONT_SIZE_TITLE, ui::ACCENT_COLOR);
        ui::draw_text_centered(
            "Seven sins. One killer.",
            SCENE_WIDTH * 0.5,
            225.0,
            ui::FONT_SIZE_CONTENT,
            ui::TEXT_DIM,
        );

        let enabled = self.enabled();
        for (i, rect) in Self::button_rects().into_iter().enumerate() {
            ui::text_button_highlighted(mouse, rect, LABELS[i], enabled[i], i == self.cursor.selected);
        }

        ui::draw_text_centered(
            "Arrows: select   Enter: confirm",
            SCENE_WIDTH * 0.5,
            SCENE_HEIGHT - 40.0,
            ui::FONT_SIZE_SMALL,
            ui::TEXT_DIM,
        );
    }
}
