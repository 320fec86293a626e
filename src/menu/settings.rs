//! Settings screen
//!
//! Edits the live `GameConfig` in place. Changes apply immediately; Save
//! writes them to the per-user config file.

use std::path::PathBuf;

use macroquad::prelude::*;

use super::{button_column, MenuCursor};
use crate::config::{user_config_path, GameConfig, SCENE_HEIGHT, SCENE_WIDTH};
use crate::input::{Action, FrameInput};
use crate::ui::{self, MouseState, Rect};

const ROW_COUNT: usize = 5;
const ROW_FPS: usize = 0;
const ROW_FULLSCREEN: usize = 1;
const ROW_DEBUG: usize = 2;
const ROW_SAVE: usize = 3;
const ROW_BACK: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    None,
    /// Fullscreen flag changed; the window needs updating
    FullscreenChanged(bool),
    Back,
}

#[derive(Debug, Clone)]
pub struct SettingsMenu {
    cursor: MenuCursor,
    save_path: Option<PathBuf>,
    /// Result of the last save, shown under the buttons
    pub status: Option<String>,
}

impl Default for SettingsMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsMenu {
    pub fn new() -> Self {
        Self::with_save_path(user_config_path())
    }

    pub fn with_save_path(save_path: Option<PathBuf>) -> Self {
        Self { cursor: MenuCursor::default(), save_path, status: None }
    }

    pub fn selected(&self) -> usize {
        self.cursor.selected
    }

    pub fn button_rects() -> Vec<Rect> {
        button_column(ROW_COUNT, 200.0, 440.0, 56.0, 16.0)
    }

    fn labels(config: &GameConfig) -> [String; ROW_COUNT] {
        let on_off = |b: bool| if b { "On" } else { "Off" };
        [
            format!("FPS Limit: {}", config.fps_limit.label()),
            format!("Fullscreen: {}", on_off(config.window.fullscreen)),
            format!("Debug Overlay on Start: {}", on_off(config.gameplay.debug_on_start)),
            "Save".to_string(),
            "Back".to_string(),
        ]
    }

    pub fn handle_input(&mut self, input: &FrameInput, config: &mut GameConfig) -> SettingsAction {
        if input.pressed(Action::Back) {
            return SettingsAction::Back;
        }

        let rects = Self::button_rects();
        let enabled = [true; ROW_COUNT];
        self.cursor.navigate(input, &enabled, &rects);

        // Left/Right cycle the value under the cursor
        if self.cursor.selected == ROW_FPS {
            if input.pressed(Action::MenuRight) {
                config.fps_limit = config.fps_limit.next();
            }
            if input.pressed(Action::MenuLeft) {
                config.fps_limit = config.fps_limit.prev();
            }
        }

        match self.cursor.activated(input, &enabled, &rects) {
            Some(ROW_FPS) => {
                config.fps_limit = config.fps_limit.next();
                SettingsAction::None
            }
            Some(ROW_FULLSCREEN) => {
                config.window.fullscreen = !config.window.fullscreen;
                SettingsAction::FullscreenChanged(config.window.fullscreen)
            }
            Some(ROW_DEBUG) => {
                config.gameplay.debug_on_start = !config.gameplay.debug_on_start;
                SettingsAction::None
            }
            Some(ROW_SAVE) => {
                self.save(config);
                SettingsAction::None
            }
            Some(ROW_BACK) => SettingsAction::Back,
            _ => SettingsAction::None,
        }
    }

    fn save(&mut self, config: &GameConfig) {
        let Some(path) = self.save_path.as_ref() else {
            self.status = Some("Settings cannot be saved on this platform".to_string());
            return;
        };
        match config.save(path) {
            Ok(()) => {
                println!("Saved config: {}", path.display());
                self.status = Some("Settings saved".to_string());
            }
            Err(e) => {
                eprintln!("Failed to save config {}: {}", path.display(), e);
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }

    pub fn draw(&self, config: &GameConfig, mouse: &MouseState) {
        draw_rectangle(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT, ui::BG_COLOR);
        ui::draw_text_centered("SETTINGS", SCENE_WIDTH * 0.5, 130.0, ui::FONT_SIZE_TITLE, ui::ACCENT_COLOR);

        let labels = Self::labels(config);
        let rects = Self::button_rects();
        for (i, rect) in rects.iter().enumerate() {
            ui::text_button_highlighted(mouse, *rect, &labels[i], true, i == self.cursor.selected);
        }

        if let Some(status) = &self.status {
            let y = rects[ROW_COUNT - 1].bottom() + 40.0;
            ui::draw_text_centered(status, SCENE_WIDTH * 0.5, y, ui::FONT_SIZE_CONTENT, ui::TEXT_COLOR);
        }

        ui::draw_text_centered(
            "Arrows: select / change   Enter: toggle   ESC: back",
            SCENE_WIDTH * 0.5,
            SCENE_HEIGHT - 40.0,
            ui::FONT_SIZE_SMALL,
            ui::TEXT_DIM,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(menu: &mut SettingsMenu, config: &mut GameConfig, actions: &[Action]) -> SettingsAction {
        menu.handle_input(&FrameInput::default().with_pressed(actions), config)
    }

    #[test]
    fn test_fps_cycles_both_ways() {
        let mut menu = SettingsMenu::with_save_path(None);
        let mut config = GameConfig::default();
        let start = config.fps_limit;

        press(&mut menu, &mut config, &[Action::MenuRight]);
        assert_eq!(config.fps_limit, start.next());
        press(&mut menu, &mut config, &[Action::MenuLeft]);
        assert_eq!(config.fps_limit, start);
        press(&mut menu, &mut config, &[Action::Confirm]);
        assert_eq!(config.fps_limit, start.next());
    }

    #[test]
    fn test_toggles() {
        let mut menu = SettingsMenu::with_save_path(None);
        let mut config = GameConfig::default();

        press(&mut menu, &mut config, &[Action::MenuDown]);
        assert_eq!(press(&mut menu, &mut config, &[Action::Confirm]), SettingsAction::FullscreenChanged(true));
        assert!(config.window.fullscreen);

        press(&mut menu, &mut config, &[Action::MenuDown]);
        press(&mut menu, &mut config, &[Action::Confirm]);
        assert!(config.gameplay.debug_on_start);
    }

    #[test]
    fn test_save_writes_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("game.ron");
        let mut menu = SettingsMenu::with_save_path(Some(path.clone()));
        let mut config = GameConfig::default();
        config.gameplay.debug_on_start = true;

        let r = SettingsMenu::button_rects()[ROW_SAVE];
        let mouse = MouseState { x: r.center_x(), y: r.center_y(), left_pressed: true, ..Default::default() };
        menu.handle_input(&FrameInput::default().with_mouse(mouse), &mut config);

        assert_eq!(menu.status.as_deref(), Some("Settings saved"));
        let loaded = GameConfig::load(&path).unwrap();
        assert!(loaded.gameplay.debug_on_start);
    }

    #[test]
    fn test_save_without_path_reports() {
        let mut menu = SettingsMenu::with_save_path(None);
        let mut config = GameConfig::default();
        for _ in 0..ROW_SAVE {
            press(&mut menu, &mut config, &[Action::MenuDown]);
        }
        press(&mut menu, &mut config, &[Action::Confirm]);
        assert!(menu.status.is_some());
    }

    #[test]
    fn test_back() {
        let mut menu = SettingsMenu::with_save_path(None);
        let mut config = GameConfig::default();
        assert_eq!(press(&mut menu, &mut config, &[Action::Back]), SettingsAction::Back);
        press(&mut menu, &mut config, &[Action::MenuUp]);
        assert_eq!(menu.selected(), ROW_BACK);
        assert_eq!(press(&mut menu, &mut config, &[Action::Confirm]), SettingsAction::Back);
    }
}
