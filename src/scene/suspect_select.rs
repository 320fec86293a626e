//! Suspect selection popup
//!
//! Shown when the detective uses the interrogation door in the office.
//! Each suspect has their own interrogation room background.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::config::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::input::{Action, FrameInput};
use crate::ui::{self, MouseState, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuspectCard {
    pub name: &'static str,
    pub avatar: &'static str,
    pub background: &'static str,
}

pub const INTERROGATION_SUSPECTS: [SuspectCard; 3] = [
    SuspectCard {
        name: "Suspect A",
        avatar: "assets/images/avatars/avatar1.png",
        background: "assets/images/scenes/interrogation-bg.png",
    },
    SuspectCard {
        name: "Suspect B",
        avatar: "assets/images/avatars/avatar2.png",
        background: "assets/images/scenes/interrogation-bg2.png",
    },
    SuspectCard {
        name: "Suspect C",
        avatar: "assets/images/avatars/avatar3.png",
        background: "assets/images/scenes/interrogation-bg3.png",
    },
];

const CARD_W: f32 = 150.0;
const CARD_H: f32 = 140.0;
const CARD_GAP: f32 = 40.0;

/// Result of one frame of popup input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SuspectChoice {
    None,
    Close,
    /// Interrogate using this background
    Interrogate(&'static str),
}

#[derive(Debug, Clone, Default)]
pub struct SuspectSelect {
    pub open: bool,
    selected: usize,
}

impl SuspectSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn card_rect(index: usize) -> Rect {
        let n = INTERROGATION_SUSPECTS.len() as f32;
        let total = CARD_W * n + CARD_GAP * (n - 1.0);
        let start_x = (SCENE_WIDTH - total) * 0.5;
        Rect::new(start_x + index as f32 * (CARD_W + CARD_GAP), SCENE_HEIGHT * 0.5 - 20.0, CARD_W, CARD_H)
    }

    fn choose(&mut self, index: usize) -> SuspectChoice {
        self.open = false;
        let card = &INTERROGATION_SUSPECTS[index];
        println!("Interrogating {}", card.name);
        SuspectChoice::Interrogate(card.background)
    }

    pub fn handle_input(&mut self, input: &FrameInput) -> SuspectChoice {
        let n = INTERROGATION_SUSPECTS.len();
        if input.pressed(Action::Back) {
            self.open = false;
            return SuspectChoice::Close;
        }
        if input.pressed(Action::MenuLeft) {
            self.selected = (self.selected + n - 1) % n;
        }
        if input.pressed(Action::MenuRight) {
            self.selected = (self.selected + 1) % n;
        }
        if let Some(i) = (0..n).find(|&i| input.mouse.clicked(&Self::card_rect(i))) {
            self.selected = i;
            return self.choose(i);
        }
        if input.pressed(Action::Confirm) {
            return self.choose(self.selected);
        }
        SuspectChoice::None
    }

    pub fn draw(&self, assets: &Assets, mouse: &MouseState) {
        ui::draw_dim_overlay();
        let cx = SCENE_WIDTH * 0.5;
        let cy = SCENE_HEIGHT * 0.5;
        ui::draw_text_centered("SELECT SUSPECT TO INTERROGATE", cx, cy - 120.0, ui::FONT_SIZE_HEADER, YELLOW);

        for (i, card) in INTERROGATION_SUSPECTS.iter().enumerate() {
            let r = Self::card_rect(i);
            let selected = i == self.selected;
            let bg = if selected || mouse.inside(&r) { ui::BUTTON_HOVER } else { ui::BUTTON_BG };
            let border = if selected { YELLOW } else { ui::PANEL_BORDER };
            ui::draw_panel(r, bg, border);

            let icon = Rect::new(r.center_x() - 40.0, r.y + 12.0, 80.0, 80.0);
            match assets.texture(card.avatar) {
                Some(tex) => draw_texture_ex(tex, icon.x, icon.y, WHITE, DrawTextureParams {
                    dest_size: Some(vec2(icon.w, icon.h)),
                    ..Default::default()
                }),
                None => draw_rectangle(icon.x, icon.y, icon.w, icon.h, ui::TEXT_DIM),
            }
            ui::draw_text_centered(card.name, r.center_x(), r.bottom() - 22.0, ui::FONT_SIZE_SMALL, WHITE);
        }

        ui::draw_text_centered(
            "LEFT/RIGHT to select, ENTER to confirm, ESC to cancel",
            cx,
            cy + 160.0,
            ui::FONT_SIZE_SMALL,
            ui::TEXT_DIM,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(popup: &mut SuspectSelect, actions: &[Action]) -> SuspectChoice {
        popup.handle_input(&FrameInput::default().with_pressed(actions))
    }

    #[test]
    fn test_cycle_and_confirm() {
        let mut popup = SuspectSelect::new();
        popup.show();
        press(&mut popup, &[Action::MenuLeft]);
        assert_eq!(popup.selected(), 2);
        press(&mut popup, &[Action::MenuRight]);
        press(&mut popup, &[Action::MenuRight]);
        assert_eq!(popup.selected(), 1);

        let choice = press(&mut popup, &[Action::Confirm]);
        assert_eq!(choice, SuspectChoice::Interrogate("assets/images/scenes/interrogation-bg2.png"));
        assert!(!popup.open);
    }

    #[test]
    fn test_escape_hides() {
        let mut popup = SuspectSelect::new();
        popup.show();
        assert_eq!(press(&mut popup, &[Action::Back]), SuspectChoice::Close);
        assert!(!popup.open);
    }

    #[test]
    fn test_click_picks_card() {
        let mut popup = SuspectSelect::new();
        popup.show();
        let r = SuspectSelect::card_rect(2);
        let mouse = MouseState { x: r.center_x(), y: r.center_y(), left_pressed: true, ..Default::default() };
        let choice = popup.handle_input(&FrameInput::default().with_mouse(mouse));
        assert_eq!(choice, SuspectChoice::Interrogate("assets/images/scenes/interrogation-bg3.png"));
    }

    #[test]
    fn test_cards_centered() {
        let first = SuspectSelect::card_rect(0);
        let last = SuspectSelect::card_rect(2);
        assert_eq!(first.x, SCENE_WIDTH - last.right());
    }
}
