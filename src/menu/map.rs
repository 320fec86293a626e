//! City map popup
//!
//! One button per scene laid out in two columns. Picking one travels
//! there; the current scene is highlighted.

use macroquad::prelude::*;

use crate::input::{Action, FrameInput};
use crate::scene::SceneId;
use crate::ui::{self, MouseState, Rect};

const PANEL: Rect = Rect::new(340.0, 110.0, 600.0, 500.0);
const BUTTON_W: f32 = 240.0;
const BUTTON_H: f32 = 70.0;
const GAP: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum MapAction {
    None,
    Go(SceneId),
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct MapPopup {
    pub open: bool,
}

impl MapPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn button_rect(id: SceneId) -> Rect {
        let i = id.index();
        let col = (i % 2) as f32;
        let row = (i / 2) as f32;
        let grid_w = BUTTON_W * 2.0 + GAP;
        let x = PANEL.center_x() - grid_w * 0.5 + col * (BUTTON_W + GAP);
        let y = PANEL.y + 80.0 + row * (BUTTON_H + GAP);
        Rect::new(x, y, BUTTON_W, BUTTON_H)
    }

    pub fn close_rect() -> Rect {
        Rect::new(PANEL.right() - 44.0, PANEL.y + 8.0, 36.0, 36.0)
    }

    pub fn handle_input(&mut self, input: &FrameInput) -> MapAction {
        if input.pressed(Action::Back) || input.pressed(Action::ToggleMap) || input.mouse.clicked(&Self::close_rect()) {
            self.open = false;
            return MapAction::Close;
        }
        let target = SceneId::ALL
            .into_iter()
            .find(|id| input.mouse.clicked(&Self::button_rect(*id)))
            .or_else(|| input.scene_key.and_then(SceneId::from_number_key));
        match target {
            Some(id) => {
                self.open = false;
                MapAction::Go(id)
            }
            None => MapAction::None,
        }
    }

    pub fn draw(&self, current: SceneId, mouse: &MouseState) {
        ui::draw_dim_overlay();
        ui::draw_panel(PANEL, ui::PANEL_BG, ui::PANEL_BORDER);
        ui::draw_text_centered("CITY MAP", PANEL.center_x(), PANEL.y + 40.0, ui::FONT_SIZE_HEADER, ui::ACCENT_COLOR);
        ui::close_button(mouse, Self::close_rect());

        for id in SceneId::ALL {
            let label = format!("{}. {}", id.index() + 1, id.label());
            ui::text_button_highlighted(mouse, Self::button_rect(id), &label, true, id == current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(r: Rect) -> FrameInput {
        FrameInput::default().with_mouse(MouseState { x: r.center_x(), y: r.center_y(), left_pressed: true, ..Default::default() })
    }

    #[test]
    fn test_click_travels_and_closes() {
        let mut map = MapPopup::new();
        map.toggle();
        let action = map.handle_input(&click(MapPopup::button_rect(SceneId::Lust)));
        assert_eq!(action, MapAction::Go(SceneId::Lust));
        assert!(!map.open);
    }

    #[test]
    fn test_close() {
        let mut map = MapPopup::new();
        map.toggle();
        assert_eq!(map.handle_input(&click(MapPopup::close_rect())), MapAction::Close);
        assert!(!map.open);

        map.toggle();
        let esc = FrameInput::default().with_pressed(&[Action::Back]);
        assert_eq!(map.handle_input(&esc), MapAction::Close);
    }

    #[test]
    fn test_number_key_matches_button_label() {
        let mut map = MapPopup::new();
        map.toggle();
        let mut input = FrameInput::default();
        input.scene_key = Some(8);
        assert_eq!(map.handle_input(&input), MapAction::Go(SceneId::Pride));

        map.toggle();
        input.scene_key = Some(9);
        assert_eq!(map.handle_input(&input), MapAction::None);
        assert!(map.open);
    }

    #[test]
    fn test_buttons_inside_panel_and_disjoint() {
        for (i, a) in SceneId::ALL.iter().enumerate() {
            let r = MapPopup::button_rect(*a);
            assert!(r.x >= PANEL.x && r.right() <= PANEL.right());
            assert!(r.y >= PANEL.y && r.bottom() <= PANEL.bottom());
            for b in SceneId::ALL.iter().skip(i + 1) {
                assert!(!r.overlaps(&MapPopup::button_rect(*b)));
            }
        }
    }
}
