//! Inventory window
//!
//! Slot grid on the left, details of the selected slot on the right.
//! Arrow keys wrap around the grid; clicking a slot selects it.

use macroquad::prelude::*;

use super::{Inventory, COLS, ROWS, SLOT_COUNT};
use crate::input::{Action, FrameInput};
use crate::ui::{self, MouseState, Rect};

const PANEL: Rect = Rect::new(190.0, 80.0, 900.0, 560.0);
const SLOT_SIZE: f32 = 64.0;
const SLOT_GAP: f32 = 10.0;

#[derive(Debug, Clone, Default)]
pub struct InventoryView {
    pub open: bool,
    selected: usize,
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn slot_rect(index: usize) -> Rect {
        let col = (index % COLS) as f32;
        let row = (index / COLS) as f32;
        Rect::new(
            PANEL.x + 40.0 + col * (SLOT_SIZE + SLOT_GAP),
            PANEL.y + 80.0 + row * (SLOT_SIZE + SLOT_GAP),
            SLOT_SIZE,
            SLOT_SIZE,
        )
    }

    fn details_rect() -> Rect {
        let grid_right = Self::slot_rect(COLS - 1).right();
        Rect::new(grid_right + 30.0, PANEL.y + 80.0, PANEL.right() - 40.0 - grid_right - 30.0, ROWS as f32 * (SLOT_SIZE + SLOT_GAP))
    }

    pub fn close_rect() -> Rect {
        Rect::new(PANEL.right() - 44.0, PANEL.y + 8.0, 36.0, 36.0)
    }

    pub fn handle_input(&mut self, input: &FrameInput) {
        if input.pressed(Action::Back) || input.pressed(Action::ToggleInventory) || input.mouse.clicked(&Self::close_rect()) {
            self.open = false;
            return;
        }

        let n = SLOT_COUNT;
        if input.pressed(Action::MenuRight) {
            self.selected = (self.selected + 1) % n;
        }
        if input.pressed(Action::MenuLeft) {
            self.selected = (self.selected + n - 1) % n;
        }
        if input.pressed(Action::MenuDown) {
            self.selected = (self.selected + COLS) % n;
        }
        if input.pressed(Action::MenuUp) {
            self.selected = (self.selected + n - COLS) % n;
        }

        if let Some(i) = (0..n).find(|&i| input.mouse.clicked(&Self::slot_rect(i))) {
            self.selected = i;
        }
    }

    pub fn draw(&self, inventory: &Inventory, mouse: &MouseState) {
        ui::draw_dim_overlay();
        ui::draw_panel(PANEL, ui::PANEL_BG, ui::PANEL_BORDER);
        ui::draw_label("INVENTORY", PANEL.x + 40.0, PANEL.y + 52.0, ui::FONT_SIZE_HEADER, ui::ACCENT_COLOR);
        ui::close_button(mouse, Self::close_rect());

        for i in 0..SLOT_COUNT {
            let r = Self::slot_rect(i);
            let hovered = mouse.inside(&r);
            let bg = if hovered { ui::BUTTON_HOVER } else { ui::BUTTON_BG };
            draw_rectangle(r.x, r.y, r.w, r.h, bg);
            if let Some(item) = inventory.get_item(i) {
                let icon = r.pad(12.0);
                draw_rectangle(icon.x, icon.y, icon.w, icon.h, item.icon_color);
                ui::draw_label(item.code, r.x + 4.0, r.bottom() - 4.0, 14.0, ui::TEXT_COLOR);
            }
            let (thickness, border) = if i == self.selected { (3.0, ui::ACCENT_COLOR) } else { (1.0, ui::PANEL_BORDER) };
            draw_rectangle_lines(r.x, r.y, r.w, r.h, thickness, border);
        }

        let d = Self::details_rect();
        ui::draw_panel(d, Color::new(0.08, 0.08, 0.1, 1.0), ui::PANEL_BORDER);
        let inner = d.pad(20.0);
        match inventory.get_item(self.selected) {
            Some(item) => {
                ui::draw_label(item.name, inner.x, inner.y + 28.0, ui::FONT_SIZE_HEADER, WHITE);
                let code = format!("Code: {}", item.code);
                ui::draw_label(&code, inner.x, inner.y + 62.0, ui::FONT_SIZE_CONTENT, ui::ACCENT_COLOR);
                ui::draw_wrapped(item.description, inner.x, inner.y + 86.0, inner.w, ui::FONT_SIZE_CONTENT, ui::TEXT_COLOR);
            }
            None => {
                ui::draw_text_centered("Empty Slot", d.center_x(), d.center_y(), ui::FONT_SIZE_CONTENT, ui::TEXT_DIM);
            }
        }

        ui::draw_text_centered(
            "Arrows: select   E / ESC: close",
            PANEL.center_x(),
            PANEL.bottom() - 20.0,
            ui::FONT_SIZE_SMALL,
            ui::TEXT_DIM,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(view: &mut InventoryView, action: Action) {
        view.handle_input(&FrameInput::default().with_pressed(&[action]));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut view = InventoryView::new();
        view.open = true;
        press(&mut view, Action::MenuLeft);
        assert_eq!(view.selected(), SLOT_COUNT - 1);
        press(&mut view, Action::MenuRight);
        assert_eq!(view.selected(), 0);
        press(&mut view, Action::MenuUp);
        assert_eq!(view.selected(), SLOT_COUNT - COLS);
        press(&mut view, Action::MenuDown);
        assert_eq!(view.selected(), 0);
        press(&mut view, Action::MenuDown);
        assert_eq!(view.selected(), COLS);
    }

    #[test]
    fn test_click_selects_slot() {
        let mut view = InventoryView::new();
        view.open = true;
        let r = InventoryView::slot_rect(13);
        let mouse = MouseState { x: r.center_x(), y: r.center_y(), left_pressed: true, ..Default::default() };
        view.handle_input(&FrameInput::default().with_mouse(mouse));
        assert_eq!(view.selected(), 13);
        assert!(view.open);
    }

    #[test]
    fn test_close_keys() {
        for action in [Action::Back, Action::ToggleInventory] {
            let mut view = InventoryView::new();
            view.toggle();
            press(&mut view, action);
            assert!(!view.open);
        }
    }

    #[test]
    fn test_layout_fits_panel() {
        let last = InventoryView::slot_rect(SLOT_COUNT - 1);
        assert!(last.bottom() < PANEL.bottom());
        assert!(InventoryView::details_rect().right() <= PANEL.right());
        assert!(InventoryView::details_rect().w > 300.0);
    }
}
