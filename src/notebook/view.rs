//! Notebook window
//!
//! Left page: numbered list of unlocked clues. Right page: the selected
//! clue's description. Page buttons sit at the bottom corners.

use macroquad::prelude::*;

use super::{pulse_color, Notebook, CLUES_PER_PAGE};
use crate::input::{Action, FrameInput};
use crate::ui::{self, MouseState, Rect};

const BOOK: Rect = Rect::new(140.0, 60.0, 1000.0, 600.0);
const LEFT_PAGE: Rect = Rect::new(170.0, 90.0, 460.0, 540.0);
const RIGHT_PAGE: Rect = Rect::new(650.0, 90.0, 460.0, 540.0);
const LINE_SPACING: f32 = 44.0;
const FIRST_LINE_Y: f32 = 40.0;

#[derive(Debug, Clone, Default)]
pub struct NotebookView {
    pub open: bool,
}

impl NotebookView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.open = true;
    }

    /// Row `slot` (0..10) of the left page
    pub fn entry_rect(slot: usize) -> Rect {
        Rect::new(
            LEFT_PAGE.x + 20.0,
            LEFT_PAGE.y + FIRST_LINE_Y + slot as f32 * LINE_SPACING,
            LEFT_PAGE.w - 40.0,
            LINE_SPACING - 4.0,
        )
    }

    pub fn prev_rect() -> Rect {
        Rect::new(LEFT_PAGE.x + 20.0, LEFT_PAGE.bottom() - 50.0, 120.0, 40.0)
    }

    pub fn next_rect() -> Rect {
        Rect::new(RIGHT_PAGE.right() - 140.0, RIGHT_PAGE.bottom() - 50.0, 120.0, 40.0)
    }

    pub fn close_rect() -> Rect {
        Rect::new(BOOK.right() - 44.0, BOOK.y + 8.0, 36.0, 36.0)
    }

    pub fn handle_input(&mut self, input: &FrameInput, book: &mut Notebook) {
        let mouse = &input.mouse;
        if input.pressed(Action::Back) || input.pressed(Action::ToggleNotebook) || mouse.clicked(&Self::close_rect()) {
            self.open = false;
            book.clear_selection();
            return;
        }

        if input.pressed(Action::MenuLeft) || mouse.clicked(&Self::prev_rect()) {
            book.prev_page();
        }
        if input.pressed(Action::MenuRight) || mouse.clicked(&Self::next_rect()) {
            book.next_page();
        }

        let entries: Vec<usize> = book.page_entries().iter().map(|e| e.index).collect();
        if entries.is_empty() {
            return;
        }
        let current = book.selected_index().and_then(|sel| entries.iter().position(|&i| i == sel));
        if input.pressed(Action::MenuDown) {
            let next = current.map(|p| (p + 1) % entries.len()).unwrap_or(0);
            book.select(entries[next]);
        }
        if input.pressed(Action::MenuUp) {
            let prev = current.map(|p| (p + entries.len() - 1) % entries.len()).unwrap_or(entries.len() - 1);
            book.select(entries[prev]);
        }
        if let Some(slot) = (0..entries.len()).find(|&s| mouse.clicked(&Self::entry_rect(s))) {
            book.select(entries[slot]);
        }
    }

    pub fn draw(&self, book: &Notebook, mouse: &MouseState, time_ms: f64) {
        ui::draw_dim_overlay();

        // Cover, pages, spine
        draw_rectangle(BOOK.x, BOOK.y, BOOK.w, BOOK.h, Color::new(0.59, 0.29, 0.0, 1.0));
        draw_rectangle_lines(BOOK.x, BOOK.y, BOOK.w, BOOK.h, 4.0, Color::new(0.39, 0.2, 0.0, 1.0));
        for page in [LEFT_PAGE, RIGHT_PAGE] {
            draw_rectangle(page.x, page.y, page.w, page.h, ui::PAPER_COLOR);
        }
        let spine_x = (LEFT_PAGE.right() + RIGHT_PAGE.x) * 0.5;
        draw_line(spine_x, BOOK.y + 20.0, spine_x, BOOK.bottom() - 20.0, 4.0, Color::new(0.59, 0.59, 0.59, 1.0));

        let line_color = Color::new(0.47, 0.31, 0.2, 0.5);
        for slot in 0..CLUES_PER_PAGE {
            let r = Self::entry_rect(slot);
            draw_line(r.x, r.bottom(), r.right(), r.bottom(), 1.0, line_color);
        }

        let pulse = pulse_color(time_ms, ui::INK_HIGHLIGHT, ui::INK_DIM);
        for (slot, entry) in book.page_entries().iter().enumerate() {
            let r = Self::entry_rect(slot);
            let selected = book.selected_index() == Some(entry.index);
            let color = if selected { pulse } else { ui::INK_COLOR };
            let label = format!("{}. {}", entry.number, entry.clue.name);
            ui::draw_label(&label, r.x + 4.0, r.bottom() - 8.0, ui::FONT_SIZE_CONTENT, color);
            if selected {
                draw_line(r.x, r.bottom() - 2.0, r.right(), r.bottom() - 2.0, 2.0, ui::INK_HIGHLIGHT);
            }
        }

        let inner = RIGHT_PAGE.pad(24.0);
        match book.selected() {
            Some(clue) => {
                ui::draw_label(clue.name, inner.x, inner.y + 24.0, ui::FONT_SIZE_HEADER, ui::INK_COLOR);
                ui::draw_wrapped(clue.description, inner.x, inner.y + 50.0, inner.w, ui::FONT_SIZE_CONTENT, ui::INK_COLOR);
            }
            None => {
                let hint = format!("{} clues found. Select one to read it.", book.unlocked_count());
                ui::draw_wrapped(&hint, inner.x, inner.y + 10.0, inner.w, ui::FONT_SIZE_CONTENT, ui::INK_DIM);
            }
        }

        let page_label = format!("Page {}/{}", book.page() + 1, book.total_pages());
        ui::draw_text_centered(&page_label, LEFT_PAGE.center_x(), LEFT_PAGE.bottom() - 30.0, ui::FONT_SIZE_SMALL, ui::INK_DIM);
        ui::text_button(mouse, Self::prev_rect(), "< Prev", book.page() > 0);
        ui::text_button(mouse, Self::next_rect(), "Next >", book.page() + 1 < book.total_pages());
        ui::close_button(mouse, Self::close_rect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::Clue;

    fn press(view: &mut NotebookView, book: &mut Notebook, action: Action) {
        view.handle_input(&FrameInput::default().with_pressed(&[action]), book);
    }

    fn big_book() -> Notebook {
        Notebook::with_clues((0..15).map(|_| Clue { name: "c", description: "", unlocked: true }).collect())
    }

    #[test]
    fn test_arrow_selection_wraps_within_page() {
        let mut view = NotebookView::new();
        let mut book = big_book();
        view.show();
        press(&mut view, &mut book, Action::MenuDown);
        assert_eq!(book.selected_index(), Some(0));
        press(&mut view, &mut book, Action::MenuUp);
        assert_eq!(book.selected_index(), Some(9));

        press(&mut view, &mut book, Action::MenuRight);
        assert_eq!(book.page(), 1);
        assert_eq!(book.selected_index(), None);
        press(&mut view, &mut book, Action::MenuUp);
        assert_eq!(book.selected_index(), Some(14));
    }

    #[test]
    fn test_click_entry_and_page_buttons() {
        let mut view = NotebookView::new();
        let mut book = big_book();
        view.show();

        let click = |r: Rect| {
            FrameInput::default().with_mouse(MouseState { x: r.center_x(), y: r.center_y(), left_pressed: true, ..Default::default() })
        };
        view.handle_input(&click(NotebookView::entry_rect(3)), &mut book);
        assert_eq!(book.selected_index(), Some(3));

        view.handle_input(&click(NotebookView::next_rect()), &mut book);
        assert_eq!(book.page(), 1);
        view.handle_input(&click(NotebookView::prev_rect()), &mut book);
        assert_eq!(book.page(), 0);
    }

    #[test]
    fn test_close_clears_selection() {
        let mut view = NotebookView::new();
        let mut book = big_book();
        view.show();
        book.select(2);
        press(&mut view, &mut book, Action::Back);
        assert!(!view.open);
        assert_eq!(book.selected_index(), None);
    }

    #[test]
    fn test_rows_fit_above_buttons() {
        let last = NotebookView::entry_rect(CLUES_PER_PAGE - 1);
        assert!(last.bottom() <= NotebookView::prev_rect().y);
    }
}
