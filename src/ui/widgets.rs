//! Basic UI widgets
//!
//! Immediate mode: every widget draws itself and reports clicks in the same
//! call, nothing is retained between frames.

use std::cell::RefCell;

use macroquad::prelude::*;

use super::{theme, MouseState, Rect};

thread_local! {
    /// Font for every label; `None` draws with macroquad's built-in font
    static UI_FONT: RefCell<Option<Font>> = const { RefCell::new(None) };
}

/// Install the font used by all text helpers
pub fn set_font(font: Option<Font>) {
    UI_FONT.with(|f| *f.borrow_mut() = font);
}

/// Measure text in the installed font
pub fn measure_label(text: &str, font_size: f32) -> TextDimensions {
    UI_FONT.with(|f| measure_text(text, f.borrow().as_ref(), font_size as u16, 1.0))
}

/// Draw text in the installed font, `y` is the baseline
pub fn draw_label(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    UI_FONT.with(|f| {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: f.borrow().as_ref(),
                font_size: font_size as u16,
                color,
                ..Default::default()
            },
        );
    });
}

/// Wrap text to fit within a given pixel width
/// Returns a vector of lines that fit within max_width
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    // Explicit newlines start a new paragraph
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();

        for word in words {
            let test_line = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            // Approximate width, measure_text is too slow to call per word
            let char_width = font_size * 0.55;
            let test_width = test_line.chars().count() as f32 * char_width;

            if test_width <= max_width || current_line.is_empty() {
                current_line = test_line;
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

/// Draw wrapped text, returns the y below the last line
pub fn draw_wrapped(text: &str, x: f32, y: f32, max_width: f32, font_size: f32, color: Color) -> f32 {
    let line_height = font_size * 1.25;
    let mut cursor = y;
    for line in wrap_text(text, font_size, max_width) {
        draw_label(&line, x.round(), (cursor + font_size).round(), font_size, color);
        cursor += line_height;
    }
    cursor
}

/// Draw text centered on a point
pub fn draw_text_centered(text: &str, cx: f32, cy: f32, font_size: f32, color: Color) {
    let dims = measure_label(text, font_size);
    draw_label(
        text,
        (cx - dims.width * 0.5).round(),
        (cy + dims.offset_y * 0.5).round(),
        font_size,
        color,
    );
}

/// Filled panel with a border
pub fn draw_panel(rect: Rect, bg: Color, border: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, border);
}

/// Dim the whole logical screen behind a modal
pub fn draw_dim_overlay() {
    use crate::config::{SCENE_HEIGHT, SCENE_WIDTH};
    draw_rectangle(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT, theme::OVERLAY_DIM);
}

/// Text button, returns true if clicked this frame
pub fn text_button(mouse: &MouseState, rect: Rect, label: &str, enabled: bool) -> bool {
    text_button_highlighted(mouse, rect, label, enabled, false)
}

/// Text button that can also be highlighted by keyboard selection
pub fn text_button_highlighted(mouse: &MouseState, rect: Rect, label: &str, enabled: bool, selected: bool) -> bool {
    let hovered = enabled && mouse.inside(&rect);
    let bg = if !enabled {
        theme::BUTTON_DISABLED
    } else if hovered || selected {
        theme::BUTTON_HOVER
    } else {
        theme::BUTTON_BG
    };
    let border = if selected { theme::ACCENT_COLOR } else { theme::PANEL_BORDER };
    draw_panel(rect, bg, border);

    let text_color = if enabled { theme::TEXT_COLOR } else { theme::TEXT_DIM };
    draw_text_centered(label, rect.center_x(), rect.center_y(), theme::FONT_SIZE_CONTENT, text_color);

    enabled && mouse.clicked(&rect)
}

/// Square close button with an X, returns true if clicked
pub fn close_button(mouse: &MouseState, rect: Rect) -> bool {
    let hovered = mouse.inside(&rect);
    let color = if hovered { theme::DANGER_COLOR } else { theme::TEXT_DIM };
    let r = rect.pad(6.0);
    draw_line(r.x, r.y, r.right(), r.bottom(), 2.0, color);
    draw_line(r.right(), r.y, r.x, r.bottom(), 2.0, color);
    mouse.clicked(&rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 20.0, 120.0);
        assert!(lines.len() > 1);
        for line in &lines {
            // 120px at 11px per char
            assert!(line.chars().count() <= 10 || !line.contains(' '), "{:?}", line);
        }
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_text_keeps_paragraphs() {
        let lines = wrap_text("first\n\nsecond", 20.0, 500.0);
        assert_eq!(lines, vec!["first".to_string(), String::new(), "second".to_string()]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let lines = wrap_text("a supercalifragilistic b", 20.0, 50.0);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }
}
