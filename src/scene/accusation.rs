//! Accusation board
//!
//! Pick a suspect from the scrolling column, confirm to lock the choice,
//! tag any evidence, then press ACCUSE. The verdict stays up for three
//! seconds before the detective is sent back to the office.

use macroquad::prelude::*;

use super::{DrawContext, Scene, SceneAction};
use crate::config::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::game::event::AccusationEvent;
use crate::game::Events;
use crate::input::{Action, FrameInput};
use crate::ui::{self, MouseState, Rect};

/// Wheel step in pixels
pub const SCROLL_STEP: f32 = 30.0;
/// How long the verdict stays on screen, in seconds
pub const RESULT_DISPLAY_TIME: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suspect {
    pub name: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evidence {
    pub title: &'static str,
    pub location: &'static str,
}

pub const SUSPECTS: [Suspect; 5] = [
    Suspect { name: "John Doe", avatar: "assets/images/avatars/avatar1.png" },
    Suspect { name: "Jane Smith", avatar: "assets/images/avatars/avatar2.png" },
    Suspect { name: "Victor Reznov", avatar: "assets/images/avatars/avatar3.png" },
    Suspect { name: "Sarah Connor", avatar: "assets/images/avatars/avatar1.png" },
    Suspect { name: "Mike Wilson", avatar: "assets/images/avatars/avatar2.png" },
];

/// Jane Smith
pub const CORRECT_SUSPECT: usize = 1;

pub const EVIDENCE: [Evidence; 5] = [
    Evidence { title: "Bloody Knife", location: "Kitchen" },
    Evidence { title: "Threatening Letter", location: "Office" },
    Evidence { title: "Muddy Boots", location: "Alley" },
    Evidence { title: "Broken Glass", location: "Living Room" },
    Evidence { title: "Security Footage", location: "Entrance" },
];

// Layout
const SUSPECT_CONTAINER: Rect = Rect::new(40.0, 100.0, 380.0, 560.0);
const SUSPECT_CARD_H: f32 = 130.0;
const SUSPECT_CARD_GAP: f32 = 10.0;
const EVIDENCE_ORIGIN: (f32, f32) = (460.0, 100.0);
const EVIDENCE_CARD: (f32, f32) = (170.0, 90.0);
const EVIDENCE_COLS: usize = 3;
const DIALOG: Rect = Rect::new(460.0, 330.0, 520.0, 200.0);
const CONFIRM_BUTTON: Rect = Rect::new(500.0, 450.0, 200.0, 56.0);
const CANCEL_BUTTON: Rect = Rect::new(740.0, 450.0, 200.0, 56.0);
const ACCUSE_BUTTON: Rect = Rect::new(1040.0, 280.0, 200.0, 80.0);
const BACK_BUTTON: Rect = Rect::new(1065.0, 626.0, 150.0, 50.0);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Verdict {
    correct: bool,
    elapsed: f32,
}

pub struct AccusationScene {
    suspects: Vec<Suspect>,
    evidence: Vec<Evidence>,
    correct_suspect: usize,
    selected_suspect: Option<usize>,
    /// Evidence indices in the order they were tagged
    selected_evidence: Vec<usize>,
    dialog_visible: bool,
    locked: bool,
    scroll: f32,
    verdict: Option<Verdict>,
}

impl AccusationScene {
    pub fn new() -> Self {
        Self {
            suspects: SUSPECTS.to_vec(),
            evidence: EVIDENCE.to_vec(),
            correct_suspect: CORRECT_SUSPECT,
            selected_suspect: None,
            selected_evidence: Vec::new(),
            dialog_visible: false,
            locked: false,
            scroll: 0.0,
            verdict: None,
        }
    }

    pub fn selected_suspect(&self) -> Option<usize> {
        self.selected_suspect
    }

    pub fn selected_evidence(&self) -> &[usize] {
        &self.selected_evidence
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Verdict on screen, if the accusation was made
    pub fn verdict(&self) -> Option<bool> {
        self.verdict.map(|v| v.correct)
    }

    pub fn scroll_max(&self) -> f32 {
        let content = self.suspects.len() as f32 * (SUSPECT_CARD_H + SUSPECT_CARD_GAP) + SUSPECT_CARD_GAP;
        (content - SUSPECT_CONTAINER.h).max(0.0)
    }

    /// On-screen rect of a suspect card after scrolling
    pub fn suspect_card(&self, index: usize) -> Rect {
        let c = SUSPECT_CONTAINER;
        Rect::new(
            c.x + SUSPECT_CARD_GAP,
            c.y + SUSPECT_CARD_GAP + index as f32 * (SUSPECT_CARD_H + SUSPECT_CARD_GAP) - self.scroll,
            c.w - SUSPECT_CARD_GAP * 2.0 - 12.0,
            SUSPECT_CARD_H,
        )
    }

    pub fn evidence_card(index: usize) -> Rect {
        let col = (index % EVIDENCE_COLS) as f32;
        let row = (index / EVIDENCE_COLS) as f32;
        Rect::new(
            EVIDENCE_ORIGIN.0 + col * (EVIDENCE_CARD.0 + 10.0),
            EVIDENCE_ORIGIN.1 + row * (EVIDENCE_CARD.1 + 10.0),
            EVIDENCE_CARD.0,
            EVIDENCE_CARD.1,
        )
    }

    /// Suspect card under the mouse, only where the card is inside the container
    fn suspect_at(&self, mouse: &MouseState) -> Option<usize> {
        if !mouse.inside(&SUSPECT_CONTAINER) {
            return None;
        }
        (0..self.suspects.len()).find(|&i| mouse.inside(&self.suspect_card(i)))
    }

    fn select_suspect(&mut self, index: usize) {
        self.selected_suspect = Some(index);
        self.dialog_visible = true;
    }

    fn confirm(&mut self) {
        self.locked = true;
    }

    fn cancel(&mut self) {
        self.locked = false;
        self.selected_suspect = None;
        self.dialog_visible = false;
    }

    fn toggle_evidence(&mut self, index: usize) {
        if let Some(pos) = self.selected_evidence.iter().position(|&i| i == index) {
            self.selected_evidence.remove(pos);
        } else {
            self.selected_evidence.push(index);
        }
    }

    /// Only acts once a suspect is locked in
    fn accuse(&mut self, events: &mut Events) {
        let Some(index) = self.selected_suspect else { return };
        if !self.locked {
            return;
        }
        let correct = index == self.correct_suspect;
        let evidence: Vec<_> = self.selected_evidence.iter().map(|&i| self.evidence[i].title).collect();
        println!("Accused: {}", self.suspects[index].name);
        println!("Evidence: {:?}", evidence);
        println!("{}", if correct { "Case solved" } else { "Wrong suspect" });

        self.verdict = Some(Verdict { correct, elapsed: 0.0 });
        events.accusation.send(AccusationEvent { correct });
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    fn draw_suspects(&self, ctx: &DrawContext) {
        let c = SUSPECT_CONTAINER;
        ui::draw_panel(c, ui::PANEL_BG, ui::PANEL_BORDER);
        ui::draw_label("SUSPECTS", c.x, c.y - 14.0, ui::FONT_SIZE_HEADER, ui::ACCENT_COLOR);

        for (i, suspect) in self.suspects.iter().enumerate() {
            let r = self.suspect_card(i);
            // Cull cards fully outside the container
            if r.bottom() <= c.y || r.y >= c.bottom() {
                continue;
            }
            let selected = self.selected_suspect == Some(i);
            let bg = if selected { ui::BUTTON_HOVER } else { ui::BUTTON_BG };
            let border = if selected { ui::ACCENT_COLOR } else { ui::PANEL_BORDER };
            ui::draw_panel(r, bg, border);

            let icon = Rect::new(r.x + 10.0, r.y + 15.0, 100.0, 100.0);
            match ctx.assets.texture(suspect.avatar) {
                Some(tex) => draw_texture_ex(tex, icon.x, icon.y, WHITE, DrawTextureParams {
                    dest_size: Some(vec2(icon.w, icon.h)),
                    ..Default::default()
                }),
                None => draw_rectangle(icon.x, icon.y, icon.w, icon.h, ui::TEXT_DIM),
            }
            ui::draw_label(suspect.name, icon.right() + 14.0, r.center_y() + 8.0, ui::FONT_SIZE_CONTENT, WHITE);
        }

        // Scrollbar
        let max = self.scroll_max();
        if max > 0.0 {
            let track = Rect::new(c.right() - 13.0, c.y + 10.0, 8.0, c.h - 20.0);
            draw_rectangle(track.x, track.y, track.w, track.h, Color::new(0.16, 0.1, 0.2, 1.0));
            let handle_h = (track.h * c.h / (c.h + max)).max(30.0);
            let handle_y = track.y + (self.scroll / max) * (track.h - handle_h);
            draw_rectangle(track.x, handle_y, track.w, handle_h, Color::new(0.51, 0.35, 0.59, 1.0));
        }
    }

    fn draw_evidence(&self, mouse: &MouseState) {
        ui::draw_label("EVIDENCE", EVIDENCE_ORIGIN.0, EVIDENCE_ORIGIN.1 - 14.0, ui::FONT_SIZE_HEADER, ui::ACCENT_COLOR);
        for (i, item) in self.evidence.iter().enumerate() {
            let r = Self::evidence_card(i);
            let selected = self.selected_evidence.contains(&i);
            let bg = if selected { Color::new(0.2, 0.4, 0.25, 1.0) } else if mouse.inside(&r) { ui::BUTTON_HOVER } else { ui::BUTTON_BG };
            let border = if selected { ui::SUCCESS_COLOR } else { ui::PANEL_BORDER };
            ui::draw_panel(r, bg, border);
            ui::draw_text_centered(item.title, r.center_x(), r.y + 28.0, ui::FONT_SIZE_SMALL, WHITE);
            ui::draw_text_centered(item.location, r.center_x(), r.y + 58.0, ui::FONT_SIZE_SMALL, ui::TEXT_DIM);
        }
    }

    fn draw_dialog(&self, mouse: &MouseState) {
        let Some(index) = self.selected_suspect else { return };
        let name = self.suspects[index].name.to_uppercase();
        let (bg, border) = if self.locked {
            (Color::new(0.16, 0.31, 0.2, 1.0), Color::new(0.31, 0.78, 0.39, 1.0))
        } else {
            (Color::new(0.24, 0.24, 0.24, 1.0), Color::new(0.59, 0.59, 0.59, 1.0))
        };
        ui::draw_panel(DIALOG, bg, border);

        let (line1, line2) = if self.locked {
            ("LOCKED! PRESS ACCUSE TO".to_string(), format!("CONFIRM {}", name))
        } else {
            ("ARE YOU SURE YOU WANT TO".to_string(), format!("ACCUSE {}?", name))
        };
        ui::draw_text_centered(&line1, DIALOG.center_x(), DIALOG.y + 40.0, ui::FONT_SIZE_CONTENT, WHITE);
        ui::draw_text_centered(&line2, DIALOG.center_x(), DIALOG.y + 75.0, ui::FONT_SIZE_CONTENT, ui::ACCENT_COLOR);

        if !self.locked {
            ui::text_button(mouse, CONFIRM_BUTTON, "CONFIRM", true);
            ui::text_button(mouse, CANCEL_BUTTON, "CANCEL", true);
        }
    }

    fn draw_verdict(&self, verdict: &Verdict) {
        draw_rectangle(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.86));
        let r = Rect::from_center(SCENE_WIDTH * 0.5, SCENE_HEIGHT * 0.5, 600.0, 288.0);
        let (title, subtitle, bg, border) = if verdict.correct {
            ("CASE SOLVED!", "You caught the killer.", Color::new(0.16, 0.39, 0.16, 1.0), ui::SUCCESS_COLOR)
        } else {
            ("WRONG SUSPECT!", "The killer is still out there.", Color::new(0.39, 0.16, 0.16, 1.0), ui::DANGER_COLOR)
        };
        ui::draw_panel(r, bg, border);
        ui::draw_text_centered(title, r.center_x(), r.y + 90.0, ui::FONT_SIZE_TITLE, WHITE);
        ui::draw_text_centered(subtitle, r.center_x(), r.y + 160.0, ui::FONT_SIZE_CONTENT, ui::TEXT_COLOR);
        let remaining = (RESULT_DISPLAY_TIME - verdict.elapsed).max(0.0).ceil();
        let footer = format!("Returning to the office in {}...", remaining);
        ui::draw_text_centered(&footer, r.center_x(), r.y + 230.0, ui::FONT_SIZE_SMALL, ui::TEXT_DIM);
    }
}

impl Default for AccusationScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for AccusationScene {
    fn title(&self) -> &str {
        "Accusation"
    }

    fn handle_input(&mut self, input: &FrameInput, events: &mut Events) -> SceneAction {
        if let Some(verdict) = &self.verdict {
            if verdict.elapsed >= RESULT_DISPLAY_TIME {
                return SceneAction::ReturnToOffice;
            }
            return SceneAction::None;
        }

        let mouse = &input.mouse;

        if input.pressed(Action::Back) {
            if self.dialog_visible {
                self.cancel();
                return SceneAction::None;
            }
            return SceneAction::ReturnToOffice;
        }

        if mouse.scroll != 0.0 && mouse.inside(&SUSPECT_CONTAINER) {
            self.scroll = (self.scroll - mouse.scroll * SCROLL_STEP).clamp(0.0, self.scroll_max());
        }

        if self.dialog_visible && !self.locked {
            if mouse.clicked(&CONFIRM_BUTTON) || input.pressed(Action::Confirm) {
                self.confirm();
                return SceneAction::None;
            }
            if mouse.clicked(&CANCEL_BUTTON) {
                self.cancel();
                return SceneAction::None;
            }
        }

        if !self.locked {
            if let Some(i) = self.suspect_at(mouse) {
                self.select_suspect(i);
            }
        }

        if mouse.left_pressed {
            if let Some(i) = (0..self.evidence.len()).find(|&i| mouse.inside(&Self::evidence_card(i))) {
                self.toggle_evidence(i);
            }
        }

        if mouse.clicked(&ACCUSE_BUTTON) || (self.locked && input.pressed(Action::Confirm)) {
            self.accuse(events);
        }

        if mouse.clicked(&BACK_BUTTON) {
            return SceneAction::ReturnToOffice;
        }

        SceneAction::None
    }

    fn update(&mut self, _player: &crate::game::Player, dt: f32) {
        if let Some(verdict) = self.verdict.as_mut() {
            verdict.elapsed += dt;
        }
    }

    fn draw(&self, ctx: &DrawContext) {
        draw_rectangle(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT, Color::new(0.1, 0.06, 0.12, 1.0));
        ui::draw_text_centered("WHO IS THE KILLER?", SCENE_WIDTH * 0.5, 40.0, ui::FONT_SIZE_HEADER, WHITE);

        self.draw_suspects(ctx);
        self.draw_evidence(ctx.mouse);
        if self.dialog_visible {
            self.draw_dialog(ctx.mouse);
        }

        let can_accuse = self.locked && self.selected_suspect.is_some();
        ui::text_button(ctx.mouse, ACCUSE_BUTTON, "ACCUSE", can_accuse);
        ui::text_button(ctx.mouse, BACK_BUTTON, "BACK", true);

        if let Some(verdict) = &self.verdict {
            self.draw_verdict(verdict);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerSettings;
    use crate::game::Player;

    fn mouse_at(r: &Rect, click: bool) -> MouseState {
        MouseState { x: r.center_x(), y: r.center_y(), left_pressed: click, ..Default::default() }
    }

    fn run(scene: &mut AccusationScene, input: FrameInput, events: &mut Events) -> SceneAction {
        scene.handle_input(&input, events)
    }

    fn click(scene: &mut AccusationScene, r: Rect, events: &mut Events) -> SceneAction {
        run(scene, FrameInput::default().with_mouse(mouse_at(&r, true)), events)
    }

    fn away() -> FrameInput {
        FrameInput::default().with_mouse(MouseState { x: 1270.0, y: 5.0, ..Default::default() })
    }

    #[test]
    fn test_hover_selects_and_shows_dialog() {
        let mut scene = AccusationScene::new();
        let card = scene.suspect_card(2);
        run(&mut scene, FrameInput::default().with_mouse(mouse_at(&card, false)), &mut Events::new());
        assert_eq!(scene.selected_suspect(), Some(2));
        assert!(scene.dialog_visible());
        assert!(!scene.is_locked());
    }

    #[test]
    fn test_confirm_locks_and_cancel_clears() {
        let mut scene = AccusationScene::new();
        let mut events = Events::new();
        let card = scene.suspect_card(0);
        click(&mut scene, card, &mut events);
        click(&mut scene, CONFIRM_BUTTON, &mut events);
        assert!(scene.is_locked());

        // Locked: hovering another suspect changes nothing
        let card = scene.suspect_card(1);
        click(&mut scene, card, &mut events);
        assert_eq!(scene.selected_suspect(), Some(0));

        // ESC cancels while the dialog is up
        run(&mut scene, away().with_pressed(&[Action::Back]), &mut events);
        assert!(!scene.is_locked());
        assert_eq!(scene.selected_suspect(), None);
        assert!(!scene.dialog_visible());
    }

    #[test]
    fn test_accuse_requires_lock() {
        let mut scene = AccusationScene::new();
        let mut events = Events::new();
        let card = scene.suspect_card(CORRECT_SUSPECT);
        click(&mut scene, card, &mut events);
        click(&mut scene, ACCUSE_BUTTON, &mut events);
        assert_eq!(scene.verdict(), None);
        assert!(events.accusation.is_empty());

        click(&mut scene, CONFIRM_BUTTON, &mut events);
        click(&mut scene, ACCUSE_BUTTON, &mut events);
        assert_eq!(scene.verdict(), Some(true));
        assert_eq!(events.accusation.drain().next(), Some(AccusationEvent { correct: true }));
    }

    #[test]
    fn test_wrong_suspect_then_return_after_delay() {
        let mut scene = AccusationScene::new();
        let mut events = Events::new();
        let player = Player::new(&PlayerSettings::default(), 0.0, 0.0);
        let card = scene.suspect_card(3);
        click(&mut scene, card, &mut events);
        click(&mut scene, CONFIRM_BUTTON, &mut events);
        click(&mut scene, ACCUSE_BUTTON, &mut events);
        assert_eq!(scene.verdict(), Some(false));

        scene.update(&player, 1.5);
        assert!(matches!(run(&mut scene, away(), &mut events), SceneAction::None));
        scene.update(&player, 1.6);
        assert!(matches!(run(&mut scene, away(), &mut events), SceneAction::ReturnToOffice));
    }

    #[test]
    fn test_evidence_toggle_keeps_order() {
        let mut scene = AccusationScene::new();
        let mut events = Events::new();
        click(&mut scene, AccusationScene::evidence_card(3), &mut events);
        click(&mut scene, AccusationScene::evidence_card(0), &mut events);
        click(&mut scene, AccusationScene::evidence_card(4), &mut events);
        assert_eq!(scene.selected_evidence(), &[3, 0, 4]);
        click(&mut scene, AccusationScene::evidence_card(0), &mut events);
        assert_eq!(scene.selected_evidence(), &[3, 4]);
    }

    #[test]
    fn test_scroll_clamped() {
        let mut scene = AccusationScene::new();
        assert_eq!(scene.scroll_max(), 150.0);
        // Over the container gap below the last visible card
        let over = MouseState { x: 45.0, y: 650.0, scroll: -1.0, ..Default::default() };
        for _ in 0..10 {
            run(&mut scene, FrameInput::default().with_mouse(over), &mut Events::new());
        }
        assert_eq!(scene.scroll(), 150.0);

        let up = MouseState { scroll: 1.0, ..over };
        run(&mut scene, FrameInput::default().with_mouse(up), &mut Events::new());
        assert_eq!(scene.scroll(), 120.0);
        for _ in 0..10 {
            run(&mut scene, FrameInput::default().with_mouse(up), &mut Events::new());
        }
        assert_eq!(scene.scroll(), 0.0);
    }

    #[test]
    fn test_back_returns_to_office() {
        let mut scene = AccusationScene::new();
        assert!(matches!(click(&mut scene, BACK_BUTTON, &mut Events::new()), SceneAction::ReturnToOffice));
    }
}
