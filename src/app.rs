//! Application state and frame loop
//!
//! One `AppState` owns everything: config, loaded assets, the scene stack,
//! the detective's inventory and notebook, and the overlay state. Each
//! frame input goes to exactly one receiver, in this order:
//! quit dialog, suspect popup, map, notebook, inventory, modal scene,
//! then the exploration scene.

use std::collections::VecDeque;

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::config::{GameConfig, SCENE_HEIGHT, SCENE_WIDTH};
use crate::game::{Events, FrameTimer, Player};
use crate::input::{Action, FrameInput, InputState};
use crate::inventory::{item_by_code, Inventory, InventoryView};
use crate::menu::{ConfirmAction, MainMenu, MainMenuAction, MapAction, MapPopup, QuitConfirm, SettingsAction, SettingsMenu};
use crate::notebook::{Notebook, NotebookView};
use crate::scene::{DrawContext, InterrogationScene, SceneAction, SceneId, SceneStack, SuspectChoice, SuspectSelect};
use crate::ui::{self, MouseState, Rect, Viewport};

/// Seconds a toast stays on screen
pub const TOAST_DURATION: f32 = 2.5;

const SCENE_BOUNDS: Rect = Rect::new(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT);
const HUD_ICON: f32 = 64.0;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Settings,
    Playing,
}

/// Returned by every frame so the main loop knows when to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub text: String,
    pub remaining: f32,
}

/// Overlays drawn above the scene while playing
#[derive(Debug, Default)]
pub struct UiState {
    pub inventory: InventoryView,
    pub notebook: NotebookView,
    pub map: MapPopup,
    pub suspects: SuspectSelect,
    pub quit_confirm: QuitConfirm,
    /// Front one is showing
    pub toasts: VecDeque<Toast>,
}

impl UiState {
    pub fn any_open(&self) -> bool {
        self.inventory.open || self.notebook.open || self.map.open || self.suspects.open || self.quit_confirm.open
    }

    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.toasts.push_back(Toast { text: text.into(), remaining: TOAST_DURATION });
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.front()
    }

    fn tick_toasts(&mut self, dt: f32) {
        if let Some(toast) = self.toasts.front_mut() {
            toast.remaining -= dt;
            if toast.remaining <= 0.0 {
                self.toasts.pop_front();
            }
        }
    }

    // HUD icons, right to left from the top-right corner
    pub fn notebook_icon() -> Rect {
        Rect::new(SCENE_WIDTH - HUD_ICON - 20.0, 20.0, HUD_ICON, HUD_ICON)
    }

    pub fn inventory_icon() -> Rect {
        Rect::new(SCENE_WIDTH - 2.0 * HUD_ICON - 36.0, 20.0, HUD_ICON, HUD_ICON)
    }

    pub fn map_icon() -> Rect {
        Rect::new(SCENE_WIDTH - 3.0 * HUD_ICON - 52.0, 20.0, HUD_ICON, HUD_ICON)
    }
}

pub struct AppState {
    pub config: GameConfig,
    pub assets: Assets,
    pub input: InputState,
    pub viewport: Viewport,
    pub timer: FrameTimer,

    pub screen: Screen,
    pub main_menu: MainMenu,
    pub settings: SettingsMenu,

    pub player: Player,
    pub stack: SceneStack,
    pub inventory: Inventory,
    pub notebook: Notebook,
    pub ui: UiState,
    pub events: Events,

    pub wrong_accusations: u32,
    /// Last allowed accusation was wrong; reset once the verdict closes
    case_cold_pending: bool,
    /// Seconds of game time, drives animations
    pub time: f64,
    /// Mouse from the last poll, for hover effects while drawing
    mouse: MouseState,
    /// Applied to the window after the frame's update
    pending_fullscreen: Option<bool>,
}

impl AppState {
    pub fn new(config: GameConfig, assets: Assets) -> Self {
        let (x, y) = SceneId::Office.descriptor().spawn;
        let player = Player::new(&config.player, x, y);
        let stack = SceneStack::build(&assets, config.gameplay.debug_on_start);

        Self {
            config,
            assets,
            input: InputState::new(),
            viewport: Viewport::fit(SCENE_WIDTH, SCENE_HEIGHT),
            timer: FrameTimer::new(),
            screen: Screen::MainMenu,
            main_menu: MainMenu::new(),
            settings: SettingsMenu::new(),
            player,
            stack,
            inventory: Inventory::with_starting_kit(),
            notebook: Notebook::new(),
            ui: UiState::default(),
            events: Events::new(),
            wrong_accusations: 0,
            case_cold_pending: false,
            time: 0.0,
            mouse: MouseState::default(),
            pending_fullscreen: None,
        }
    }

    pub fn game_started(&self) -> bool {
        self.main_menu.can_continue
    }

    /// Fresh case: starting kit, two known clues, detective in the office
    pub fn new_game(&mut self) {
        self.stack = SceneStack::build(&self.assets, self.config.gameplay.debug_on_start);
        self.inventory = Inventory::with_starting_kit();
        self.notebook = Notebook::new();
        self.ui = UiState::default();
        self.events.clear_all();
        self.wrong_accusations = 0;
        self.case_cold_pending = false;
        self.stack.switch_to(SceneId::Office, &mut self.player, &mut self.events);
        self.main_menu.can_continue = true;
        self.screen = Screen::Playing;
        println!("New game started");
    }

    /// Poll, update and draw one frame
    pub fn frame(&mut self) -> FrameOutcome {
        self.viewport = Viewport::current();
        let input = self.input.poll(&self.viewport);
        let outcome = self.update(&input);
        if let Some(fullscreen) = self.pending_fullscreen.take() {
            set_fullscreen(fullscreen);
        }
        self.draw();
        outcome
    }

    // =========================================================================
    // Update
    // =========================================================================

    pub fn update(&mut self, input: &FrameInput) -> FrameOutcome {
        self.mouse = input.mouse;
        self.time += input.dt as f64;

        match self.screen {
            Screen::MainMenu => match self.main_menu.handle_input(input) {
                MainMenuAction::NewGame => self.new_game(),
                MainMenuAction::Continue => self.screen = Screen::Playing,
                MainMenuAction::Settings => self.screen = Screen::Settings,
                MainMenuAction::Quit => return FrameOutcome::Quit,
                MainMenuAction::None => {}
            },
            Screen::Settings => match self.settings.handle_input(input, &mut self.config) {
                SettingsAction::FullscreenChanged(on) => self.pending_fullscreen = Some(on),
                SettingsAction::Back => {
                    self.settings.status = None;
                    self.screen = Screen::MainMenu;
                }
                SettingsAction::None => {}
            },
            Screen::Playing => {
                self.update_playing(input);
                self.drain_events();
                self.ui.tick_toasts(input.dt);
            }
        }
        FrameOutcome::Continue
    }

    fn update_playing(&mut self, input: &FrameInput) {
        if self.ui.quit_confirm.open {
            if self.ui.quit_confirm.handle_input(input) == ConfirmAction::Yes {
                self.screen = Screen::MainMenu;
            }
            return;
        }
        if self.ui.suspects.open {
            if let SuspectChoice::Interrogate(background) = self.ui.suspects.handle_input(input) {
                let scene = InterrogationScene::new(background);
                self.stack.push(Box::new(scene), &mut self.player);
            }
            return;
        }
        if self.ui.map.open {
            if let MapAction::Go(id) = self.ui.map.handle_input(input) {
                self.stack.apply(SceneAction::Switch(id), &mut self.player, &mut self.events);
            }
            return;
        }
        if self.ui.notebook.open {
            self.ui.notebook.handle_input(input, &mut self.notebook);
            return;
        }
        if self.ui.inventory.open {
            self.ui.inventory.handle_input(input);
            return;
        }

        if self.stack.has_modal() {
            let scene = self.stack.top_mut();
            scene.update(&self.player, input.dt);
            let action = scene.handle_input(input, &mut self.events);
            self.stack.apply(action, &mut self.player, &mut self.events);
            if self.case_cold_pending && !self.stack.has_modal() {
                self.case_went_cold();
            }
            return;
        }

        if self.handle_global_keys(input) {
            return;
        }

        self.move_player(input);
        self.player.tick_animation(&self.config.player);

        let scene = self.stack.top_mut();
        scene.update(&self.player, input.dt);
        let action = scene.handle_input(input, &mut self.events);
        self.stack.apply(action, &mut self.player, &mut self.events);
    }

    /// Overlay toggles, HUD clicks and scene hotkeys while exploring.
    /// True if the frame's input was consumed.
    fn handle_global_keys(&mut self, input: &FrameInput) -> bool {
        let mouse = &input.mouse;
        if input.pressed(Action::Back) {
            self.ui.quit_confirm.show();
            return true;
        }
        if input.pressed(Action::ToggleInventory) || mouse.clicked(&UiState::inventory_icon()) {
            self.ui.inventory.toggle();
            return true;
        }
        if input.pressed(Action::ToggleNotebook) || mouse.clicked(&UiState::notebook_icon()) {
            self.ui.notebook.show();
            return true;
        }
        if input.pressed(Action::ToggleMap) || mouse.clicked(&UiState::map_icon()) {
            self.ui.map.toggle();
            return true;
        }
        if let Some(id) = input.scene_key.and_then(SceneId::from_number_key) {
            if id != self.stack.current() {
                self.stack.apply(SceneAction::Switch(id), &mut self.player, &mut self.events);
                return true;
            }
        }
        false
    }

    /// Step the detective, then let the scene push them out of walls
    fn move_player(&mut self, input: &FrameInput) {
        if !self.stack.top().takes_player() {
            return;
        }
        let old = self.player.position();
        self.player.apply_movement(input.move_axis, input.dt, self.config.player.speed, &SCENE_BOUNDS);
        let desired = self.player.rect;
        let (x, y) = self.stack.top().resolve_movement(&desired, old, &self.config.collision);
        self.player.place_at(x, y);
    }

    fn drain_events(&mut self) {
        let items: Vec<_> = self.events.item_collected.drain().collect();
        for event in items {
            match item_by_code(event.code) {
                Some(item) => {
                    if !self.inventory.add_item(*item, None) {
                        self.ui.show_toast("Inventory is full");
                    }
                }
                None => eprintln!("Unknown item code: {}", event.code),
            }
        }

        let dialogue: Vec<_> = self.events.dialogue.drain().collect();
        for line in dialogue {
            self.ui.show_toast(format!("{}: {}", line.speaker, line.text));
        }

        let clues: Vec<_> = self.events.clue_unlocked.drain().collect();
        for event in clues {
            if self.notebook.unlock(event.clue) {
                self.ui.show_toast(format!("New clue: {}", event.clue));
            }
        }

        let changes: Vec<_> = self.events.scene_change.drain().collect();
        for change in changes {
            let title = self.stack.case(change.to).descriptor().title;
            self.ui.show_toast(title);
        }

        if !self.events.interrogation_requested.is_empty() {
            self.events.interrogation_requested.clear();
            self.ui.suspects.show();
        }

        let verdicts: Vec<_> = self.events.accusation.drain().collect();
        for verdict in verdicts {
            self.on_accusation(verdict.correct);
        }
    }

    fn on_accusation(&mut self, correct: bool) {
        if correct {
            println!("Case solved after {} wrong accusations", self.wrong_accusations);
            self.ui.show_toast("Case closed. The killer is behind bars.");
            return;
        }

        self.wrong_accusations += 1;
        let max = self.config.gameplay.max_wrong_accusations;
        println!("Wrong accusation {}/{}", self.wrong_accusations, max);
        if self.wrong_accusations >= max {
            // The verdict stays up until the accusation scene closes itself
            self.case_cold_pending = true;
        } else {
            let left = max - self.wrong_accusations;
            self.ui.show_toast(format!("Wrong suspect. {} accusation(s) left.", left));
        }
    }

    fn case_went_cold(&mut self) {
        println!("Case went cold after {} wrong accusations", self.wrong_accusations);
        self.new_game();
        self.ui.show_toast("Too many wrong accusations. The case went cold. Starting over.");
    }

    // =========================================================================
    // Draw
    // =========================================================================

    pub fn draw(&self) {
        clear_background(BLACK);
        set_camera(&self.viewport.camera());

        let mouse = &self.mouse;
        match self.screen {
            Screen::MainMenu => self.main_menu.draw(mouse),
            Screen::Settings => self.settings.draw(&self.config, mouse),
            Screen::Playing => self.draw_playing(),
        }

        set_default_camera();
    }

    fn draw_playing(&self) {
        let mouse = &self.mouse;
        let ctx = DrawContext {
            assets: &self.assets,
            player: Some(&self.player),
            player_settings: &self.config.player,
            mouse,
            time: self.time,
        };
        self.stack.draw(&ctx);

        if !self.stack.has_modal() {
            self.draw_hud();
        }

        if self.ui.inventory.open {
            self.ui.inventory.draw(&self.inventory, mouse);
        }
        if self.ui.notebook.open {
            self.ui.notebook.draw(&self.notebook, mouse, self.time * 1000.0);
        }
        if self.ui.map.open {
            self.ui.map.draw(self.stack.current(), mouse);
        }
        if self.ui.suspects.open {
            self.ui.suspects.draw(&self.assets, mouse);
        }
        if self.ui.quit_confirm.open {
            self.ui.quit_confirm.draw(mouse);
        }

        if let Some(toast) = self.ui.toast() {
            draw_toast(toast);
        }
    }

    fn draw_hud(&self) {
        let mouse = &self.mouse;
        let enabled = !self.ui.any_open();
        ui::text_button(mouse, UiState::map_icon(), "Map", enabled);
        ui::text_button(mouse, UiState::inventory_icon(), "Bag", enabled);
        ui::text_button(mouse, UiState::notebook_icon(), "Notes", enabled);

        let counter = format!("Items: {}   Clues: {}", self.inventory.len(), self.notebook.unlocked_count());
        ui::draw_label(&counter, 20.0, 40.0, ui::FONT_SIZE_SMALL, ui::TEXT_COLOR);

        // The debug overlay has its own stats line at the bottom
        if self.stack.top().debug_enabled() {
            return;
        }
        let hint = if self.input.has_gamepad() {
            "A: interact   X: bag   Y: notes   Select: map   B: quit"
        } else {
            "WASD: move   F: interact   E: bag   R: notes   M: map   1-8: travel   ESC: quit"
        };
        ui::draw_label(hint, 20.0, SCENE_HEIGHT - 14.0, ui::FONT_SIZE_SMALL, ui::TEXT_DIM);
    }
}

fn draw_toast(toast: &Toast) {
    let w = 760.0;
    let lines = ui::wrap_text(&toast.text, ui::FONT_SIZE_CONTENT, w - 40.0);
    let h = 24.0 + lines.len() as f32 * (ui::FONT_SIZE_CONTENT + 4.0);
    let rect = Rect::new((SCENE_WIDTH - w) * 0.5, SCENE_HEIGHT - h - 30.0, w, h);

    // Fade out over the last half second
    let alpha = (toast.remaining / 0.5).clamp(0.0, 1.0);
    let bg = Color::new(ui::TOAST_BG.r, ui::TOAST_BG.g, ui::TOAST_BG.b, ui::TOAST_BG.a * alpha);
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);

    let color = Color::new(ui::TEXT_COLOR.r, ui::TEXT_COLOR.g, ui::TEXT_COLOR.b, alpha);
    for (i, line) in lines.iter().enumerate() {
        let y = rect.y + 12.0 + (i as f32 + 1.0) * (ui::FONT_SIZE_CONTENT + 4.0) - 6.0;
        ui::draw_label(line, rect.x + 20.0, y, ui::FONT_SIZE_CONTENT, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::event::AccusationEvent;
    use crate::scene::{AccusationScene, CORRECT_SUSPECT, SUSPECTS};

    fn app() -> AppState {
        let mut app = AppState::new(GameConfig::default(), Assets::new());
        app.new_game();
        app.drain_events();
        app.ui.toasts.clear();
        app
    }

    fn press(app: &mut AppState, actions: &[Action]) -> FrameOutcome {
        app.update(&FrameInput::default().with_pressed(actions))
    }

    #[test]
    fn test_new_game_state() {
        let app = app();
        assert_eq!(app.screen, Screen::Playing);
        assert!(app.game_started());
        assert_eq!(app.stack.current(), SceneId::Office);
        assert_eq!(app.player.position(), SceneId::Office.descriptor().spawn);
        assert_eq!(app.inventory.len(), 5);
        assert_eq!(app.notebook.unlocked_count(), 2);
    }

    #[test]
    fn test_main_menu_flow() {
        let mut app = AppState::new(GameConfig::default(), Assets::new());
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(!app.game_started());

        press(&mut app, &[Action::Confirm]);
        assert_eq!(app.screen, Screen::Playing);

        press(&mut app, &[Action::Back]);
        assert!(app.ui.quit_confirm.open);
        press(&mut app, &[Action::MenuLeft]);
        press(&mut app, &[Action::Confirm]);
        assert_eq!(app.screen, Screen::MainMenu);

        // Quit sits at the bottom of the list
        press(&mut app, &[Action::MenuUp]);
        assert_eq!(press(&mut app, &[Action::Confirm]), FrameOutcome::Quit);
    }

    #[test]
    fn test_quit_dialog_defaults_to_staying() {
        let mut app = app();
        press(&mut app, &[Action::Back]);
        press(&mut app, &[Action::Confirm]);
        assert!(!app.ui.quit_confirm.open);
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn test_number_key_switches_scene() {
        let mut app = app();
        let mut input = FrameInput::default();
        input.scene_key = Some(4);
        app.update(&input);
        assert_eq!(app.stack.current(), SceneId::Wrath);
        assert_eq!(app.player.position(), SceneId::Wrath.descriptor().spawn);
        assert_eq!(app.ui.toast().map(|t| t.text.as_str()), Some(SceneId::Wrath.descriptor().title));
    }

    #[test]
    fn test_pickup_reaches_inventory_and_notebook() {
        let mut app = app();
        let mut input = FrameInput::default();
        input.scene_key = Some(3);
        app.update(&input);

        let mask = SceneId::Envy.descriptor().collectibles[0].rect;
        app.player.place_at(mask.x + 20.0, mask.y - 20.0);
        press(&mut app, &[Action::Interact]);

        assert!(app.inventory.contains("MSK1"));
        assert!(app.notebook.is_unlocked("Envy Mask"));
        assert!(app.ui.toasts.iter().any(|t| t.text.contains("New clue: Envy Mask")));
    }

    #[test]
    fn test_overlay_blocks_movement() {
        let mut app = app();
        press(&mut app, &[Action::ToggleInventory]);
        assert!(app.ui.inventory.open);

        let before = app.player.position();
        app.update(&FrameInput::default().with_axis(vec2(1.0, 0.0), 0.1));
        assert_eq!(app.player.position(), before);

        press(&mut app, &[Action::ToggleInventory]);
        assert!(!app.ui.inventory.open);
        app.update(&FrameInput::default().with_axis(vec2(1.0, 0.0), 0.1));
        assert!(app.player.position().0 > before.0);
    }

    #[test]
    fn test_hud_icon_opens_notebook() {
        let mut app = app();
        let r = UiState::notebook_icon();
        let mouse = MouseState { x: r.center_x(), y: r.center_y(), left_pressed: true, ..Default::default() };
        app.update(&FrameInput::default().with_mouse(mouse));
        assert!(app.ui.notebook.open);
    }

    #[test]
    fn test_map_travel() {
        let mut app = app();
        press(&mut app, &[Action::ToggleMap]);
        assert!(app.ui.map.open);
        let r = MapPopup::button_rect(SceneId::Pride);
        let mouse = MouseState { x: r.center_x(), y: r.center_y(), left_pressed: true, ..Default::default() };
        app.update(&FrameInput::default().with_mouse(mouse));
        assert!(!app.ui.map.open);
        assert_eq!(app.stack.current(), SceneId::Pride);
    }

    #[test]
    fn test_interrogation_request_opens_popup_then_modal() {
        let mut app = app();
        app.events.interrogation_requested.send(());
        app.drain_events();
        assert!(app.ui.suspects.open);

        press(&mut app, &[Action::Confirm]);
        assert!(!app.ui.suspects.open);
        assert!(app.stack.has_modal());

        // Modal consumes the quit key
        press(&mut app, &[Action::Back]);
        assert!(!app.stack.has_modal());
        assert!(!app.ui.quit_confirm.open);
    }

    #[test]
    fn test_wrong_accusations_count_up() {
        let mut app = app();
        let max = app.config.gameplay.max_wrong_accusations;

        for _ in 0..max - 1 {
            app.on_accusation(false);
        }
        assert_eq!(app.wrong_accusations, max - 1);
        assert!(app.ui.toasts.iter().any(|t| t.text.contains("1 accusation(s) left")));
    }

    #[test]
    fn test_last_wrong_accusation_keeps_verdict_then_resets() {
        let mut app = app();
        app.inventory.remove_item(0);
        let max = app.config.gameplay.max_wrong_accusations;
        app.wrong_accusations = max - 1;
        app.stack.push(Box::new(AccusationScene::new()), &mut app.player);

        // Hover a wrong suspect, confirm the dialog, then accuse
        let wrong = (CORRECT_SUSPECT + 1) % SUSPECTS.len();
        let card = AccusationScene::new().suspect_card(wrong);
        let hover = MouseState { x: card.center_x(), y: card.center_y(), ..Default::default() };
        app.update(&FrameInput::default().with_mouse(hover));
        press(&mut app, &[Action::Confirm]);
        press(&mut app, &[Action::Confirm]);
        assert_eq!(app.wrong_accusations, max);

        // Verdict stays on screen for its full duration
        let mut step = FrameInput::default();
        step.dt = 1.0;
        app.update(&step);
        app.update(&step);
        assert!(app.stack.has_modal());
        assert_eq!(app.inventory.len(), 4);
        assert!(!app.ui.toasts.iter().any(|t| t.text.contains("went cold")));

        app.update(&step);
        assert!(!app.stack.has_modal());
        assert_eq!(app.stack.current(), SceneId::Office);
        assert_eq!(app.wrong_accusations, 0);
        assert_eq!(app.inventory.len(), 5);
        assert!(app.ui.toasts.iter().any(|t| t.text.contains("went cold")));
    }

    #[test]
    fn test_correct_accusation_keeps_game() {
        let mut app = app();
        app.events.accusation.send(AccusationEvent { correct: true });
        app.drain_events();
        assert_eq!(app.wrong_accusations, 0);
        assert!(app.ui.toast().is_some());
    }

    #[test]
    fn test_toasts_queue_and_expire() {
        let mut ui = UiState::default();
        ui.show_toast("one");
        ui.show_toast("two");
        ui.tick_toasts(TOAST_DURATION + 0.1);
        assert_eq!(ui.toast().map(|t| t.text.as_str()), Some("two"));
        ui.tick_toasts(TOAST_DURATION);
        assert!(ui.toast().is_none());
    }

    #[test]
    fn test_hud_icons_disjoint() {
        let icons = [UiState::map_icon(), UiState::inventory_icon(), UiState::notebook_icon()];
        for (i, a) in icons.iter().enumerate() {
            assert!(a.right() <= SCENE_WIDTH);
            for b in icons.iter().skip(i + 1) {
                assert!(!a.overlaps(b));
            }
        }
    }
}
