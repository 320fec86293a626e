//! Scenes
//!
//! - `CaseScene`: the office and the seven crime scenes, all built from
//!   the descriptor table
//! - `InterrogationScene` and `AccusationScene`: modal scenes pushed on top
//! - `SuspectSelect`: the popup that picks who to interrogate
//!
//! The app only talks to scenes through the `Scene` trait.

mod accusation;
mod case_scene;
mod descriptors;
mod interrogation;
mod stack;
mod suspect_select;

pub use accusation::*;
pub use case_scene::*;
pub use descriptors::*;
pub use interrogation::*;
pub use stack::*;
pub use suspect_select::*;

use crate::assets::Assets;
use crate::config::PlayerSettings;
use crate::game::{CollisionTuning, Events, Player};
use crate::input::FrameInput;
use crate::ui::{MouseState, Rect};

/// What the scene stack should do after a scene handled input
pub enum SceneAction {
    None,
    /// Move the detective to another explorable scene
    Switch(SceneId),
    /// Open a modal scene on top
    Push(Box<dyn Scene>),
    /// Swap the top modal scene
    Replace(Box<dyn Scene>),
    /// Close the top modal scene
    Pop,
    /// Close every modal and go back to the office
    ReturnToOffice,
}

impl std::fmt::Debug for SceneAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneAction::None => write!(f, "None"),
            SceneAction::Switch(id) => write!(f, "Switch({:?})", id),
            SceneAction::Push(s) => write!(f, "Push({})", s.title()),
            SceneAction::Replace(s) => write!(f, "Replace({})", s.title()),
            SceneAction::Pop => write!(f, "Pop"),
            SceneAction::ReturnToOffice => write!(f, "ReturnToOffice"),
        }
    }
}

/// Read-only state a scene needs to draw itself
pub struct DrawContext<'a> {
    pub assets: &'a Assets,
    pub player: Option<&'a Player>,
    pub player_settings: &'a PlayerSettings,
    pub mouse: &'a MouseState,
    /// Seconds since startup
    pub time: f64,
}

/// Common interface for every scene. All methods default to doing nothing,
/// so modal scenes only implement what they use.
pub trait Scene {
    fn title(&self) -> &str {
        ""
    }

    /// Called when the scene becomes active
    fn on_enter(&mut self, _player: &mut Player) {}

    fn handle_input(&mut self, _input: &FrameInput, _events: &mut Events) -> SceneAction {
        SceneAction::None
    }

    /// Called after the player moved this frame
    fn update(&mut self, _player: &Player, _dt: f32) {}

    fn check_collision(&self, _rect: &Rect) -> bool {
        false
    }

    /// Where the player ends up when trying to move to `desired`
    fn resolve_movement(&self, desired: &Rect, _old: (f32, f32), _tuning: &CollisionTuning) -> (f32, f32) {
        (desired.x, desired.y)
    }

    /// True if the detective walks around in this scene
    fn takes_player(&self) -> bool {
        false
    }

    fn debug_enabled(&self) -> bool {
        false
    }

    fn draw(&self, _ctx: &DrawContext) {}
}
