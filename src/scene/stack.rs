//! Scene stack
//!
//! One persistent `CaseScene` per `SceneId`, plus modal scenes stacked on
//! top of whichever case scene is current. Modals get input first and are
//! drawn last.

use super::{CaseScene, DrawContext, Scene, SceneAction, SceneId};
use crate::assets::Assets;
use crate::game::event::SceneChangeEvent;
use crate::game::{Events, Player};

pub struct SceneStack {
    /// Indexed by `SceneId::index`
    cases: Vec<CaseScene>,
    current: SceneId,
    modals: Vec<Box<dyn Scene>>,
}

impl SceneStack {
    /// Build every case scene with `make`, starting in the office
    pub fn new(mut make: impl FnMut(SceneId) -> CaseScene) -> Self {
        Self {
            cases: SceneId::ALL.iter().map(|id| make(*id)).collect(),
            current: SceneId::Office,
            modals: Vec::new(),
        }
    }

    /// Fresh scenes for a new game, using the loaded wall masks
    pub fn build(assets: &Assets, debug: bool) -> Self {
        Self::new(|id| {
            let desc = id.descriptor();
            let mask = assets.wall_mask(desc.wall_mask);
            CaseScene::new(desc, mask, debug)
        })
    }

    pub fn current(&self) -> SceneId {
        self.current
    }

    pub fn case(&self, id: SceneId) -> &CaseScene {
        &self.cases[id.index()]
    }

    pub fn current_case(&self) -> &CaseScene {
        self.case(self.current)
    }

    pub fn current_case_mut(&mut self) -> &mut CaseScene {
        &mut self.cases[self.current.index()]
    }

    pub fn has_modal(&self) -> bool {
        !self.modals.is_empty()
    }

    pub fn modal_count(&self) -> usize {
        self.modals.len()
    }

    /// Scene receiving input this frame
    pub fn top(&self) -> &dyn Scene {
        match self.modals.last() {
            Some(modal) => modal.as_ref(),
            None => self.current_case(),
        }
    }

    pub fn top_mut(&mut self) -> &mut dyn Scene {
        let index = self.current.index();
        match self.modals.last_mut() {
            Some(modal) => modal.as_mut(),
            None => &mut self.cases[index],
        }
    }

    /// Enter a case scene; the player is placed at its spawn point
    pub fn switch_to(&mut self, id: SceneId, player: &mut Player, events: &mut Events) {
        let from = self.current;
        self.current = id;
        self.current_case_mut().on_enter(player);
        println!("Switched to scene: {}", id.label());
        events.scene_change.send(SceneChangeEvent { from, to: id });
    }

    pub fn push(&mut self, mut scene: Box<dyn Scene>, player: &mut Player) {
        scene.on_enter(player);
        self.modals.push(scene);
    }

    pub fn apply(&mut self, action: SceneAction, player: &mut Player, events: &mut Events) {
        match action {
            SceneAction::None => {}
            SceneAction::Switch(id) => {
                self.modals.clear();
                self.switch_to(id, player, events);
            }
            SceneAction::Push(scene) => self.push(scene, player),
            SceneAction::Replace(scene) => {
                self.modals.pop();
                self.push(scene, player);
            }
            SceneAction::Pop => {
                self.modals.pop();
            }
            SceneAction::ReturnToOffice => {
                self.modals.clear();
                self.switch_to(SceneId::Office, player, events);
            }
        }
    }

    /// Current case scene, then every modal above it
    pub fn draw(&self, ctx: &DrawContext) {
        self.current_case().draw(ctx);
        let no_player = DrawContext { player: None, ..*ctx };
        for modal in &self.modals {
            modal.draw(&no_player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerSettings;
    use crate::input::{Action, FrameInput};

    struct Dummy;
    impl Scene for Dummy {
        fn title(&self) -> &str {
            "Dummy"
        }
    }

    fn setup() -> (SceneStack, Player, Events) {
        let stack = SceneStack::new(CaseScene::without_mask);
        let player = Player::new(&PlayerSettings::default(), 0.0, 0.0);
        (stack, player, Events::new())
    }

    #[test]
    fn test_switch_places_player_at_spawn() {
        let (mut stack, mut player, mut events) = setup();
        stack.switch_to(SceneId::Pride, &mut player, &mut events);
        assert_eq!(stack.current(), SceneId::Pride);
        assert_eq!(player.position(), SceneId::Pride.descriptor().spawn);

        let change = events.scene_change.drain().next().unwrap();
        assert_eq!(change.from, SceneId::Office);
        assert_eq!(change.to, SceneId::Pride);
    }

    #[test]
    fn test_collected_items_survive_switching() {
        let (mut stack, mut player, mut events) = setup();
        stack.switch_to(SceneId::Wrath, &mut player, &mut events);

        let butt = SceneId::Wrath.descriptor().collectibles[0].rect;
        player.place_at(butt.x, butt.y - 30.0);
        stack.top_mut().update(&player, 0.016);
        let input = FrameInput::default().with_pressed(&[Action::Interact]);
        let action = stack.top_mut().handle_input(&input, &mut events);
        stack.apply(action, &mut player, &mut events);
        assert!(stack.case(SceneId::Wrath).is_collected(0));

        stack.switch_to(SceneId::Office, &mut player, &mut events);
        stack.switch_to(SceneId::Wrath, &mut player, &mut events);
        assert!(stack.current_case().is_collected(0));
    }

    #[test]
    fn test_modals_route_input_and_pop() {
        let (mut stack, mut player, mut events) = setup();
        assert_eq!(stack.top().title(), "Precinct Office");

        stack.apply(SceneAction::Push(Box::new(Dummy)), &mut player, &mut events);
        assert!(stack.has_modal());
        assert_eq!(stack.top().title(), "Dummy");
        assert!(!stack.top().takes_player());

        stack.apply(SceneAction::Replace(Box::new(Dummy)), &mut player, &mut events);
        assert_eq!(stack.modal_count(), 1);

        stack.apply(SceneAction::Pop, &mut player, &mut events);
        assert!(!stack.has_modal());
        assert_eq!(stack.top().title(), "Precinct Office");
    }

    #[test]
    fn test_return_to_office_clears_modals() {
        let (mut stack, mut player, mut events) = setup();
        stack.switch_to(SceneId::Gluttony, &mut player, &mut events);
        stack.apply(SceneAction::Push(Box::new(Dummy)), &mut player, &mut events);
        stack.apply(SceneAction::Push(Box::new(Dummy)), &mut player, &mut events);

        stack.apply(SceneAction::ReturnToOffice, &mut player, &mut events);
        assert!(!stack.has_modal());
        assert_eq!(stack.current(), SceneId::Office);
        assert_eq!(player.position(), (616.0, 520.0));
    }
}
