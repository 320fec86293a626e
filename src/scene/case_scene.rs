//! Explorable scene built from a descriptor
//!
//! Owns the collision world, the interaction zones and which pickups are
//! gone. Lives for the whole game session, so collected items stay
//! collected when the player leaves and comes back.

use macroquad::prelude::*;

use super::{DrawContext, Look, Scene, SceneAction, SceneDescriptor, SceneId};
use crate::config::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::game::event::{ClueUnlockedEvent, DialogueEvent, ItemCollectedEvent};
use crate::game::{
    interaction, resolve_movement, Collider, CollisionTuning, CollisionWorld, Events, InteractionKind,
    InteractionZones, ObstacleRegistry, Player, WallMask,
};
use crate::input::{Action, FrameInput};
use crate::ui::{self, Rect};

/// Growth applied to the office door zone
const DOOR_ZONE_GROW: f32 = 40.0;

/// Something drawn in the y-sorted pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawItem {
    Prop(usize),
    Npc(usize),
    Collectible(usize),
    Player,
}

pub struct CaseScene {
    desc: SceneDescriptor,
    world: CollisionWorld,
    zones: InteractionZones,
    /// Zone id of each collectible still lying around
    pickup_zones: Vec<Option<u32>>,
    collected: Vec<bool>,
    debug: bool,
}

impl CaseScene {
    pub fn new(desc: SceneDescriptor, mask: WallMask, debug: bool) -> Self {
        let world = CollisionWorld::new(
            ObstacleRegistry::from_rects(desc.props.iter().map(|p| p.collision)),
            mask,
        );

        let mut zones = InteractionZones::new();
        let pickup_zones = desc
            .collectibles
            .iter()
            .enumerate()
            .map(|(i, c)| Some(zones.add(c.rect.inflate(c.zone_grow.0, c.zone_grow.1), InteractionKind::Pickup(i))))
            .collect();
        for (i, npc) in desc.npcs.iter().enumerate() {
            zones.add(npc.rect.inflate(npc.zone_grow.0, npc.zone_grow.1), InteractionKind::Talk(i));
        }
        for (i, spot) in desc.inspects.iter().enumerate() {
            zones.add(spot.target.inflate(spot.zone_grow.0, spot.zone_grow.1), InteractionKind::Inspect(i));
        }
        if let Some(door) = desc.interrogation_door {
            zones.add(door.inflate(DOOR_ZONE_GROW, DOOR_ZONE_GROW), InteractionKind::Interrogate);
        }

        let collected = vec![false; desc.collectibles.len()];
        Self { desc, world, zones, pickup_zones, collected, debug }
    }

    /// Build from the descriptor table with an empty wall mask
    pub fn without_mask(id: SceneId) -> Self {
        Self::new(id.descriptor(), WallMask::empty(SCENE_WIDTH as usize, SCENE_HEIGHT as usize), false)
    }

    pub fn id(&self) -> SceneId {
        self.desc.id
    }

    pub fn descriptor(&self) -> &SceneDescriptor {
        &self.desc
    }

    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    pub fn zones(&self) -> &InteractionZones {
        &self.zones
    }

    pub fn is_collected(&self, index: usize) -> bool {
        self.collected.get(index).copied().unwrap_or(false)
    }

    fn interact(&mut self, kind: InteractionKind, events: &mut Events) {
        match kind {
            InteractionKind::Pickup(i) => {
                if self.collected[i] {
                    return;
                }
                self.collected[i] = true;
                if let Some(zone) = self.pickup_zones[i].take() {
                    self.zones.remove(zone);
                }

                let item = &self.desc.collectibles[i];
                println!("Collected {} ({})", item.name, item.item);
                events.item_collected.send(ItemCollectedEvent { code: item.item });
                if let Some(clue) = item.clue {
                    events.clue_unlocked.send(ClueUnlockedEvent { clue });
                }
                events.dialogue.send(DialogueEvent {
                    speaker: "Detective".to_string(),
                    text: format!("Picked up: {}", item.name),
                });
            }
            InteractionKind::Talk(i) => {
                let npc = &self.desc.npcs[i];
                events.dialogue.send(DialogueEvent { speaker: npc.name.to_string(), text: npc.line.to_string() });
                if let Some(clue) = npc.clue {
                    events.clue_unlocked.send(ClueUnlockedEvent { clue });
                }
            }
            InteractionKind::Inspect(i) => {
                let spot = &self.desc.inspects[i];
                events.dialogue.send(DialogueEvent { speaker: spot.name.to_string(), text: spot.text.to_string() });
                if let Some(clue) = spot.clue {
                    events.clue_unlocked.send(ClueUnlockedEvent { clue });
                }
            }
            InteractionKind::Interrogate => {
                events.interrogation_requested.send(());
            }
        }
    }

    /// Everything drawn in the sorted pass with its sort key (rect bottom).
    /// Stable: ties keep props, NPCs, pickups, player order.
    pub fn draw_order(&self, player: Option<&Rect>) -> Vec<(f32, DrawItem)> {
        let mut items = Vec::new();
        for (i, prop) in self.desc.props.iter().enumerate() {
            if prop.look != Look::Hidden {
                items.push((prop.draw.bottom(), DrawItem::Prop(i)));
            }
        }
        for (i, npc) in self.desc.npcs.iter().enumerate() {
            items.push((npc.rect.bottom(), DrawItem::Npc(i)));
        }
        for (i, c) in self.desc.collectibles.iter().enumerate() {
            if !self.collected[i] {
                items.push((c.rect.bottom(), DrawItem::Collectible(i)));
            }
        }
        if let Some(p) = player {
            items.push((p.bottom(), DrawItem::Player));
        }
        items.sort_by(|a, b| a.0.total_cmp(&b.0));
        items
    }

    fn item_rect(&self, item: DrawItem, player: Option<&Rect>) -> Option<Rect> {
        match item {
            DrawItem::Prop(i) => Some(self.desc.props[i].draw),
            DrawItem::Npc(i) => Some(self.desc.npcs[i].rect),
            DrawItem::Collectible(i) => Some(self.desc.collectibles[i].rect),
            DrawItem::Player => player.copied(),
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    fn draw_background(&self, ctx: &DrawContext) {
        let first_loaded = self.desc.backgrounds.first().and_then(|p| ctx.assets.texture(p)).is_some();
        if !first_loaded {
            self.draw_placeholder();
        }
        for path in &self.desc.backgrounds {
            if let Some(tex) = ctx.assets.texture(path) {
                draw_texture_ex(tex, 0.0, 0.0, WHITE, DrawTextureParams {
                    dest_size: Some(vec2(SCENE_WIDTH, SCENE_HEIGHT)),
                    ..Default::default()
                });
            }
        }
    }

    /// Solid fill with a 64px grid and the scene title
    fn draw_placeholder(&self) {
        draw_rectangle(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT, self.desc.placeholder);
        let grid = Color::new(1.0, 1.0, 1.0, 0.08);
        let mut x = 0.0;
        while x <= SCENE_WIDTH {
            draw_line(x, 0.0, x, SCENE_HEIGHT, 1.0, grid);
            x += 64.0;
        }
        let mut y = 0.0;
        while y <= SCENE_HEIGHT {
            draw_line(0.0, y, SCENE_WIDTH, y, 1.0, grid);
            y += 64.0;
        }
        ui::draw_text_centered(self.desc.title, SCENE_WIDTH * 0.5, 80.0, ui::FONT_SIZE_HEADER, ui::TEXT_DIM);
    }

    fn draw_item(&self, item: DrawItem, ctx: &DrawContext) {
        match item {
            DrawItem::Prop(i) => {
                let prop = &self.desc.props[i];
                let r = prop.draw;
                match prop.look {
                    Look::Hidden => {}
                    Look::Sprite(path) => match ctx.assets.texture(path) {
                        Some(tex) => draw_sprite(tex, r),
                        None => draw_rectangle(r.x, r.y, r.w, r.h, Color::new(0.6, 0.6, 0.6, 0.5)),
                    },
                    Look::Block(color) => draw_rectangle(r.x, r.y, r.w, r.h, color),
                }
            }
            DrawItem::Npc(i) => {
                let npc = &self.desc.npcs[i];
                let r = npc.rect;
                let head = r.w * 0.3;
                draw_rectangle(r.x + r.w * 0.15, r.y + head * 1.6, r.w * 0.7, r.h - head * 1.6, npc.color);
                draw_ellipse(r.center_x(), r.y + head, head, head, 0.0, npc.color);
                ui::draw_text_centered(npc.name, r.center_x(), r.y - 10.0, ui::FONT_SIZE_SMALL, WHITE);
            }
            DrawItem::Collectible(i) => {
                let c = &self.desc.collectibles[i];
                let r = c.rect;
                match ctx.assets.texture(c.sprite) {
                    Some(tex) => draw_sprite(tex, r),
                    None => {
                        draw_rectangle(r.x, r.y, r.w, r.h, ui::ACCENT_COLOR);
                        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, WHITE);
                    }
                }
            }
            DrawItem::Player => {
                if let Some(player) = ctx.player {
                    player.draw(ctx.assets.texture(&ctx.player_settings.sprite_sheet), ctx.player_settings);
                }
            }
        }
    }

    fn draw_debug(&self, ctx: &DrawContext, order: &[(f32, DrawItem)]) {
        for r in self.world.obstacles.iter() {
            draw_rectangle(r.x, r.y, r.w, r.h, ui::DEBUG_OBSTACLE_FILL);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, ui::DEBUG_OBSTACLE);
        }
        if let Some(overlay) = self.desc.wall_mask.and_then(|p| ctx.assets.mask_overlay(p)) {
            draw_texture_ex(overlay, 0.0, 0.0, WHITE, DrawTextureParams {
                dest_size: Some(vec2(SCENE_WIDTH, SCENE_HEIGHT)),
                ..Default::default()
            });
        }
        interaction::draw_debug(&self.zones);

        let player_rect = ctx.player.map(|p| p.rect);
        for (bottom, item) in order {
            if let Some(r) = self.item_rect(*item, player_rect.as_ref()) {
                draw_line(r.x, *bottom, r.right(), *bottom, 2.0, ui::DEBUG_SORT);
            }
        }

        let stats = format!(
            "{} | Obs: {} | NPCs: {} | Interact: {} | F3: Toggle Debug",
            self.desc.title,
            self.world.obstacles.len(),
            self.desc.npcs.len(),
            self.zones.len(),
        );
        draw_rectangle(0.0, SCENE_HEIGHT - 30.0, SCENE_WIDTH, 30.0, Color::new(0.0, 0.0, 0.0, 0.6));
        ui::draw_label(&stats, 10.0, SCENE_HEIGHT - 10.0, ui::FONT_SIZE_SMALL, ui::DEBUG_TEXT);
    }
}

fn draw_sprite(tex: &Texture2D, r: Rect) {
    draw_texture_ex(tex, r.x, r.y, WHITE, DrawTextureParams {
        dest_size: Some(vec2(r.w, r.h)),
        ..Default::default()
    });
}

impl Scene for CaseScene {
    fn title(&self) -> &str {
        self.desc.title
    }

    fn on_enter(&mut self, player: &mut Player) {
        player.place_at(self.desc.spawn.0, self.desc.spawn.1);
        self.zones.update_all(&player.rect);
    }

    fn handle_input(&mut self, input: &FrameInput, events: &mut Events) -> SceneAction {
        if input.pressed(Action::ToggleDebug) {
            self.debug = !self.debug;
            println!("Debug mode: {}", if self.debug { "ON" } else { "OFF" });
        }
        if input.pressed(Action::Interact) {
            for (_, kind) in self.zones.trigger() {
                self.interact(kind, events);
            }
        }
        SceneAction::None
    }

    fn update(&mut self, player: &Player, _dt: f32) {
        self.zones.update_all(&player.rect);
    }

    fn check_collision(&self, rect: &Rect) -> bool {
        self.world.check_collision(rect)
    }

    fn resolve_movement(&self, desired: &Rect, old: (f32, f32), tuning: &CollisionTuning) -> (f32, f32) {
        resolve_movement(&self.world, desired, old, tuning)
    }

    fn takes_player(&self) -> bool {
        true
    }

    fn debug_enabled(&self) -> bool {
        self.debug
    }

    fn draw(&self, ctx: &DrawContext) {
        self.draw_background(ctx);

        let player_rect = ctx.player.map(|p| p.rect);
        let order = self.draw_order(player_rect.as_ref());
        for (_, item) in &order {
            self.draw_item(*item, ctx);
        }

        if let Some(r) = player_rect {
            if self.zones.any_inside() {
                interaction::draw_prompt(&r);
            }
        }

        if self.debug {
            self.draw_debug(ctx, &order);
        }
    }
}
