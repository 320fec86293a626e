//! Interaction zones
//!
//! Inflated trigger rects around collectibles, NPCs and inspectable props.
//! Inside-ness is recomputed every frame from the player's current rect; the
//! interact key fires every zone the player stands in, once per key press.

use macroquad::prelude::*;

use crate::ui::{self, Rect};

/// What happens when a zone is triggered. Indices point into the owning
/// scene's collectible / NPC / inspectable lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Pickup(usize),
    Talk(usize),
    Inspect(usize),
    /// Opens the suspect selection popup
    Interrogate,
}

#[derive(Debug, Clone)]
pub struct InteractionArea {
    pub id: u32,
    pub rect: Rect,
    pub kind: InteractionKind,
    pub player_is_inside: bool,
}

impl InteractionArea {
    pub fn new(id: u32, rect: Rect, kind: InteractionKind) -> Self {
        Self { id, rect, kind, player_is_inside: false }
    }

    pub fn update(&mut self, player: &Rect) {
        self.player_is_inside = self.rect.overlaps(player);
    }
}

/// Active zones of one scene, in registration order
#[derive(Debug, Clone, Default)]
pub struct InteractionZones {
    areas: Vec<InteractionArea>,
    next_id: u32,
}

impl InteractionZones {
    pub fn new() -> Self {
        Self { areas: Vec::new(), next_id: 0 }
    }

    /// Register a zone, returns its id
    pub fn add(&mut self, rect: Rect, kind: InteractionKind) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.areas.push(InteractionArea::new(id, rect, kind));
        id
    }

    /// Remove a zone. Returns false if it was already gone.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.areas.len();
        self.areas.retain(|a| a.id != id);
        self.areas.len() != before
    }

    pub fn update_all(&mut self, player: &Rect) {
        for area in &mut self.areas {
            area.update(player);
        }
    }

    pub fn any_inside(&self) -> bool {
        self.areas.iter().any(|a| a.player_is_inside)
    }

    /// Called once per interact key press. Returns the zones the player is
    /// currently inside, in registration order.
    pub fn trigger(&self) -> Vec<(u32, InteractionKind)> {
        self.areas
            .iter()
            .filter(|a| a.player_is_inside)
            .map(|a| (a.id, a.kind))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionArea> {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Rect of the "[F]" prompt box, centered above the player's head
pub fn prompt_rect(player: &Rect) -> Rect {
    let w = 44.0;
    let h = 26.0;
    Rect::new(player.center_x() - w * 0.5, player.y - 10.0 - h, w, h)
}

pub fn draw_prompt(player: &Rect) {
    let r = prompt_rect(player);
    draw_rectangle(r.x, r.y, r.w, r.h, Color::new(0.0, 0.0, 0.0, 0.6));
    ui::draw_text_centered("[F]", r.center_x(), r.center_y(), 22.0, ui::PROMPT_TEXT);
}

/// Cyan outlines for every active zone
pub fn draw_debug(zones: &InteractionZones) {
    for area in zones.iter() {
        let r = area.rect;
        let thickness = if area.player_is_inside { 3.0 } else { 2.0 };
        draw_rectangle_lines(r.x, r.y, r.w, r.h, thickness, ui::DEBUG_ZONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_tracks_current_rect() {
        let mut zones = InteractionZones::new();
        zones.add(Rect::new(0.0, 0.0, 50.0, 50.0), InteractionKind::Talk(0));

        zones.update_all(&Rect::new(40.0, 40.0, 20.0, 20.0));
        assert!(zones.any_inside());

        zones.update_all(&Rect::new(50.0, 50.0, 20.0, 20.0));
        assert!(!zones.any_inside());
        assert!(zones.trigger().is_empty());
    }

    #[test]
    fn test_pickup_fires_once() {
        let mut zones = InteractionZones::new();
        let id = zones.add(Rect::new(0.0, 0.0, 50.0, 50.0), InteractionKind::Pickup(0));
        let player = Rect::new(10.0, 10.0, 10.0, 10.0);

        let mut fired = 0;
        for _press in 0..3 {
            zones.update_all(&player);
            for (zone_id, kind) in zones.trigger() {
                if let InteractionKind::Pickup(_) = kind {
                    fired += 1;
                    zones.remove(zone_id);
                }
            }
        }
        assert_eq!(fired, 1);
        assert!(!zones.remove(id));
    }

    #[test]
    fn test_trigger_preserves_order() {
        let mut zones = InteractionZones::new();
        zones.add(Rect::new(0.0, 0.0, 100.0, 100.0), InteractionKind::Inspect(2));
        zones.add(Rect::new(500.0, 0.0, 10.0, 10.0), InteractionKind::Talk(0));
        zones.add(Rect::new(0.0, 0.0, 100.0, 100.0), InteractionKind::Talk(1));
        zones.update_all(&Rect::new(10.0, 10.0, 5.0, 5.0));

        let kinds: Vec<_> = zones.trigger().into_iter().map(|(_, k)| k).collect();
        assert_eq!(kinds, vec![InteractionKind::Inspect(2), InteractionKind::Talk(1)]);
    }

    #[test]
    fn test_prompt_sits_above_head() {
        let player = Rect::new(100.0, 200.0, 48.0, 72.0);
        let r = prompt_rect(&player);
        assert!(r.bottom() < player.y);
        assert!((r.center_x() - player.center_x()).abs() < 0.001);
    }
}
