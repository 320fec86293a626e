//! Event System
//!
//! Scenes do not touch the inventory, notebook or HUD directly. They send
//! events that the app drains once per frame:
//! 1. Player picks up the mask -> ItemCollected + ClueUnlocked
//! 2. App adds the item to the inventory and unlocks the clue
//! 3. App shows a toast

use crate::scene::SceneId;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events
#[derive(Debug, Default)]
pub struct Events {
    /// Collectible picked up
    pub item_collected: EventQueue<ItemCollectedEvent>,

    /// Notebook clue revealed
    pub clue_unlocked: EventQueue<ClueUnlockedEvent>,

    /// Line of dialogue or inspection text to show
    pub dialogue: EventQueue<DialogueEvent>,

    /// Active exploration scene changed
    pub scene_change: EventQueue<SceneChangeEvent>,

    /// Player asked to interrogate a suspect
    pub interrogation_requested: EventQueue<()>,

    /// Accusation resolved
    pub accusation: EventQueue<AccusationEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.item_collected.clear();
        self.clue_unlocked.clear();
        self.dialogue.clear();
        self.scene_change.clear();
        self.interrogation_requested.clear();
        self.accusation.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCollectedEvent {
    /// Item code in the item catalog
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueUnlockedEvent {
    /// Clue name in the clue catalog
    pub clue: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueEvent {
    pub speaker: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneChangeEvent {
    pub from: SceneId,
    pub to: SceneId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccusationEvent {
    pub correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();
        events.item_collected.send(ItemCollectedEvent { code: "MSK1" });
        events.interrogation_requested.send(());
        assert_eq!(events.item_collected.len(), 1);

        events.clear_all();
        assert!(events.item_collected.is_empty());
        assert!(events.interrogation_requested.is_empty());
    }
}
