//! Inventory
//!
//! A fixed 6x4 grid of item slots. Items are catalog entries identified by
//! a short evidence code; scenes only ever send codes.

mod view;

pub use view::*;

use macroquad::prelude::Color;

pub const ROWS: usize = 6;
pub const COLS: usize = 4;
pub const SLOT_COUNT: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDef {
    pub name: &'static str,
    pub code: &'static str,
    pub description: &'static str,
    /// Drawn as the slot icon
    pub icon_color: Color,
}

const fn icon(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

pub const ITEMS: [ItemDef; 10] = [
    ItemDef {
        name: "Magnifying Glass",
        code: "MAG2",
        description: "Useful for spotting small details others overlook.",
        icon_color: icon(120, 170, 220),
    },
    ItemDef {
        name: "Crime Scene Tape",
        code: "CST3",
        description: "Bright yellow tape used to secure areas. Smells like cheap plastic.",
        icon_color: icon(240, 210, 40),
    },
    ItemDef {
        name: "Evidence Bag",
        code: "EVD4",
        description: "A sealed bag containing an unidentified object. Do not tamper.",
        icon_color: icon(200, 200, 190),
    },
    ItemDef {
        name: "Fingerprint Duster",
        code: "FPD5",
        description: "Used to reveal fingerprints. Leaves black powder everywhere.",
        icon_color: icon(60, 60, 70),
    },
    ItemDef {
        name: "Voice Recorder",
        code: "REC6",
        description: "Used to interview suspects. Battery life: unpredictable.",
        icon_color: icon(180, 40, 40),
    },
    ItemDef {
        name: "Rusty Key",
        code: "KEY7",
        description: "Found at a crime scene. Belongs to a lock long forgotten.",
        icon_color: icon(150, 90, 40),
    },
    ItemDef {
        name: "Stopped Pocket Watch",
        code: "PW8",
        description: "Stopped at 11:47 PM. Possible time of crime?",
        icon_color: icon(210, 180, 90),
    },
    ItemDef {
        name: "Cigarette Butt",
        code: "CB9",
        description: "Left behind by someone at the scene. Menthol, an unusual choice.",
        icon_color: icon(230, 220, 200),
    },
    ItemDef {
        name: "Mysterious Letter",
        code: "LTRX",
        description: "A handwritten note with no signature. The ink is still wet.",
        icon_color: icon(240, 235, 215),
    },
    ItemDef {
        name: "Green Mask",
        code: "MSK1",
        description: "A cracked green mask left beside the body. Someone wanted to be someone else.",
        icon_color: icon(80, 200, 90),
    },
];

/// Detective's kit at the start of a new game
pub const STARTING_KIT: [&str; 5] = ["MAG2", "CST3", "EVD4", "FPD5", "REC6"];

pub fn item_by_code(code: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|item| item.code == code)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    slots: [Option<ItemDef>; SLOT_COUNT],
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self { slots: [None; SLOT_COUNT] }
    }

    /// Inventory holding the starting kit
    pub fn with_starting_kit() -> Self {
        let mut inv = Self::new();
        for item in STARTING_KIT.iter().filter_map(|code| item_by_code(code)) {
            inv.add_item(*item, None);
        }
        inv
    }

    /// Put an item into `index` (replacing what was there) or, without a
    /// valid index, into the first empty slot. False when the grid is full.
    pub fn add_item(&mut self, item: ItemDef, index: Option<usize>) -> bool {
        if let Some(i) = index.filter(|&i| i < SLOT_COUNT) {
            self.slots[i] = Some(item);
            return true;
        }
        match self.slots.iter().position(|s| s.is_none()) {
            Some(i) => {
                self.slots[i] = Some(item);
                true
            }
            None => false,
        }
    }

    /// Take the item out of a slot
    pub fn remove_item(&mut self, index: usize) -> Option<ItemDef> {
        self.slots.get_mut(index).and_then(|s| s.take())
    }

    pub fn get_item(&self, index: usize) -> Option<&ItemDef> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    pub fn clear(&mut self) {
        self.slots = [None; SLOT_COUNT];
    }

    /// Occupied slots with their index
    pub fn items(&self) -> impl Iterator<Item = (usize, &ItemDef)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.items().any(|(_, item)| item.code == code)
    }

    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(code: &str) -> ItemDef {
        *item_by_code(code).unwrap()
    }

    #[test]
    fn test_starting_kit() {
        let inv = Inventory::with_starting_kit();
        assert_eq!(inv.len(), 5);
        assert_eq!(inv.get_item(0).map(|i| i.code), Some("MAG2"));
        assert!(inv.contains("REC6"));
        assert!(!inv.contains("KEY7"));
    }

    #[test]
    fn test_add_fills_first_gap() {
        let mut inv = Inventory::with_starting_kit();
        inv.remove_item(1);
        assert!(inv.add_item(item("KEY7"), None));
        assert_eq!(inv.get_item(1).map(|i| i.code), Some("KEY7"));
    }

    #[test]
    fn test_explicit_index_replaces() {
        let mut inv = Inventory::with_starting_kit();
        assert!(inv.add_item(item("PW8"), Some(0)));
        assert_eq!(inv.get_item(0).map(|i| i.code), Some("PW8"));
        assert!(!inv.contains("MAG2"));

        // Out of range falls back to the first empty slot
        assert!(inv.add_item(item("CB9"), Some(99)));
        assert_eq!(inv.get_item(5).map(|i| i.code), Some("CB9"));
    }

    #[test]
    fn test_full_grid_rejects() {
        let mut inv = Inventory::new();
        for _ in 0..SLOT_COUNT {
            assert!(inv.add_item(item("EVD4"), None));
        }
        assert!(!inv.add_item(item("LTRX"), None));
        assert_eq!(inv.len(), SLOT_COUNT);

        inv.clear();
        assert!(inv.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut inv = Inventory::new();
        assert_eq!(inv.remove_item(SLOT_COUNT), None);
        assert_eq!(inv.get_item(SLOT_COUNT), None);
    }

    #[test]
    fn test_catalog_codes_unique() {
        for (i, a) in ITEMS.iter().enumerate() {
            assert!(ITEMS.iter().skip(i + 1).all(|b| b.code != a.code), "duplicate {}", a.code);
        }
        for id in crate::scene::SceneId::ALL {
            for c in id.descriptor().collectibles {
                assert!(item_by_code(c.item).is_some(), "unknown item {}", c.item);
            }
        }
    }
}
