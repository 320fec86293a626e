//! Scene descriptor table
//!
//! Every explorable scene is plain data: background layers, wall mask,
//! furniture, pickups, NPCs and inspectable spots. `CaseScene` turns one of
//! these into a playable room. Coordinates are in the 1280x720 logical space.

use macroquad::prelude::Color;

use crate::config::{SCENE_HEIGHT as H, SCENE_WIDTH as W};
use crate::ui::Rect;

/// Every explorable scene, in map / number-key order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Office,
    Greed,
    Envy,
    Wrath,
    Sloth,
    Gluttony,
    Lust,
    Pride,
}

impl SceneId {
    pub const ALL: [SceneId; 8] = [
        SceneId::Office,
        SceneId::Greed,
        SceneId::Envy,
        SceneId::Wrath,
        SceneId::Sloth,
        SceneId::Gluttony,
        SceneId::Lust,
        SceneId::Pride,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SceneId::Office => "Office",
            SceneId::Greed => "Greed",
            SceneId::Envy => "Envy",
            SceneId::Wrath => "Wrath",
            SceneId::Sloth => "Sloth",
            SceneId::Gluttony => "Gluttony",
            SceneId::Lust => "Lust",
            SceneId::Pride => "Pride",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|id| id == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number keys 1..8
    pub fn from_number_key(key: u32) -> Option<Self> {
        key.checked_sub(1).and_then(|i| Self::from_index(i as usize))
    }

    pub fn descriptor(&self) -> SceneDescriptor {
        match self {
            SceneId::Office => office(),
            SceneId::Greed => greed(),
            SceneId::Envy => envy(),
            SceneId::Wrath => wrath(),
            SceneId::Sloth => sloth(),
            SceneId::Gluttony => gluttony(),
            SceneId::Lust => lust(),
            SceneId::Pride => pride(),
        }
    }
}

// =============================================================================
// Descriptor types
// =============================================================================

/// How a prop is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Look {
    /// Already painted into the background
    Hidden,
    Sprite(&'static str),
    Block(Color),
}

/// Static blocking furniture
#[derive(Debug, Clone, PartialEq)]
pub struct PropDesc {
    pub name: &'static str,
    pub look: Look,
    /// Where the image is drawn
    pub draw: Rect,
    /// Blocking rect, usually the footprint of `draw`
    pub collision: Rect,
}

impl PropDesc {
    /// Invisible blocker
    pub fn wall(name: &'static str, rect: Rect) -> Self {
        Self { name, look: Look::Hidden, draw: rect, collision: rect }
    }

    /// Sprite with its top-left at (x, y)
    pub fn sprite_at(name: &'static str, path: &'static str, x: f32, y: f32, w: f32, h: f32) -> Self {
        let r = Rect::new(x, y, w, h);
        Self { name, look: Look::Sprite(path), draw: r, collision: r }
    }

    /// Sprite centered on (cx, cy)
    pub fn sprite_centered(name: &'static str, path: &'static str, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        let r = Rect::from_center(cx, cy, w, h);
        Self { name, look: Look::Sprite(path), draw: r, collision: r }
    }

    /// Shift the collision rect by `offset` and grow it by `resize` so the
    /// player can walk behind the top of tall sprites
    pub fn footprint(mut self, offset: (f32, f32), resize: (f32, f32)) -> Self {
        let r = self.draw;
        self.collision = Rect::new(r.x + offset.0, r.y + offset.1, r.w + resize.0, r.h + resize.1);
        self
    }
}

/// One-shot pickup, never blocks movement
#[derive(Debug, Clone, PartialEq)]
pub struct CollectibleDesc {
    pub name: &'static str,
    pub sprite: &'static str,
    pub rect: Rect,
    /// Zone growth (total width, total height)
    pub zone_grow: (f32, f32),
    /// Item code added to the inventory
    pub item: &'static str,
    pub clue: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NpcDesc {
    pub name: &'static str,
    pub rect: Rect,
    pub color: Color,
    pub zone_grow: (f32, f32),
    pub line: &'static str,
    pub clue: Option<&'static str>,
}

/// Spot that shows a description when examined
#[derive(Debug, Clone, PartialEq)]
pub struct InspectDesc {
    pub name: &'static str,
    pub target: Rect,
    pub zone_grow: (f32, f32),
    pub text: &'static str,
    pub clue: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescriptor {
    pub id: SceneId,
    pub title: &'static str,
    /// Drawn in order, each stretched over the scene
    pub backgrounds: Vec<&'static str>,
    pub wall_mask: Option<&'static str>,
    /// Fill used when the first background fails to load
    pub placeholder: Color,
    pub spawn: (f32, f32),
    pub props: Vec<PropDesc>,
    pub collectibles: Vec<CollectibleDesc>,
    pub npcs: Vec<NpcDesc>,
    pub inspects: Vec<InspectDesc>,
    /// Zone that opens suspect selection
    pub interrogation_door: Option<Rect>,
}

impl SceneDescriptor {
    fn new(id: SceneId, title: &'static str, placeholder: Color, spawn: (f32, f32)) -> Self {
        Self {
            id,
            title,
            backgrounds: Vec::new(),
            wall_mask: None,
            placeholder,
            spawn,
            props: Vec::new(),
            collectibles: Vec::new(),
            npcs: Vec::new(),
            inspects: Vec::new(),
            interrogation_door: None,
        }
    }

    /// Every texture path this scene may draw
    pub fn texture_paths(&self) -> Vec<&'static str> {
        let mut paths = self.backgrounds.clone();
        for prop in &self.props {
            if let Look::Sprite(path) = prop.look {
                paths.push(path);
            }
        }
        paths.extend(self.collectibles.iter().map(|c| c.sprite));
        paths
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

fn perimeter_walls(thickness: f32) -> Vec<PropDesc> {
    vec![
        PropDesc::wall("wall_top", Rect::new(0.0, 0.0, W, thickness)),
        PropDesc::wall("wall_bottom", Rect::new(0.0, H - thickness, W, thickness)),
        PropDesc::wall("wall_left", Rect::new(0.0, 0.0, thickness, H)),
        PropDesc::wall("wall_right", Rect::new(W - thickness, 0.0, thickness, H)),
    ]
}

fn npc(name: &'static str, x: f32, y: f32, color: Color, grow: f32, line: &'static str) -> NpcDesc {
    NpcDesc { name, rect: Rect::new(x, y, 60.0, 80.0), color, zone_grow: (grow, grow), line, clue: None }
}

// =============================================================================
// Scenes
// =============================================================================

fn office() -> SceneDescriptor {
    let mut d = SceneDescriptor::new(SceneId::Office, "Precinct Office", rgb(40, 40, 50), (616.0, 520.0));
    d.backgrounds = vec!["assets/images/scenes/office-bg.jpg"];

    d.props = perimeter_walls(40.0);
    d.props.extend([
        PropDesc::wall("desk_top_left", Rect::new(100.0, 80.0, 180.0, 120.0)),
        PropDesc::wall("desk_top_right", Rect::new(W - 280.0, 80.0, 180.0, 120.0)),
        PropDesc::wall("desk_center", Rect::new(W / 2.0 - 90.0, 100.0, 180.0, 120.0)),
        PropDesc::wall("desk_mid_left", Rect::new(100.0, H / 2.0 - 60.0, 180.0, 120.0)),
        PropDesc::wall("desk_mid_right", Rect::new(W - 280.0, H / 2.0 - 60.0, 180.0, 120.0)),
        PropDesc::wall("cabinet_left", Rect::new(80.0, H - 180.0, 120.0, 80.0)),
        PropDesc::wall("cabinet_right", Rect::new(W - 200.0, H - 180.0, 120.0, 80.0)),
        PropDesc::wall("meeting_table", Rect::new(W / 2.0 - 120.0, H / 2.0 - 80.0 + 50.0, 240.0, 160.0)),
        PropDesc::wall("plant_left", Rect::new(60.0, 250.0, 40.0, 40.0)),
        PropDesc::wall("plant_right", Rect::new(W - 100.0, 250.0, 40.0, 40.0)),
        PropDesc::sprite_at("chair1", "assets/images/scenes/office-chair1.png", 50.0, 160.0, 52.0, 68.0),
        PropDesc::sprite_at("chair2", "assets/images/scenes/office-chair2.png", 220.0, 130.0, 52.0, 68.0),
        PropDesc::sprite_at("chair3", "assets/images/scenes/office-chair3.png", W / 2.0 - 300.0, 180.0, 52.0, 68.0),
    ]);

    d.npcs = vec![NpcDesc {
        clue: Some("Motive"),
        ..npc("Captain Mills", 900.0, 560.0, rgb(200, 200, 120), 80.0,
            "Seven bodies, seven sins. Check every scene, then bring me a name.")
    }];

    d.interrogation_door = Some(Rect::new(580.0, 640.0, 120.0, 40.0));
    d
}

fn greed() -> SceneDescriptor {
    let mut d = SceneDescriptor::new(SceneId::Greed, "Crime Scene - Greed", rgb(30, 28, 20), (640.0, 470.0));
    d.backgrounds = vec!["assets/images/scenes/greed-bg.png"];

    let safe = Rect::new(150.0, H - 220.0, 100.0, 120.0);
    d.props = perimeter_walls(40.0);
    d.props.extend([
        PropDesc::wall("victim_desk", Rect::new(W / 2.0 - 120.0, 150.0, 240.0, 140.0)),
        PropDesc::wall("safe", safe),
        PropDesc::wall("cabinet_left", Rect::new(80.0, 200.0, 120.0, 90.0)),
        PropDesc::wall("cabinet_right", Rect::new(W - 200.0, 200.0, 120.0, 90.0)),
        PropDesc::wall("side_table_left", Rect::new(100.0, 80.0, 140.0, 100.0)),
        PropDesc::wall("side_table_right", Rect::new(W - 240.0, 80.0, 140.0, 100.0)),
        PropDesc::wall("broken_glass", Rect::new(W / 2.0 + 150.0, H / 2.0 - 50.0, 80.0, 80.0)),
        PropDesc::wall("bookshelf", Rect::new(W - 180.0, H - 200.0, 100.0, 120.0)),
    ]);

    d.collectibles = vec![CollectibleDesc {
        name: "Rusty Key",
        sprite: "assets/images/scenes/greed-key.png",
        rect: Rect::new(290.0, H - 150.0, 32.0, 32.0),
        zone_grow: (60.0, 60.0),
        item: "KEY7",
        clue: Some("Old Diary Entry"),
    }];
    d.inspects = vec![
        InspectDesc {
            name: "Open Safe",
            target: safe,
            zone_grow: (60.0, 60.0),
            text: "The safe hangs open. Empty, except for a bank slip.",
            clue: Some("Financial Transactions"),
        },
        InspectDesc {
            name: "Broken Glass",
            target: Rect::new(W / 2.0 + 150.0, H / 2.0 - 50.0, 80.0, 80.0),
            zone_grow: (60.0, 60.0),
            text: "Glass shards, broken from the inside. Torn ledger pages are caught in the frame.",
            clue: Some("Secret Ledger"),
        },
    ];
    d
}

fn envy() -> SceneDescriptor {
    let mut d = SceneDescriptor::new(SceneId::Envy, "Crime Scene - Envy", rgb(25, 35, 25), (900.0, 400.0));
    d.backgrounds = vec!["assets/images/scenes/envy-bg.png"];
    d.wall_mask = Some("assets/images/scenes/envy-walls.png");

    let body = PropDesc::sprite_at("envy_npc", "assets/images/scenes/envy-npc.png", 550.0, 380.0, 140.0, 100.0)
        .footprint((0.0, 20.0), (-20.0, -40.0));
    d.inspects = vec![InspectDesc {
        name: "Victim",
        target: body.collision,
        zone_grow: (60.0, 60.0),
        text: "Face down, reaching for a photograph of someone else's family.",
        clue: Some("Victim"),
    }];
    d.props = vec![body];

    d.collectibles = vec![CollectibleDesc {
        name: "Green Mask",
        sprite: "assets/images/scenes/envy-mask.png",
        rect: Rect::new(700.0, 420.0, 48.0, 48.0),
        zone_grow: (60.0, 60.0),
        item: "MSK1",
        clue: Some("Envy Mask"),
    }];
    d.npcs = vec![npc("Jealous Suspect", 700.0, 200.0, rgb(100, 255, 100), 60.0,
        "He had everything. I only wanted what was fair.")];
    d
}

fn wrath() -> SceneDescriptor {
    let mut d = SceneDescriptor::new(SceneId::Wrath, "Crime Scene - Wrath", rgb(40, 20, 20), (640.0, 520.0));
    d.backgrounds = vec![
        "assets/images/scenes/wrath-bg.png",
        "assets/images/scenes/wrath-woodpad.png",
        "assets/images/scenes/wrath-npc.png",
    ];

    let body = Rect::new(580.0, 320.0, 120.0, 50.0);
    d.props = perimeter_walls(40.0);
    d.props.extend([
        PropDesc::wall("bench_left", Rect::new(150.0, 100.0, 220.0, 130.0)),
        PropDesc::wall("bench_right", Rect::new(W - 370.0, 100.0, 220.0, 130.0)),
        PropDesc::wall("crate", Rect::new(80.0, 300.0, 140.0, 100.0)),
        PropDesc::wall("body", body),
    ]);
    d.inspects = vec![InspectDesc {
        name: "Victim",
        target: body,
        zone_grow: (80.0, 80.0),
        text: "Beaten with bare hands. Whoever did this lost all control.",
        clue: Some("Strange Fingerprint"),
    }];
    d.collectibles = vec![CollectibleDesc {
        name: "Cigarette Butt",
        sprite: "assets/images/scenes/wrath-cigarette.png",
        rect: Rect::new(400.0, 560.0, 24.0, 16.0),
        zone_grow: (60.0, 60.0),
        item: "CB9",
        clue: None,
    }];
    d
}

fn sloth() -> SceneDescriptor {
    let mut d = SceneDescriptor::new(SceneId::Sloth, "Crime Scene - Sloth", rgb(30, 30, 45), (900.0, 400.0));
    d.backgrounds = vec!["assets/images/scenes/sloth-bg.png"];
    d.wall_mask = Some("assets/images/scenes/sloth-walls.png");

    let body = PropDesc::sprite_at("npc_death", "assets/images/scenes/sloth-npc-death.png", 550.0, 200.0, 180.0, 100.0)
        .footprint((20.0, 30.0), (-40.0, -50.0));
    d.inspects = vec![InspectDesc {
        name: "Victim",
        target: body.collision,
        zone_grow: (60.0, 60.0),
        text: "Strapped to the bed for a year. Barely alive when found.",
        clue: Some("Maid's Testimony"),
    }];
    d.props = vec![
        PropDesc::sprite_at("book_shelf", "assets/images/scenes/sloth-book-shelf.png", 280.0, 200.0, 120.0, 180.0)
            .footprint((0.0, 100.0), (0.0, -100.0)),
        PropDesc::sprite_at("lamp", "assets/images/scenes/sloth-lamp.png", 1100.0, 500.0, 60.0, 120.0)
            .footprint((10.0, 80.0), (-20.0, -80.0)),
        body,
    ];
    d.collectibles = vec![CollectibleDesc {
        name: "Stopped Pocket Watch",
        sprite: "assets/images/scenes/sloth-clock.png",
        rect: Rect::new(950.0, 200.0, 48.0, 48.0),
        zone_grow: (60.0, 60.0),
        item: "PW8",
        clue: Some("Time of Death"),
    }];
    d.npcs = vec![npc("Lazy Witness", 100.0, 500.0, rgb(150, 150, 255), 100.0,
        "I was asleep. I'm always asleep. Ask someone else.")];
    d
}

fn gluttony() -> SceneDescriptor {
    let mut d = SceneDescriptor::new(SceneId::Gluttony, "Crime Scene - Gluttony", rgb(45, 30, 20), (20.0, H - 100.0));
    d.backgrounds = vec!["assets/images/scenes/gluttony-bg.png"];
    d.wall_mask = Some("assets/images/scenes/gluttony-walls.png");

    let cake = PropDesc::sprite_centered("evidence_cake", "assets/images/scenes/gluttony-cake.png", W / 2.0, H / 2.0 + 170.0, 120.0, 80.0);
    d.inspects = vec![InspectDesc {
        name: "Half-eaten Cake",
        target: cake.collision,
        zone_grow: (350.0, 40.0),
        text: "Force-fed until his stomach burst. The cake is laced with something bitter.",
        clue: Some("Murder Weapon"),
    }];
    d.props = vec![
        PropDesc::sprite_centered("dining_table", "assets/images/scenes/gluttony-table.png", W / 2.0, H / 2.0 + 70.0, 400.0, 160.0)
            .footprint((0.0, 40.0), (0.0, -40.0)),
        cake,
    ];
    d.npcs = vec![npc("Chef", 200.0, 400.0, rgb(150, 75, 0), 100.0,
        "He ate for three hours straight. Someone kept ordering more.")];
    d
}

fn lust() -> SceneDescriptor {
    let mut d = SceneDescriptor::new(SceneId::Lust, "Crime Scene - Lust", rgb(255, 105, 180), (W / 2.0, H - 150.0));
    d.backgrounds = vec!["assets/images/scenes/lust-bg.png"];
    d.wall_mask = Some("assets/images/scenes/lust-walls.png");

    let body = PropDesc::sprite_centered("npc_death", "assets/images/scenes/lust-item-npc-death.png", 640.0, 450.0, 200.0, 160.0)
        .footprint((50.0, 50.0), (-100.0, -100.0));
    d.inspects = vec![InspectDesc {
        name: "Victim",
        target: body.collision,
        zone_grow: (50.0, 50.0),
        text: "No sign of forced entry. She let the killer in.",
        clue: Some("Hidden Camera Footage"),
    }];
    d.props = vec![
        PropDesc::sprite_centered("sofa1", "assets/images/scenes/lust-item-sofa1.png", W / 2.0, 250.0, 160.0, 80.0)
            .footprint((0.0, 20.0), (0.0, -40.0)),
        PropDesc::sprite_centered("sofa2", "assets/images/scenes/lust-item-sofa2.png", W / 2.0 + 300.0, 350.0, 160.0, 80.0)
            .footprint((0.0, 20.0), (0.0, -40.0)),
        PropDesc::sprite_centered("table1", "assets/images/scenes/lust-item-table1.png", 250.0, 400.0, 160.0, 160.0)
            .footprint((50.0, 50.0), (-100.0, -100.0)),
        PropDesc::sprite_centered("table2", "assets/images/scenes/lust-item-table2.png", W / 2.0, 350.0, 120.0, 120.0)
            .footprint((25.0, 25.0), (-50.0, -50.0)),
        PropDesc::sprite_centered("chair", "assets/images/scenes/lust-item-chair.png", 150.0, 350.0, 160.0, 160.0)
            .footprint((50.0, 50.0), (-100.0, -100.0)),
        body,
    ];
    d.collectibles = vec![CollectibleDesc {
        name: "Mysterious Letter",
        sprite: "assets/images/scenes/lust-letter.png",
        rect: Rect::new(420.0, 560.0, 40.0, 30.0),
        zone_grow: (60.0, 60.0),
        item: "LTRX",
        clue: Some("Anonymous Note"),
    }];
    d.npcs = vec![NpcDesc {
        clue: Some("Suspect #1: The Secretary"),
        ..npc("Lust Witness", 800.0, 250.0, rgb(255, 100, 180), 100.0,
            "His secretary came by at ten. She didn't leave through the front.")
    }];
    d
}

fn pride() -> SceneDescriptor {
    let mut d = SceneDescriptor::new(SceneId::Pride, "Crime Scene - Pride", rgb(35, 35, 55), (W - 200.0, H - 300.0));
    d.backgrounds = vec!["assets/images/scenes/pride-bg.png"];
    d.wall_mask = Some("assets/images/scenes/pride-walls.png");

    let body = PropDesc::sprite_centered("npc_death", "assets/images/scenes/pride-npc-death.png", 500.0, 630.0, 180.0, 90.0)
        .footprint((20.0, 30.0), (-40.0, -40.0));
    let picture = PropDesc::sprite_centered("broken_image", "assets/images/scenes/pride-broken-image.png", 800.0, 650.0, 100.0, 80.0);
    d.inspects = vec![
        InspectDesc {
            name: "Victim",
            target: body.collision,
            zone_grow: (80.0, 80.0),
            text: "Her face was cut. She chose to die rather than live disfigured.",
            clue: Some("Phone Records"),
        },
        InspectDesc {
            name: "Broken Portrait",
            target: picture.collision,
            zone_grow: (60.0, 60.0),
            text: "A portrait smashed face-first on the floor.",
            clue: Some("Witness Sighting"),
        },
    ];
    d.props = vec![
        PropDesc::sprite_centered("car", "assets/images/scenes/pride-car.png", 200.0, 620.0, 260.0, 130.0)
            .footprint((10.0, 30.0), (-20.0, -50.0)),
        body,
        picture,
    ];
    d.npcs = vec![npc("Pride Witness", 600.0, 300.0, rgb(100, 100, 255), 100.0,
        "She never left the house without her makeup. Never.")];
    d
}
