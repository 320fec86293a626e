//! Game Foundation Module
//!
//! Everything a scene needs to move the detective around:
//! - Player: movement, facing, sprite animation
//! - Collision: obstacle rects, wall masks, the sliding resolver
//! - Interaction: trigger zones fired by the interact key
//! - Events: scene -> app communication
//! - Runtime: frame pacing

pub mod collision;
pub mod event;
pub mod interaction;
pub mod player;
pub mod runtime;

pub use collision::{resolve_movement, Collider, CollisionTuning, CollisionWorld, ObstacleRegistry, WallMask};
pub use event::{Events, EventQueue};
pub use interaction::{InteractionArea, InteractionKind, InteractionZones};
pub use player::{Direction, Player};
pub use runtime::{FpsLimit, FrameTimer};
