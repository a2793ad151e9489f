//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Marks a unit and records its archetype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Character {
    pub kind: CharacterKind,
}

/// Marks a structure and records its archetype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingKind,
}

/// Marks a settlement center. Cities provide sight but take no part in combat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub name: String,
}

/// Marks a resource deposit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
}

/// Hex-distance within which this entity reveals cells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sight {
    pub radius: i32,
}

/// Permanent hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Regenerable pool depleted before health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defenses {
    pub current: i32,
    pub max: i32,
}

/// Edge lengths of the axis-aligned collision box, centered on Position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Footprint {
    pub size: Vec2,
}

/// Ranged weapon state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Hex-distance within which targets are acquired.
    pub range: i32,
    /// Ammunition fired; `None` means the entity tracks targets but can't shoot.
    pub projectile: Option<ProjectileKind>,
    /// Ticks remaining until the weapon may fire again.
    pub cooldown: u32,
    /// Value `cooldown` is reset to after firing.
    pub cooldown_reset: u32,
    /// Plane position of the current target, if any.
    pub target: Option<Position>,
}

/// A round in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Unit vector, or a scaled displacement for point-blank shots.
    pub direction: Vec2,
    pub speed: f32,
    pub damage: i32,
    /// Side of the firer. Never changes after the projectile is spawned.
    pub allegiance: Allegiance,
    /// Ticks survived so far.
    pub age_ticks: u32,
}
