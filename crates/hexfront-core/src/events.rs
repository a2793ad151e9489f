//! Events emitted by the simulation for UI and audio feedback.
//!
//! Entities are identified by their hecs entity bits so this crate stays
//! independent of the ECS.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::hex::CubeCoordinate;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A weapon fired.
    ProjectileFired {
        shooter: u64,
        kind: ProjectileKind,
        origin: Position,
        allegiance: Allegiance,
    },
    /// A projectile struck a building.
    BuildingDamaged {
        building: u64,
        health: i32,
        defenses: i32,
    },
    /// A building's health reached zero. It stays on the grid as rubble.
    BuildingDestroyed { building: u64, coord: CubeCoordinate },
    /// A projectile struck a character that survived.
    CharacterDamaged { character: u64, health: i32 },
    /// A character's health reached zero and it was removed.
    CharacterKilled {
        character: u64,
        coord: CubeCoordinate,
        allegiance: Allegiance,
    },
    /// A projectile left the grid or exceeded its lifetime.
    ProjectileExpired { kind: ProjectileKind },
}
