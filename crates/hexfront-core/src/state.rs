//! Game state snapshot: the complete visible state sent to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::hex::CubeCoordinate;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub fog_enabled: bool,
    /// Cells currently visible to the friendly side, in coordinate order.
    pub visible_cells: Vec<CubeCoordinate>,
    pub characters: Vec<CharacterView>,
    pub buildings: Vec<BuildingView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
    /// Entity bits of the selected character.
    pub selected: Option<u64>,
}

/// A unit on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterView {
    pub id: u64,
    pub kind: CharacterKind,
    pub allegiance: Allegiance,
    pub coord: CubeCoordinate,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    /// Armor remaining, for kinds that carry it.
    pub defenses: Option<i32>,
    pub target: Option<Position>,
    pub cooldown: u32,
}

/// A structure on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingView {
    pub id: u64,
    pub kind: BuildingKind,
    pub allegiance: Allegiance,
    pub coord: CubeCoordinate,
    pub health: i32,
    pub max_health: i32,
    pub defenses: i32,
    pub max_defenses: i32,
}

/// A round in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub position: Position,
    pub allegiance: Allegiance,
}
