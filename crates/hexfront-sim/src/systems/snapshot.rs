//! Snapshot system: queries the world and grid and builds a GameStateSnapshot.
//!
//! This system is read-only.

use hecs::{Entity, World};

use hexfront_core::components::*;
use hexfront_core::enums::*;
use hexfront_core::events::SimEvent;
use hexfront_core::state::*;
use hexfront_core::types::{Position, SimTime};
use hexfront_grid::HexGrid;

/// Everything outside the world and grid that goes into a snapshot.
pub struct SnapshotContext {
    pub time: SimTime,
    pub phase: GamePhase,
    pub fog_enabled: bool,
    pub selected: Option<Entity>,
    pub events: Vec<SimEvent>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, grid: &HexGrid, ctx: SnapshotContext) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        fog_enabled: ctx.fog_enabled,
        visible_cells: grid.visible_coords(),
        characters: build_characters(world, grid),
        buildings: build_buildings(world, grid),
        projectiles: build_projectiles(world),
        events: ctx.events,
        selected: ctx.selected.map(|e| e.to_bits().get()),
    }
}

/// Characters in coordinate order.
fn build_characters(world: &World, grid: &HexGrid) -> Vec<CharacterView> {
    let mut characters: Vec<CharacterView> = world
        .query::<(
            &Character,
            &Allegiance,
            &Position,
            &Health,
            Option<&Defenses>,
            &Weapon,
        )>()
        .iter()
        .map(
            |(entity, (character, allegiance, pos, health, defenses, weapon))| CharacterView {
                id: entity.to_bits().get(),
                kind: character.kind,
                allegiance: *allegiance,
                coord: grid.coord_at(pos.0),
                position: *pos,
                health: health.current,
                max_health: health.max,
                defenses: defenses.map(|d| d.current),
                target: weapon.target,
                cooldown: weapon.cooldown,
            },
        )
        .collect();
    characters.sort_by_key(|c| (c.coord, c.id));
    characters
}

/// Buildings in coordinate order, destroyed ones included.
fn build_buildings(world: &World, grid: &HexGrid) -> Vec<BuildingView> {
    let mut buildings: Vec<BuildingView> = world
        .query::<(&Building, &Allegiance, &Position, &Health, &Defenses)>()
        .iter()
        .map(
            |(entity, (building, allegiance, pos, health, defenses))| BuildingView {
                id: entity.to_bits().get(),
                kind: building.kind,
                allegiance: *allegiance,
                coord: grid.coord_at(pos.0),
                health: health.current,
                max_health: health.max,
                defenses: defenses.current,
                max_defenses: defenses.max,
            },
        )
        .collect();
    buildings.sort_by_key(|b| (b.coord, b.id));
    buildings
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            kind: projectile.kind,
            position: *pos,
            allegiance: projectile.allegiance,
        })
        .collect()
}
