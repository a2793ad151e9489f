//! Entity spawn factories and grid registration.
//!
//! Every entity that stands on a cell goes through here so the cell's
//! occupant slot and the entity's `Position` never disagree.

use hecs::{Entity, EntityBuilder, World};
use thiserror::Error;

use hexfront_core::components::*;
use hexfront_core::constants::CITY_VISIBILITY_RANGE;
use hexfront_core::enums::*;
use hexfront_core::hex::CubeCoordinate;
use hexfront_core::types::Position;
use hexfront_grid::HexGrid;

use glam::Vec2;

/// Why an entity could not be placed or moved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("no cell at {0}")]
    OffGrid(CubeCoordinate),
    #[error("cell {0} already holds a {1}")]
    Occupied(CubeCoordinate, &'static str),
    #[error("{from} is not adjacent to {to}")]
    NotAdjacent {
        from: CubeCoordinate,
        to: CubeCoordinate,
    },
    #[error("entity is not a placed character")]
    NotACharacter,
}

/// Spawn a character at the center of `coord` and register it in the cell.
pub fn spawn_character(
    world: &mut World,
    grid: &mut HexGrid,
    kind: CharacterKind,
    allegiance: Allegiance,
    coord: CubeCoordinate,
) -> Result<Entity, SetupError> {
    let cell = grid.cell(coord).ok_or(SetupError::OffGrid(coord))?;
    if cell.character().is_some() {
        return Err(SetupError::Occupied(coord, "character"));
    }
    let position = Position(grid.position_of(coord));

    let mut builder = EntityBuilder::new();
    builder
        .add(Character { kind })
        .add(allegiance)
        .add(position)
        .add(Sight {
            radius: kind.sight_radius(),
        })
        .add(Health {
            current: kind.max_health(),
            max: kind.max_health(),
        })
        .add(Weapon {
            range: kind.weapon_range(),
            projectile: Some(kind.projectile()),
            cooldown: 0,
            cooldown_reset: kind.cooldown_ticks(),
            target: None,
        })
        .add(Footprint {
            size: Vec2::splat(kind.footprint()),
        });
    if let Some(max) = kind.max_defenses() {
        builder.add(Defenses { current: max, max });
    }
    let entity = world.spawn(builder.build());

    if let Some(cell) = grid.cell_mut(coord) {
        cell.set_character(entity);
    }
    tracing::debug!(?kind, ?allegiance, %coord, "character spawned");
    Ok(entity)
}

/// Spawn a building at the center of `coord` and register it in the cell.
pub fn spawn_building(
    world: &mut World,
    grid: &mut HexGrid,
    kind: BuildingKind,
    allegiance: Allegiance,
    coord: CubeCoordinate,
) -> Result<Entity, SetupError> {
    let cell = grid.cell(coord).ok_or(SetupError::OffGrid(coord))?;
    if cell.building().is_some() {
        return Err(SetupError::Occupied(coord, "building"));
    }
    let position = Position(grid.position_of(coord));

    let entity = world.spawn((
        Building { kind },
        allegiance,
        position,
        Sight {
            radius: kind.sight_radius(),
        },
        Health {
            current: kind.max_health(),
            max: kind.max_health(),
        },
        Defenses {
            current: kind.max_defenses(),
            max: kind.max_defenses(),
        },
        Footprint {
            size: Vec2::splat(kind.footprint()),
        },
    ));

    if let Some(cell) = grid.cell_mut(coord) {
        cell.set_building(entity);
    }
    tracing::debug!(?kind, ?allegiance, %coord, "building spawned");
    Ok(entity)
}

/// Spawn a city marker. Cities contribute sight only and take no cell slot,
/// so they can sit on top of whatever structure marks the settlement.
pub fn spawn_city(
    world: &mut World,
    grid: &HexGrid,
    name: impl Into<String>,
    allegiance: Allegiance,
    coord: CubeCoordinate,
) -> Result<Entity, SetupError> {
    if !grid.contains(coord) {
        return Err(SetupError::OffGrid(coord));
    }
    let entity = world.spawn((
        City { name: name.into() },
        allegiance,
        Position(grid.position_of(coord)),
        Sight {
            radius: CITY_VISIBILITY_RANGE,
        },
    ));
    Ok(entity)
}

/// Spawn a resource deposit and register it in the cell.
pub fn spawn_resource(
    world: &mut World,
    grid: &mut HexGrid,
    kind: ResourceKind,
    coord: CubeCoordinate,
) -> Result<Entity, SetupError> {
    let cell = grid.cell(coord).ok_or(SetupError::OffGrid(coord))?;
    if cell.resource().is_some() {
        return Err(SetupError::Occupied(coord, "resource"));
    }
    let entity = world.spawn((Resource { kind }, Position(grid.position_of(coord))));
    if let Some(cell) = grid.cell_mut(coord) {
        cell.set_resource(entity);
    }
    Ok(entity)
}

/// Remove a character from its cell, then from the world.
///
/// Returns the coordinate it stood on, or `None` if the entity was not alive.
pub fn despawn_character(
    world: &mut World,
    grid: &mut HexGrid,
    entity: Entity,
) -> Option<CubeCoordinate> {
    let pos = world.get::<&Position>(entity).ok().map(|p| p.0)?;
    let coord = grid.coord_at(pos);
    if let Some(cell) = grid.cell_mut(coord) {
        if cell.character() == Some(entity) {
            cell.clear_character();
        }
    }
    let _ = world.despawn(entity);
    Some(coord)
}

/// Step a character onto an adjacent, existing cell with no character on it.
pub fn move_character(
    world: &mut World,
    grid: &mut HexGrid,
    entity: Entity,
    to: CubeCoordinate,
) -> Result<(), SetupError> {
    let from = {
        let pos = world
            .get::<&Position>(entity)
            .map_err(|_| SetupError::NotACharacter)?;
        grid.coord_at(pos.0)
    };
    if grid.cell(from).and_then(|c| c.character()) != Some(entity) {
        return Err(SetupError::NotACharacter);
    }
    if !grid.are_adjacent(from, to) {
        return Err(SetupError::NotAdjacent { from, to });
    }
    let target = grid.cell(to).ok_or(SetupError::OffGrid(to))?;
    if target.character().is_some() {
        return Err(SetupError::Occupied(to, "character"));
    }

    if let Some(cell) = grid.cell_mut(from) {
        cell.clear_character();
    }
    if let Some(cell) = grid.cell_mut(to) {
        cell.set_character(entity);
    }
    let dest = Position(grid.position_of(to));
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        *pos = dest;
    }
    tracing::debug!(%from, %to, "character moved");
    Ok(())
}
