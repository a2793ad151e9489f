//! Target acquisition and firing.
//!
//! Runs in three passes so no shooter sees another's shot from the same tick:
//! decide every target against the unchanged world, update weapons, then
//! spawn the projectiles.

use glam::Vec2;
use hecs::{Entity, World};

use hexfront_core::components::*;
use hexfront_core::constants::{CLOSE_RANGE_SCALE, CLOSE_RANGE_THRESHOLD, DIRECTION_EPSILON};
use hexfront_core::enums::{Allegiance, ProjectileKind};
use hexfront_core::events::SimEvent;
use hexfront_core::hex::CubeCoordinate;
use hexfront_core::types::Position;
use hexfront_grid::HexGrid;

/// A shot decided this tick, spawned after all decisions are made.
struct FireOrder {
    shooter: Entity,
    origin: Position,
    kind: ProjectileKind,
    direction: Vec2,
    allegiance: Allegiance,
}

/// Acquire targets for every armed entity and fire those that are ready.
pub fn run(world: &mut World, grid: &HexGrid, events: &mut Vec<SimEvent>) {
    let decisions: Vec<(Entity, Position, Allegiance, Option<Position>)> = world
        .query::<(&Position, &Allegiance, &Weapon)>()
        .iter()
        .map(|(entity, (pos, allegiance, weapon))| {
            let target = acquire_target(world, grid, pos, *allegiance, weapon.range);
            (entity, *pos, *allegiance, target)
        })
        .collect();

    let mut orders = Vec::new();
    for (entity, origin, allegiance, target) in decisions {
        let Ok(mut weapon) = world.get::<&mut Weapon>(entity) else {
            continue;
        };
        weapon.target = target;

        let Some(target) = target else { continue };
        if weapon.cooldown > 0 {
            continue;
        }
        let Some(kind) = weapon.projectile else {
            continue;
        };
        weapon.cooldown = weapon.cooldown_reset;
        orders.push(FireOrder {
            shooter: entity,
            origin,
            kind,
            direction: aim_direction(origin.displacement_to(&target)),
            allegiance,
        });
    }

    for order in orders {
        spawn_projectile(world, &order);
        tracing::debug!(
            shooter = ?order.shooter,
            kind = ?order.kind,
            allegiance = ?order.allegiance,
            "projectile fired"
        );
        events.push(SimEvent::ProjectileFired {
            shooter: order.shooter.to_bits().get(),
            kind: order.kind,
            origin: order.origin,
            allegiance: order.allegiance,
        });
    }
}

/// Pick the target for a shooter at `pos`.
///
/// Priority: a hostile character on an adjacent cell (first in direction
/// order), then the nearest hostile character within `range`, then the
/// nearest standing hostile building within `range`. Ties on distance go to
/// the lowest coordinate.
pub fn acquire_target(
    world: &World,
    grid: &HexGrid,
    pos: &Position,
    allegiance: Allegiance,
    range: i32,
) -> Option<Position> {
    let center = grid.coord_at(pos.0);

    let adjacent = center.neighbors().into_iter().find_map(|coord| {
        let occupant = grid.cell(coord)?.character()?;
        hostile_character(world, occupant, allegiance)
    });
    if adjacent.is_some() {
        return adjacent;
    }

    let in_range = grid.cells_in_range(center, range);

    let character = nearest(center, &in_range, |coord| {
        let occupant = grid.cell(coord)?.character()?;
        hostile_character(world, occupant, allegiance)
    });
    if character.is_some() {
        return character;
    }

    nearest(center, &in_range, |coord| {
        let occupant = grid.cell(coord)?.building()?;
        hostile_building(world, occupant, allegiance)
    })
}

/// Direction for a shot along `displacement`.
///
/// Long shots get a unit vector. Point-blank shots keep a scaled-down
/// displacement so the round doesn't overshoot, with a small epsilon on any
/// axis that would otherwise be exactly zero.
pub fn aim_direction(displacement: Vec2) -> Vec2 {
    if displacement.length() < CLOSE_RANGE_THRESHOLD {
        let mut direction = displacement * CLOSE_RANGE_SCALE;
        if direction.x == 0.0 {
            direction.x = DIRECTION_EPSILON;
        }
        if direction.y == 0.0 {
            direction.y = DIRECTION_EPSILON;
        }
        direction
    } else {
        displacement.normalize()
    }
}

fn nearest(
    center: CubeCoordinate,
    coords: &[CubeCoordinate],
    mut candidate: impl FnMut(CubeCoordinate) -> Option<Position>,
) -> Option<Position> {
    coords
        .iter()
        .filter_map(|&coord| candidate(coord).map(|pos| (center.distance(&coord), coord, pos)))
        .min_by_key(|&(distance, coord, _)| (distance, coord))
        .map(|(_, _, pos)| pos)
}

fn hostile_character(world: &World, entity: Entity, allegiance: Allegiance) -> Option<Position> {
    let mut query = world
        .query_one::<(&Character, &Allegiance, &Health, &Position)>(entity)
        .ok()?;
    let (_, other, health, pos) = query.get()?;
    (allegiance.is_hostile_to(*other) && health.current > 0).then_some(*pos)
}

fn hostile_building(world: &World, entity: Entity, allegiance: Allegiance) -> Option<Position> {
    let mut query = world
        .query_one::<(&Building, &Allegiance, &Health, &Position)>(entity)
        .ok()?;
    let (_, other, health, pos) = query.get()?;
    (allegiance.is_hostile_to(*other) && health.current > 0).then_some(*pos)
}

fn spawn_projectile(world: &mut World, order: &FireOrder) -> Entity {
    world.spawn((
        Projectile {
            kind: order.kind,
            direction: order.direction,
            speed: order.kind.speed(),
            damage: order.kind.damage(),
            allegiance: order.allegiance,
            age_ticks: 0,
        },
        order.origin,
        Footprint {
            size: Vec2::splat(order.kind.footprint()),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_long_range_is_unit() {
        let d = aim_direction(Vec2::new(300.0, 400.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_aim_close_range_is_scaled() {
        let d = aim_direction(Vec2::new(20.0, -10.0));
        assert!((d.x - 2.0).abs() < 1e-6);
        assert!((d.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_aim_close_range_replaces_zero_axis() {
        let d = aim_direction(Vec2::new(30.0, 0.0));
        assert_eq!(d.y, DIRECTION_EPSILON);
        let d = aim_direction(Vec2::ZERO);
        assert_eq!(d, Vec2::splat(DIRECTION_EPSILON));
    }
}
