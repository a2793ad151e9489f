//! Projectile motion and collision resolution.

use std::cmp::Reverse;

use hecs::{Entity, World};

use hexfront_core::components::*;
use hexfront_core::enums::Allegiance;
use hexfront_core::events::SimEvent;
use hexfront_core::types::{Position, Rect};
use hexfront_grid::HexGrid;

use crate::systems::damage;
use crate::world_setup;

/// A collision candidate captured at the start of the resolution pass.
struct Body {
    entity: Entity,
    bounds: Rect,
    allegiance: Allegiance,
}

/// Advance every projectile one step, then resolve hits.
///
/// Each projectile is tested against hostile standing buildings first and
/// hostile living characters second; the first overlap consumes it. Killed
/// characters leave their cell immediately and are despawned, along with spent
/// projectiles, once every projectile has been resolved.
pub fn run(
    world: &mut World,
    grid: &mut HexGrid,
    events: &mut Vec<SimEvent>,
    selected: &mut Option<Entity>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (_entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &mut Position)>() {
        pos.0 += projectile.direction * projectile.speed;
        projectile.age_ticks += 1;
    }

    let mut rounds: Vec<(Entity, Rect, Projectile)> = world
        .query::<(&Projectile, &Position, &Footprint)>()
        .iter()
        .map(|(entity, (projectile, pos, footprint))| {
            (entity, Rect::centered(pos.0, footprint.size), *projectile)
        })
        .collect();
    // Oldest first.
    rounds.sort_by_key(|(entity, _, p)| (Reverse(p.age_ticks), entity.to_bits()));

    let buildings = collect_bodies::<Building>(world);
    let characters = collect_bodies::<Character>(world);
    let mut killed = Vec::new();

    for (round, bounds, projectile) in rounds {
        let hit_building = buildings
            .iter()
            .find(|b| is_hit(world, b, &bounds, projectile.allegiance));
        if let Some(body) = hit_building {
            damage_building(world, grid, body.entity, projectile.damage, events);
            despawn_buffer.push(round);
            continue;
        }

        let hit_character = characters
            .iter()
            .find(|c| is_hit(world, c, &bounds, projectile.allegiance));
        if let Some(body) = hit_character {
            if damage_character(world, grid, body.entity, projectile.damage, events) {
                if *selected == Some(body.entity) {
                    *selected = None;
                }
                killed.push(body.entity);
            }
            despawn_buffer.push(round);
        }
    }

    for entity in killed {
        world_setup::despawn_character(world, grid, entity);
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn collect_bodies<T: hecs::Component>(world: &World) -> Vec<Body> {
    world
        .query::<(&T, &Position, &Footprint, &Allegiance)>()
        .iter()
        .map(|(entity, (_, pos, footprint, allegiance))| Body {
            entity,
            bounds: Rect::centered(pos.0, footprint.size),
            allegiance: *allegiance,
        })
        .collect()
}

/// Overlapping, hostile, and still standing.
fn is_hit(world: &World, body: &Body, bounds: &Rect, allegiance: Allegiance) -> bool {
    allegiance.is_hostile_to(body.allegiance)
        && body.bounds.intersects(bounds)
        && world
            .get::<&Health>(body.entity)
            .map(|h| h.current > 0)
            .unwrap_or(false)
}

fn damage_building(
    world: &mut World,
    grid: &HexGrid,
    entity: Entity,
    amount: i32,
    events: &mut Vec<SimEvent>,
) {
    let Ok((health, mut defenses, pos)) =
        world.query_one_mut::<(&mut Health, Option<&mut Defenses>, &Position)>(entity)
    else {
        return;
    };
    damage::take_damage(health, defenses.as_deref_mut(), amount);

    let id = entity.to_bits().get();
    events.push(SimEvent::BuildingDamaged {
        building: id,
        health: health.current,
        defenses: defenses.map(|d| d.current).unwrap_or(0),
    });
    if damage::is_destroyed(health) {
        let coord = grid.coord_at(pos.0);
        tracing::info!(building = id, %coord, "building destroyed");
        events.push(SimEvent::BuildingDestroyed { building: id, coord });
    }
}

/// Returns true when the hit was fatal. The character's cell slot is cleared
/// at once so later shots this tick cannot find it.
fn damage_character(
    world: &mut World,
    grid: &mut HexGrid,
    entity: Entity,
    amount: i32,
    events: &mut Vec<SimEvent>,
) -> bool {
    let Ok((health, defenses, pos, allegiance)) = world
        .query_one_mut::<(&mut Health, Option<&mut Defenses>, &Position, &Allegiance)>(entity)
    else {
        return false;
    };
    damage::take_damage(health, defenses, amount);
    let id = entity.to_bits().get();

    if !damage::is_destroyed(health) {
        events.push(SimEvent::CharacterDamaged {
            character: id,
            health: health.current,
        });
        return false;
    }

    let coord = grid.coord_at(pos.0);
    let allegiance = *allegiance;
    if let Some(cell) = grid.cell_mut(coord) {
        if cell.character() == Some(entity) {
            cell.clear_character();
        }
    }
    tracing::info!(character = id, %coord, ?allegiance, "character killed");
    events.push(SimEvent::CharacterKilled {
        character: id,
        coord,
        allegiance,
    });
    true
}
