//! Cleanup system: removes projectiles that left the map or outlived their range.

use hecs::{Entity, World};

use hexfront_core::components::Projectile;
use hexfront_core::events::SimEvent;
use hexfront_core::types::Position;
use hexfront_grid::HexGrid;

/// Despawn projectiles whose position maps to no cell or whose age exceeds
/// `max_age_ticks`. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    grid: &HexGrid,
    max_age_ticks: u32,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        let off_grid = !grid.contains(grid.coord_at(pos.0));
        if off_grid || projectile.age_ticks > max_age_ticks {
            despawn_buffer.push(entity);
            events.push(SimEvent::ProjectileExpired {
                kind: projectile.kind,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
