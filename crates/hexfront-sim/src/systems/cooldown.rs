//! Weapon cooldown countdown.

use hecs::World;

use hexfront_core::components::Weapon;

/// Count every weapon's cooldown down by one tick, stopping at zero.
pub fn run(world: &mut World) {
    for (_entity, weapon) in world.query_mut::<&mut Weapon>() {
        weapon.cooldown = weapon.cooldown.saturating_sub(1);
    }
}
