//! Fog of war: recompute which cells the friendly side can see.
//!
//! Only the friendly map is ever built. Enemy and neutral entities
//! contribute nothing.

use hecs::World;

use hexfront_core::components::Sight;
use hexfront_core::enums::Allegiance;
use hexfront_core::types::Position;
use hexfront_grid::HexGrid;

/// Rewrite every cell's visibility flag.
///
/// With fog disabled every cell is visible. Otherwise the visible set is the
/// union of the sight disks of all friendly entities with a `Sight`.
pub fn run(world: &World, grid: &mut HexGrid, fog_enabled: bool) {
    if !fog_enabled {
        grid.set_all_visible();
        return;
    }

    grid.reset_visibility();
    for (_entity, (pos, sight, allegiance)) in world
        .query::<(&Position, &Sight, &Allegiance)>()
        .iter()
    {
        if !allegiance.is_friendly() {
            continue;
        }
        let center = grid.coord_at(pos.0);
        for coord in grid.cells_in_range(center, sight.radius) {
            if let Some(cell) = grid.cell_mut(coord) {
                cell.set_visible(true);
            }
        }
    }
}
