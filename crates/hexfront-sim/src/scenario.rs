//! Skirmish scenarios: seeded terrain and force placement.
//!
//! Friendly forces deploy on the south half of the map (r > 0), enemy forces
//! on the north half (r < 0). The center row stays empty so the sides start
//! out of contact.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use hexfront_core::enums::*;
use hexfront_core::hex::CubeCoordinate;
use hexfront_grid::HexGrid;

use crate::world_setup::{self, SetupError};

/// Force composition for one side, mirrored for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkirmishPlan {
    pub soldiers_per_side: usize,
    pub tanks_per_side: usize,
    /// Place one base per side, nearest its own edge.
    pub bases: bool,
    /// Roll random terrain for every cell.
    pub terrain: bool,
}

impl Default for SkirmishPlan {
    fn default() -> Self {
        Self {
            soldiers_per_side: 4,
            tanks_per_side: 2,
            bases: true,
            terrain: true,
        }
    }
}

/// Entities placed by `populate_skirmish`, per side.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub friendly: Vec<Entity>,
    pub enemy: Vec<Entity>,
}

/// Populate an empty grid. Placement stops early if a half runs out of cells.
pub fn populate_skirmish(
    world: &mut World,
    grid: &mut HexGrid,
    rng: &mut ChaCha8Rng,
    plan: &SkirmishPlan,
) -> Result<Roster, SetupError> {
    if plan.terrain {
        roll_terrain(grid, rng);
    }

    let mut roster = Roster::default();
    for (allegiance, list) in [
        (Allegiance::Friendly, &mut roster.friendly),
        (Allegiance::Enemy, &mut roster.enemy),
    ] {
        let mut free = deployment_zone(grid, allegiance);

        if plan.bases {
            // Deepest cell of the half, lowest coordinate on ties.
            let base_at = free.iter().copied().max_by_key(|c| (c.r().abs(), -c.q()));
            if let Some(coord) = base_at {
                list.push(world_setup::spawn_building(
                    world,
                    grid,
                    BuildingKind::Base,
                    allegiance,
                    coord,
                )?);
            }
        }

        free.shuffle(rng);
        let kinds = std::iter::repeat(CharacterKind::Tank)
            .take(plan.tanks_per_side)
            .chain(std::iter::repeat(CharacterKind::Soldier).take(plan.soldiers_per_side));
        for (kind, coord) in kinds.zip(free) {
            list.push(world_setup::spawn_character(
                world, grid, kind, allegiance, coord,
            )?);
        }

        tracing::debug!(?allegiance, placed = list.len(), "side deployed");
    }

    Ok(roster)
}

/// Cells in a side's half, in coordinate order, with no character on them.
fn deployment_zone(grid: &HexGrid, allegiance: Allegiance) -> Vec<CubeCoordinate> {
    grid.iter()
        .filter(|cell| cell.character().is_none())
        .map(|cell| cell.coord())
        .filter(|coord| match allegiance {
            Allegiance::Friendly => coord.r() > 0,
            _ => coord.r() < 0,
        })
        .collect()
}

fn roll_terrain(grid: &mut HexGrid, rng: &mut ChaCha8Rng) {
    for cell in grid.iter_mut() {
        let terrain = match rng.gen_range(0..100) {
            0..=69 => TerrainType::Plains,
            70..=84 => TerrainType::Forest,
            85..=94 => TerrainType::Water,
            _ => TerrainType::Urban,
        };
        cell.set_terrain(terrain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use hexfront_core::types::Position;

    #[test]
    fn test_sides_deploy_in_their_halves() {
        let mut world = World::new();
        let mut grid = HexGrid::new(6);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let roster =
            populate_skirmish(&mut world, &mut grid, &mut rng, &SkirmishPlan::default()).unwrap();

        assert_eq!(roster.friendly.len(), 7);
        assert_eq!(roster.enemy.len(), 7);
        for &e in &roster.friendly {
            let pos = *world.get::<&Position>(e).unwrap();
            assert!(grid.coord_at(pos.0).r() > 0);
        }
        for &e in &roster.enemy {
            let pos = *world.get::<&Position>(e).unwrap();
            assert!(grid.coord_at(pos.0).r() < 0);
        }
    }

    #[test]
    fn test_small_grid_places_what_fits() {
        let mut world = World::new();
        let mut grid = HexGrid::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = SkirmishPlan {
            soldiers_per_side: 10,
            tanks_per_side: 0,
            bases: false,
            terrain: false,
        };
        let roster = populate_skirmish(&mut world, &mut grid, &mut rng, &plan).unwrap();
        // Two cells per half on a radius-1 grid.
        assert_eq!(roster.friendly.len(), 2);
        assert_eq!(roster.enemy.len(), 2);
    }
}
