//! Cell: the per-coordinate record owned by the grid.

use hecs::Entity;

use hexfront_core::enums::TerrainType;
use hexfront_core::hex::CubeCoordinate;

/// Handles of the entities standing on a cell. The grid never owns them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupants {
    pub character: Option<Entity>,
    pub building: Option<Entity>,
    pub resource: Option<Entity>,
}

/// One hex of the map.
#[derive(Debug, Clone)]
pub struct Cell {
    coord: CubeCoordinate,
    terrain: TerrainType,
    visible: bool,
    occupants: Occupants,
}

impl Cell {
    pub(crate) fn new(coord: CubeCoordinate) -> Self {
        Self {
            coord,
            terrain: TerrainType::default(),
            visible: false,
            occupants: Occupants::default(),
        }
    }

    pub fn coord(&self) -> CubeCoordinate {
        self.coord
    }

    pub fn terrain(&self) -> TerrainType {
        self.terrain
    }

    pub fn set_terrain(&mut self, terrain: TerrainType) {
        self.terrain = terrain;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn occupants(&self) -> Occupants {
        self.occupants
    }

    pub fn character(&self) -> Option<Entity> {
        self.occupants.character
    }

    pub fn building(&self) -> Option<Entity> {
        self.occupants.building
    }

    pub fn resource(&self) -> Option<Entity> {
        self.occupants.resource
    }

    /// Place a character. Returns false (and changes nothing) if the slot is taken.
    pub fn set_character(&mut self, entity: Entity) -> bool {
        place(&mut self.occupants.character, entity)
    }

    /// Place a building. Returns false (and changes nothing) if the slot is taken.
    pub fn set_building(&mut self, entity: Entity) -> bool {
        place(&mut self.occupants.building, entity)
    }

    /// Place a resource. Returns false (and changes nothing) if the slot is taken.
    pub fn set_resource(&mut self, entity: Entity) -> bool {
        place(&mut self.occupants.resource, entity)
    }

    pub fn clear_character(&mut self) -> Option<Entity> {
        self.occupants.character.take()
    }

    pub fn clear_building(&mut self) -> Option<Entity> {
        self.occupants.building.take()
    }

    pub fn clear_resource(&mut self) -> Option<Entity> {
        self.occupants.resource.take()
    }
}

fn place(slot: &mut Option<Entity>, entity: Entity) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(entity);
    true
}
