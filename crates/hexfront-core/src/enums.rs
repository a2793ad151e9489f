//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Which side an entity fights for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allegiance {
    /// Player-controlled.
    #[default]
    Friendly,
    /// AI-controlled opponent.
    Enemy,
    /// Not affiliated with either side.
    Neutral,
}

impl Allegiance {
    /// Any differing allegiance is a valid target and a collision candidate.
    pub fn is_hostile_to(self, other: Allegiance) -> bool {
        self != other
    }

    pub fn is_friendly(self) -> bool {
        self == Allegiance::Friendly
    }
}

/// Terrain of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    #[default]
    Plains,
    Water,
    Forest,
    Urban,
}

/// Unit archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterKind {
    Soldier,
    Tank,
}

impl CharacterKind {
    pub fn max_health(self) -> i32 {
        match self {
            CharacterKind::Soldier => SOLDIER_HEALTH,
            CharacterKind::Tank => TANK_HEALTH,
        }
    }

    /// Armor pool, if this kind carries one.
    pub fn max_defenses(self) -> Option<i32> {
        match self {
            CharacterKind::Soldier => None,
            CharacterKind::Tank => Some(TANK_DEFENSES),
        }
    }

    pub fn weapon_range(self) -> i32 {
        match self {
            CharacterKind::Soldier => SOLDIER_RANGE,
            CharacterKind::Tank => TANK_RANGE,
        }
    }

    pub fn sight_radius(self) -> i32 {
        match self {
            CharacterKind::Soldier => SOLDIER_VISIBILITY_RANGE,
            CharacterKind::Tank => TANK_VISIBILITY_RANGE,
        }
    }

    pub fn cooldown_ticks(self) -> u32 {
        match self {
            CharacterKind::Soldier => SOLDIER_COOLDOWN_TICKS,
            CharacterKind::Tank => TANK_COOLDOWN_TICKS,
        }
    }

    pub fn projectile(self) -> ProjectileKind {
        match self {
            CharacterKind::Soldier => ProjectileKind::Bullet,
            CharacterKind::Tank => ProjectileKind::TankAmmo,
        }
    }

    /// Edge length of the collision box.
    pub fn footprint(self) -> f32 {
        match self {
            CharacterKind::Soldier => STANDARD_SIZE * SOLDIER_SCALE,
            CharacterKind::Tank => STANDARD_SIZE * TANK_SCALE,
        }
    }
}

/// Structure archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    CityCenter,
    ResidentialArea,
    Base,
    Farm,
    OilRefinery,
}

impl BuildingKind {
    pub fn sight_radius(self) -> i32 {
        match self {
            BuildingKind::CityCenter => CITY_CENTER_VISIBILITY_RANGE,
            BuildingKind::ResidentialArea => RESIDENTIAL_VISIBILITY_RANGE,
            BuildingKind::Base => BASE_VISIBILITY_RANGE,
            BuildingKind::Farm | BuildingKind::OilRefinery => BUILDING_VISIBILITY_RANGE,
        }
    }

    pub fn max_health(self) -> i32 {
        match self {
            BuildingKind::Base => BASE_HEALTH,
            _ => BUILDING_HEALTH,
        }
    }

    pub fn max_defenses(self) -> i32 {
        match self {
            BuildingKind::Base => BASE_DEFENSES,
            _ => BUILDING_DEFENSES,
        }
    }

    pub fn footprint(self) -> f32 {
        match self {
            BuildingKind::Base => STANDARD_SIZE * BASE_SCALE,
            _ => STANDARD_SIZE * BUILDING_SCALE,
        }
    }
}

/// Natural resource deposits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Oil,
}

/// Ammunition types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    Bullet,
    TankAmmo,
}

impl ProjectileKind {
    /// Plane units travelled per tick along a unit direction.
    pub fn speed(self) -> f32 {
        match self {
            ProjectileKind::Bullet => BULLET_SPEED,
            ProjectileKind::TankAmmo => TANK_AMMO_SPEED,
        }
    }

    pub fn damage(self) -> i32 {
        match self {
            ProjectileKind::Bullet => BULLET_DAMAGE,
            ProjectileKind::TankAmmo => TANK_AMMO_DAMAGE,
        }
    }

    pub fn footprint(self) -> f32 {
        match self {
            ProjectileKind::Bullet => PROJECTILE_BASE_SIZE * BULLET_SCALE,
            ProjectileKind::TankAmmo => PROJECTILE_BASE_SIZE * TANK_AMMO_SCALE,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}
