//! Simulation constants and tuning parameters.

// --- Hex layout ---

/// Default hex size (center to vertex) in plane units.
pub const HEX_SIZE: f32 = 25.0;

/// Packing factor applied to hex spacing so adjacent cells overlap slightly
/// and leave no visible seams.
pub const HEX_PACKING: f32 = 0.95;

/// √3, used by the pointy-top layout.
pub const SQRT_3: f32 = 1.732_050_8;

/// Default grid radius in hexes.
pub const DEFAULT_GRID_RADIUS: i32 = 10;

/// Largest grid radius a config may ask for (about three million cells).
pub const MAX_GRID_RADIUS: i32 = 1000;

// --- Entity footprints ---

/// Base edge length for characters and buildings (before scale factor).
pub const STANDARD_SIZE: f32 = 25.0;

/// Base edge length for projectiles (before scale factor).
pub const PROJECTILE_BASE_SIZE: f32 = 2.0;

// --- Targeting ---

/// Displacements shorter than this are not normalized when aiming.
pub const CLOSE_RANGE_THRESHOLD: f32 = 50.0;

/// Scale applied to a close-range displacement instead of normalizing it.
pub const CLOSE_RANGE_SCALE: f32 = 0.1;

/// Substituted for an exactly-zero axis of a close-range direction.
pub const DIRECTION_EPSILON: f32 = 0.001;

// --- Characters ---

pub const SOLDIER_HEALTH: i32 = 100;
pub const SOLDIER_RANGE: i32 = 1;
pub const SOLDIER_VISIBILITY_RANGE: i32 = 3;
pub const SOLDIER_COOLDOWN_TICKS: u32 = 60;
pub const SOLDIER_SCALE: f32 = 1.0;

pub const TANK_HEALTH: i32 = 150;
/// Armor plating absorbs hits before the hull.
pub const TANK_DEFENSES: i32 = 50;
pub const TANK_RANGE: i32 = 2;
pub const TANK_VISIBILITY_RANGE: i32 = 4;
pub const TANK_COOLDOWN_TICKS: u32 = 100;
pub const TANK_SCALE: f32 = 1.2;

// --- Buildings ---

pub const BUILDING_HEALTH: i32 = 100;
pub const BUILDING_DEFENSES: i32 = 100;
pub const BUILDING_VISIBILITY_RANGE: i32 = 2;
pub const CITY_CENTER_VISIBILITY_RANGE: i32 = 3;
pub const RESIDENTIAL_VISIBILITY_RANGE: i32 = 2;
pub const BASE_VISIBILITY_RANGE: i32 = 3;
pub const BASE_HEALTH: i32 = 200;
pub const BASE_DEFENSES: i32 = 150;
pub const BUILDING_SCALE: f32 = 1.2;
pub const BASE_SCALE: f32 = 1.5;

/// Cities see two hexes around their center.
pub const CITY_VISIBILITY_RANGE: i32 = 2;

// --- Projectiles ---

pub const BULLET_SPEED: f32 = 1.0;
pub const BULLET_DAMAGE: i32 = 20;
pub const BULLET_SCALE: f32 = 3.0;

/// Slower than a bullet.
pub const TANK_AMMO_SPEED: f32 = 0.7;
pub const TANK_AMMO_DAMAGE: i32 = 50;
pub const TANK_AMMO_SCALE: f32 = 4.0;

/// Default number of ticks a projectile may fly before it is discarded.
pub const PROJECTILE_MAX_AGE_TICKS: u32 = 600;
