//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! and the grid. They do not own state; all state lives in components and
//! cells. Per-tick order: cooldown, visibility, targeting, projectile, cleanup.

pub mod cleanup;
pub mod cooldown;
pub mod damage;
pub mod projectile;
pub mod snapshot;
pub mod targeting;
pub mod visibility;
