//! Simulation engine for HEXFRONT.
//!
//! Owns the hecs ECS world and the hex grid, runs the combat systems once
//! per tick, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{ConfigError, SimConfig, SimulationEngine};
pub use hexfront_core as core;
pub use hexfront_grid as grid;
pub use world_setup::SetupError;
