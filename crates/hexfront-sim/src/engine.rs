//! Simulation engine: the per-tick driver.
//!
//! `SimulationEngine` owns the hecs world and the hex grid, processes player
//! commands, runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hexfront_core::commands::PlayerCommand;
use hexfront_core::components::{Building, Defenses, Health};
use hexfront_core::constants::{
    DEFAULT_GRID_RADIUS, HEX_SIZE, MAX_GRID_RADIUS, PROJECTILE_MAX_AGE_TICKS,
};
use hexfront_core::enums::GamePhase;
use hexfront_core::events::SimEvent;
use hexfront_core::hex::CubeCoordinate;
use hexfront_core::state::GameStateSnapshot;
use hexfront_core::types::SimTime;
use hexfront_grid::HexGrid;

use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub grid_radius: i32,
    /// Center-to-vertex hex size in plane units.
    pub hex_size: f32,
    pub fog_enabled: bool,
    /// Projectiles older than this are despawned.
    pub projectile_max_age_ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_radius: DEFAULT_GRID_RADIUS,
            hex_size: HEX_SIZE,
            fog_enabled: true,
            projectile_max_age_ticks: PROJECTILE_MAX_AGE_TICKS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl SimConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_radius < 0 {
            return Err(ConfigError::Invalid {
                field: "grid_radius",
                reason: "must not be negative",
            });
        }
        if self.grid_radius > MAX_GRID_RADIUS {
            return Err(ConfigError::Invalid {
                field: "grid_radius",
                reason: "exceeds the maximum grid radius",
            });
        }
        if !(self.hex_size.is_finite() && self.hex_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "hex_size",
                reason: "must be a positive number",
            });
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world, the grid, and all sim state.
pub struct SimulationEngine {
    world: World,
    grid: HexGrid,
    time: SimTime,
    phase: GamePhase,
    fog_enabled: bool,
    selected: Option<Entity>,
    rng: ChaCha8Rng,
    config: SimConfig,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with an empty world on a fresh grid.
    /// Fails if the config doesn't validate.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            grid: HexGrid::with_hex_size(config.grid_radius, config.hex_size),
            time: SimTime::default(),
            phase: GamePhase::default(),
            fog_enabled: config.fog_enabled,
            selected: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.grid,
            SnapshotContext {
                time: self.time,
                phase: self.phase,
                fog_enabled: self.fog_enabled,
                selected: self.selected,
                events: std::mem::take(&mut self.events),
            },
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn fog_enabled(&self) -> bool {
        self.fog_enabled
    }

    pub fn selected(&self) -> Option<Entity> {
        self.selected
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut HexGrid {
        &mut self.grid
    }

    /// World, grid and RNG together, for population helpers that need all three.
    pub fn parts_mut(&mut self) -> (&mut World, &mut HexGrid, &mut ChaCha8Rng) {
        (&mut self.world, &mut self.grid, &mut self.rng)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::ToggleFog => {
                self.fog_enabled = !self.fog_enabled;
                tracing::debug!(fog = self.fog_enabled, "fog toggled");
            }
            PlayerCommand::SetFog { enabled } => {
                self.fog_enabled = enabled;
            }
            PlayerCommand::SelectCell { coord } => {
                self.selected = self.grid.cell(coord).and_then(|c| c.character());
                tracing::debug!(%coord, selected = ?self.selected, "selection changed");
            }
            PlayerCommand::ClearSelection => {
                self.selected = None;
            }
            PlayerCommand::MoveSelected { to } => {
                let Some(entity) = self.selected else {
                    tracing::warn!(%to, "move requested with nothing selected");
                    return;
                };
                if let Err(err) =
                    world_setup::move_character(&mut self.world, &mut self.grid, entity, to)
                {
                    tracing::warn!(%err, "move rejected");
                }
            }
            PlayerCommand::RepairBuilding { coord, amount } => {
                self.repair_building(coord, amount);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    fn repair_building(&mut self, coord: CubeCoordinate, amount: i32) {
        if amount <= 0 {
            tracing::warn!(amount, "repair amount must be positive");
            return;
        }
        let Some(entity) = self.grid.cell(coord).and_then(|c| c.building()) else {
            tracing::warn!(%coord, "no building to repair");
            return;
        };
        match self
            .world
            .query_one_mut::<(&Building, &mut Health, &mut Defenses)>(entity)
        {
            Ok((_, health, defenses)) => {
                systems::damage::repair(health, defenses, amount);
                tracing::debug!(%coord, health = health.current, defenses = defenses.current, "building repaired");
            }
            Err(_) => tracing::warn!(%coord, "building has no damage model"),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        systems::cooldown::run(&mut self.world);
        systems::visibility::run(&self.world, &mut self.grid, self.fog_enabled);
        systems::targeting::run(&mut self.world, &self.grid, &mut self.events);
        systems::projectile::run(
            &mut self.world,
            &mut self.grid,
            &mut self.events,
            &mut self.selected,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(
            &mut self.world,
            &self.grid,
            self.config.projectile_max_age_ticks,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        tracing::trace!(
            tick = self.time.tick,
            entities = self.world.len(),
            events = self.events.len(),
            "tick complete"
        );
    }
}
