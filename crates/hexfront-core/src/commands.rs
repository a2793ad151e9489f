//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::hex::CubeCoordinate;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Fog of war ---
    /// Flip fog of war on or off.
    ToggleFog,
    /// Set fog of war explicitly.
    SetFog { enabled: bool },

    // --- Selection & movement ---
    /// Select the character standing on a cell (clears selection if empty).
    SelectCell { coord: CubeCoordinate },
    /// Drop the current selection.
    ClearSelection,
    /// Step the selected character onto an adjacent cell.
    MoveSelected { to: CubeCoordinate },

    // --- Structures ---
    /// Repair the building on a cell.
    RepairBuilding { coord: CubeCoordinate, amount: i32 },

    // --- Simulation control ---
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
