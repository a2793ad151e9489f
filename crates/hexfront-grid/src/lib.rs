//! Spatial substrate for HEXFRONT.
//!
//! The hex grid, its cells, and the point, range, adjacency and
//! bounds queries every simulation step runs against.

pub use hexfront_core as core;

pub mod cell;
pub mod grid;

// Re-export key types for convenience.
pub use cell::{Cell, Occupants};
pub use grid::HexGrid;
