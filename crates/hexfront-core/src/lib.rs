//! Core types and definitions for the HEXFRONT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! hex coordinates, components, commands, state snapshots, events, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod hex;
pub mod state;
pub mod types;

pub use error::HexError;
pub use hex::CubeCoordinate;

#[cfg(test)]
mod tests;
