//! Error types for invariant violations in core values.

use thiserror::Error;

/// Raised when a core value is built from inputs that break its invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    /// Cube coordinates must satisfy `q + r + s == 0`.
    #[error("invalid cube coordinate ({q}, {r}, {s}): q + r + s must be 0")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },
}
