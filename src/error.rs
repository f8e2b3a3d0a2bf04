//! Error types for the simulation core
//!
//! Only contract violations are typed errors: bad construction input and
//! math with no defined answer. Everything that can legitimately happen
//! during a tick (boundary contact, simultaneous collision pairs, empty
//! body lists) is ordinary state.

use thiserror::Error;

/// Normalizing a zero-length vector has no defined direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot normalize a zero-length vector")]
pub struct DegenerateVectorError;

/// A body was given geometry or mass the physics cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidBodyError {
    #[error("radius must be positive and finite, got {0}")]
    Radius(f32),
    #[error("mass must be positive and finite, got {0}")]
    Mass(f32),
    #[error("width must be positive and finite, got {0}")]
    Width(f32),
    #[error("height must be positive and finite, got {0}")]
    Height(f32),
    #[error("speed range is empty or not finite at {0}")]
    Speed(f32),
}

/// Rejection sampling could not find a free spot for a new ball.
///
/// Raised at setup when the arena is too crowded for the configured ball
/// count; the alternative is looping forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no non-overlapping position found after {attempts} attempts")]
pub struct PlacementError {
    pub attempts: u32,
}

/// Simulation setup failure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Body(#[from] InvalidBodyError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}
