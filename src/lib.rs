//! arcade-sim - headless 2D arcade simulations
//!
//! Core modules:
//! - `sim`: deterministic physics core (vectors, collisions, integration, timers)
//! - `games`: the demos built on it (ball pit, lane dodger, flappy clone)
//! - `render`: read-only renderer contract for hosts
//! - `highscores`: best-effort score persistence
//! - `config`: data-driven tuning
//!
//! The crate draws nothing and reads no input devices: hosts translate raw
//! events into per-tick intents on the way in and consume [`render::Frame`]
//! views on the way out.

pub mod config;
pub mod error;
pub mod games;
pub mod highscores;
pub mod render;
pub mod sim;

pub use config::Config;
pub use error::{DegenerateVectorError, InvalidBodyError, PlacementError, SetupError};
pub use highscores::{JsonScoreStore, MemoryScoreStore, ScoreStore};
pub use render::{Frame, LogRenderer, NullRenderer, Renderer};

/// Loop timing constants
pub mod consts {
    /// Fixed simulation timestep for the real-time games (60 Hz).
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death.
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock delta a frame may report, in seconds.
    pub const MAX_FRAME_DELTA: f32 = 0.1;
}
