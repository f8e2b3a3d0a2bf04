//! Game simulations built on the physics core
//!
//! Each game owns its world exclusively and advances through a `tick`
//! method fed by pre-translated input intents; raw key codes and mouse
//! events never reach this layer. All randomness comes from a per-game
//! seeded RNG, so a run is reproducible from its seed.

pub mod ballpit;
pub mod flappy;
pub mod lanes;

use serde::{Deserialize, Serialize};

/// Lifecycle shared by the playable games.
///
/// `Ready` waits for the first start input; pausing flips between
/// `Playing` and `Paused`; `GameOver` is left by starting a fresh run,
/// which resets the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Ready,
    Playing,
    Paused,
    GameOver,
}
