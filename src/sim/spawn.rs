//! Pause-aware interval timers
//!
//! Periodic entity generation (traffic, pipes) runs off these timers
//! instead of free-running host timers. A timer only advances inside the
//! owning game's tick, so a fire is always ordered before that tick's use
//! of the entity lists and nothing can spawn while the game is paused.

use serde::{Deserialize, Serialize};

/// Interval trigger with `setInterval`/`clearInterval` semantics:
/// disarming cancels the pending fire, arming restarts the full interval
/// from zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnTimer {
    interval: f32,
    elapsed: f32,
    armed: bool,
}

impl SpawnTimer {
    /// A new timer starts disarmed; call [`SpawnTimer::arm`] when the game
    /// actually begins.
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            armed: false,
        }
    }

    /// Advance by `dt` seconds. Returns true when the interval elapsed;
    /// the overshoot carries into the next cycle.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }

    /// Start (or restart) the timer; the first fire is a full interval away.
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed = 0.0;
    }

    /// Cancel the pending fire.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Change the firing interval, keeping the current countdown.
    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }
}
