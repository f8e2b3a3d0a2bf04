//! Data-driven game tuning
//!
//! Every number the simulations run on lives here, persisted as JSON so a
//! host can tweak balance without recompiling. Loading and saving are
//! best-effort: a missing or corrupt file falls back to defaults with a
//! log line, it never takes the game down.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InvalidBodyError;

fn check_positive(value: f32, err: fn(f32) -> InvalidBodyError) -> Result<(), InvalidBodyError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(err(value))
    }
}

/// Ball-pit tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallPitConfig {
    /// Arena extents in pixels.
    pub width: f32,
    pub height: f32,
    /// Number of balls to place at startup.
    pub ball_count: usize,
    /// Radius range, sampled uniformly per ball.
    pub min_radius: f32,
    pub max_radius: f32,
    /// Speed range in pixels per tick (the pit runs discrete steps).
    pub min_speed: f32,
    pub max_speed: f32,
    /// Rejection-sampling attempts per ball before placement gives up.
    pub max_placement_attempts: u32,
}

impl Default for BallPitConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            ball_count: 50,
            min_radius: 5.0,
            max_radius: 15.0,
            min_speed: 5.0,
            max_speed: 10.0,
            max_placement_attempts: 1000,
        }
    }
}

impl BallPitConfig {
    /// Reject geometry the physics cannot handle before a run starts.
    pub fn validate(&self) -> Result<(), InvalidBodyError> {
        check_positive(self.width, InvalidBodyError::Width)?;
        check_positive(self.height, InvalidBodyError::Height)?;
        check_positive(self.min_radius, InvalidBodyError::Radius)?;
        check_positive(self.max_radius, InvalidBodyError::Radius)?;
        // Sampling ranges must be non-empty.
        if self.max_radius <= self.min_radius {
            return Err(InvalidBodyError::Radius(self.max_radius));
        }
        if !self.max_speed.is_finite() || self.max_speed <= self.min_speed {
            return Err(InvalidBodyError::Speed(self.max_speed));
        }
        Ok(())
    }
}

/// Lane-dodger tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneConfig {
    pub width: f32,
    pub height: f32,
    pub lanes: u32,
    pub car_width: f32,
    pub car_height: f32,
    /// Traffic speed in pixels per second.
    pub car_speed: f32,
    /// Seconds between traffic spawns at the start of a run.
    pub spawn_interval: f32,
    /// Spawn interval floor the difficulty ramp stops at.
    pub min_spawn_interval: f32,
    /// How much the interval shrinks per 500 points.
    pub spawn_interval_step: f32,
    pub bullet_speed: f32,
    /// Seconds a bullet lives before expiring.
    pub bullet_life: f32,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 600.0,
            lanes: 3,
            car_width: 50.0,
            car_height: 80.0,
            car_speed: 100.0,
            spawn_interval: 3.0,
            min_spawn_interval: 0.6,
            spawn_interval_step: 0.2,
            bullet_speed: 150.0,
            bullet_life: 2.0,
        }
    }
}

impl LaneConfig {
    pub fn validate(&self) -> Result<(), InvalidBodyError> {
        check_positive(self.width, InvalidBodyError::Width)?;
        check_positive(self.height, InvalidBodyError::Height)?;
        check_positive(self.car_width, InvalidBodyError::Width)?;
        check_positive(self.car_height, InvalidBodyError::Height)?;
        Ok(())
    }

    /// Center x of the given lane's car slot.
    pub fn lane_x(&self, lane: u32) -> f32 {
        let lane_width = self.width / self.lanes as f32;
        (lane as f32 + 0.5) * lane_width - self.car_width / 2.0
    }
}

/// Flappy tuning. Speeds are pixels per second, gravity pixels per second
/// squared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub width: f32,
    pub height: f32,
    pub gravity: f32,
    /// Upward velocity set by a flap (negative is up).
    pub flap_impulse: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Fixed horizontal position of the bird.
    pub bird_x: f32,
    pub bird_start_y: f32,
    pub pipe_width: f32,
    /// Leftward pipe scroll speed.
    pub pipe_speed: f32,
    /// Pipe height range, sampled per pipe.
    pub pipe_min_height: f32,
    pub pipe_max_height: f32,
    /// Seconds between pipe spawns.
    pub spawn_interval: f32,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 600.0,
            gravity: 720.0,
            flap_impulse: -300.0,
            bird_width: 60.0,
            bird_height: 66.0,
            bird_x: 50.0,
            bird_start_y: 50.0,
            pipe_width: 20.0,
            pipe_speed: 50.0,
            pipe_min_height: 150.0,
            pipe_max_height: 250.0,
            spawn_interval: 3.0,
        }
    }
}

impl FlappyConfig {
    pub fn validate(&self) -> Result<(), InvalidBodyError> {
        check_positive(self.width, InvalidBodyError::Width)?;
        check_positive(self.height, InvalidBodyError::Height)?;
        check_positive(self.bird_width, InvalidBodyError::Width)?;
        check_positive(self.bird_height, InvalidBodyError::Height)?;
        check_positive(self.pipe_width, InvalidBodyError::Width)?;
        check_positive(self.pipe_min_height, InvalidBodyError::Height)?;
        check_positive(self.pipe_max_height, InvalidBodyError::Height)?;
        if self.pipe_max_height <= self.pipe_min_height {
            return Err(InvalidBodyError::Height(self.pipe_max_height));
        }
        Ok(())
    }
}

/// Top-level config envelope, one section per game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ballpit: BallPitConfig,
    pub lanes: LaneConfig,
    pub flappy: FlappyConfig,
}

impl Config {
    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("config {} is invalid ({err}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write as pretty JSON. Failures are logged, not fatal.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save config to {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("failed to encode config: {err}"),
        }
    }
}
