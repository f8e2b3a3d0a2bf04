//! Elastic ball pit
//!
//! Dozens of randomly placed balls bounce around a rectangular arena,
//! colliding elastically with each other and reflecting off the walls.
//! The pit runs a discrete per-tick step (`dt = 1.0`): velocities are
//! displacements per tick, one step per scheduled callback.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::BallPitConfig;
use crate::error::{PlacementError, SetupError};
use crate::render::Frame;
use crate::sim::{
    Ball, Bounds, circles_overlap, circles_will_overlap, integrate, random_dir,
    reflect_in_bounds, resolve_elastic,
};

/// Loop lifecycle. `Stopped` means unscheduled; a stopped pit is reseeded
/// rather than resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    Stopped,
    Running,
    Paused,
}

/// Input intents for one tick, already translated from raw events by the
/// host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Toggle Running ⇄ Paused (the `P` key, typically).
    pub toggle_pause: bool,
    /// Remove the topmost ball containing this point (canvas click).
    pub remove_at: Option<Vec2>,
}

/// The ball-pit world. Owns its bodies exclusively.
#[derive(Debug, Clone)]
pub struct BallPit {
    pub bounds: Bounds,
    pub balls: Vec<Ball>,
    pub phase: SimPhase,
    pub ticks: u64,
}

impl BallPit {
    /// Build a pit with `config.ball_count` non-overlapping balls placed
    /// by rejection sampling from the seeded RNG.
    pub fn new(config: &BallPitConfig, seed: u64) -> Result<Self, SetupError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Bounds {
            width: config.width,
            height: config.height,
        };

        let mut balls: Vec<Ball> = Vec::with_capacity(config.ball_count);
        for _ in 0..config.ball_count {
            let radius = rng.random_range(config.min_radius..config.max_radius);
            let speed = rng.random_range(config.min_speed..config.max_speed);
            let vel = random_dir(&mut rng) * speed;
            let pos = place(&balls, &bounds, radius, config.max_placement_attempts, &mut rng)?;
            balls.push(Ball::new(pos, vel, radius, 1.0)?);
        }

        log::info!("ball pit seeded with {} balls (seed {seed})", balls.len());
        Ok(Self {
            bounds,
            balls,
            phase: SimPhase::Stopped,
            ticks: 0,
        })
    }

    /// Schedule the loop (Stopped → Running).
    pub fn start(&mut self) {
        if self.phase == SimPhase::Stopped {
            self.phase = SimPhase::Running;
        }
    }

    /// Unschedule entirely. Terminal; build a new pit to run again.
    pub fn stop(&mut self) {
        self.phase = SimPhase::Stopped;
    }

    /// Advance one tick.
    ///
    /// Intents apply in any phase; the physics pass runs only while
    /// Running, so a paused pit holds its last state.
    pub fn tick(&mut self, input: &TickInput) {
        if input.toggle_pause {
            self.phase = match self.phase {
                SimPhase::Running => SimPhase::Paused,
                SimPhase::Paused => SimPhase::Running,
                SimPhase::Stopped => SimPhase::Stopped,
            };
        }

        if let Some(point) = input.remove_at {
            // Topmost ball is the last one drawn, so scan from the back.
            if let Some(idx) = self.balls.iter().rposition(|b| b.contains(point)) {
                self.balls.remove(idx);
            }
        }

        if self.phase != SimPhase::Running {
            return;
        }

        self.ticks += 1;
        self.step();
    }

    /// One integrate → reflect → detect → resolve pass.
    fn step(&mut self) {
        for ball in &mut self.balls {
            integrate(ball, 1.0);
            reflect_in_bounds(ball, &self.bounds);
        }

        // All-pairs scan; fine for the tens of bodies the pit runs with.
        // The predictive test fires one tick before visual contact.
        for i in 0..self.balls.len() {
            for j in (i + 1)..self.balls.len() {
                let (head, tail) = self.balls.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if circles_will_overlap(a, b) {
                    resolve_elastic(a, b);
                }
            }
        }
    }

    /// Total momentum of the system (diagnostics).
    pub fn total_momentum(&self) -> Vec2 {
        self.balls.iter().map(Ball::momentum).sum()
    }

    /// Total kinetic energy of the system. Elastic collisions and wall
    /// reflections both preserve speed, so this stays constant over a run.
    pub fn total_kinetic_energy(&self) -> f32 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    /// Read-only view for the renderer.
    pub fn frame(&self) -> Frame<'_> {
        Frame::BallPit {
            balls: &self.balls,
            ticks: self.ticks,
        }
    }
}

/// Rejection-sample a position whose ball overlaps nothing already placed.
fn place(
    placed: &[Ball],
    bounds: &Bounds,
    radius: f32,
    max_attempts: u32,
    rng: &mut Pcg32,
) -> Result<Vec2, PlacementError> {
    // A ball wider than the arena can never fit.
    if bounds.width <= radius * 2.0 || bounds.height <= radius * 2.0 {
        return Err(PlacementError { attempts: 0 });
    }
    for _ in 0..max_attempts {
        let pos = Vec2::new(
            rng.random_range(radius..bounds.width - radius),
            rng.random_range(radius..bounds.height - radius),
        );
        let candidate = Ball {
            pos,
            vel: Vec2::ZERO,
            radius,
            mass: 1.0,
        };
        if placed.iter().all(|b| !circles_overlap(&candidate, b)) {
            return Ok(pos);
        }
    }
    Err(PlacementError {
        attempts: max_attempts,
    })
}
