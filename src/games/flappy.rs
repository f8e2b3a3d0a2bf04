//! Flappy clone
//!
//! A gravity-bound bird flaps to clear timer-spawned pipes scrolling in
//! from the right. Hitting a pipe dazes the bird; the run ends when it
//! reaches the ground. Real-time integration, speeds in pixels per second.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::FlappyConfig;
use crate::error::InvalidBodyError;
use crate::render::Frame;
use crate::sim::{
    RectBody, SpawnTimer, accelerate, integrate, penetration_extent, rects_overlap,
};

use super::GamePhase;

/// Input intents for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap (click/tap/space). Ignored once the bird is dazed.
    pub flap: bool,
    pub toggle_pause: bool,
}

/// The bird. A dazed bird keeps falling under gravity but no longer flaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub body: RectBody,
    pub alive: bool,
}

/// A pipe obstacle. Top pipes hang from the ceiling, bottom pipes stand on
/// the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub body: RectBody,
    pub top: bool,
}

/// The flappy world.
pub struct FlappyGame {
    pub config: FlappyConfig,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    spawner: SpawnTimer,
    rng: Pcg32,
}

impl FlappyGame {
    pub fn new(config: FlappyConfig, seed: u64) -> Result<Self, InvalidBodyError> {
        config.validate()?;
        let bird = Self::spawn_bird(&config)?;
        let spawner = SpawnTimer::new(config.spawn_interval);
        Ok(Self {
            config,
            phase: GamePhase::Ready,
            bird,
            pipes: Vec::new(),
            score: 0,
            spawner,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    fn spawn_bird(config: &FlappyConfig) -> Result<Bird, InvalidBodyError> {
        let body = RectBody::new(
            Vec2::new(config.bird_x, config.bird_start_y),
            Vec2::ZERO,
            config.bird_width,
            config.bird_height,
        )?;
        Ok(Bird { body, alive: true })
    }

    /// Begin a run (Ready or GameOver → Playing). Resets the world.
    pub fn start(&mut self) {
        if matches!(self.phase, GamePhase::Playing | GamePhase::Paused) {
            return;
        }
        self.score = 0;
        self.pipes.clear();
        if let Ok(bird) = Self::spawn_bird(&self.config) {
            self.bird = bird;
        }
        self.spawner.set_interval(self.config.spawn_interval);
        self.spawner.arm();
        self.phase = GamePhase::Playing;
        log::info!("flappy run started");
    }

    /// Advance by `dt` seconds of play.
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        if input.toggle_pause {
            match self.phase {
                GamePhase::Playing => {
                    self.phase = GamePhase::Paused;
                    self.spawner.disarm();
                    return;
                }
                GamePhase::Paused => {
                    self.phase = GamePhase::Playing;
                    self.spawner.arm();
                }
                _ => {}
            }
        }
        if self.phase != GamePhase::Playing {
            return;
        }

        if input.flap && self.bird.alive {
            self.bird.body.vel.y = self.config.flap_impulse;
        }

        if self.spawner.tick(dt) {
            self.spawn_pipes();
        }

        self.update_pipes(dt);
        self.update_bird(dt);
    }

    /// One bottom pipe, or a bottom+top pair, entering at the right edge.
    fn spawn_pipes(&mut self) {
        let count = self.rng.random_range(1..=2u32);
        for i in 0..count {
            let top = i > 0;
            let height = self
                .rng
                .random_range(self.config.pipe_min_height..self.config.pipe_max_height);
            let y = if top { 0.0 } else { self.config.height - height };
            let body = RectBody {
                pos: Vec2::new(self.config.width, y),
                vel: Vec2::new(-self.config.pipe_speed, 0.0),
                width: self.config.pipe_width,
                height,
            };
            self.pipes.push(Pipe { body, top });
        }
    }

    fn update_pipes(&mut self, dt: f32) {
        for pipe in &mut self.pipes {
            integrate(&mut pipe.body, dt);
        }

        // A bottom pipe leaving the left edge was cleared; it only counts
        // while the bird is still flying.
        let alive = self.bird.alive;
        let mut cleared = 0;
        self.pipes.retain(|pipe| {
            if pipe.body.right() < 0.0 {
                if !pipe.top && alive {
                    cleared += 1;
                }
                false
            } else {
                true
            }
        });
        self.score += cleared;
    }

    fn update_bird(&mut self, dt: f32) {
        accelerate(&mut self.bird.body, Vec2::new(0.0, self.config.gravity), dt);
        integrate(&mut self.bird.body, dt);

        if self.bird.alive {
            for pipe in &self.pipes {
                if rects_overlap(&self.bird.body, &pipe.body) {
                    // Back the bird out by the minimal horizontal
                    // correction, then let it drop.
                    self.bird.body.pos.x -= penetration_extent(&self.bird.body, &pipe.body);
                    self.bird.alive = false;
                    log::debug!("bird dazed at score {}", self.score);
                    break;
                }
            }
        }

        if self.bird.body.bottom() >= self.config.height {
            self.bird.body.pos.y = self.config.height - self.config.bird_height;
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.bird.alive = false;
        self.spawner.disarm();
        log::info!("flappy run over at score {}", self.score);
    }

    /// True while a pending pipe spawn is scheduled.
    pub fn spawner_armed(&self) -> bool {
        self.spawner.is_armed()
    }

    /// Read-only view for the renderer.
    pub fn frame(&self) -> Frame<'_> {
        Frame::Flappy {
            bird: &self.bird,
            pipes: &self.pipes,
            score: self.score,
        }
    }
}
