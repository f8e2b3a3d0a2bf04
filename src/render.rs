//! Renderer contract
//!
//! The crate never draws. Once per tick, after physics resolution, a game
//! hands the host a read-only view of its world; the shared borrows make
//! mutation from the render side impossible.

use crate::games::flappy::{Bird, Pipe};
use crate::games::lanes::{Bullet, Car};
use crate::sim::Ball;

/// One tick's renderable state, borrowed from the owning game.
#[derive(Debug, Clone, Copy)]
pub enum Frame<'a> {
    BallPit {
        balls: &'a [Ball],
        ticks: u64,
    },
    Lanes {
        player: &'a Car,
        traffic: &'a [Car],
        bullets: &'a [Bullet],
        score: u32,
    },
    Flappy {
        bird: &'a Bird,
        pipes: &'a [Pipe],
        score: u32,
    },
}

/// Receives the world after each tick.
pub trait Renderer {
    fn render(&mut self, frame: Frame<'_>);
}

/// Logs a one-line summary per frame at debug level. Handy for headless
/// runs and soak tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, frame: Frame<'_>) {
        match frame {
            Frame::BallPit { balls, ticks } => {
                log::debug!("tick {ticks}: {} balls", balls.len());
            }
            Frame::Lanes {
                traffic,
                bullets,
                score,
                ..
            } => {
                log::debug!(
                    "lanes: {} traffic, {} bullets, score {score}",
                    traffic.len(),
                    bullets.len()
                );
            }
            Frame::Flappy { bird, pipes, score } => {
                log::debug!(
                    "flappy: bird y {:.1}, {} pipes, score {score}",
                    bird.body.pos.y,
                    pipes.len()
                );
            }
        }
    }
}

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: Frame<'_>) {}
}
