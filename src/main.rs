//! arcade-sim entry point
//!
//! Headless demo driver: runs each simulation for a stretch of ticks and
//! logs what a renderer would see. Doubles as a smoke test that the
//! physics hold their conservation guarantees outside the test suite.

use std::time::Instant;

use arcade_sim::config::Config;
use arcade_sim::consts::SIM_DT;
use arcade_sim::error::SetupError;
use arcade_sim::games::ballpit::{BallPit, TickInput as PitInput};
use arcade_sim::games::flappy::{FlappyGame, TickInput as FlapInput};
use arcade_sim::games::lanes::{LaneGame, TickInput as LaneInput};
use arcade_sim::games::GamePhase;
use arcade_sim::highscores::MemoryScoreStore;
use arcade_sim::render::{LogRenderer, Renderer};
use arcade_sim::sim::{FixedStep, FrameClock};

fn main() -> Result<(), SetupError> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let config = Config::default();
    let mut renderer = LogRenderer;

    log::info!("arcade-sim demo, seed {seed}");

    // Ball pit: discrete steps, one per scheduled tick.
    let mut pit = BallPit::new(&config.ballpit, seed)?;
    pit.start();
    let momentum0 = pit.total_momentum();
    let energy0 = pit.total_kinetic_energy();
    for _ in 0..600 {
        pit.tick(&PitInput::default());
        renderer.render(pit.frame());
    }
    let energy = pit.total_kinetic_energy();
    println!(
        "ball pit: {} balls, 600 ticks, |p| {:.1} -> {:.1}, ke {:.1} -> {:.1} (drift {:.3}%)",
        pit.balls.len(),
        momentum0.length(),
        pit.total_momentum().length(),
        energy0,
        energy,
        (energy - energy0).abs() / energy0 * 100.0
    );

    // Lane dodger: fixed steps paid out from a frame clock, here fed a
    // synthetic 60 Hz callback schedule covering ten seconds of play.
    let mut lanes = LaneGame::new(config.lanes.clone(), seed, Box::new(MemoryScoreStore::default()))?;
    lanes.start();
    let mut clock = FrameClock::new();
    let mut fixed = FixedStep::new();
    let started = Instant::now();
    for frame in 0..600u32 {
        if lanes.phase != GamePhase::Playing {
            break;
        }
        let now = f64::from(frame) / 60.0;
        for _ in 0..fixed.steps(clock.delta(now)) {
            // Hold one lane and spray bullets; good enough for a demo.
            let input = LaneInput {
                fire: lanes.bullets.is_empty(),
                ..Default::default()
            };
            lanes.tick(&input, SIM_DT);
        }
        renderer.render(lanes.frame());
    }
    log::debug!("lane demo took {:?}", started.elapsed());
    println!(
        "lane dodger: score {}, {} traffic on road, phase {:?}",
        lanes.score,
        lanes.traffic.len(),
        lanes.phase
    );

    // Flappy: scripted flapper, ticks until the bird grounds out.
    let mut flappy = FlappyGame::new(config.flappy.clone(), seed)?;
    flappy.start();
    let mut ticks = 0u32;
    while flappy.phase == GamePhase::Playing && ticks < 60 * 60 {
        // Flap whenever the bird drops below its start height.
        let input = FlapInput {
            flap: flappy.bird.body.pos.y > config.flappy.bird_start_y,
            ..Default::default()
        };
        flappy.tick(&input, SIM_DT);
        renderer.render(flappy.frame());
        ticks += 1;
    }
    println!(
        "flappy: score {}, {} pipes live after {ticks} ticks, phase {:?}",
        flappy.score,
        flappy.pipes.len(),
        flappy.phase
    );

    Ok(())
}
