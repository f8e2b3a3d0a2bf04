//! Lane dodger
//!
//! Traffic streams down three lanes toward the player, who swaps lanes to
//! dodge and shoots bullets to clear the road. Real-time integration: all
//! speeds are pixels per second, fed by measured frame deltas.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::LaneConfig;
use crate::error::InvalidBodyError;
use crate::highscores::ScoreStore;
use crate::render::Frame;
use crate::sim::{RectBody, SpawnTimer, integrate, point_in_rect, rects_overlap};

use super::GamePhase;

/// Input intents for one tick. Lane changes and firing are edge-triggered:
/// the host sets them for the tick a key went down.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    pub toggle_pause: bool,
}

/// A car, player or traffic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Car {
    pub body: RectBody,
    pub lane: u32,
}

/// A bullet travelling up the screen. Collides as a point (its top-left),
/// the 5×5 body is for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub body: RectBody,
    /// Seconds of life remaining.
    pub life: f32,
}

/// Points for shooting a traffic car.
const SCORE_SHOT: u32 = 50;
/// Points for a car that makes it past the player.
const SCORE_PASSED: u32 = 100;
/// Score interval at which the spawn rate ramps up.
const RAMP_EVERY: u32 = 500;

/// The lane-dodger world.
pub struct LaneGame {
    pub config: LaneConfig,
    pub phase: GamePhase,
    pub player: Car,
    pub traffic: Vec<Car>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    pub best: u32,
    /// Set when this run's final score beat the stored best.
    pub new_high_score: bool,
    spawner: SpawnTimer,
    rng: Pcg32,
    store: Box<dyn ScoreStore>,
}

impl LaneGame {
    pub fn new(
        config: LaneConfig,
        seed: u64,
        store: Box<dyn ScoreStore>,
    ) -> Result<Self, InvalidBodyError> {
        config.validate()?;
        let best = store.best();
        let player = Self::spawn_player(&config)?;
        let spawner = SpawnTimer::new(config.spawn_interval);
        Ok(Self {
            config,
            phase: GamePhase::Ready,
            player,
            traffic: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            best,
            new_high_score: false,
            spawner,
            rng: Pcg32::seed_from_u64(seed),
            store,
        })
    }

    fn spawn_player(config: &LaneConfig) -> Result<Car, InvalidBodyError> {
        let lane = config.lanes / 2;
        let body = RectBody::new(
            Vec2::new(config.lane_x(lane), config.height - config.car_height),
            Vec2::ZERO,
            config.car_width,
            config.car_height,
        )?;
        Ok(Car { body, lane })
    }

    /// Begin a run (Ready or GameOver → Playing). Resets the world.
    pub fn start(&mut self) {
        if matches!(self.phase, GamePhase::Playing | GamePhase::Paused) {
            return;
        }
        self.score = 0;
        self.new_high_score = false;
        self.traffic.clear();
        self.bullets.clear();
        if let Ok(player) = Self::spawn_player(&self.config) {
            self.player = player;
        }
        self.spawner.set_interval(self.config.spawn_interval);
        self.spawner.arm();
        self.phase = GamePhase::Playing;
        log::info!("lane run started, best so far {}", self.best);
    }

    /// Advance by `dt` seconds of play.
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        if input.toggle_pause {
            match self.phase {
                GamePhase::Playing => {
                    self.phase = GamePhase::Paused;
                    // No traffic may appear while the frame is held.
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

        if input.move_left && self.player.lane > 0 {
            self.player.lane -= 1;
            self.snap_player_x();
        }
        if input.move_right && self.player.lane + 1 < self.config.lanes {
            self.player.lane += 1;
            self.snap_player_x();
        }
        if input.fire {
            self.fire_bullet();
        }

        if self.spawner.tick(dt) {
            self.spawn_traffic();
        }

        self.update_bullets(dt);
        self.update_traffic(dt);
    }

    fn snap_player_x(&mut self) {
        self.player.body.pos.x = self.config.lane_x(self.player.lane);
    }

    /// Bullet leaves the middle of the player's nose.
    fn fire_bullet(&mut self) {
        let body = RectBody {
            pos: Vec2::new(
                self.player.body.pos.x + self.config.car_width / 2.0,
                self.player.body.pos.y,
            ),
            vel: Vec2::new(0.0, -self.config.bullet_speed),
            width: 5.0,
            height: 5.0,
        };
        self.bullets.push(Bullet {
            body,
            life: self.config.bullet_life,
        });
    }

    /// One or two cars in distinct random lanes, entering above the field.
    fn spawn_traffic(&mut self) {
        let count = self.rng.random_range(1..=2u32);
        let mut last_lane: Option<u32> = None;
        for _ in 0..count {
            let mut lane = self.rng.random_range(0..self.config.lanes);
            while last_lane == Some(lane) {
                lane = self.rng.random_range(0..self.config.lanes);
            }
            last_lane = Some(lane);
            let body = RectBody {
                pos: Vec2::new(self.config.lane_x(lane), -self.config.car_height),
                vel: Vec2::new(0.0, self.config.car_speed),
                width: self.config.car_width,
                height: self.config.car_height,
            };
            self.traffic.push(Car { body, lane });
        }
    }

    fn update_bullets(&mut self, dt: f32) {
        for bullet in &mut self.bullets {
            integrate(&mut bullet.body, dt);
            bullet.life -= dt;
        }
        self.bullets.retain(|b| b.life > 0.0);
    }

    fn update_traffic(&mut self, dt: f32) {
        let mut crashed = false;
        let mut gained = 0;

        let mut i = 0;
        while i < self.traffic.len() {
            integrate(&mut self.traffic[i].body, dt);
            let car = self.traffic[i];

            if let Some(hit) = self
                .bullets
                .iter()
                .position(|b| point_in_rect(&car.body, b.body.pos))
            {
                self.bullets.swap_remove(hit);
                self.traffic.swap_remove(i);
                gained += SCORE_SHOT;
                continue;
            }

            if car.lane == self.player.lane && rects_overlap(&car.body, &self.player.body) {
                crashed = true;
                break;
            }

            if car.body.pos.y > self.config.height {
                self.traffic.swap_remove(i);
                gained += SCORE_PASSED;
                continue;
            }

            i += 1;
        }

        if gained > 0 {
            self.add_score(gained);
        }
        if crashed {
            self.game_over();
        }
    }

    /// Difficulty ramp: each 500-point threshold crossed shaves the spawn
    /// interval, down to the configured floor.
    fn add_score(&mut self, points: u32) {
        let before = self.score / RAMP_EVERY;
        self.score += points;
        let after = self.score / RAMP_EVERY;
        if after > before {
            let next = (self.spawner.interval() - self.config.spawn_interval_step)
                .max(self.config.min_spawn_interval);
            self.spawner.set_interval(next);
            log::debug!("spawn interval now {next:.1}s at score {}", self.score);
        }
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.spawner.disarm();
        if self.score > self.best {
            self.best = self.score;
            self.new_high_score = true;
            self.store.record(self.score);
        }
        log::info!("lane run over at score {}", self.score);
    }

    /// True while a pending traffic spawn is scheduled.
    pub fn spawner_armed(&self) -> bool {
        self.spawner.is_armed()
    }

    /// Read-only view for the renderer.
    pub fn frame(&self) -> Frame<'_> {
        Frame::Lanes {
            player: &self.player,
            traffic: &self.traffic,
            bullets: &self.bullets,
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryScoreStore;

    const DT: f32 = 1.0 / 60.0;

    fn game() -> LaneGame {
        LaneGame::new(LaneConfig::default(), 42, Box::new(MemoryScoreStore::default())).unwrap()
    }

    fn run_idle(game: &mut LaneGame, seconds: f32) {
        let steps = (seconds / DT).round() as u32;
        for _ in 0..steps {
            game.tick(&TickInput::default(), DT);
        }
    }

    #[test]
    fn test_starts_ready_player_centered() {
        let game = game();
        assert_eq!(game.phase, GamePhase::Ready);
        assert_eq!(game.player.lane, 1);
        assert_eq!(game.player.body.pos.y, 520.0);
        assert!(!game.spawner_armed());
    }

    #[test]
    fn test_lane_changes_clamped() {
        let mut game = game();
        game.start();
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        game.tick(&left, DT);
        assert_eq!(game.player.lane, 0);
        game.tick(&left, DT);
        assert_eq!(game.player.lane, 0);
        assert_eq!(game.player.body.pos.x, game.config.lane_x(0));

        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..5 {
            game.tick(&right, DT);
        }
        assert_eq!(game.player.lane, 2);
    }

    #[test]
    fn test_traffic_spawns_on_interval() {
        let mut game = game();
        game.start();
        assert!(game.traffic.is_empty());
        run_idle(&mut game, 3.1);
        let after_first = game.traffic.len();
        assert!((1..=2).contains(&after_first));
        for car in &game.traffic {
            assert_eq!(car.body.vel, Vec2::new(0.0, 100.0));
        }
    }

    #[test]
    fn test_spawned_pair_in_distinct_lanes() {
        let mut game = game();
        game.start();
        // Force several spawn rounds; any round producing two cars must
        // put them in different lanes.
        for _ in 0..10 {
            let before = game.traffic.len();
            game.spawn_traffic();
            let spawned = &game.traffic[before..];
            if spawned.len() == 2 {
                assert_ne!(spawned[0].lane, spawned[1].lane);
            }
        }
    }

    #[test]
    fn test_bullet_expires() {
        let mut game = game();
        game.start();
        game.tick(
            &TickInput {
                fire: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(game.bullets.len(), 1);
        let y0 = game.bullets[0].body.pos.y;
        game.tick(&TickInput::default(), DT);
        assert!(game.bullets[0].body.pos.y < y0);
        run_idle(&mut game, 2.1);
        assert!(game.bullets.is_empty());
    }

    #[test]
    fn test_bullet_removes_car_and_scores() {
        let mut game = game();
        game.start();
        // Car dead ahead in the player's lane, bullet already inside it.
        game.traffic.push(Car {
            body: RectBody {
                pos: Vec2::new(game.config.lane_x(1), 100.0),
                vel: Vec2::new(0.0, 100.0),
                width: 50.0,
                height: 80.0,
            },
            lane: 1,
        });
        game.bullets.push(Bullet {
            body: RectBody {
                pos: Vec2::new(game.config.lane_x(1) + 25.0, 130.0),
                vel: Vec2::new(0.0, -150.0),
                width: 5.0,
                height: 5.0,
            },
            life: 2.0,
        });
        game.tick(&TickInput::default(), DT);
        assert!(game.traffic.is_empty());
        assert!(game.bullets.is_empty());
        assert_eq!(game.score, SCORE_SHOT);
    }

    #[test]
    fn test_same_lane_crash_is_game_over() {
        let mut game = game();
        game.start();
        game.traffic.push(Car {
            body: RectBody {
                pos: Vec2::new(game.config.lane_x(1), 519.0),
                vel: Vec2::new(0.0, 100.0),
                width: 50.0,
                height: 80.0,
            },
            lane: 1,
        });
        game.tick(&TickInput::default(), DT);
        assert_eq!(game.phase, GamePhase::GameOver);
        assert!(!game.spawner_armed());
    }

    #[test]
    fn test_passed_car_scores() {
        let mut game = game();
        game.start();
        game.traffic.push(Car {
            body: RectBody {
                pos: Vec2::new(game.config.lane_x(0), 599.0),
                vel: Vec2::new(0.0, 100.0),
                width: 50.0,
                height: 80.0,
            },
            lane: 0,
        });
        game.tick(&TickInput::default(), DT);
        assert!(game.traffic.is_empty());
        assert_eq!(game.score, SCORE_PASSED);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn test_score_ramp_shrinks_spawn_interval() {
        let mut game = game();
        game.start();
        let initial = game.spawner.interval();
        game.add_score(RAMP_EVERY);
        assert!((game.spawner.interval() - (initial - 0.2)).abs() < 1e-6);

        // Ramp bottoms out at the floor.
        for _ in 0..30 {
            game.add_score(RAMP_EVERY);
        }
        assert_eq!(game.spawner.interval(), game.config.min_spawn_interval);
    }

    #[test]
    fn test_pause_disarms_spawner_and_holds_world() {
        let mut game = game();
        game.start();
        run_idle(&mut game, 1.0);
        let toggle = TickInput {
            toggle_pause: true,
            ..Default::default()
        };
        game.tick(&toggle, DT);
        assert_eq!(game.phase, GamePhase::Paused);
        assert!(!game.spawner_armed());

        let traffic = game.traffic.clone();
        run_idle(&mut game, 10.0);
        assert_eq!(game.traffic, traffic);

        game.tick(&toggle, DT);
        assert_eq!(game.phase, GamePhase::Playing);
        assert!(game.spawner_armed());
        // Rearmed from zero: nothing spawns until a full interval passes.
        let count = game.traffic.len();
        run_idle(&mut game, 2.5);
        assert_eq!(game.traffic.len(), count);
    }

    #[test]
    fn test_high_score_recorded_once_beaten() {
        let mut store = MemoryScoreStore::default();
        store.record(100);
        let mut game =
            LaneGame::new(LaneConfig::default(), 1, Box::new(store)).unwrap();
        game.start();
        game.score = 250;
        game.game_over();
        assert!(game.new_high_score);
        assert_eq!(game.best, 250);

        // A worse follow-up run leaves the best alone.
        game.start();
        game.score = 50;
        game.game_over();
        assert!(!game.new_high_score);
        assert_eq!(game.best, 250);
    }
}
