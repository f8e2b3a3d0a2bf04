//! Deterministic simulation core
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Explicit timestep passed to every update
//! - Seeded RNG only, owned by the caller
//! - No rendering or platform dependencies

pub mod body;
pub mod clock;
pub mod collision;
pub mod motion;
pub mod spawn;
pub mod vec;

pub use body::{Ball, Bounds, Kinematic, RectBody};
pub use clock::{FixedStep, FrameClock};
pub use collision::{
    circles_overlap, circles_will_overlap, penetration_extent, point_in_rect, rects_overlap,
    resolve_elastic,
};
pub use motion::{accelerate, integrate, reflect_in_bounds};
pub use spawn::SpawnTimer;
pub use vec::{random_dir, rotate, try_normalize};
