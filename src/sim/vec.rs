//! Vector helpers on top of `glam::Vec2`
//!
//! glam already covers arithmetic, length, dot and distance. The helpers
//! here pin down the two operations where a convention must be chosen:
//! rotation and normalization.

use glam::Vec2;
use rand::Rng;

use crate::error::DegenerateVectorError;

/// Rotate `v` by `angle` radians.
///
/// `x' = x·cos θ − y·sin θ`, `y' = x·sin θ + y·cos θ` (counter-clockwise
/// for a y-up frame). Every rotation in this crate goes through here so
/// the sign convention cannot drift between call sites.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Unit vector in the direction of `v`.
///
/// The zero vector has no direction; it is surfaced as an error rather
/// than a NaN that poisons everything downstream.
#[inline]
pub fn try_normalize(v: Vec2) -> Result<Vec2, DegenerateVectorError> {
    v.try_normalize().ok_or(DegenerateVectorError)
}

/// Random unit direction, sampled from the unit square and normalized.
///
/// Retries the degenerate draw at the origin instead of erroring.
pub fn random_dir<R: Rng>(rng: &mut R) -> Vec2 {
    loop {
        let v = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        if let Ok(dir) = try_normalize(v) {
            return dir;
        }
    }
}
