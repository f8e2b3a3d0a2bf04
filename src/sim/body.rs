//! Simulation body types
//!
//! Two body shapes cover all the games: circles with mass for the elastic
//! ball pit, axis-aligned rectangles for cars, bullets, birds and pipes.
//! Invalid geometry is rejected at construction, never discovered mid-tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::InvalidBodyError;

#[inline]
fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Kinematic state shared by circular and rectangular bodies.
///
/// The integrator is written against this seam so both shapes move through
/// the same code path.
pub trait Kinematic {
    fn velocity(&self) -> Vec2;
    fn position_mut(&mut self) -> &mut Vec2;
    fn velocity_mut(&mut self) -> &mut Vec2;
}

/// A circular body with mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position.
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Result<Self, InvalidBodyError> {
        if !positive(radius) {
            return Err(InvalidBodyError::Radius(radius));
        }
        if !positive(mass) {
            return Err(InvalidBodyError::Mass(mass));
        }
        Ok(Self {
            pos,
            vel,
            radius,
            mass,
        })
    }

    /// True if `point` lies inside the ball (boundary inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }

    /// Momentum `m·v`.
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }

    /// Kinetic energy `½·m·|v|²`.
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

impl Kinematic for Ball {
    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn velocity_mut(&mut self) -> &mut Vec2 {
        &mut self.vel
    }
}

/// An axis-aligned rectangular body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectBody {
    /// Top-left corner (screen coordinates, y grows downward).
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
}

impl RectBody {
    pub fn new(pos: Vec2, vel: Vec2, width: f32, height: f32) -> Result<Self, InvalidBodyError> {
        if !positive(width) {
            return Err(InvalidBodyError::Width(width));
        }
        if !positive(height) {
            return Err(InvalidBodyError::Height(height));
        }
        Ok(Self {
            pos,
            vel,
            width,
            height,
        })
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

impl Kinematic for RectBody {
    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }

    fn velocity_mut(&mut self) -> &mut Vec2 {
        &mut self.vel
    }
}

/// Play-field extents. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_rejects_bad_geometry() {
        assert_eq!(
            Ball::new(Vec2::ZERO, Vec2::ZERO, 0.0, 1.0),
            Err(InvalidBodyError::Radius(0.0))
        );
        assert_eq!(
            Ball::new(Vec2::ZERO, Vec2::ZERO, 5.0, -1.0),
            Err(InvalidBodyError::Mass(-1.0))
        );
        assert!(Ball::new(Vec2::ZERO, Vec2::ZERO, f32::NAN, 1.0).is_err());
        assert!(Ball::new(Vec2::ZERO, Vec2::ZERO, 5.0, 1.0).is_ok());
    }

    #[test]
    fn test_rect_rejects_bad_geometry() {
        assert_eq!(
            RectBody::new(Vec2::ZERO, Vec2::ZERO, -1.0, 10.0),
            Err(InvalidBodyError::Width(-1.0))
        );
        assert_eq!(
            RectBody::new(Vec2::ZERO, Vec2::ZERO, 10.0, 0.0),
            Err(InvalidBodyError::Height(0.0))
        );
        assert!(RectBody::new(Vec2::ZERO, Vec2::ZERO, 10.0, 10.0).is_ok());
    }

    #[test]
    fn test_ball_contains_boundary_inclusive() {
        let ball = Ball::new(Vec2::new(10.0, 10.0), Vec2::ZERO, 5.0, 1.0).unwrap();
        assert!(ball.contains(Vec2::new(10.0, 10.0)));
        assert!(ball.contains(Vec2::new(15.0, 10.0)));
        assert!(!ball.contains(Vec2::new(15.1, 10.0)));
    }

    #[test]
    fn test_momentum_and_energy() {
        let ball = Ball::new(Vec2::ZERO, Vec2::new(3.0, 4.0), 5.0, 2.0).unwrap();
        assert_eq!(ball.momentum(), Vec2::new(6.0, 8.0));
        assert!((ball.kinetic_energy() - 25.0).abs() < 1e-6);
    }
}
