//! Motion integration and boundary reflection
//!
//! One `integrate` contract serves both timestep styles: the ball pit runs
//! a discrete step and passes `dt = 1.0` (velocities are displacements per
//! tick), the real-time games pass measured seconds.

use glam::Vec2;

use super::body::{Ball, Bounds, Kinematic};

/// Advance position by one step of velocity.
#[inline]
pub fn integrate<B: Kinematic>(body: &mut B, dt: f32) {
    let delta = body.velocity() * dt;
    *body.position_mut() += delta;
}

/// Apply a constant acceleration over the step.
#[inline]
pub fn accelerate<B: Kinematic>(body: &mut B, accel: Vec2, dt: f32) {
    *body.velocity_mut() += accel * dt;
}

/// Reflect a ball off the play-field edges.
///
/// When the ball's leading edge has crossed an edge, the matching velocity
/// component flips and the position is clamped so the ball sits exactly
/// inside the field; the clamp rules out tunneling. A ball resting exactly
/// on an edge is left untouched.
pub fn reflect_in_bounds(ball: &mut Ball, bounds: &Bounds) {
    if ball.pos.x - ball.radius < 0.0 {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ball.radius;
    } else if ball.pos.x + ball.radius > bounds.width {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = bounds.width - ball.radius;
    }

    if ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.radius;
    } else if ball.pos.y + ball.radius > bounds.height {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = bounds.height - ball.radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 200.0,
        height: 200.0,
    };

    #[test]
    fn test_integrate_discrete_step() {
        let mut ball = Ball::new(Vec2::new(10.0, 10.0), Vec2::new(3.0, -2.0), 5.0, 1.0).unwrap();
        integrate(&mut ball, 1.0);
        assert_eq!(ball.pos, Vec2::new(13.0, 8.0));
    }

    #[test]
    fn test_integrate_scaled_step() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 5.0, 1.0).unwrap();
        integrate(&mut ball, 0.5);
        assert_eq!(ball.pos, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_accelerate_scales_by_dt() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 5.0, 1.0).unwrap();
        accelerate(&mut ball, Vec2::new(0.0, 720.0), 0.5);
        assert_eq!(ball.vel, Vec2::new(0.0, 360.0));
    }

    #[test]
    fn test_reflection_flips_and_clamps() {
        // Radius 10 at x=5, moving left: after one step x=2, well past the
        // left wall. Velocity must flip and position clamp to x=10.
        let mut ball = Ball::new(Vec2::new(5.0, 50.0), Vec2::new(-3.0, 0.0), 10.0, 1.0).unwrap();
        integrate(&mut ball, 1.0);
        reflect_in_bounds(&mut ball, &BOUNDS);
        assert_eq!(ball.vel.x, 3.0);
        assert_eq!(ball.pos.x, 10.0);
    }

    #[test]
    fn test_reflection_right_and_bottom_edges() {
        let mut ball = Ball::new(Vec2::new(198.0, 199.0), Vec2::new(4.0, 6.0), 5.0, 1.0).unwrap();
        reflect_in_bounds(&mut ball, &BOUNDS);
        assert_eq!(ball.vel, Vec2::new(-4.0, -6.0));
        assert_eq!(ball.pos, Vec2::new(195.0, 195.0));
    }

    #[test]
    fn test_reflection_idempotent_at_rest() {
        // Resting exactly on the left wall with no inward velocity: the
        // reflection must not nudge it.
        let mut ball = Ball::new(Vec2::new(10.0, 50.0), Vec2::ZERO, 10.0, 1.0).unwrap();
        reflect_in_bounds(&mut ball, &BOUNDS);
        assert_eq!(ball.pos, Vec2::new(10.0, 50.0));
        assert_eq!(ball.vel, Vec2::ZERO);
        reflect_in_bounds(&mut ball, &BOUNDS);
        assert_eq!(ball.pos, Vec2::new(10.0, 50.0));
    }

    #[test]
    fn test_reflection_preserves_speed() {
        let mut ball = Ball::new(Vec2::new(3.0, 100.0), Vec2::new(-7.0, 2.0), 8.0, 1.0).unwrap();
        let speed = ball.vel.length();
        reflect_in_bounds(&mut ball, &BOUNDS);
        assert!((ball.vel.length() - speed).abs() < 1e-6);
    }
}
