//! Collision detection and elastic response
//!
//! Circle-circle tests drive the ball pit; AABB tests drive the rectangular
//! games. The elastic resolver rotates velocities into the collision-normal
//! frame, applies the 1-D two-body formula there, and rotates back.

use glam::Vec2;

use super::body::{Ball, RectBody};
use super::vec::rotate;

/// True if the two balls currently overlap (touching counts).
#[inline]
pub fn circles_overlap(a: &Ball, b: &Ball) -> bool {
    a.pos.distance(b.pos) <= a.radius + b.radius
}

/// Overlap test evaluated at next-tick positions (`pos + vel`).
///
/// Resolving one step early keeps balls from visibly interpenetrating, at
/// the cost of rare under-detection when the frame rate drops.
#[inline]
pub fn circles_will_overlap(a: &Ball, b: &Ball) -> bool {
    (a.pos + a.vel).distance(b.pos + b.vel) <= a.radius + b.radius
}

/// Inclusive point-in-rect test.
#[inline]
pub fn point_in_rect(rect: &RectBody, point: Vec2) -> bool {
    point.x >= rect.pos.x
        && point.x <= rect.right()
        && point.y >= rect.pos.y
        && point.y <= rect.bottom()
}

/// AABB overlap via interval comparison on both axes.
///
/// A corner-containment test misses deep overlaps where no corner of either
/// box lies inside the other (two crossed bars, say), so the intervals are
/// compared directly.
pub fn rects_overlap(a: &RectBody, b: &RectBody) -> bool {
    a.pos.x <= b.right() && b.pos.x <= a.right() && a.pos.y <= b.bottom() && b.pos.y <= a.bottom()
}

/// Signed horizontal displacement separating `a` from `b`.
///
/// Two candidates exist: back `a` out past `b`'s right edge, or out past
/// its left edge. The smaller-magnitude one is returned so the position
/// correction is minimal; subtracting it from `a.pos.x` separates the
/// boxes.
pub fn penetration_extent(a: &RectBody, b: &RectBody) -> f32 {
    let past_right_edge = a.pos.x - b.right();
    let past_left_edge = a.right() - b.pos.x;
    if past_right_edge.abs() > past_left_edge.abs() {
        past_left_edge
    } else {
        past_right_edge
    }
}

/// Elastic collision response between two balls, in place.
///
/// Rotates both velocities so the line of centers becomes the x-axis,
/// applies the 1-D elastic formula to the x components (the tangential y
/// components carry no impulse for frictionless circles), and rotates
/// back. Pairs already separating along the line of centers are skipped,
/// so an overlapping pair cannot re-collide into each other on consecutive
/// ticks. Positions are not touched.
pub fn resolve_elastic(a: &mut Ball, b: &mut Ball) {
    let rel_vel = a.vel - b.vel;
    let line = b.pos - a.pos;

    // Negative projection means the pair is already moving apart.
    if rel_vel.dot(line) < 0.0 {
        return;
    }

    let theta = -line.y.atan2(line.x);
    let u1 = rotate(a.vel, theta);
    let u2 = rotate(b.vel, theta);

    let total = a.mass + b.mass;
    let diff = a.mass - b.mass;

    let v1 = Vec2::new((u1.x * diff + u2.x * 2.0 * b.mass) / total, u1.y);
    let v2 = Vec2::new((u2.x * -diff + u1.x * 2.0 * a.mass) / total, u2.y);

    a.vel = rotate(v1, -theta);
    b.vel = rotate(v2, -theta);
}
