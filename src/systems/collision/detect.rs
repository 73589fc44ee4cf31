use crate::core::vec2::MIN_MAGNITUDE;
use crate::core::Vec2;
use crate::domain::Obstacle;

use super::types::CollisionInfo;

/// Obstacle half extents grown by the particle radius.
#[inline]
fn expanded_half_extents(obstacle: &Obstacle, radius: f32) -> Vec2 {
    obstacle.half_extents() + Vec2::new(radius, radius)
}

#[inline]
fn inside(local: Vec2, half: Vec2) -> bool {
    local.x.abs() <= half.x && local.y.abs() <= half.y
}

/// +1 for positive coordinates, -1 otherwise (zero goes to -1).
#[inline]
fn side(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Resting-overlap test of a point (particle center) against an obstacle.
///
/// The separating axis is the one with the smaller penetration; on a tie the
/// y axis wins.
pub fn check_point_collision(point: Vec2, obstacle: &Obstacle, radius: f32) -> CollisionInfo {
    let local = obstacle.to_local(point);
    let half = expanded_half_extents(obstacle, radius);

    if !inside(local, half) {
        return CollisionInfo::none();
    }

    let penetration_x = half.x - local.x.abs();
    let penetration_y = half.y - local.y.abs();

    let (local_normal, depth) = if penetration_x < penetration_y {
        (Vec2::new(side(local.x), 0.0), penetration_x)
    } else {
        (Vec2::new(0.0, side(local.y)), penetration_y)
    };

    CollisionInfo {
        has_collision: true,
        collision_point: point,
        collision_normal: local_normal.rotate(obstacle.rotation),
        penetration_depth: depth,
    }
}

/// Approximate continuous test of the segment `start -> end`.
///
/// The segment must start outside the expanded rectangle and either end inside
/// it or have its midpoint inside it (a full pass-through within one tick). The
/// contact is placed at the segment midpoint, not at the exact time of impact,
/// so particles that skip the rectangle's middle can still tunnel.
pub fn check_sweep_collision(
    start: Vec2,
    end: Vec2,
    obstacle: &Obstacle,
    radius: f32,
) -> CollisionInfo {
    let local_start = obstacle.to_local(start);
    let local_end = obstacle.to_local(end);
    let half = expanded_half_extents(obstacle, radius);

    if inside(local_start, half) {
        return CollisionInfo::none();
    }

    let local_hit = local_start + (local_end - local_start) * 0.5;
    if !inside(local_end, half) && !inside(local_hit, half) {
        return CollisionInfo::none();
    }

    let rel_x = local_hit.x.abs() / half.x.max(MIN_MAGNITUDE);
    let rel_y = local_hit.y.abs() / half.y.max(MIN_MAGNITUDE);
    let local_normal = if rel_x > rel_y {
        Vec2::new(side(local_hit.x), 0.0)
    } else {
        Vec2::new(0.0, side(local_hit.y))
    };

    CollisionInfo {
        has_collision: true,
        collision_point: obstacle.to_world(local_hit),
        collision_normal: local_normal.rotate(obstacle.rotation),
        penetration_depth: 0.0,
    }
}
