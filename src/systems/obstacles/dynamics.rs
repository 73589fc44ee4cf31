use std::f32::consts::TAU;

use rand::Rng;

use crate::core::Vec2;
use crate::domain::Obstacle;

/// Speed ceiling re-applied after random perturbation
pub const MAX_OBSTACLE_SPEED: f32 = 50.0;
/// |angular velocity| ceiling
pub const MAX_ANGULAR_SPEED: f32 = 3.0;
/// A U(-1, 1) draw above this triggers a velocity perturbation
pub const PERTURB_THRESHOLD: f32 = 0.95;
pub const PERTURB_STEP: f32 = 10.0;
/// Fraction of velocity kept (sign flipped) after a wall hit
pub const OBSTACLE_RESTITUTION: f32 = 0.8;
pub const SPIN_KICK: f32 = 0.5;

/// Translate and rotate by one tick; rotation wraps into [0, 2π).
pub(super) fn advance(ob: &mut Obstacle, dt: f32) {
    ob.position += ob.velocity * dt;
    ob.rotation = wrap_angle(ob.rotation + ob.angular_velocity * dt);
}

#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Occasionally kick the velocity, then re-clamp the speed.
pub(super) fn perturb_velocity<R: Rng + ?Sized>(ob: &mut Obstacle, rng: &mut R) {
    if rng.random_range(-1.0f32..1.0) <= PERTURB_THRESHOLD {
        return;
    }
    ob.velocity += Vec2::new(
        rng.random_range(-PERTURB_STEP..PERTURB_STEP),
        rng.random_range(-PERTURB_STEP..PERTURB_STEP),
    );
    ob.velocity = ob.velocity.clamp_length(MAX_OBSTACLE_SPEED);
}

/// Bounce the rectangle's half extent off the walls. Returns true if any axis hit.
pub(super) fn bounce_off_walls(ob: &mut Obstacle, bounds: Vec2) -> bool {
    let half = ob.half_extents();
    let mut bounced = false;

    if ob.position.x - half.x <= 0.0 || ob.position.x + half.x >= bounds.x {
        ob.velocity.x *= -OBSTACLE_RESTITUTION;
        ob.position.x = half.x.max(ob.position.x.min(bounds.x - half.x));
        bounced = true;
    }

    if ob.position.y - half.y <= 0.0 || ob.position.y + half.y >= bounds.y {
        ob.velocity.y *= -OBSTACLE_RESTITUTION;
        ob.position.y = half.y.max(ob.position.y.min(bounds.y - half.y));
        bounced = true;
    }

    bounced
}

/// Random spin change after a bounce, clamped to ±MAX_ANGULAR_SPEED.
pub(super) fn kick_spin<R: Rng + ?Sized>(ob: &mut Obstacle, rng: &mut R) {
    ob.angular_velocity += rng.random_range(-SPIN_KICK..SPIN_KICK);
    ob.angular_velocity = ob.angular_velocity.clamp(-MAX_ANGULAR_SPEED, MAX_ANGULAR_SPEED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{subsystem_rng, STREAM_OBSTACLES};
    use approx::assert_relative_eq;

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        let mut rng = subsystem_rng(Some(1), STREAM_OBSTACLES);
        Obstacle::new(&mut rng, Vec2::new(x, y), Vec2::new(40.0, 20.0))
    }

    #[test]
    fn rotation_wraps_both_ways() {
        assert_relative_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(-0.5), TAU - 0.5, epsilon = 1e-5);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn advance_moves_and_spins() {
        let mut ob = obstacle_at(100.0, 100.0);
        ob.velocity = Vec2::new(10.0, -20.0);
        ob.angular_velocity = -2.0;
        advance(&mut ob, 0.5);
        assert_eq!(ob.position, Vec2::new(105.0, 90.0));
        assert_relative_eq!(ob.rotation, TAU - 1.0, epsilon = 1e-5);
    }

    #[test]
    fn wall_bounce_loses_energy_and_clamps() {
        let mut ob = obstacle_at(15.0, 100.0);
        ob.velocity = Vec2::new(-10.0, 5.0);
        assert!(bounce_off_walls(&mut ob, Vec2::new(400.0, 300.0)));
        assert_relative_eq!(ob.velocity.x, 8.0, epsilon = 1e-5);
        assert_eq!(ob.position.x, 20.0);
        assert_eq!(ob.velocity.y, 5.0);
    }

    #[test]
    fn no_bounce_inside() {
        let mut ob = obstacle_at(200.0, 150.0);
        ob.velocity = Vec2::new(-10.0, 5.0);
        assert!(!bounce_off_walls(&mut ob, Vec2::new(400.0, 300.0)));
        assert_eq!(ob.velocity, Vec2::new(-10.0, 5.0));
    }

    #[test]
    fn perturbation_respects_speed_ceiling() {
        let mut rng = subsystem_rng(Some(12), STREAM_OBSTACLES);
        let mut ob = obstacle_at(200.0, 150.0);
        ob.velocity = Vec2::new(49.0, 0.0);
        for _ in 0..2000 {
            perturb_velocity(&mut ob, &mut rng);
            assert!(ob.velocity.length() <= MAX_OBSTACLE_SPEED + 1e-3);
        }
    }

    #[test]
    fn spin_kick_is_clamped() {
        let mut rng = subsystem_rng(Some(13), STREAM_OBSTACLES);
        let mut ob = obstacle_at(200.0, 150.0);
        ob.angular_velocity = 2.9;
        for _ in 0..500 {
            kick_spin(&mut ob, &mut rng);
            assert!(ob.angular_velocity.abs() <= MAX_ANGULAR_SPEED);
        }
    }
}
