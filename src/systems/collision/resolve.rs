use crate::core::Vec2;
use crate::domain::{Obstacle, Particle};
use crate::systems::integrator::clamp_to_bounds;

use super::detect::{check_point_collision, check_sweep_collision};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Velocity kept after pushing a resting overlap out (suppresses jitter)
pub const RESTING_DAMPING: f32 = 0.7;
/// Velocity kept after a sweep hit
pub const SWEEP_DAMPING: f32 = 0.8;

/// Mirror `velocity` about `normal`: `v - 2(v·n)n`.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity.reflect(normal)
}

/// Resolve one particle against every obstacle, in order.
///
/// Each obstacle gets a resting-overlap test first and, only if that misses, a
/// sweep test from the tick's start position to the current one. Hits mutate
/// the particle immediately, so later obstacles see the corrected state.
/// Returns true if any obstacle was hit.
pub fn handle_collision(particle: &mut Particle, obstacles: &[Obstacle]) -> bool {
    let start = particle.prev_position;
    let radius = particle.radius;
    let mut any_collision = false;

    for obstacle in obstacles {
        let resting = check_point_collision(particle.position, obstacle, radius);

        if resting.has_collision {
            let n = resting.collision_normal;
            particle.position += n * resting.penetration_depth;
            particle.velocity = reflect_velocity(particle.velocity, n) * RESTING_DAMPING;
            any_collision = true;
            continue;
        }

        let sweep = check_sweep_collision(start, particle.position, obstacle, radius);
        if sweep.has_collision {
            let n = sweep.collision_normal;
            particle.position = sweep.collision_point - n * radius;
            particle.velocity = reflect_velocity(particle.velocity, n) * SWEEP_DAMPING;
            any_collision = true;
        }
    }

    any_collision
}

/// Run [`handle_collision`] for every particle. Returns how many collided.
///
/// Each particle is clamped back into `[radius, bound - radius]` after its
/// pass, since a push-out can cross a wall when an obstacle is parked
/// against it. With the `parallel` feature the particles are split across
/// the rayon pool; obstacles are only read, so each particle's pass is
/// independent.
pub fn resolve_all(particles: &mut [Particle], obstacles: &[Obstacle], bounds: Vec2) -> usize {
    if obstacles.is_empty() {
        return 0;
    }

    #[cfg(feature = "parallel")]
    {
        particles
            .par_iter_mut()
            .map(|p| resolve_within(p, obstacles, bounds) as usize)
            .sum()
    }

    #[cfg(not(feature = "parallel"))]
    {
        particles
            .iter_mut()
            .map(|p| resolve_within(p, obstacles, bounds) as usize)
            .sum()
    }
}

#[inline]
fn resolve_within(particle: &mut Particle, obstacles: &[Obstacle], bounds: Vec2) -> bool {
    let hit = handle_collision(particle, obstacles);
    if hit {
        clamp_to_bounds(particle, bounds);
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{subsystem_rng, STREAM_OBSTACLES};
    use approx::assert_relative_eq;

    fn square(center: Vec2, edge: f32) -> Obstacle {
        let mut rng = subsystem_rng(Some(6), STREAM_OBSTACLES);
        Obstacle::new(&mut rng, center, Vec2::new(edge, edge))
    }

    #[test]
    fn reflect_velocity_flips_x() {
        assert_eq!(
            reflect_velocity(Vec2::new(-5.0, 3.0), Vec2::new(1.0, 0.0)),
            Vec2::new(5.0, 3.0)
        );
    }

    #[test]
    fn resting_overlap_pushes_out_and_damps() {
        let obstacles = [square(Vec2::new(100.0, 100.0), 40.0)];
        let mut p = Particle::new(Vec2::new(119.0, 100.0), 0.0);
        p.velocity = Vec2::new(-10.0, 2.0);

        assert!(handle_collision(&mut p, &obstacles));
        assert_relative_eq!(p.position.x, 120.0, epsilon = 1e-4);
        assert_relative_eq!(p.velocity.x, 10.0 * RESTING_DAMPING, epsilon = 1e-5);
        assert_relative_eq!(p.velocity.y, 2.0 * RESTING_DAMPING, epsilon = 1e-5);
    }

    #[test]
    fn resting_test_wins_for_points_already_inside() {
        let obstacles = [square(Vec2::new(100.0, 100.0), 40.0)];
        let mut p = Particle::new(Vec2::new(85.0, 100.0), 0.0);
        p.prev_position = Vec2::new(70.0, 100.0);
        p.velocity = Vec2::new(15.0, 0.0);

        assert!(handle_collision(&mut p, &obstacles));
        assert_relative_eq!(p.position.x, 80.0, epsilon = 1e-4);
        assert_relative_eq!(p.velocity.x, -15.0 * RESTING_DAMPING, epsilon = 1e-5);
    }

    #[test]
    fn pass_through_uses_sweep_response() {
        let obstacles = [square(Vec2::new(100.0, 100.0), 10.0)];
        let mut p = Particle::new(Vec2::new(120.0, 100.0), 1.0);
        p.prev_position = Vec2::new(80.0, 100.0);
        p.velocity = Vec2::new(40.0, 0.0);

        assert!(handle_collision(&mut p, &obstacles));
        // Midpoint (100, 100) ties on both axes, so the y normal (0, -1) is used
        assert_relative_eq!(p.position.x, 100.0, epsilon = 1e-4);
        assert_relative_eq!(p.position.y, 101.0, epsilon = 1e-4);
        assert_relative_eq!(p.velocity.x, 40.0 * SWEEP_DAMPING, epsilon = 1e-4);
    }

    #[test]
    fn clear_miss_leaves_particle_alone() {
        let obstacles = [square(Vec2::new(100.0, 100.0), 10.0)];
        let mut p = Particle::new(Vec2::new(200.0, 200.0), 1.0);
        p.prev_position = Vec2::new(190.0, 200.0);
        assert!(!handle_collision(&mut p, &obstacles));
        assert_eq!(p.position, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn resolve_all_counts_hits() {
        let obstacles = [square(Vec2::new(100.0, 100.0), 40.0)];
        let mut particles = vec![
            Particle::new(Vec2::new(110.0, 100.0), 1.0),
            Particle::new(Vec2::new(300.0, 300.0), 1.0),
            Particle::new(Vec2::new(100.0, 85.0), 1.0),
        ];
        let bounds = Vec2::new(400.0, 300.0);
        assert_eq!(resolve_all(&mut particles, &obstacles, bounds), 2);
        assert_eq!(resolve_all(&mut particles, &[], bounds), 0);
    }

    #[test]
    fn push_out_against_a_wall_stays_in_bounds() {
        // obstacle flush with the left wall; the x push-out would land at -radius
        let obstacles = [square(Vec2::new(20.0, 150.0), 40.0)];
        let mut particles = vec![Particle::new(Vec2::new(2.5, 150.0), 2.0)];
        particles[0].prev_position = particles[0].position;

        assert_eq!(resolve_all(&mut particles, &obstacles, Vec2::new(400.0, 300.0)), 1);
        let p = particles[0];
        assert!(p.position.x >= p.radius, "x={} radius={}", p.position.x, p.radius);
        assert!(p.position.y >= p.radius && p.position.y <= 300.0 - p.radius);
    }
}
