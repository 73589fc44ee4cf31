use rand::rngs::StdRng;
use rand::Rng;

use crate::core::color::shift_channel;
use crate::core::Vec2;
use crate::domain::particle::PARTICLE_COLOR_MAX;
use crate::domain::Particle;

/// Noise impulses are drawn from U(-NOISE_AMPLITUDE, NOISE_AMPLITUDE)
pub const NOISE_AMPLITUDE: f32 = 50.0;
/// Extra gain applied to the dt-scaled noise
pub const NOISE_GAIN: f32 = 2.0;
/// Per-tick velocity multiplier (drag)
pub const DAMPING: f32 = 0.992;
/// Position advances by velocity * dt * MOTION_SCALE
pub const MOTION_SCALE: f32 = 40.0;
/// Fraction of velocity kept (sign flipped) after a wall hit
pub const WALL_RESTITUTION: f32 = 0.4;
pub const COLOR_DRIFT_CHANCE: f32 = 0.02;
pub const COLOR_DRIFT_STEP: i32 = 10;

/// Brownian motion integrator. Owns its own random stream.
pub struct ParticleIntegrator {
    rng: StdRng,
    bounds: Vec2,
}

impl ParticleIntegrator {
    pub fn new(rng: StdRng, bounds: Vec2) -> Self {
        Self { rng, bounds }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Create `count` randomly placed particles.
    pub fn spawn(&mut self, count: usize) -> Vec<Particle> {
        (0..count)
            .map(|_| Particle::spawn(&mut self.rng, self.bounds))
            .collect()
    }

    /// Re-place every particle and stop it.
    pub fn respawn(&mut self, particles: &mut [Particle]) {
        for p in particles.iter_mut() {
            p.respawn(&mut self.rng, self.bounds);
        }
    }

    /// Advance all particles by `dt` seconds.
    pub fn update(&mut self, particles: &mut [Particle], dt: f32) {
        for p in particles.iter_mut() {
            self.step_particle(p, dt);
        }
    }

    fn step_particle(&mut self, p: &mut Particle, dt: f32) {
        p.prev_position = p.position;

        // Brownian kick
        let noise = Vec2::new(
            self.rng.random_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE),
            self.rng.random_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE),
        );
        p.velocity += noise * (dt * NOISE_GAIN);

        p.velocity *= DAMPING;
        p.position += p.velocity * (dt * MOTION_SCALE);

        reflect_off_walls(p, self.bounds);

        if self.rng.random::<f32>() > 1.0 - COLOR_DRIFT_CHANCE {
            self.drift_color(p);
        }
    }

    fn drift_color(&mut self, p: &mut Particle) {
        let step = COLOR_DRIFT_STEP;
        p.color.r = shift_channel(p.color.r, self.rng.random_range(-step..=step), PARTICLE_COLOR_MAX);
        p.color.g = shift_channel(p.color.g, self.rng.random_range(-step..=step), PARTICLE_COLOR_MAX);
        p.color.b = shift_channel(p.color.b, self.rng.random_range(-step..=step), PARTICLE_COLOR_MAX);
    }
}

/// Keep a particle inside `[radius, bound - radius]` on both axes.
///
/// Touching or crossing a wall flips that velocity component and scales it by
/// [`WALL_RESTITUTION`]; the position is clamped back inside.
pub fn reflect_off_walls(p: &mut Particle, bounds: Vec2) {
    let r = p.radius;

    if p.position.x <= r || p.position.x >= bounds.x - r {
        p.velocity.x *= -WALL_RESTITUTION;
        p.position.x = clamp_axis(p.position.x, r, bounds.x - r);
    }

    if p.position.y <= r || p.position.y >= bounds.y - r {
        p.velocity.y *= -WALL_RESTITUTION;
        p.position.y = clamp_axis(p.position.y, r, bounds.y - r);
    }
}

/// Clamp a particle into `[radius, bound - radius]` without touching its velocity.
///
/// Used after collision push-outs, which can shove a particle past a wall when
/// an obstacle sits against it.
pub fn clamp_to_bounds(p: &mut Particle, bounds: Vec2) {
    let r = p.radius;
    p.position.x = clamp_axis(p.position.x, r, bounds.x - r);
    p.position.y = clamp_axis(p.position.y, r, bounds.y - r);
}

/// `max(lo, min(v, hi))`; a bound narrower than the particle pins it to `lo`.
#[inline]
fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    lo.max(v.min(hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{subsystem_rng, STREAM_PARTICLES};
    use approx::assert_relative_eq;

    fn integrator(seed: u64) -> ParticleIntegrator {
        ParticleIntegrator::new(
            subsystem_rng(Some(seed), STREAM_PARTICLES),
            Vec2::new(400.0, 300.0),
        )
    }

    #[test]
    fn left_wall_bounce_attenuates_and_clamps() {
        let mut p = Particle::new(Vec2::new(2.0 - 0.01, 150.0), 2.0);
        p.velocity = Vec2::new(-10.0, 0.0);
        reflect_off_walls(&mut p, Vec2::new(400.0, 300.0));
        assert_relative_eq!(p.velocity.x, 4.0, epsilon = 1e-5);
        assert_eq!(p.position.x, 2.0);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn far_wall_bounce_on_y() {
        let mut p = Particle::new(Vec2::new(200.0, 310.0), 3.0);
        p.velocity = Vec2::new(1.0, 25.0);
        reflect_off_walls(&mut p, Vec2::new(400.0, 300.0));
        assert_relative_eq!(p.velocity.y, -10.0, epsilon = 1e-5);
        assert_eq!(p.position.y, 297.0);
        assert_eq!(p.velocity.x, 1.0);
    }

    #[test]
    fn interior_particle_is_untouched_by_walls() {
        let mut p = Particle::new(Vec2::new(200.0, 150.0), 2.0);
        p.velocity = Vec2::new(-10.0, 5.0);
        reflect_off_walls(&mut p, Vec2::new(400.0, 300.0));
        assert_eq!(p.velocity, Vec2::new(-10.0, 5.0));
    }

    #[test]
    fn clamp_to_bounds_keeps_velocity() {
        let mut p = Particle::new(Vec2::new(-3.0, 305.0), 2.0);
        p.velocity = Vec2::new(-7.0, 4.0);
        clamp_to_bounds(&mut p, Vec2::new(400.0, 300.0));
        assert_eq!(p.position, Vec2::new(2.0, 298.0));
        assert_eq!(p.velocity, Vec2::new(-7.0, 4.0));
    }

    #[test]
    fn update_keeps_particles_in_bounds() {
        let mut integ = integrator(4);
        let mut particles = integ.spawn(200);
        for _ in 0..120 {
            integ.update(&mut particles, 1.0 / 60.0);
            for p in &particles {
                assert!(p.position.x >= p.radius && p.position.x <= 400.0 - p.radius);
                assert!(p.position.y >= p.radius && p.position.y <= 300.0 - p.radius);
                assert!(p.color.r <= PARTICLE_COLOR_MAX);
            }
        }
    }

    #[test]
    fn update_records_previous_position() {
        let mut integ = integrator(8);
        let mut particles = integ.spawn(10);
        let before: Vec<Vec2> = particles.iter().map(|p| p.position).collect();
        integ.update(&mut particles, 0.016);
        for (p, b) in particles.iter().zip(before) {
            assert_eq!(p.prev_position, b);
        }
    }

    #[test]
    fn zero_dt_only_damps() {
        let mut integ = integrator(9);
        let mut p = Particle::new(Vec2::new(200.0, 150.0), 2.0);
        p.velocity = Vec2::new(10.0, -10.0);
        integ.update(std::slice::from_mut(&mut p), 0.0);
        assert_relative_eq!(p.velocity.x, 10.0 * DAMPING, epsilon = 1e-5);
        assert_eq!(p.position, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn respawn_stops_and_replaces() {
        let mut integ = integrator(10);
        let mut particles = integ.spawn(50);
        integ.update(&mut particles, 0.05);
        integ.respawn(&mut particles);
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert_eq!(p.velocity, Vec2::zero());
            assert!(p.position.x >= 10.0 && p.position.x <= 390.0);
            assert!(p.position.y >= 10.0 && p.position.y <= 290.0);
        }
    }
}
