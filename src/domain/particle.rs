use rand::Rng;

use crate::core::rng::uniform;
use crate::core::{Rgba, Vec2};

/// Distance kept from every wall when particles are (re)placed.
pub const PARTICLE_SPAWN_MARGIN: f32 = 10.0;
pub const PARTICLE_RADIUS_MIN: f32 = 1.5;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
pub const PARTICLE_SPAWN_SPEED: f32 = 20.0;
/// Upper bound of every RGB channel (dark colors on a light background)
pub const PARTICLE_COLOR_MAX: u8 = 200;
pub const PARTICLE_ALPHA: u8 = 220;

/// A Brownian particle
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Position at the start of the current tick (sweep start)
    pub prev_position: Vec2,
    /// Fixed at creation
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    /// Particle at rest with a default color.
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::zero(),
            prev_position: position,
            radius,
            color: Rgba::new(0, 0, 0, PARTICLE_ALPHA),
        }
    }

    /// Random placement inside `bounds` (width, height).
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let position = Vec2::new(
            uniform(rng, PARTICLE_SPAWN_MARGIN, bounds.x - PARTICLE_SPAWN_MARGIN),
            uniform(rng, PARTICLE_SPAWN_MARGIN, bounds.y - PARTICLE_SPAWN_MARGIN),
        );
        let radius = uniform(rng, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX);
        let velocity = Vec2::new(
            uniform(rng, -PARTICLE_SPAWN_SPEED, PARTICLE_SPAWN_SPEED),
            uniform(rng, -PARTICLE_SPAWN_SPEED, PARTICLE_SPAWN_SPEED),
        );
        let color = Rgba::random(rng, 0, PARTICLE_COLOR_MAX, PARTICLE_ALPHA);

        Self {
            position,
            velocity,
            prev_position: position,
            radius,
            color,
        }
    }

    /// Re-place the particle and stop it. Radius and color are kept.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2) {
        self.position = Vec2::new(
            uniform(rng, PARTICLE_SPAWN_MARGIN, bounds.x - PARTICLE_SPAWN_MARGIN),
            uniform(rng, PARTICLE_SPAWN_MARGIN, bounds.y - PARTICLE_SPAWN_MARGIN),
        );
        self.prev_position = self.position;
        self.velocity = Vec2::zero();
    }
}
