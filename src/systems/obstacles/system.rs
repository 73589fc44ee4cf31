use rand::rngs::StdRng;
use tracing::debug;

use crate::core::Vec2;
use crate::domain::{Obstacle, Particle};
use crate::systems::collision::handle_collision;

use super::dynamics::{advance, bounce_off_walls, kick_spin, perturb_velocity};

/// Owns every obstacle plus the random stream that drives them
pub struct ObstacleSystem {
    obstacles: Vec<Obstacle>,
    rng: StdRng,
    bounds: Vec2,
}

impl ObstacleSystem {
    pub fn new(mut rng: StdRng, bounds: Vec2, count: usize) -> Self {
        let obstacles = (0..count)
            .map(|_| Obstacle::spawn(&mut rng, bounds))
            .collect();
        Self { obstacles, rng, bounds }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Motion, random drift, then wall bounces.
    pub fn update(&mut self, dt: f32) {
        for ob in self.obstacles.iter_mut() {
            advance(ob, dt);
            perturb_velocity(ob, &mut self.rng);
        }

        for ob in self.obstacles.iter_mut() {
            if bounce_off_walls(ob, self.bounds) {
                kick_spin(ob, &mut self.rng);
            }
        }
    }

    /// Resolve one particle against all obstacles (see [`handle_collision`]).
    pub fn handle_particle_collision(&self, particle: &mut Particle) -> bool {
        handle_collision(particle, &self.obstacles)
    }

    /// Append a stationary, unrotated obstacle. Returns its index.
    pub fn add_obstacle(&mut self, x: f32, y: f32, w: f32, h: f32) -> usize {
        let ob = Obstacle::new(&mut self.rng, Vec2::new(x, y), Vec2::new(w.max(0.0), h.max(0.0)));
        self.obstacles.push(ob);
        debug!(x, y, w, h, count = self.obstacles.len(), "obstacle added");
        self.obstacles.len() - 1
    }

    /// Re-place and relaunch every obstacle; rotation goes back to zero.
    pub fn reset(&mut self) {
        for ob in self.obstacles.iter_mut() {
            ob.respawn(&mut self.rng, self.bounds);
        }
    }
}
