use rand::Rng;

use crate::core::rng::uniform;
use crate::core::{Rgba, Vec2};

pub const OBSTACLE_SPAWN_MARGIN: f32 = 100.0;
pub const OBSTACLE_SIZE_MIN: f32 = 30.0;
pub const OBSTACLE_SIZE_MAX: f32 = 80.0;
pub const OBSTACLE_SPAWN_SPEED: f32 = 30.0;
pub const OBSTACLE_SPAWN_SPIN: f32 = 2.0;
pub const OBSTACLE_ALPHA: u8 = 180;

/// Rotated rectangle that particles bounce off
#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    /// Rectangle center
    pub position: Vec2,
    pub velocity: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Radians, kept in [0, 2π)
    pub rotation: f32,
    /// Radians per second
    pub angular_velocity: f32,
    pub color: Rgba,
}

impl Obstacle {
    /// Stationary, unrotated obstacle with random color and spin.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zero(),
            size,
            rotation: 0.0,
            angular_velocity: uniform(rng, -OBSTACLE_SPAWN_SPIN, OBSTACLE_SPAWN_SPIN),
            color: Rgba::random(rng, 50, 255, OBSTACLE_ALPHA),
        }
    }

    /// Random obstacle inside `bounds`, already moving.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let w = uniform(rng, OBSTACLE_SIZE_MIN, OBSTACLE_SIZE_MAX);
        let h = uniform(rng, OBSTACLE_SIZE_MIN, OBSTACLE_SIZE_MAX);
        let position = random_center(rng, bounds);
        let mut obstacle = Self::new(rng, position, Vec2::new(w, h));
        obstacle.velocity = random_velocity(rng);
        obstacle
    }

    /// Re-place and relaunch; rotation goes back to zero.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2) {
        self.position = random_center(rng, bounds);
        self.velocity = random_velocity(rng);
        self.rotation = 0.0;
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// World point into the obstacle's rotation-compensated frame.
    #[inline]
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        (point - self.position).rotate(-self.rotation)
    }

    /// Local point back to world space.
    #[inline]
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        self.position + local.rotate(self.rotation)
    }
}

fn random_center<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Vec2 {
    Vec2::new(
        uniform(rng, OBSTACLE_SPAWN_MARGIN, bounds.x - OBSTACLE_SPAWN_MARGIN),
        uniform(rng, OBSTACLE_SPAWN_MARGIN, bounds.y - OBSTACLE_SPAWN_MARGIN),
    )
}

fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(
        uniform(rng, -OBSTACLE_SPAWN_SPEED, OBSTACLE_SPAWN_SPEED),
        uniform(rng, -OBSTACLE_SPAWN_SPEED, OBSTACLE_SPAWN_SPEED),
    )
}
