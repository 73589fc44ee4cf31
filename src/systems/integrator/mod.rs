//! Particle Integrator - Brownian noise, drag, wall bounces, color drift

#[allow(clippy::module_inception)]
mod integrator;

pub use integrator::{
    clamp_to_bounds, reflect_off_walls, ParticleIntegrator, COLOR_DRIFT_CHANCE, COLOR_DRIFT_STEP, DAMPING,
    MOTION_SCALE, NOISE_AMPLITUDE, NOISE_GAIN, WALL_RESTITUTION,
};
