//! Simulation - Brownian particles, moving obstacles and a matrix load
//!
//! `SimulationCore` only orchestrates:
//! - particle motion lives in systems/integrator
//! - obstacle motion lives in systems/obstacles
//! - particle vs. obstacle response lives in systems/collision
//! - the per-tick CPU load lives in systems/matrix
//!
//! One tick: matrix load → integrate particles → move obstacles → resolve collisions.

use crate::core::Vec2;
use crate::domain::{Obstacle, Particle, SimulationConfig};
use crate::error::Result;
use crate::systems::integrator::ParticleIntegrator;
use crate::systems::matrix::{MatrixStrategy, MatrixWorkload};
use crate::systems::obstacles::ObstacleSystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "perf/fps.rs"]
mod fps;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use fps::{FpsCounter, FPS_SAMPLES};
pub use perf_stats::PerfStats;
pub use render_extract::{OBSTACLE_STRIDE, PARTICLE_STRIDE};

use perf_timer::PerfTimer;

pub(crate) struct RenderBuffers {
    /// `[x, y, radius, rgba_bits]` per particle
    pub(crate) particles: Vec<f32>,
    /// `[x, y, w, h, rotation, rgba_bits]` per obstacle
    pub(crate) obstacles: Vec<f32>,
}

/// The simulation world
pub struct SimulationCore {
    config: SimulationConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
    integrator: ParticleIntegrator,
    obstacles: ObstacleSystem,
    matrix: MatrixWorkload,
    matrix_load_enabled: bool,
    frame: u64,
    last_collisions: u32,
    fps: FpsCounter,

    render: RenderBuffers,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Validate `config` and build every subsystem from it.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(init::create_simulation_core(config))
    }

    /// Default config with the given window and counts.
    pub fn with_dimensions(width: u32, height: u32, particles: u32, obstacles: u32) -> Result<Self> {
        Self::new(SimulationConfig::new(width, height, particles, obstacles))
    }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    pub fn width(&self) -> u32 { self.config.width }

    pub fn height(&self) -> u32 { self.config.height }

    pub fn bounds(&self) -> Vec2 { self.bounds }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn obstacle_count(&self) -> usize { self.obstacles.obstacle_count() }

    /// Read-only view of every particle
    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Read-only view of every obstacle
    pub fn obstacles(&self) -> &[Obstacle] { self.obstacles.obstacles() }

    pub fn matrix(&self) -> &MatrixWorkload { &self.matrix }

    /// Particles that hit at least one obstacle during the last step
    pub fn last_collision_count(&self) -> u32 { self.last_collisions }

    // === Settings ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn perf_enabled(&self) -> bool { self.perf_enabled }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_matrix_strategy(&mut self, strategy: MatrixStrategy) {
        settings::set_matrix_strategy(self, strategy);
    }

    pub fn matrix_strategy(&self) -> MatrixStrategy {
        self.matrix.kernel().strategy()
    }

    pub fn set_matrix_load_enabled(&mut self, enabled: bool) {
        settings::set_matrix_load_enabled(self, enabled);
    }

    pub fn matrix_load_enabled(&self) -> bool { self.matrix_load_enabled }

    /// Sliding-window frame rate over recent `step` calls
    pub fn fps(&self) -> f32 { self.fps.current_fps() }

    // === Commands ===

    /// Re-randomize every particle and obstacle; counts stay the same.
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Add a stationary obstacle centered at `(x, y)`. Returns its index.
    pub fn add_obstacle(&mut self, x: f32, y: f32, w: f32, h: f32) -> usize {
        commands::add_obstacle(self, x, y, w, h)
    }

    /// Resolve one particle against the current obstacles.
    pub fn handle_collision(&self, particle: &mut Particle) -> bool {
        self.obstacles.handle_particle_collision(particle)
    }

    // === Step ===

    /// Advance the world by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    /// Run the matrix multiply once, outside of `step`. Returns the product checksum.
    pub fn run_matrix_load(&mut self) -> f64 {
        step::run_matrix_load(self)
    }

    pub fn matrix_checksum(&self) -> f64 {
        self.matrix.checksum()
    }

    // === Render extraction ===

    /// Refill the particle render buffer. Returns the particle count.
    pub fn extract_particles(&mut self) -> usize {
        render_extract::extract_particles(self)
    }

    pub fn particles_render_ptr(&self) -> *const f32 {
        self.render.particles.as_ptr()
    }

    pub fn particles_render_len(&self) -> usize {
        self.render.particles.len()
    }

    /// Refill the obstacle render buffer. Returns the obstacle count.
    pub fn extract_obstacles(&mut self) -> usize {
        render_extract::extract_obstacles(self)
    }

    pub fn obstacles_render_ptr(&self) -> *const f32 {
        self.render.obstacles.as_ptr()
    }

    pub fn obstacles_render_len(&self) -> usize {
        self.render.obstacles.len()
    }

    pub fn particles_render_buffer(&self) -> &[f32] {
        &self.render.particles
    }

    pub fn obstacles_render_buffer(&self) -> &[f32] {
        &self.render.obstacles
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
