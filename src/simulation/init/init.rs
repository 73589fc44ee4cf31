use tracing::info;

use crate::core::rng::{subsystem_rng, STREAM_MATRIX, STREAM_OBSTACLES, STREAM_PARTICLES};
use crate::core::Vec2;
use crate::domain::SimulationConfig;
use crate::systems::integrator::ParticleIntegrator;
use crate::systems::matrix::{simd_backend_name, MatrixKernel, MatrixWorkload};
use crate::systems::obstacles::ObstacleSystem;

use super::fps::FpsCounter;
use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::SimulationCore;

/// Build a world from an already validated config.
pub(super) fn create_simulation_core(config: SimulationConfig) -> SimulationCore {
    let bounds = Vec2::new(config.width as f32, config.height as f32);

    let mut integrator =
        ParticleIntegrator::new(subsystem_rng(config.seed, STREAM_PARTICLES), bounds);
    let particles = integrator.spawn(config.particle_count as usize);

    let obstacles = ObstacleSystem::new(
        subsystem_rng(config.seed, STREAM_OBSTACLES),
        bounds,
        config.obstacle_count as usize,
    );

    let kernel = MatrixKernel::new(config.matrix_strategy).with_naive_stress(config.naive_stress);
    let mut matrix_rng = subsystem_rng(config.seed, STREAM_MATRIX);
    let matrix = MatrixWorkload::new(config.matrix_size as usize, kernel, &mut matrix_rng);

    info!(
        width = config.width,
        height = config.height,
        particles = particles.len(),
        obstacles = obstacles.obstacle_count(),
        matrix_size = config.matrix_size,
        strategy = %config.matrix_strategy,
        simd = simd_backend_name(),
        seeded = config.seed.is_some(),
        "simulation created"
    );

    let particle_floats = particles.len() * super::PARTICLE_STRIDE;
    let obstacle_floats = obstacles.obstacle_count() * super::OBSTACLE_STRIDE;

    SimulationCore {
        bounds,
        particles,
        integrator,
        obstacles,
        matrix,
        matrix_load_enabled: config.matrix_load,
        frame: 0,
        last_collisions: 0,
        fps: FpsCounter::new(),
        render: RenderBuffers {
            particles: Vec::with_capacity(particle_floats),
            obstacles: Vec::with_capacity(obstacle_floats),
        },
        perf_enabled: config.perf_enabled,
        perf_stats: PerfStats::default(),
        config,
    }
}
