use crate::systems::collision::resolve_all;

use super::perf_timer::now_ms;
use super::{PerfTimer, SimulationCore};

/// Negative and non-finite steps do nothing to the kinematics.
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

pub(super) fn step(world: &mut SimulationCore, dt: f32) {
    let dt = sanitize_dt(dt);
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === Matrix load (no data dependency on the particles) ===
    if world.matrix_load_enabled {
        let t0 = perf_on.then(PerfTimer::start);
        world.matrix.run();
        if let Some(t0) = t0 {
            world.perf_stats.matrix_ms = t0.elapsed_ms();
            world.perf_stats.matrix_checksum = world.matrix.checksum();
        }
    }

    // === Particles ===
    let t0 = perf_on.then(PerfTimer::start);
    world.integrator.update(&mut world.particles, dt);
    if let Some(t0) = t0 {
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    }

    // === Obstacles ===
    let t0 = perf_on.then(PerfTimer::start);
    world.obstacles.update(dt);
    if let Some(t0) = t0 {
        world.perf_stats.obstacles_ms = t0.elapsed_ms();
    }

    // === Collisions: every particle against the obstacles' new poses ===
    let t0 = perf_on.then(PerfTimer::start);
    let collided = resolve_all(&mut world.particles, world.obstacles.obstacles(), world.bounds);
    world.last_collisions = collided as u32;
    if let Some(t0) = t0 {
        world.perf_stats.collisions_ms = t0.elapsed_ms();
    }

    world.frame += 1;
    world.fps.record_frame(now_ms());

    if let Some(start) = step_start {
        let stats = &mut world.perf_stats;
        stats.step_ms = start.elapsed_ms();
        stats.collisions = world.last_collisions;
        stats.particle_count = world.particles.len() as u32;
        stats.obstacle_count = world.obstacles.obstacle_count() as u32;
        stats.matrix_size = world.matrix.size() as u32;
        stats.fps = world.fps.current_fps();
    }
}

pub(super) fn run_matrix_load(world: &mut SimulationCore) -> f64 {
    world.matrix.run().checksum()
}
