use tracing::debug;

use super::SimulationCore;

pub(super) fn reset(world: &mut SimulationCore) {
    world.integrator.respawn(&mut world.particles);
    world.obstacles.reset();
    world.frame = 0;
    world.last_collisions = 0;
    world.fps.clear();
    world.perf_stats.reset();
    debug!(
        particles = world.particles.len(),
        obstacles = world.obstacles.obstacle_count(),
        "simulation reset"
    );
}

pub(super) fn add_obstacle(world: &mut SimulationCore, x: f32, y: f32, w: f32, h: f32) -> usize {
    let index = world.obstacles.add_obstacle(x, y, w, h);
    world.config.obstacle_count = world.obstacles.obstacle_count() as u32;
    index
}
