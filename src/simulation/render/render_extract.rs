use super::SimulationCore;

/// f32 slots per particle: `x, y, radius, rgba_bits`
pub const PARTICLE_STRIDE: usize = 4;
/// f32 slots per obstacle: `x, y, w, h, rotation, rgba_bits`
pub const OBSTACLE_STRIDE: usize = 6;

// Colors are stored bit-for-bit (0xAABBGGRR); read them back through a Uint32Array view.

pub(super) fn extract_particles(world: &mut SimulationCore) -> usize {
    let buf = &mut world.render.particles;
    buf.clear();
    buf.reserve(world.particles.len() * PARTICLE_STRIDE);
    for p in &world.particles {
        buf.extend_from_slice(&[
            p.position.x,
            p.position.y,
            p.radius,
            f32::from_bits(p.color.to_u32()),
        ]);
    }
    world.particles.len()
}

pub(super) fn extract_obstacles(world: &mut SimulationCore) -> usize {
    let obstacles = world.obstacles.obstacles();
    let buf = &mut world.render.obstacles;
    buf.clear();
    buf.reserve(obstacles.len() * OBSTACLE_STRIDE);
    for ob in obstacles {
        buf.extend_from_slice(&[
            ob.position.x,
            ob.position.y,
            ob.size.x,
            ob.size.y,
            ob.rotation,
            f32::from_bits(ob.color.to_u32()),
        ]);
    }
    obstacles.len()
}
