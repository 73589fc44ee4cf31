use approx::assert_relative_eq;
use brownian_engine::core::rng::{subsystem_rng, STREAM_OBSTACLES};
use brownian_engine::systems::collision::{
    check_point_collision, handle_collision, reflect_velocity, resolve_all, RESTING_DAMPING,
};
use brownian_engine::{Obstacle, Particle, Vec2};

fn square(center: Vec2, size: f32) -> Obstacle {
    let mut rng = subsystem_rng(Some(3), STREAM_OBSTACLES);
    Obstacle::new(&mut rng, center, Vec2::new(size, size))
}

#[test]
fn reflect_against_wall_normal() {
    let v = reflect_velocity(Vec2::new(-5.0, 3.0), Vec2::new(1.0, 0.0));
    assert_relative_eq!(v.x, 5.0);
    assert_relative_eq!(v.y, 3.0);
}

#[test]
fn point_near_right_face_collides_along_x() {
    let ob = square(Vec2::new(100.0, 100.0), 40.0);
    let info = check_point_collision(Vec2::new(119.0, 100.0), &ob, 0.0);
    assert!(info.has_collision);
    assert_relative_eq!(info.collision_normal.x.abs(), 1.0);
    assert_relative_eq!(info.collision_normal.y, 0.0);
    assert_relative_eq!(info.penetration_depth, 1.0, epsilon = 1e-4);
}

#[test]
fn rotated_obstacle_uses_local_frame() {
    let mut ob = square(Vec2::new(100.0, 100.0), 40.0);
    ob.size = Vec2::new(80.0, 10.0);
    ob.rotation = std::f32::consts::FRAC_PI_2;
    // the long axis now runs vertically
    assert!(check_point_collision(Vec2::new(100.0, 135.0), &ob, 0.0).has_collision);
    assert!(!check_point_collision(Vec2::new(135.0, 100.0), &ob, 0.0).has_collision);
}

#[test]
fn resting_overlap_damps_reflected_velocity() {
    let ob = square(Vec2::new(100.0, 100.0), 40.0);
    let mut p = Particle::new(Vec2::new(119.0, 100.0), 0.0);
    p.prev_position = p.position;
    p.velocity = Vec2::new(-10.0, 0.0);
    assert!(handle_collision(&mut p, &[ob]));
    assert_relative_eq!(p.velocity.x, 10.0 * RESTING_DAMPING, epsilon = 1e-4);
    assert_relative_eq!(p.position.x, 120.0, epsilon = 1e-4);
}

#[test]
fn resolve_all_counts_colliding_particles() {
    let ob = square(Vec2::new(100.0, 100.0), 40.0);
    let mut particles: Vec<Particle> = [Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0), Vec2::new(90.0, 110.0)]
        .into_iter()
        .map(|pos| {
            let mut p = Particle::new(pos, 1.0);
            p.prev_position = pos;
            p
        })
        .collect();
    let bounds = Vec2::new(400.0, 400.0);
    assert_eq!(resolve_all(&mut particles, &[ob], bounds), 2);
    assert_eq!(particles[1].position, Vec2::new(300.0, 300.0));
    assert_eq!(resolve_all(&mut particles, &[], bounds), 0);
}
