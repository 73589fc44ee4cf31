//! Obstacle Dynamics - rotating, drifting rectangles that bounce off the walls

mod dynamics;
mod system;

pub use dynamics::{
    wrap_angle, MAX_ANGULAR_SPEED, MAX_OBSTACLE_SPEED, OBSTACLE_RESTITUTION, PERTURB_STEP,
    PERTURB_THRESHOLD, SPIN_KICK,
};
pub use system::ObstacleSystem;
