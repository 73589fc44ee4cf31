//! Collision Resolver - particles vs. rotated rectangular obstacles
//!
//! Two phases per obstacle:
//! 1. Resting overlap: minimum-penetration push-out in the obstacle's local frame
//! 2. Sweep: outside-to-inside crossing during the tick, midpoint contact

mod types;
mod detect;
mod resolve;

pub use detect::{check_point_collision, check_sweep_collision};
pub use resolve::{handle_collision, reflect_velocity, resolve_all, RESTING_DAMPING, SWEEP_DAMPING};
pub use types::CollisionInfo;
