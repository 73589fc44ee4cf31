//! Simulation systems, leaves first:
//! matrix kernel, particle integrator, obstacle dynamics, collision resolver.

pub mod collision;
pub mod integrator;
pub mod matrix;
pub mod obstacles;
