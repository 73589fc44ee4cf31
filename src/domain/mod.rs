//! Domain entities and host-supplied configuration.

pub mod config;
pub mod obstacle;
pub mod particle;

pub use config::SimulationConfig;
pub use obstacle::Obstacle;
pub use particle::Particle;
