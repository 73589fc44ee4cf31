//! Brownian Engine - Brownian particles over moving obstacles, as a CPU benchmark
//!
//! Architecture:
//! - core/        - vector math, colors, seeded random streams
//! - domain/      - particles, obstacles, configuration
//! - systems/     - matrix kernel, integrator, obstacle dynamics, collisions
//! - simulation/  - orchestration, perf stats, wasm facade

pub mod core;
pub mod domain;
pub mod error;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel collision pass
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Brownian engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Name of the lane backend used by the SIMD-blocked tier
#[wasm_bindgen]
pub fn simd_backend() -> String {
    systems::matrix::simd_backend_name().to_string()
}

// Re-export main types
pub use crate::core::{Rgba, Vec2};
pub use domain::{Obstacle, Particle, SimulationConfig};
pub use error::{EngineError, MatrixError};
pub use simulation::{
    FpsCounter, PerfStats, Simulation, SimulationCore, OBSTACLE_STRIDE, PARTICLE_STRIDE,
};
pub use systems::matrix::{Matrix, MatrixKernel, MatrixStrategy};
