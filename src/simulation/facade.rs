use wasm_bindgen::prelude::*;

use crate::domain::SimulationConfig;
use crate::systems::matrix::MatrixStrategy;

use super::perf_stats::PerfStats;
use super::render_extract::{OBSTACLE_STRIDE, PARTICLE_STRIDE};
use super::SimulationCore;

/// JS-facing handle around [`SimulationCore`]
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with default matrix settings
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        particle_count: u32,
        obstacle_count: u32,
    ) -> Result<Simulation, JsValue> {
        SimulationCore::with_dimensions(width, height, particle_count, obstacle_count)
            .map(|core| Simulation { core })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a simulation from a camelCase JSON config
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Simulation, JsValue> {
        SimulationConfig::from_json(&json)
            .and_then(SimulationCore::new)
            .map(|core| Simulation { core })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> u32 { self.core.obstacle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f32 { self.core.fps() }

    #[wasm_bindgen(getter)]
    pub fn last_collision_count(&self) -> u32 { self.core.last_collision_count() }

    /// Enable perf timing collection
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf stats
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// 0 = naive, 1 = cache-blocked, 2 = SIMD-blocked. Unknown ids are ignored.
    pub fn set_matrix_strategy(&mut self, id: u8) -> bool {
        match MatrixStrategy::from_id(id) {
            Some(strategy) => {
                self.core.set_matrix_strategy(strategy);
                true
            }
            None => false,
        }
    }

    pub fn matrix_strategy(&self) -> u8 {
        self.core.matrix_strategy().id()
    }

    pub fn matrix_strategy_name(&self) -> String {
        self.core.matrix_strategy().name().to_string()
    }

    pub fn set_matrix_load_enabled(&mut self, enabled: bool) {
        self.core.set_matrix_load_enabled(enabled);
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn add_obstacle(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.add_obstacle(x, y, w, h) as u32
    }

    /// Step the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    pub fn run_matrix_load(&mut self) -> f64 {
        self.core.run_matrix_load()
    }

    pub fn matrix_checksum(&self) -> f64 {
        self.core.matrix_checksum()
    }

    // === Render buffers ===

    pub fn particle_stride() -> u32 { PARTICLE_STRIDE as u32 }

    pub fn obstacle_stride() -> u32 { OBSTACLE_STRIDE as u32 }

    pub fn extract_particles(&mut self) -> u32 {
        self.core.extract_particles() as u32
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.core.particles_render_ptr()
    }

    pub fn particles_len(&self) -> usize {
        self.core.particles_render_len()
    }

    pub fn extract_obstacles(&mut self) -> u32 {
        self.core.extract_obstacles() as u32
    }

    pub fn obstacles_ptr(&self) -> *const f32 {
        self.core.obstacles_render_ptr()
    }

    pub fn obstacles_len(&self) -> usize {
        self.core.obstacles_render_len()
    }
}

impl Simulation {
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }
}
