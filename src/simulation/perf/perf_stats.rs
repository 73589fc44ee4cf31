use wasm_bindgen::prelude::*;

/// Per-step timings and counters. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) matrix_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) obstacles_ms: f64,
    pub(super) collisions_ms: f64,
    pub(super) collisions: u32,
    pub(super) particle_count: u32,
    pub(super) obstacle_count: u32,
    pub(super) matrix_size: u32,
    pub(super) matrix_checksum: f64,
    pub(super) fps: f32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn matrix_ms(&self) -> f64 { self.matrix_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn obstacles_ms(&self) -> f64 { self.obstacles_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions_ms(&self) -> f64 { self.collisions_ms }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> u32 { self.obstacle_count }
    #[wasm_bindgen(getter)]
    pub fn matrix_size(&self) -> u32 { self.matrix_size }
    #[wasm_bindgen(getter)]
    pub fn matrix_checksum(&self) -> f64 { self.matrix_checksum }
    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f32 { self.fps }
}
