use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, Result};
use crate::systems::matrix::MatrixStrategy;

/// Largest matrix edge accepted for the per-tick load.
pub const MAX_MATRIX_SIZE: u32 = 4096;

/// Construction parameters handed over by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    pub particle_count: u32,
    pub obstacle_count: u32,
    /// Edge of the square transform/state matrices
    pub matrix_size: u32,
    pub matrix_strategy: MatrixStrategy,
    /// Extra arithmetic in the naive tier (slightly perturbs the product)
    pub naive_stress: bool,
    /// Run the matrix multiply inside `step`
    pub matrix_load: bool,
    /// Seed for every subsystem; `None` draws from entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub perf_enabled: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            particle_count: 10_000,
            obstacle_count: 5,
            matrix_size: 280,
            matrix_strategy: MatrixStrategy::CacheBlocked,
            naive_stress: true,
            matrix_load: true,
            seed: None,
            perf_enabled: false,
        }
    }
}

impl SimulationConfig {
    pub fn new(width: u32, height: u32, particle_count: u32, obstacle_count: u32) -> Self {
        Self {
            width,
            height,
            particle_count,
            obstacle_count,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            warn!(width = self.width, height = self.height, "rejecting empty bounds");
            return Err(EngineError::InvalidConfig(format!(
                "bounds must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.matrix_size > MAX_MATRIX_SIZE {
            warn!(matrix_size = self.matrix_size, "rejecting oversized matrix load");
            return Err(EngineError::InvalidConfig(format!(
                "matrix_size must be <= {MAX_MATRIX_SIZE}, got {}",
                self.matrix_size
            )));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_matrix(mut self, size: u32, strategy: MatrixStrategy) -> Self {
        self.matrix_size = size;
        self.matrix_strategy = strategy;
        self
    }

    pub fn with_matrix_load(mut self, enabled: bool) -> Self {
        self.matrix_load = enabled;
        self
    }

    pub fn with_naive_stress(mut self, enabled: bool) -> Self {
        self.naive_stress = enabled;
        self
    }

    pub fn with_perf(mut self, enabled: bool) -> Self {
        self.perf_enabled = enabled;
        self
    }
}
