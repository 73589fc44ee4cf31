use tracing::debug;

use crate::systems::matrix::MatrixStrategy;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(world: &mut SimulationCore, enabled: bool) {
    world.perf_enabled = enabled;
    world.config.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &SimulationCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_matrix_strategy(world: &mut SimulationCore, strategy: MatrixStrategy) {
    world.matrix.set_strategy(strategy);
    world.config.matrix_strategy = strategy;
    debug!(strategy = %strategy, "matrix strategy switched");
}

pub(super) fn set_matrix_load_enabled(world: &mut SimulationCore, enabled: bool) {
    world.matrix_load_enabled = enabled;
    world.config.matrix_load = enabled;
}
