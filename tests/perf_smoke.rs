use brownian_engine::{MatrixStrategy, SimulationConfig, SimulationCore};

#[test]
fn perf_smoke_step() {
    let config = SimulationConfig::new(640, 480, 2_000, 5)
        .with_seed(99)
        .with_matrix(64, MatrixStrategy::SimdBlocked)
        .with_perf(true);
    let mut world = SimulationCore::new(config).expect("valid config");
    for _ in 0..5 {
        world.step(1.0 / 60.0);
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.matrix_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 2_000);
    assert_eq!(stats.matrix_size(), 64);
    assert!(stats.matrix_checksum() != 0.0);
}

#[test]
fn perf_smoke_every_strategy() {
    for strategy in MatrixStrategy::ALL {
        let config = SimulationConfig::new(320, 240, 500, 3)
            .with_seed(1)
            .with_matrix(48, strategy);
        let mut world = SimulationCore::new(config).expect("valid config");
        world.step(1.0 / 60.0);
        assert_eq!(world.frame(), 1);
        assert_eq!(world.matrix().last_result().rows(), 48);
    }
}
