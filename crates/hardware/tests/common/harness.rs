//! # Test Harness
//!
//! Builders for configurations, cores, and simulators, plus a tracing subscriber that
//! writes through the test output capture.

use mpsim_core::config::{Config, Isa};
use mpsim_core::{Core, Simulator};
use tracing_subscriber::EnvFilter;

/// Installs a test-captured tracing subscriber. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Default configuration with the processor section overridden.
pub fn config(cores: usize, isa: Isa, depth: usize) -> Config {
    let mut config = Config::default();
    config.processor.num_cores = cores;
    config.processor.isa = isa;
    config.processor.pipeline_depth = depth;
    config
}

/// A core built from [`config`].
pub fn new_core(isa: Isa, depth: usize) -> Core {
    Core::new(0, &config(1, isa, depth)).unwrap()
}

/// A simulator built from [`config`].
pub fn simulator(cores: usize, isa: Isa, depth: usize) -> Simulator {
    init_tracing();
    Simulator::new(config(cores, isa, depth)).unwrap()
}

/// Steps `core` for `cycles` cycles.
pub fn step(core: &mut Core, cycles: u64) {
    for _ in 0..cycles {
        core.tick();
    }
}
