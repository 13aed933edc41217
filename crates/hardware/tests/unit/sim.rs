//! # Simulator Tests
//!
//! Tests for multi-core runs: argument checks, mutual exclusion of runs, cooperative
//! shutdown, reset, and statistics aggregation.

use std::thread;
use std::time::Duration;

use mpsim_core::{Config, Core, Isa, SimError, Simulator, Statistics};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{config, init_tracing, simulator};

/// Cycle count large enough that a run is still in progress when observed.
const LONG_RUN: u64 = 200_000_000;

fn without_host_time(mut stats: Statistics) -> Statistics {
    stats.host_seconds = 0.0;
    stats
}

fn wait_until_running(sim: &Simulator) {
    while !sim.is_running() {
        thread::yield_now();
    }
}

// ══════════════════════════════════════════════════════════
// Construction
// ══════════════════════════════════════════════════════════

#[test]
fn builds_one_core_per_configured_core() {
    let sim = simulator(6, Isa::Mips, 5);
    assert_eq!(sim.num_cores(), 6);
    assert_eq!(sim.statistics(), Statistics::with_cores(6));
    for i in 0..6 {
        assert_eq!(sim.with_core(i, Core::id), Some(i));
    }
    assert!(sim.with_core(6, Core::id).is_none());
}

#[test]
fn invalid_config_fails_construction() {
    init_tracing();
    let mut cfg = Config::default();
    cfg.processor.num_cores = 0;
    assert!(matches!(Simulator::new(cfg), Err(SimError::Config(_))));
}

// ══════════════════════════════════════════════════════════
// Run
// ══════════════════════════════════════════════════════════

#[test]
fn default_run_of_hundred_cycles() {
    let sim = simulator(4, Isa::RiscV, 5);
    sim.run(100).unwrap();

    let stats = sim.statistics();
    assert_eq!(stats.total_cycles, 100);
    assert_eq!(stats.instructions_executed, 4 * 19);
    assert!((stats.ipc - 0.19).abs() < 1e-12);
    assert_eq!(stats.core_utilization.len(), 4);
    for &u in &stats.core_utilization {
        assert!((u - 0.96).abs() < 1e-12);
    }
    assert_eq!(stats.cache_hit_rate, 0.0);
    assert_eq!(stats.memory_access_latency, 0.0);
    assert_eq!(stats.interconnect_utilization, 0.0);
    assert!(!sim.is_running());
}

#[rstest]
#[case(1, Isa::RiscV, 5, 250)]
#[case(3, Isa::X86, 6, 97)]
#[case(2, Isa::X86, 16, 1000)]
#[case(5, Isa::Custom, 9, 41)]
fn ipc_is_average_per_core(
    #[case] cores: usize,
    #[case] isa: Isa,
    #[case] depth: usize,
    #[case] cycles: u64,
) {
    let sim = simulator(cores, isa, depth);
    sim.run(cycles).unwrap();
    let stats = sim.statistics();

    let retired: u64 = (0..cores)
        .map(|i| sim.core_stats(i).unwrap().instructions_retired)
        .sum();
    assert_eq!(stats.total_cycles, cycles);
    assert_eq!(stats.instructions_executed, retired);
    let expected = retired as f64 / (cycles as f64 * cores as f64);
    assert!((stats.ipc - expected).abs() < 1e-12);
}

#[test]
fn zero_cycles_rejected() {
    let sim = simulator(2, Isa::RiscV, 5);
    assert!(matches!(sim.run(0), Err(SimError::InvalidCycleCount)));
    assert_eq!(sim.clock(), 0);
    assert_eq!(sim.core_stats(0).unwrap().cycles, 0);
}

#[test]
fn consecutive_runs_accumulate_core_counters() {
    let sim = simulator(2, Isa::RiscV, 5);
    sim.run(60).unwrap();
    sim.run(40).unwrap();
    assert_eq!(sim.core_stats(1).unwrap().cycles, 100);
    assert_eq!(sim.clock(), 100);
    // Requested cycles of the latest run, not the accumulated total.
    assert_eq!(sim.statistics().total_cycles, 40);
}

#[test]
fn concurrent_run_is_rejected_without_disturbing_active_run() {
    let sim = simulator(2, Isa::RiscV, 5);
    thread::scope(|s| {
        let active = s.spawn(|| sim.run(LONG_RUN));
        wait_until_running(&sim);

        assert!(matches!(sim.run(10), Err(SimError::AlreadyRunning)));
        assert!(sim.is_running());

        sim.shutdown();
        assert!(active.join().unwrap().is_ok());
    });
    assert!(!sim.is_running());
}

// ══════════════════════════════════════════════════════════
// Shutdown
// ══════════════════════════════════════════════════════════

#[test]
fn shutdown_stops_workers_early() {
    let sim = simulator(4, Isa::RiscV, 5);
    thread::scope(|s| {
        let active = s.spawn(|| sim.run(LONG_RUN));
        wait_until_running(&sim);
        thread::sleep(Duration::from_millis(20));
        sim.shutdown();
        assert!(!sim.is_running());
        active.join().unwrap().unwrap();
    });

    let stats = sim.statistics();
    assert_eq!(stats.total_cycles, LONG_RUN);
    for i in 0..4 {
        assert!(sim.core_stats(i).unwrap().cycles < LONG_RUN);
    }
    assert!(sim.clock() < LONG_RUN);
}

#[test]
fn shutdown_without_reset_leaves_signal_fired() {
    let sim = simulator(1, Isa::RiscV, 5);
    thread::scope(|s| {
        let active = s.spawn(|| sim.run(LONG_RUN));
        wait_until_running(&sim);
        sim.shutdown();
        active.join().unwrap().unwrap();
    });
    let before = sim.core_stats(0).unwrap().cycles;

    sim.run(50).unwrap();
    assert_eq!(sim.core_stats(0).unwrap().cycles, before);

    sim.reset();
    sim.run(50).unwrap();
    assert_eq!(sim.core_stats(0).unwrap().cycles, 50);
}

#[test]
fn shutdown_when_idle_does_nothing() {
    let sim = simulator(2, Isa::RiscV, 5);
    sim.shutdown();
    sim.run(25).unwrap();
    assert_eq!(sim.clock(), 25);
}

// ══════════════════════════════════════════════════════════
// Reset
// ══════════════════════════════════════════════════════════

#[test]
fn reset_zeroes_everything() {
    let sim = simulator(3, Isa::X86, 6);
    sim.run(123).unwrap();
    sim.reset();

    assert_eq!(sim.clock(), 0);
    assert!(!sim.is_running());
    assert_eq!(sim.statistics(), Statistics::with_cores(3));
    for i in 0..3 {
        let (cycles, pc, empty) = sim
            .with_core(i, |core| (core.stats().cycles, core.pc(), core.pipeline().is_empty()))
            .unwrap();
        assert_eq!(cycles, 0);
        assert_eq!(pc, 0);
        assert!(empty);
    }
}

#[rstest]
#[case(Isa::RiscV, 5)]
#[case(Isa::X86, 12)]
#[case(Isa::Arm, 4)]
fn reset_then_run_matches_fresh_simulator(#[case] isa: Isa, #[case] depth: usize) {
    let used = simulator(3, isa, depth);
    used.run(311).unwrap();
    used.reset();
    used.run(77).unwrap();

    let fresh = Simulator::new(config(3, isa, depth)).unwrap();
    fresh.run(77).unwrap();

    assert_eq!(
        without_host_time(used.statistics()),
        without_host_time(fresh.statistics())
    );
    assert_eq!(used.clock(), fresh.clock());
    assert_eq!(used.pipeline_state(2), fresh.pipeline_state(2));
}

// ══════════════════════════════════════════════════════════
// Observation
// ══════════════════════════════════════════════════════════

#[test]
fn statistics_are_an_independent_copy() {
    let sim = simulator(2, Isa::RiscV, 5);
    sim.run(50).unwrap();
    let mut copy = sim.statistics();
    copy.core_utilization[0] = 42.0;
    copy.core_utilization.clear();
    copy.total_cycles = 0;

    let live = sim.statistics();
    assert_eq!(live.total_cycles, 50);
    assert_eq!(live.core_utilization.len(), 2);
    assert!(live.core_utilization[0] < 1.0);
}

#[test]
fn observers_can_read_during_a_run() {
    let sim = simulator(2, Isa::RiscV, 5);
    thread::scope(|s| {
        let active = s.spawn(|| sim.run(LONG_RUN));
        wait_until_running(&sim);
        for _ in 0..10 {
            let stages = sim.pipeline_state(0).unwrap();
            assert_eq!(stages.len(), 5);
            assert!(stages.iter().filter(|s| s.is_busy()).count() <= 5);
            let _ = sim.core_stats(1).unwrap();
        }
        sim.shutdown();
        active.join().unwrap().unwrap();
    });
}
