//! # Core Tests
//!
//! Tests for core construction, the per-cycle step, counters, and reset.

use mpsim_core::core::units::UnitKind;
use mpsim_core::stats::CoreStats;
use mpsim_core::{Config, Core, Isa, SimError};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{config, new_core, step};

#[rstest]
#[case(Isa::RiscV, 32, 32)]
#[case(Isa::X86, 16, 8)]
#[case(Isa::Arm, 16, 32)]
#[case(Isa::Mips, 32, 32)]
#[case(Isa::Custom, 32, 32)]
fn register_files_sized_by_isa(#[case] isa: Isa, #[case] ints: usize, #[case] floats: usize) {
    let core = new_core(isa, 5);
    assert_eq!(core.regs().int_count(), ints);
    assert_eq!(core.regs().float_count(), floats);
    assert!(core.regs().is_zeroed());
}

#[test]
fn construction_allocates_unit_inventory() {
    let core = new_core(Isa::RiscV, 5);
    assert_eq!(core.units().count(UnitKind::Alu), 2);
    assert_eq!(core.units().count(UnitKind::Fpu), 1);
    assert_eq!(core.units().count(UnitKind::LoadStore), 1);
    assert_eq!(core.units().count(UnitKind::Branch), 1);
    assert_eq!(core.units().pool(UnitKind::Fpu)[0].stages, 3);
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = Config::default();
    cfg.processor.pipeline_depth = 0;
    assert!(matches!(Core::new(0, &cfg), Err(SimError::Config(_))));
}

#[test]
fn fresh_core_reports_zero_utilization() {
    let core = new_core(Isa::RiscV, 5);
    assert_eq!(core.utilization(), 0.0);
    assert_eq!(core.executed_instructions(), 0);
}

#[test]
fn fetch_advances_pc_by_instruction_width() {
    let mut core = new_core(Isa::RiscV, 5);
    step(&mut core, 15);
    assert_eq!(core.stats().instructions_fetched, 3);
    assert_eq!(core.pc(), 12);
}

#[test]
fn retirement_counts_each_departure_once() {
    let mut core = new_core(Isa::RiscV, 5);
    step(&mut core, 10);
    assert_eq!(core.executed_instructions(), 1);
    step(&mut core, 4);
    assert_eq!(core.executed_instructions(), 1);
    step(&mut core, 1);
    assert_eq!(core.executed_instructions(), 2);
}

#[test]
fn deep_pipeline_never_stalls_at_fetch_cadence() {
    // Eleven single-cycle stages: each instruction retires 11 cycles after fetch.
    let mut core = new_core(Isa::X86, 11);
    step(&mut core, 100);
    let stats = core.stats();
    assert_eq!(stats.instructions_fetched, 20);
    assert_eq!(stats.instructions_retired, 20 - 3);
    assert_eq!(stats.stall_cycles, 0);
}

#[rstest]
#[case(Isa::RiscV, 5)]
#[case(Isa::X86, 6)]
#[case(Isa::X86, 14)]
#[case(Isa::Arm, 3)]
#[case(Isa::Mips, 1)]
fn utilization_is_strictly_between_zero_and_one(#[case] isa: Isa, #[case] depth: usize) {
    let mut core = new_core(isa, depth);
    step(&mut core, 100);
    let u = core.utilization();
    assert!(u > 0.0 && u < 1.0, "utilization {u}");
    assert!(core.executed_instructions() <= core.stats().instructions_fetched);
}

#[test]
fn reset_restores_power_on_state() {
    let cfg = config(1, Isa::X86, 6);
    let fresh = Core::new(0, &cfg).unwrap();
    let mut core = Core::new(0, &cfg).unwrap();

    step(&mut core, 37);
    core.regs_mut().write(5, 0xDEAD_BEEF);
    core.regs_mut().write_f(2, 1.5f64.to_bits());
    core.units_mut().pool_mut(UnitKind::Alu)[0].busy = true;
    assert!(!core.pipeline().is_empty());

    core.reset();

    assert_eq!(core.stats(), CoreStats::default());
    assert_eq!(core.pc(), 0);
    assert!(core.regs().is_zeroed());
    assert!(!core.units().any_busy());
    assert!(core.pipeline().is_empty());
    assert_eq!(core.pipeline_state(), fresh.pipeline_state());
    assert_eq!(core.regs(), fresh.regs());
    assert_eq!(core.units(), fresh.units());
}

#[test]
fn reset_core_replays_identically() {
    let mut a = new_core(Isa::Arm, 7);
    let mut b = new_core(Isa::Arm, 7);
    step(&mut a, 53);
    a.reset();
    step(&mut a, 80);
    step(&mut b, 80);
    assert_eq!(a.stats(), b.stats());
    assert_eq!(a.pipeline_state(), b.pipeline_state());
}

#[test]
fn pipeline_state_is_a_copy() {
    let mut core = new_core(Isa::RiscV, 5);
    step(&mut core, 5);
    let mut snap = core.pipeline_state();
    snap.clear();
    assert_eq!(core.pipeline_state().len(), 5);
    assert!(core.pipeline_state()[0].is_busy());
}
