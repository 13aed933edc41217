//! # Statistics Tests
//!
//! Tests for aggregate derivation, report rendering, and JSON serialization.

use mpsim_core::stats::{CoreStats, STATS_SECTIONS, Statistics};
use pretty_assertions::assert_eq;

fn sample() -> Statistics {
    let a = CoreStats {
        cycles: 100,
        instructions_retired: 19,
        instructions_fetched: 20,
        busy_cycles: 96,
        stall_cycles: 0,
    };
    let b = CoreStats {
        instructions_retired: 11,
        busy_cycles: 50,
        stall_cycles: 7,
        ..a
    };
    Statistics::from_cores(100, vec![a, b], 0.25)
}

fn render(stats: &Statistics, sections: &[&str]) -> String {
    let mut buf = Vec::new();
    stats.write_report(&mut buf, sections).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn from_cores_aggregates() {
    let stats = sample();
    assert_eq!(stats.total_cycles, 100);
    assert_eq!(stats.instructions_executed, 30);
    assert!((stats.ipc - 0.15).abs() < 1e-12);
    assert_eq!(stats.core_utilization, vec![0.96, 0.5]);
    assert_eq!(stats.num_cores(), 2);
    assert_eq!(stats.host_seconds, 0.25);
}

#[test]
fn from_cores_with_no_cores_has_zero_ipc() {
    let stats = Statistics::from_cores(100, Vec::new(), 0.0);
    assert_eq!(stats.ipc, 0.0);
    assert!(stats.core_utilization.is_empty());
}

#[test]
fn with_cores_is_zeroed_and_shaped() {
    let stats = Statistics::with_cores(3);
    assert_eq!(stats.core_utilization, vec![0.0; 3]);
    assert_eq!(stats.per_core, vec![CoreStats::default(); 3]);
    assert_eq!(stats.total_cycles, 0);
}

#[test]
fn full_report_contains_every_section() {
    let text = render(&sample(), &[]);
    assert!(text.contains("MULTI-CORE SIMULATION STATISTICS"));
    assert!(text.contains("sim_cycles               100"));
    assert!(text.contains("sim_insts                30"));
    assert!(text.contains("sim_ipc                  0.1500"));
    assert!(text.contains("CORE BREAKDOWN"));
    assert!(text.contains("core0"));
    assert!(text.contains("96.00%"));
    assert!(text.contains("stalls: 7"));
    assert!(text.contains("MEMORY HIERARCHY"));
}

#[test]
fn report_sections_are_selectable() {
    let text = render(&sample(), &["cores"]);
    assert!(text.contains("CORE BREAKDOWN"));
    assert!(!text.contains("sim_ipc"));
    assert!(!text.contains("MEMORY HIERARCHY"));
    assert_eq!(STATS_SECTIONS, &["summary", "cores", "memory"]);
}

#[test]
fn serializes_to_json() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["total_cycles"], 100);
    assert_eq!(value["instructions_executed"], 30);
    assert_eq!(value["core_utilization"][1], 0.5);
    assert_eq!(value["per_core"][1]["stall_cycles"], 7);
    assert_eq!(value["cache_hit_rate"], 0.0);
}
