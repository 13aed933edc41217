//! Multi-core processor pipeline simulator library.
//!
//! This crate models a multi-core processor at cycle granularity:
//! 1. **Pipeline:** A fixed-topology stage sequence per core, derived from ISA and depth,
//!    that advances, stalls, and drains synthetic instructions every cycle.
//! 2. **Core:** Register files, execution-unit inventory, and per-core counters driven
//!    one cycle at a time.
//! 3. **Simulation:** One worker thread per core, cooperative shutdown, reset, and
//!    aggregation of per-core counters into global statistics.
//! 4. **Configuration:** YAML/JSON configuration with validated enumerations.
//!
//! Memory hierarchy, coherence protocol, and interconnect settings are accepted as
//! configuration but have no timing model yet.

/// Common types (errors, constants, register file).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (architectural registers, pipeline, execution units, per-cycle driver).
pub mod core;
/// Instruction-set architecture descriptors.
pub mod isa;
/// Multi-core simulator, stop signal, and synthetic workload.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Crate-wide error type.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or load from YAML/JSON.
pub use crate::config::Config;
/// One simulated processor core.
pub use crate::core::Core;
/// Instruction-set architecture selection.
pub use crate::isa::Isa;
/// Top-level multi-core simulator.
pub use crate::sim::Simulator;
/// Aggregated run statistics.
pub use crate::stats::Statistics;
