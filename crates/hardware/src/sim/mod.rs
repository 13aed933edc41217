//! Multi-core simulation.
//!
//! This module drives a set of cores in parallel. It provides:
//! 1. **Simulator:** Construction, run, shutdown, reset, and statistics aggregation.
//! 2. **Stop Signal:** The cooperative cancellation flag observed by workers.
//! 3. **Workload:** The synthetic instruction stream fetched by every core.

/// Cooperative stop signal.
pub mod signal;

/// Top-level multi-core simulator.
pub mod simulator;

/// Synthetic instruction source.
pub mod workload;

pub use signal::StopSignal;
pub use simulator::Simulator;
pub use workload::SyntheticWorkload;
